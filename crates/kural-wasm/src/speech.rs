// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Reading verses aloud with the Web Speech API.

use kural_core::error::Fallible;
use kural_core::error::fail;
use kural_core::services::Speaker;
use wasm_bindgen::JsCast;
use web_sys::SpeechSynthesis;
use web_sys::SpeechSynthesisUtterance;
use web_sys::SpeechSynthesisVoice;

use crate::storage::js_error;

pub struct WebSpeaker;

impl WebSpeaker {
    fn synthesis() -> Fallible<SpeechSynthesis> {
        match web_sys::window() {
            Some(window) => window.speech_synthesis().map_err(js_error),
            None => fail("speech synthesis is unavailable."),
        }
    }
}

impl Speaker for WebSpeaker {
    fn speak(&mut self, text: &str, language: &str, voice: Option<&str>) -> Fallible<()> {
        let synthesis = Self::synthesis()?;
        let utterance = SpeechSynthesisUtterance::new_with_text(text).map_err(js_error)?;
        utterance.set_lang(language);
        if let Some(uri) = voice {
            let found = synthesis
                .get_voices()
                .iter()
                .filter_map(|v| v.dyn_into::<SpeechSynthesisVoice>().ok())
                .find(|v| v.voice_uri() == uri);
            match found {
                Some(v) => utterance.set_voice(Some(&v)),
                None => web_sys::console::warn_1(
                    &format!("voice {uri} is not installed; using the default").into(),
                ),
            }
        }
        synthesis.cancel();
        synthesis.speak(&utterance);
        Ok(())
    }

    fn stop(&mut self) -> Fallible<()> {
        Self::synthesis()?.cancel();
        Ok(())
    }
}
