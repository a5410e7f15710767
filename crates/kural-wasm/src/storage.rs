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

//! Browser localStorage as a key-value store.

use kural_core::KeyValueStore;
use kural_core::error::ErrorReport;
use kural_core::error::Fallible;
use wasm_bindgen::JsValue;
use web_sys::Storage;

/// Falls back to doing nothing when localStorage is unavailable (private
/// browsing, sandboxed iframes).
pub struct LocalStorage {
    inner: Option<Storage>,
}

impl LocalStorage {
    pub fn new() -> Self {
        let inner = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();
        if inner.is_none() {
            web_sys::console::warn_1(
                &"localStorage unavailable; progress will not be saved".into(),
            );
        }
        Self { inner }
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Fallible<Option<String>> {
        match &self.inner {
            Some(storage) => storage.get_item(key).map_err(js_error),
            None => Ok(None),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Fallible<()> {
        match &self.inner {
            Some(storage) => storage.set_item(key, value).map_err(js_error),
            None => Ok(()),
        }
    }
}

pub fn js_error(value: JsValue) -> ErrorReport {
    match value.as_string() {
        Some(message) => ErrorReport::new(message),
        None => ErrorReport::new(format!("{value:?}")),
    }
}
