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

//! WASM bindings for kural - the daily kural, quizzes and progress in the browser.

use wasm_bindgen::prelude::*;
use web_sys::console;

use kural_core::error::ErrorReport;
use kural_core::error::Fallible;
use kural_core::error::fail;
use kural_core::services::ReminderTime;
use kural_core::services::Speaker;
use kural_core::services::copy_message;
use kural_core::services::share_message;
use kural_core::services::speak_entry;
use kural_core::services::sync_reminder;
use kural_core::{
    Action, AppState, Corpus, Date, Entry, EntryId, Question, QuestionKind, QuizGenerator,
    RandomSource, ThemeMode, TinyRng, daily_entry, epoch, random_entry,
};

mod reminder;
mod speech;
mod storage;

use reminder::JsReminderScheduler;
use speech::WebSpeaker;
use storage::LocalStorage;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console::log_1(&"kural WASM initialized".into());
}

/// The question currently on screen. Grading regenerates it from the seed
/// rather than keeping a borrow of the corpus.
#[derive(Clone, Copy)]
struct PendingQuestion {
    kind: QuestionKind,
    seed: u64,
}

/// The main application state managed from JavaScript.
#[wasm_bindgen]
pub struct KuralApp {
    corpus: Option<Corpus>,
    state: AppState<LocalStorage>,
    rng: TinyRng,
    pending: Option<PendingQuestion>,
    speaker: WebSpeaker,
    reminders: Option<JsReminderScheduler>,
}

#[wasm_bindgen]
impl KuralApp {
    /// Create a new KuralApp, restoring the settings from localStorage.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            corpus: None,
            state: AppState::load(LocalStorage::new()),
            rng: TinyRng::from_seed(random_seed()),
            pending: None,
            speaker: WebSpeaker,
            reminders: None,
        }
    }

    /// Load the corpus from its JSON text. Returns the number of entries.
    #[wasm_bindgen]
    pub fn load_corpus(&mut self, json: &str) -> Result<usize, JsValue> {
        let corpus = Corpus::from_json(json).map_err(to_js)?;
        let len = corpus.len();
        self.corpus = Some(corpus);
        self.pending = None;
        Ok(len)
    }

    /// The kural of the day for `today_str` (YYYY-MM-DD), as JSON.
    #[wasm_bindgen]
    pub fn daily_entry(&self, today_str: &str) -> Result<String, JsValue> {
        let today = parse_date(today_str)?;
        let entry = daily_entry(loaded(&self.corpus)?, today, epoch()).map_err(to_js)?;
        entry_json(entry)
    }

    #[wasm_bindgen]
    pub fn random_entry(&mut self) -> Result<String, JsValue> {
        let entry = random_entry(loaded(&self.corpus)?, &mut self.rng).map_err(to_js)?;
        entry_json(entry)
    }

    /// Look up an entry by number. `None` when there is no such entry.
    #[wasm_bindgen]
    pub fn entry(&self, id: EntryId) -> Result<Option<String>, JsValue> {
        match loaded(&self.corpus)?.get(id) {
            Some(entry) => entry_json(entry).map(Some),
            None => Ok(None),
        }
    }

    /// Entries matching `query`, as a JSON array.
    #[wasm_bindgen]
    pub fn search(&self, query: &str) -> Result<String, JsValue> {
        list_json(&loaded(&self.corpus)?.search(query))
    }

    /// Chapter names in corpus order, as a JSON array.
    #[wasm_bindgen]
    pub fn chapters(&self) -> Result<String, JsValue> {
        serde_json::to_string(&loaded(&self.corpus)?.chapters()).map_err(to_js)
    }

    #[wasm_bindgen]
    pub fn chapter(&self, name: &str) -> Result<String, JsValue> {
        list_json(&loaded(&self.corpus)?.by_chapter(name))
    }

    /// Generate a question of the given kind ("missing-word",
    /// "meaning-match", "find-chapter" or "jumbled") and return it as JSON.
    /// It stays pending until answered.
    #[wasm_bindgen]
    pub fn new_question(&mut self, kind_str: &str) -> Result<String, JsValue> {
        let kind = QuestionKind::try_from(kind_str).map_err(to_js)?;
        let pending = PendingQuestion {
            kind,
            seed: (u64::from(self.rng.next_u32()) << 32) | u64::from(self.rng.next_u32()),
        };
        let json = question_json(&self.corpus, pending)?;
        self.pending = Some(pending);
        Ok(json)
    }

    /// The pending question, as JSON, if any.
    #[wasm_bindgen]
    pub fn current_question(&self) -> Result<Option<String>, JsValue> {
        match self.pending {
            Some(pending) => question_json(&self.corpus, pending).map(Some),
            None => Ok(None),
        }
    }

    /// Answer the pending multiple-choice question with the 0-based option
    /// index. Records the result and clears the question.
    #[wasm_bindgen]
    pub fn answer_choice(&mut self, selected: usize) -> Result<bool, JsValue> {
        let answer = Answer::Choice(selected);
        let correct =
            grade_pending(self.corpus.as_ref(), &mut self.pending, answer).map_err(to_js)?;
        self.state.dispatch(Action::RecordQuizAnswer(correct));
        Ok(correct)
    }

    /// Answer the pending jumbled question with the submitted words (a JSON
    /// array of strings, in order). Records the result and clears the
    /// question.
    #[wasm_bindgen]
    pub fn answer_sequence(&mut self, words_json: &str) -> Result<bool, JsValue> {
        let words: Vec<String> = serde_json::from_str(words_json).map_err(to_js)?;
        let answer = Answer::Sequence(&words);
        let correct =
            grade_pending(self.corpus.as_ref(), &mut self.pending, answer).map_err(to_js)?;
        self.state.dispatch(Action::RecordQuizAnswer(correct));
        Ok(correct)
    }

    /// Mark the daily kural read on `today_str`. Returns the streak.
    #[wasm_bindgen]
    pub fn mark_read(&mut self, today_str: &str) -> Result<u32, JsValue> {
        let today = parse_date(today_str)?;
        self.state.dispatch(Action::MarkRead(today));
        Ok(self.state.settings().progress().streak())
    }

    #[wasm_bindgen]
    pub fn record_view(&mut self, id: EntryId) {
        self.state.dispatch(Action::RecordView(id));
    }

    /// Returns whether the entry is a favorite afterwards.
    #[wasm_bindgen]
    pub fn toggle_favorite(&mut self, id: EntryId) -> bool {
        self.state.dispatch(Action::ToggleFavorite(id));
        self.state.settings().favorites().contains(id)
    }

    #[wasm_bindgen]
    pub fn is_favorite(&self, id: EntryId) -> bool {
        self.state.settings().favorites().contains(id)
    }

    /// Recently viewed entries, most recent first, as a JSON array.
    #[wasm_bindgen]
    pub fn history(&self) -> Result<String, JsValue> {
        let ids = self.state.settings().history().ids();
        list_json(&loaded(&self.corpus)?.resolve(ids))
    }

    #[wasm_bindgen]
    pub fn favorites(&self) -> Result<String, JsValue> {
        let ids = self.state.settings().favorites().ids();
        list_json(&loaded(&self.corpus)?.resolve(ids))
    }

    /// The persisted settings blob, including progress and quiz statistics.
    #[wasm_bindgen]
    pub fn settings_json(&self) -> Result<String, JsValue> {
        self.state.settings().to_blob().map_err(to_js)
    }

    #[wasm_bindgen]
    pub fn set_theme_mode(&mut self, mode: &str) -> Result<(), JsValue> {
        let mode = ThemeMode::try_from(mode).map_err(to_js)?;
        self.state.dispatch(Action::SetThemeMode(mode));
        Ok(())
    }

    #[wasm_bindgen]
    pub fn toggle_tamil(&mut self) {
        self.state.dispatch(Action::ToggleTamil);
    }

    #[wasm_bindgen]
    pub fn toggle_english(&mut self) {
        self.state.dispatch(Action::ToggleEnglish);
    }

    /// Hand the daily reminder to the page. `schedule(hour, minute)` must
    /// register the reminder and `cancel()` must remove every registered
    /// one. The reminder is synced with the notifications setting right
    /// away and after every toggle.
    #[wasm_bindgen]
    pub fn set_reminder_scheduler(
        &mut self,
        schedule: js_sys::Function,
        cancel: js_sys::Function,
    ) {
        self.reminders = Some(JsReminderScheduler::new(schedule, cancel));
        self.sync_reminders();
    }

    #[wasm_bindgen]
    pub fn toggle_notifications(&mut self) {
        self.state.dispatch(Action::ToggleNotifications);
        self.sync_reminders();
    }

    #[wasm_bindgen]
    pub fn toggle_share_include_tamil(&mut self) {
        self.state.dispatch(Action::ToggleShareIncludeTamil);
    }

    #[wasm_bindgen]
    pub fn toggle_share_include_english(&mut self) {
        self.state.dispatch(Action::ToggleShareIncludeEnglish);
    }

    #[wasm_bindgen]
    pub fn toggle_share_include_explanation(&mut self) {
        self.state.dispatch(Action::ToggleShareIncludeExplanation);
    }

    #[wasm_bindgen]
    pub fn set_font_size(&mut self, size: f64) {
        self.state.dispatch(Action::SetFontSize(size));
    }

    #[wasm_bindgen]
    pub fn set_voice(&mut self, voice: Option<String>) {
        self.state.dispatch(Action::SetVoice(voice));
    }

    /// The text handed to the share sheet for an entry.
    #[wasm_bindgen]
    pub fn share_text(&self, id: EntryId) -> Result<String, JsValue> {
        let entry = lookup(&self.corpus, id)?;
        Ok(share_message(entry, self.state.settings()))
    }

    /// The text copied to the clipboard for an entry.
    #[wasm_bindgen]
    pub fn copy_text(&self, id: EntryId) -> Result<String, JsValue> {
        let entry = lookup(&self.corpus, id)?;
        Ok(copy_message(entry, self.state.settings()))
    }

    /// Read an entry's verse aloud with the selected voice.
    #[wasm_bindgen]
    pub fn speak(&mut self, id: EntryId) -> Result<(), JsValue> {
        let entry = lookup(&self.corpus, id)?;
        speak_entry(&mut self.speaker, entry, self.state.settings()).map_err(to_js)
    }

    #[wasm_bindgen]
    pub fn stop_speaking(&mut self) -> Result<(), JsValue> {
        self.speaker.stop().map_err(to_js)
    }
}

impl KuralApp {
    fn sync_reminders(&mut self) {
        if let Some(scheduler) = self.reminders.as_mut() {
            sync_reminder(scheduler, self.state.settings(), ReminderTime::default());
        }
    }
}

impl Default for KuralApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Get today's date as a string (YYYY-MM-DD).
#[wasm_bindgen]
pub fn today_date() -> String {
    let date = js_sys::Date::new_0();
    let year = date.get_full_year();
    let month = date.get_month() + 1;
    let day = date.get_date();
    format!("{:04}-{:02}-{:02}", year, month, day)
}

fn random_seed() -> u64 {
    let mut bytes = [0u8; 8];
    match getrandom::getrandom(&mut bytes) {
        Ok(()) => u64::from_le_bytes(bytes),
        Err(_) => js_sys::Date::now() as u64,
    }
}

fn to_js(e: impl Into<ErrorReport>) -> JsValue {
    JsValue::from_str(&e.into().to_string())
}

fn loaded(corpus: &Option<Corpus>) -> Result<&Corpus, JsValue> {
    corpus
        .as_ref()
        .ok_or_else(|| JsValue::from_str("no corpus loaded"))
}

fn lookup(corpus: &Option<Corpus>, id: EntryId) -> Result<&Entry, JsValue> {
    loaded(corpus)?
        .get(id)
        .ok_or_else(|| JsValue::from_str(&format!("no kural numbered {id}")))
}

fn parse_date(value: &str) -> Result<Date, JsValue> {
    Date::try_from(value).map_err(to_js)
}

enum Answer<'w> {
    Choice(usize),
    Sequence(&'w [String]),
}

fn regenerate(corpus: &Corpus, pending: PendingQuestion) -> Fallible<Question<'_>> {
    let mut rng = TinyRng::from_seed(pending.seed);
    Ok(QuizGenerator::new(corpus).generate(pending.kind, &mut rng)?)
}

/// Grade the pending question. It stays pending unless grading succeeds.
fn grade_pending(
    corpus: Option<&Corpus>,
    pending: &mut Option<PendingQuestion>,
    answer: Answer<'_>,
) -> Fallible<bool> {
    let Some(corpus) = corpus else {
        return fail("no corpus loaded");
    };
    let Some(current) = *pending else {
        return fail("no question is pending");
    };
    let question = regenerate(corpus, current)?;
    let correct = match (question.jumbled_words(), answer) {
        (None, Answer::Choice(selected)) => question.is_correct_choice(selected),
        (Some(_), Answer::Sequence(words)) => question.is_correct_sequence(words),
        (None, Answer::Sequence(_)) => return fail("the pending question is not jumbled"),
        (Some(_), Answer::Choice(_)) => return fail("the pending question is jumbled"),
    };
    *pending = None;
    Ok(correct)
}

fn question_json(corpus: &Option<Corpus>, pending: PendingQuestion) -> Result<String, JsValue> {
    let question = regenerate(loaded(corpus)?, pending).map_err(to_js)?;
    serde_json::to_string(&question).map_err(to_js)
}

fn entry_json(entry: &Entry) -> Result<String, JsValue> {
    serde_json::to_string(entry).map_err(to_js)
}

fn list_json(entries: &[&Entry]) -> Result<String, JsValue> {
    serde_json::to_string(entries).map_err(to_js)
}
