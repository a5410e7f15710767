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

//! kural-core: the engine behind the kural reader.
//!
//! This library provides WASM-compatible types and algorithms for:
//! - Loading, looking up and searching the corpus of kurals
//! - Picking the kural of the day
//! - Generating and grading quiz questions
//! - Tracking reading streaks, quiz statistics, history and favorites

pub mod corpus;
pub mod daily;
pub mod error;
pub mod history;
pub mod progress;
pub mod quiz;
pub mod rng;
pub mod services;
pub mod settings;
pub mod state;
pub mod store;
pub mod types;

#[cfg(test)]
mod helper;

// Re-exports for convenience
pub use corpus::Corpus;
pub use daily::{daily_entry, daily_id, epoch, random_entry};
pub use error::{EngineError, ErrorReport, Fallible, fail};
pub use quiz::QuizGenerator;
pub use rng::{RandomSource, TinyRng};
pub use settings::{Action, Settings, ThemeMode};
pub use state::AppState;
pub use store::{KeyValueStore, MemoryStore};
pub use types::date::Date;
pub use types::entry::{Entry, EntryId};
pub use types::question::{Question, QuestionKind};
