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

pub mod quiz;
pub mod read;
pub mod stats;

use std::path::PathBuf;

use kural_core::AppState;
use kural_core::Corpus;
use kural_core::error::Fallible;
use kural_core::error::fail;

use crate::config::Config;
use crate::db::SqliteStore;

/// Everything a command needs: the configuration, the corpus and the
/// persisted settings.
pub struct Session {
    pub config: Config,
    pub corpus: Corpus,
    pub state: AppState<SqliteStore>,
}

impl Session {
    pub fn open(directory: Option<String>) -> Fallible<Self> {
        let directory = PathBuf::from(directory.unwrap_or_else(|| ".".to_string()));
        if !directory.exists() {
            return fail("directory does not exist.");
        }
        let config = Config::load(&directory)?;
        let corpus = Corpus::load(&config.corpus)?;
        log::debug!("Loaded {} kurals from {}", corpus.len(), config.corpus.display());
        let store = SqliteStore::open(&config.database)?;
        Ok(Self {
            config,
            corpus,
            state: AppState::load(store),
        })
    }
}
