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

use std::fs::read_to_string;
use std::path::Path;
use std::path::PathBuf;

use kural_core::Date;
use kural_core::error::ErrorReport;
use kural_core::error::Fallible;
use serde::Deserialize;

pub const CONFIG_FILE: &str = "kural.toml";
const DEFAULT_CORPUS: &str = "thirukkural.json";
const DEFAULT_DATABASE: &str = "kural.db";

/// Contents of `kural.toml`. Every key is optional; relative paths are
/// resolved against the directory holding the file.
#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    corpus: Option<PathBuf>,
    database: Option<PathBuf>,
    epoch: Option<Date>,
}

#[derive(Debug, PartialEq)]
pub struct Config {
    pub corpus: PathBuf,
    pub database: PathBuf,
    pub epoch: Date,
}

impl Config {
    /// Read `kural.toml` from `directory`. A missing file means defaults.
    pub fn load(directory: &Path) -> Fallible<Self> {
        let path = directory.join(CONFIG_FILE);
        let file = if path.exists() {
            let text = read_to_string(&path)?;
            toml::from_str(&text).map_err(|e| {
                ErrorReport::new(format!("failed to parse {}: {e}", path.display()))
            })?
        } else {
            log::debug!("No {CONFIG_FILE} in {}, using defaults.", directory.display());
            ConfigFile::default()
        };
        Ok(Self::resolve(directory, file))
    }

    fn resolve(directory: &Path, file: ConfigFile) -> Self {
        let corpus = file.corpus.unwrap_or_else(|| PathBuf::from(DEFAULT_CORPUS));
        let database = file
            .database
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE));
        Self {
            corpus: directory.join(corpus),
            database: directory.join(database),
            epoch: file.epoch.unwrap_or_else(kural_core::epoch),
        }
    }
}
