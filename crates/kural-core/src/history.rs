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

use serde::Deserialize;
use serde::Serialize;

use crate::types::entry::EntryId;

/// Viewed entries, most recent first, each id at most once.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History(Vec<EntryId>);

impl History {
    pub fn record_view(&mut self, id: EntryId) {
        self.0.retain(|existing| *existing != id);
        self.0.insert(0, id);
    }

    pub fn ids(&self) -> &[EntryId] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Favorite entries in the order they were added.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Favorites(Vec<EntryId>);

impl Favorites {
    /// Add the id if absent, remove it if present. Returns whether the entry
    /// is a favorite afterwards.
    pub fn toggle(&mut self, id: EntryId) -> bool {
        if self.contains(id) {
            self.0.retain(|existing| *existing != id);
            false
        } else {
            self.0.push(id);
            true
        }
    }

    pub fn contains(&self, id: EntryId) -> bool {
        self.0.contains(&id)
    }

    pub fn ids(&self) -> &[EntryId] {
        &self.0
    }
}
