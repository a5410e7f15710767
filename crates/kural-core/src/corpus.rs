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

use std::collections::HashMap;
use std::collections::HashSet;
use std::fs::read_to_string;
use std::path::Path;

use crate::error::Fallible;
use crate::error::fail;
use crate::types::entry::Entry;
use crate::types::entry::EntryId;

/// The loaded collection of entries. Read-only once constructed.
pub struct Corpus {
    /// Entries in corpus-file order.
    entries: Vec<Entry>,
    /// Map from entry id to position in `entries`.
    index: HashMap<EntryId, usize>,
}

impl Corpus {
    /// Build a corpus, rejecting duplicate ids.
    pub fn new(entries: Vec<Entry>) -> Fallible<Self> {
        let mut index = HashMap::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            if index.insert(entry.id, position).is_some() {
                return fail(format!("duplicate entry number {}.", entry.id));
            }
        }
        let corpus = Self { entries, index };
        if !corpus.is_contiguous() {
            log::warn!(
                "Entry numbers are not contiguous; the daily rotation falls back to load order."
            );
        }
        Ok(corpus)
    }

    /// Parse a corpus from the JSON array format.
    pub fn from_json(json: &str) -> Fallible<Self> {
        let entries: Vec<Entry> = serde_json::from_str(json)?;
        log::debug!("Parsed {} entries.", entries.len());
        Self::new(entries)
    }

    pub fn load(path: &Path) -> Fallible<Self> {
        if !path.exists() {
            return fail(format!("corpus file {} does not exist.", path.display()));
        }
        let json = read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in load order. The order carries no meaning beyond that.
    pub fn all(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.index.get(&id).map(|position| &self.entries[*position])
    }

    /// Entries of the given chapter, in load order.
    pub fn by_chapter(&self, name: &str) -> Vec<&Entry> {
        self.entries
            .iter()
            .filter(|entry| entry.chapter() == name)
            .collect()
    }

    /// Case-insensitive substring search over both verse lines, the
    /// translation, the entry number and the chapter names.
    pub fn search(&self, query: &str) -> Vec<&Entry> {
        let query = query.to_lowercase();
        self.entries
            .iter()
            .filter(|entry| matches_query(entry, &query))
            .collect()
    }

    /// Distinct chapter names in order of first appearance.
    pub fn chapters(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.entries
            .iter()
            .map(Entry::chapter)
            .filter(|chapter| seen.insert(*chapter))
            .collect()
    }

    /// Look up a list of ids, silently dropping the ones that no longer exist.
    pub fn resolve(&self, ids: &[EntryId]) -> Vec<&Entry> {
        ids.iter().filter_map(|id| self.get(*id)).collect()
    }

    /// True when the ids are exactly `1..=len`.
    pub fn is_contiguous(&self) -> bool {
        (1..=self.entries.len() as EntryId).all(|id| self.index.contains_key(&id))
    }
}

fn matches_query(entry: &Entry, query: &str) -> bool {
    let contains = |text: &str| text.to_lowercase().contains(query);
    contains(&entry.line1)
        || contains(&entry.line2)
        || contains(&entry.translation)
        || entry.id.to_string().contains(query)
        || contains(&entry.chapter_tamil)
        || entry.chapter_english.as_deref().is_some_and(contains)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helper::numbered_entry;
    use crate::helper::sample_corpus;

    fn ids(entries: &[&Entry]) -> Vec<EntryId> {
        entries.iter().map(|entry| entry.id).collect()
    }

    #[test]
    fn test_load_order_is_kept() {
        let corpus = sample_corpus();
        let ids: Vec<EntryId> = corpus.all().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 12, 21, 31, 391]);
        assert!(!corpus.is_contiguous());
    }

    #[test]
    fn test_get() {
        let corpus = sample_corpus();
        assert_eq!(corpus.get(391).map(|e| e.chapter()), Some("கல்வி"));
        assert!(corpus.get(3).is_none());
        assert!(corpus.get(0).is_none());
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let result = Corpus::new(vec![numbered_entry(1), numbered_entry(1)]);
        assert!(result.is_err());
    }

    #[test]
    fn test_by_chapter() {
        let corpus = sample_corpus();
        assert_eq!(ids(&corpus.by_chapter("கடவுள் வாழ்த்து")), vec![1, 2]);
        assert!(corpus.by_chapter("nonexistent").is_empty());
    }

    #[test]
    fn test_chapters_first_occurrence_order() {
        let corpus = sample_corpus();
        assert_eq!(
            corpus.chapters(),
            vec![
                "கடவுள் வாழ்த்து",
                "வான்சிறப்பு",
                "நீத்தார் பெருமை",
                "அறன்வலியுறுத்தல்",
                "கல்வி"
            ]
        );
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let corpus = sample_corpus();
        assert_eq!(ids(&corpus.search("RAIN")), vec![12]);
        assert_eq!(ids(&corpus.search("learning")), vec![391]);
    }

    #[test]
    fn test_search_by_number_and_chapter() {
        let corpus = sample_corpus();
        assert_eq!(ids(&corpus.search("39")), vec![391]);
        assert_eq!(ids(&corpus.search("1")), vec![1, 12, 21, 31, 391]);
        assert_eq!(ids(&corpus.search("கல்வி")), vec![391]);
        assert_eq!(ids(&corpus.search("ascetics")), vec![21]);
    }

    #[test]
    fn test_search_returns_exactly_the_matching_entries() {
        let corpus = sample_corpus();
        for query in ["அ", "the", "உலகு", "2", "virtue", "zzz"] {
            let found = ids(&corpus.search(query));
            let lowered = query.to_lowercase();
            let expected: Vec<EntryId> = corpus
                .all()
                .iter()
                .filter(|e| {
                    [
                        e.line1.to_lowercase(),
                        e.line2.to_lowercase(),
                        e.translation.to_lowercase(),
                        e.id.to_string(),
                        e.chapter_tamil.to_lowercase(),
                        e.chapter_english.clone().unwrap_or_default().to_lowercase(),
                    ]
                    .iter()
                    .any(|field| field.contains(&lowered))
                })
                .map(|e| e.id)
                .collect();
            assert_eq!(found, expected, "query {query:?}");
        }
    }

    #[test]
    fn test_resolve_drops_stale_ids() {
        let corpus = sample_corpus();
        assert_eq!(ids(&corpus.resolve(&[391, 5000, 1])), vec![391, 1]);
    }

    #[test]
    fn test_load_missing_file() {
        let result = Corpus::load(Path::new("./does-not-exist.json"));
        assert!(result.is_err());
    }
}
