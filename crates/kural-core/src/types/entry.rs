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

/// The numeric identity of an entry, `1..=N`.
pub type EntryId = u32;

/// One kural with its bilingual metadata. Field names on the wire follow the
/// corpus JSON file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(rename = "number")]
    pub id: EntryId,
    #[serde(rename = "sect_tam")]
    pub section_tamil: String,
    #[serde(rename = "sect_eng", default, skip_serializing_if = "Option::is_none")]
    pub section_english: Option<String>,
    #[serde(rename = "chapgrp_tam")]
    pub chapter_group_tamil: String,
    #[serde(
        rename = "chapgrp_eng",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub chapter_group_english: Option<String>,
    #[serde(rename = "chap_tam")]
    pub chapter_tamil: String,
    #[serde(rename = "chap_eng", default, skip_serializing_if = "Option::is_none")]
    pub chapter_english: Option<String>,
    pub line1: String,
    pub line2: String,
    /// English rendering of the couplet.
    #[serde(rename = "eng")]
    pub translation: String,
    /// Tamil explanation.
    #[serde(rename = "tam_exp")]
    pub explanation_primary: String,
    /// English explanation.
    #[serde(rename = "eng_exp")]
    pub explanation_secondary: String,
}

impl Entry {
    /// The chapter name used for grouping and for the find-chapter quiz.
    pub fn chapter(&self) -> &str {
        &self.chapter_tamil
    }

    /// Both verse lines separated by a line break.
    pub fn verse(&self) -> String {
        format!("{}\n{}", self.line1, self.line2)
    }

    /// Whitespace-separated words of both lines, in reading order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.line1
            .split_whitespace()
            .chain(self.line2.split_whitespace())
    }
}
