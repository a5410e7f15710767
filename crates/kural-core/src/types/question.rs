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

use std::fmt::Display;
use std::fmt::Formatter;

use serde::Deserialize;
use serde::Serialize;

use crate::error::ErrorReport;
use crate::types::entry::Entry;

/// Sentinel reported as the correct index of a jumbled question.
pub const NO_CORRECT_INDEX: i32 = -1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionKind {
    MissingWord,
    MeaningMatch,
    FindChapter,
    Jumbled,
}

impl QuestionKind {
    pub const ALL: [QuestionKind; 4] = [
        QuestionKind::MissingWord,
        QuestionKind::MeaningMatch,
        QuestionKind::FindChapter,
        QuestionKind::Jumbled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionKind::MissingWord => "missing-word",
            QuestionKind::MeaningMatch => "meaning-match",
            QuestionKind::FindChapter => "find-chapter",
            QuestionKind::Jumbled => "jumbled",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            QuestionKind::MissingWord => "Missing Word",
            QuestionKind::MeaningMatch => "Meaning Match",
            QuestionKind::FindChapter => "Find Chapter",
            QuestionKind::Jumbled => "Jumbled Kural",
        }
    }

    pub fn instruction(&self) -> &'static str {
        match self {
            QuestionKind::MissingWord => "Fill in the missing word to complete the Kural.",
            QuestionKind::MeaningMatch => "Select the correct meaning for the Kural.",
            QuestionKind::FindChapter => "Identify the chapter this Kural belongs to.",
            QuestionKind::Jumbled => "Arrange the words in the correct order.",
        }
    }
}

impl Display for QuestionKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for QuestionKind {
    type Error = ErrorReport;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        QuestionKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| ErrorReport::new(format!("invalid question kind: {value}")))
    }
}

/// The answerable part of a question.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QuestionBody {
    /// Four distinct options, one of which is correct.
    Choice {
        options: Vec<String>,
        correct_index: usize,
    },
    /// The verse's words in shuffled order, graded by sequence comparison.
    Jumbled { jumbled_words: Vec<String> },
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Question<'a> {
    pub kind: QuestionKind,
    pub entry: &'a Entry,
    pub prompt: String,
    #[serde(flatten)]
    pub body: QuestionBody,
}

impl Question<'_> {
    /// The options offered; empty for jumbled questions.
    pub fn options(&self) -> &[String] {
        match &self.body {
            QuestionBody::Choice { options, .. } => options,
            QuestionBody::Jumbled { .. } => &[],
        }
    }

    /// The index of the correct option, or [`NO_CORRECT_INDEX`] for jumbled
    /// questions.
    pub fn correct_index(&self) -> i32 {
        match &self.body {
            QuestionBody::Choice { correct_index, .. } => *correct_index as i32,
            QuestionBody::Jumbled { .. } => NO_CORRECT_INDEX,
        }
    }

    pub fn jumbled_words(&self) -> Option<&[String]> {
        match &self.body {
            QuestionBody::Choice { .. } => None,
            QuestionBody::Jumbled { jumbled_words } => Some(jumbled_words),
        }
    }

    /// Grade a selected option. Always false for jumbled questions.
    pub fn is_correct_choice(&self, selected: usize) -> bool {
        match &self.body {
            QuestionBody::Choice { correct_index, .. } => *correct_index == selected,
            QuestionBody::Jumbled { .. } => false,
        }
    }

    /// Grade a submitted word order against the source verse. Whitespace is
    /// stripped from both sides before comparing, so spacing differences are
    /// forgiven while any reordering still changes the result.
    pub fn is_correct_sequence<S: AsRef<str>>(&self, submission: &[S]) -> bool {
        let submitted = submission
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<&str>>()
            .join(" ");
        let canonical = format!("{}{}", self.entry.line1, self.entry.line2);
        strip_whitespace(&submitted) == strip_whitespace(&canonical)
    }
}

fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helper::sample_entry;

    #[test]
    fn test_kind_round_trip() {
        for kind in QuestionKind::ALL {
            assert_eq!(QuestionKind::try_from(kind.as_str()).unwrap(), kind);
        }
        assert!(QuestionKind::try_from("trivia").is_err());
    }

    #[test]
    fn test_jumbled_accessors() {
        let entry = sample_entry(1);
        let question = Question {
            kind: QuestionKind::Jumbled,
            entry: &entry,
            prompt: String::new(),
            body: QuestionBody::Jumbled {
                jumbled_words: vec!["b".to_string(), "a".to_string()],
            },
        };
        assert!(question.options().is_empty());
        assert_eq!(question.correct_index(), NO_CORRECT_INDEX);
        assert!(!question.is_correct_choice(0));
    }

    #[test]
    fn test_sequence_grading_forgives_spacing() {
        let entry = sample_entry(1);
        let question = Question {
            kind: QuestionKind::Jumbled,
            entry: &entry,
            prompt: String::new(),
            body: QuestionBody::Jumbled {
                jumbled_words: Vec::new(),
            },
        };
        let words: Vec<&str> = entry.words().collect();
        assert!(question.is_correct_sequence(&words));
        let mut padded: Vec<String> = words.iter().map(|w| format!(" {w}  ")).collect();
        assert!(question.is_correct_sequence(&padded));
        padded.swap(0, 1);
        assert!(!question.is_correct_sequence(&padded));
        assert!(!question.is_correct_sequence(&words[1..]));
    }

    #[test]
    fn test_choice_serializes_flat() {
        let entry = sample_entry(2);
        let question = Question {
            kind: QuestionKind::FindChapter,
            entry: &entry,
            prompt: "p".to_string(),
            body: QuestionBody::Choice {
                options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
                correct_index: 2,
            },
        };
        let json = serde_json::to_value(&question).unwrap();
        assert_eq!(json["kind"], "find-chapter");
        assert_eq!(json["correct_index"], 2);
        assert_eq!(json["entry"]["number"], 2);
    }
}
