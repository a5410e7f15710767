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

//! Quiz question generation.
//!
//! Every generator draws a random entry, takes one of its fields as the
//! answer, and rejection-samples distractors from other entries. The loops
//! are bounded: a corpus that cannot supply enough material yields
//! [`EngineError::CorpusTooSmall`] instead of spinning.

use crate::corpus::Corpus;
use crate::error::EngineError;
use crate::rng::RandomSource;
use crate::rng::pick;
use crate::rng::shuffle;
use crate::rng::shuffle_tracking;
use crate::types::entry::Entry;
use crate::types::question::Question;
use crate::types::question::QuestionBody;
use crate::types::question::QuestionKind;

/// Stands in for the hidden word in a missing-word prompt.
pub const PLACEHOLDER: &str = "_______";

/// Default budget for each bounded draw loop.
pub const DEFAULT_MAX_ATTEMPTS: usize = 64;

const JUMBLED_PROMPT: &str = "Arrange the words in the correct order:";

/// A missing-word entry needs at least this many maskable words.
const MIN_MASKABLE_WORDS: usize = 4;

const DISTRACTORS: usize = 3;

pub struct QuizGenerator<'a> {
    corpus: &'a Corpus,
    max_attempts: usize,
}

impl<'a> QuizGenerator<'a> {
    pub fn new(corpus: &'a Corpus) -> Self {
        Self {
            corpus,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    pub fn with_max_attempts(self, max_attempts: usize) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            ..self
        }
    }

    pub fn generate<R: RandomSource>(
        &self,
        kind: QuestionKind,
        rng: &mut R,
    ) -> Result<Question<'a>, EngineError> {
        match kind {
            QuestionKind::MissingWord => self.missing_word(rng),
            QuestionKind::MeaningMatch => self.meaning_match(rng),
            QuestionKind::FindChapter => self.find_chapter(rng),
            QuestionKind::Jumbled => self.jumbled(rng),
        }
    }

    /// Mask one word of the verse; the options are that word and three
    /// words taken from other entries.
    pub fn missing_word<R: RandomSource>(&self, rng: &mut R) -> Result<Question<'a>, EngineError> {
        let kind = QuestionKind::MissingWord;
        for _ in 0..self.max_attempts {
            let entry = pick(self.corpus.all(), rng)?;
            let words: Vec<&str> = entry.words().collect();
            let maskable: Vec<usize> = (0..words.len())
                .filter(|i| is_maskable(words[*i]))
                .collect();
            if maskable.len() < MIN_MASKABLE_WORDS {
                continue;
            }
            let masked = *pick(&maskable, rng)?;
            let answer = words[masked];
            let prompt = words
                .iter()
                .enumerate()
                .map(|(i, word)| if i == masked { PLACEHOLDER } else { *word })
                .collect::<Vec<&str>>()
                .join(" ");
            let distractors = self.distractors(kind, entry, answer, rng, maskable_word)?;
            return Ok(choice_question(
                kind,
                entry,
                prompt,
                answer,
                distractors,
                rng,
            ));
        }
        Err(EngineError::CorpusTooSmall {
            kind,
            attempts: self.max_attempts,
        })
    }

    /// Pick the Tamil explanation of the verse.
    pub fn meaning_match<R: RandomSource>(
        &self,
        rng: &mut R,
    ) -> Result<Question<'a>, EngineError> {
        self.verse_question(QuestionKind::MeaningMatch, primary_explanation, rng)
    }

    /// Pick the chapter the verse belongs to.
    pub fn find_chapter<R: RandomSource>(&self, rng: &mut R) -> Result<Question<'a>, EngineError> {
        self.verse_question(QuestionKind::FindChapter, Entry::chapter, rng)
    }

    /// Put the shuffled words of the verse back in order.
    pub fn jumbled<R: RandomSource>(&self, rng: &mut R) -> Result<Question<'a>, EngineError> {
        let entry = pick(self.corpus.all(), rng)?;
        let words: Vec<String> = entry.words().map(String::from).collect();
        Ok(Question {
            kind: QuestionKind::Jumbled,
            entry,
            prompt: JUMBLED_PROMPT.to_string(),
            body: QuestionBody::Jumbled {
                jumbled_words: shuffle(words, rng),
            },
        })
    }

    /// Show the verse, ask for one of its fields.
    fn verse_question<R: RandomSource>(
        &self,
        kind: QuestionKind,
        field: fn(&Entry) -> &str,
        rng: &mut R,
    ) -> Result<Question<'a>, EngineError> {
        let entry = pick(self.corpus.all(), rng)?;
        let answer = field(entry);
        let distractors =
            self.distractors(kind, entry, answer, rng, |other, _| Some(field(other)))?;
        Ok(choice_question(
            kind,
            entry,
            entry.verse(),
            answer,
            distractors,
            rng,
        ))
    }

    /// Draw candidates from entries other than `source` until three distinct
    /// values, all different from `answer`, have been collected.
    fn distractors<R: RandomSource>(
        &self,
        kind: QuestionKind,
        source: &Entry,
        answer: &str,
        rng: &mut R,
        draw: impl Fn(&'a Entry, &mut R) -> Option<&'a str>,
    ) -> Result<Vec<&'a str>, EngineError> {
        let budget = self.max_attempts * DISTRACTORS;
        let mut found: Vec<&'a str> = Vec::with_capacity(DISTRACTORS);
        for _ in 0..budget {
            if found.len() == DISTRACTORS {
                break;
            }
            let other = pick(self.corpus.all(), rng)?;
            if other.id == source.id {
                continue;
            }
            let Some(candidate) = draw(other, rng) else {
                continue;
            };
            if candidate != answer && !found.contains(&candidate) {
                found.push(candidate);
            }
        }
        if found.len() < DISTRACTORS {
            return Err(EngineError::CorpusTooSmall {
                kind,
                attempts: budget,
            });
        }
        Ok(found)
    }
}

/// Words of two characters or fewer are too short to quiz on.
fn is_maskable(word: &str) -> bool {
    word.chars().count() > 2
}

fn maskable_word<'e, R: RandomSource>(entry: &'e Entry, rng: &mut R) -> Option<&'e str> {
    let words: Vec<&'e str> = entry.words().filter(|w| is_maskable(w)).collect();
    pick(&words, rng).ok().copied()
}

fn primary_explanation(entry: &Entry) -> &str {
    &entry.explanation_primary
}

fn choice_question<'a>(
    kind: QuestionKind,
    entry: &'a Entry,
    prompt: String,
    answer: &str,
    distractors: Vec<&str>,
    rng: &mut impl RandomSource,
) -> Question<'a> {
    let mut options = Vec::with_capacity(DISTRACTORS + 1);
    options.push(answer.to_string());
    options.extend(distractors.into_iter().map(String::from));
    let (options, correct_index) = shuffle_tracking(options, 0, rng);
    Question {
        kind,
        entry,
        prompt,
        body: QuestionBody::Choice {
            options,
            correct_index,
        },
    }
}
