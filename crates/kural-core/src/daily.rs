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

//! The entry of the day.
//!
//! Every calendar day since the epoch maps to one entry number, cycling
//! through the whole corpus without resetting at year boundaries.

use crate::corpus::Corpus;
use crate::error::EngineError;
use crate::rng::RandomSource;
use crate::rng::pick;
use crate::types::date::Date;
use crate::types::entry::Entry;
use crate::types::entry::EntryId;

/// The rotation starts on 2024-01-01.
pub fn epoch() -> Date {
    Date::new(chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default())
}

/// The entry number for `today`, in `1..=n`. Dates before the epoch wrap
/// around instead of going negative.
pub fn daily_id(today: Date, epoch: Date, n: usize) -> Result<EntryId, EngineError> {
    if n == 0 {
        return Err(EngineError::EmptyCollection);
    }
    let days = today.days_since(epoch);
    Ok(days.rem_euclid(n as i64) as EntryId + 1)
}

/// Resolve the entry of the day. When the computed number is missing (a
/// partial corpus), the entry at the same offset in load order is used.
pub fn daily_entry(corpus: &Corpus, today: Date, epoch: Date) -> Result<&Entry, EngineError> {
    let id = daily_id(today, epoch, corpus.len())?;
    if let Some(entry) = corpus.get(id) {
        return Ok(entry);
    }
    let offset = (id - 1) as usize;
    corpus
        .all()
        .get(offset)
        .ok_or(EngineError::EmptyCollection)
}

/// A uniformly random entry.
pub fn random_entry<'a>(
    corpus: &'a Corpus,
    rng: &mut impl RandomSource,
) -> Result<&'a Entry, EngineError> {
    pick(corpus.all(), rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helper::numbered_corpus;
    use crate::helper::sample_corpus;
    use crate::rng::TinyRng;

    const N: usize = 1330;

    fn ymd(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_first_days() {
        let e = epoch();
        assert_eq!(daily_id(ymd(2024, 1, 1), e, N), Ok(1));
        assert_eq!(daily_id(ymd(2024, 1, 2), e, N), Ok(2));
        assert_eq!(daily_id(ymd(2024, 12, 31), e, N), Ok(366));
    }

    #[test]
    fn test_period_is_n() {
        let e = epoch();
        assert_eq!(daily_id(e.add_days(N as u64), e, N), Ok(1));
        for offset in [0u64, 17, 400, 1329] {
            let day = e.add_days(offset);
            assert_eq!(
                daily_id(day, e, N),
                daily_id(day.add_days(N as u64), e, N)
            );
        }
    }

    #[test]
    fn test_dates_before_epoch_wrap() {
        let e = epoch();
        assert_eq!(daily_id(ymd(2023, 12, 31), e, N), Ok(1330));
        assert_eq!(daily_id(ymd(2023, 12, 30), e, N), Ok(1329));
    }

    #[test]
    fn test_always_in_range() {
        let e = epoch();
        let mut day = ymd(2019, 6, 1);
        for _ in 0..4000 {
            let id = daily_id(day, e, 7).unwrap();
            assert!((1..=7).contains(&id));
            day = day.succ();
        }
    }

    #[test]
    fn test_empty_corpus() {
        assert_eq!(
            daily_id(ymd(2024, 5, 5), epoch(), 0),
            Err(EngineError::EmptyCollection)
        );
    }

    #[test]
    fn test_daily_entry_contiguous() {
        let corpus = numbered_corpus(10);
        let entry = daily_entry(&corpus, ymd(2024, 1, 4), epoch()).unwrap();
        assert_eq!(entry.id, 4);
    }

    #[test]
    fn test_daily_entry_falls_back_to_load_order() {
        let corpus = sample_corpus();
        // Day 2 maps to number 3, which the sample does not contain.
        let entry = daily_entry(&corpus, ymd(2024, 1, 3), epoch()).unwrap();
        assert_eq!(entry.id, 12);
    }

    #[test]
    fn test_random_entry() {
        let corpus = sample_corpus();
        let mut rng = TinyRng::from_seed(5);
        let entry = random_entry(&corpus, &mut rng).unwrap();
        assert!(corpus.get(entry.id).is_some());
    }
}
