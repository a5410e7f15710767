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

use crate::types::date::Date;

/// Running totals for quiz answers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QuizStats {
    total_answered: u32,
    correct_answers: u32,
    /// Consecutive correct answers; reset by a wrong one.
    current_streak: u32,
}

impl QuizStats {
    pub fn total_answered(&self) -> u32 {
        self.total_answered
    }

    pub fn correct_answers(&self) -> u32 {
        self.correct_answers
    }

    pub fn current_streak(&self) -> u32 {
        self.current_streak
    }

    /// Fraction of correct answers, `None` before the first answer.
    pub fn accuracy(&self) -> Option<f64> {
        if self.total_answered == 0 {
            None
        } else {
            Some(self.correct_answers as f64 / self.total_answered as f64)
        }
    }

    pub fn record_answer(self, is_correct: bool) -> Self {
        Self {
            total_answered: self.total_answered.saturating_add(1),
            correct_answers: self.correct_answers.saturating_add(u32::from(is_correct)),
            current_streak: if is_correct {
                self.current_streak.saturating_add(1)
            } else {
                0
            },
        }
    }
}

/// Reading streak and quiz statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProgressState {
    /// Consecutive days on which the daily entry was read.
    streak: u32,
    last_read_date: Option<Date>,
    quiz_stats: QuizStats,
}

impl ProgressState {
    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn last_read_date(&self) -> Option<Date> {
        self.last_read_date
    }

    pub fn quiz_stats(&self) -> QuizStats {
        self.quiz_stats
    }

    /// Record that the daily entry was read on `today`. Reading again on the
    /// same day changes nothing; reading on the day after the last read
    /// extends the streak; anything else starts a new streak.
    pub fn mark_read(self, today: Date) -> Self {
        match self.last_read_date {
            Some(last) if last == today => self,
            Some(last) if last == today.pred() => Self {
                streak: self.streak.saturating_add(1),
                last_read_date: Some(today),
                ..self
            },
            _ => Self {
                streak: 1,
                last_read_date: Some(today),
                ..self
            },
        }
    }

    pub fn record_quiz_answer(self, is_correct: bool) -> Self {
        Self {
            quiz_stats: self.quiz_stats.record_answer(is_correct),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Fallible;

    fn ymd(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_first_read_starts_streak() {
        let state = ProgressState::default().mark_read(ymd(2024, 5, 1));
        assert_eq!(state.streak(), 1);
        assert_eq!(state.last_read_date(), Some(ymd(2024, 5, 1)));
    }

    #[test]
    fn test_same_day_is_idempotent() {
        let day = ymd(2024, 5, 1);
        let once = ProgressState::default().mark_read(day);
        let twice = once.mark_read(day).mark_read(day);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_consecutive_days_extend_streak() {
        let mut state = ProgressState::default();
        let mut day = ymd(2024, 12, 29);
        for expected in 1..=5 {
            state = state.mark_read(day);
            assert_eq!(state.streak(), expected);
            day = day.succ();
        }
    }

    #[test]
    fn test_gap_resets_streak() {
        let state = ProgressState::default()
            .mark_read(ymd(2024, 5, 1))
            .mark_read(ymd(2024, 5, 2))
            .mark_read(ymd(2024, 5, 4));
        assert_eq!(state.streak(), 1);
        assert_eq!(state.last_read_date(), Some(ymd(2024, 5, 4)));
    }

    #[test]
    fn test_going_back_in_time_resets_streak() {
        let state = ProgressState::default()
            .mark_read(ymd(2024, 5, 2))
            .mark_read(ymd(2024, 5, 3))
            .mark_read(ymd(2024, 5, 1));
        assert_eq!(state.streak(), 1);
    }

    #[test]
    fn test_quiz_answers() {
        let state = ProgressState::default()
            .record_quiz_answer(true)
            .record_quiz_answer(true)
            .record_quiz_answer(false)
            .record_quiz_answer(true);
        let stats = state.quiz_stats();
        assert_eq!(stats.total_answered(), 4);
        assert_eq!(stats.correct_answers(), 3);
        assert_eq!(stats.current_streak(), 1);
        assert_eq!(stats.accuracy(), Some(0.75));
        assert_eq!(QuizStats::default().accuracy(), None);
    }

    #[test]
    fn test_quiz_answers_leave_reading_streak_alone() {
        let state = ProgressState::default()
            .mark_read(ymd(2024, 5, 1))
            .record_quiz_answer(false);
        assert_eq!(state.streak(), 1);
    }

    #[test]
    fn test_counters_saturate() -> Fallible<()> {
        let state: ProgressState = serde_json::from_str(
            r#"{
                "streak": 4294967295,
                "lastReadDate": "2024-01-01",
                "quizStats": {
                    "totalAnswered": 4294967295,
                    "correctAnswers": 4294967295,
                    "currentStreak": 4294967295
                }
            }"#,
        )?;
        let state = state.mark_read(ymd(2024, 1, 2)).record_quiz_answer(true);
        assert_eq!(state.streak(), u32::MAX);
        assert_eq!(state.last_read_date(), Some(ymd(2024, 1, 2)));
        let stats = state.quiz_stats();
        assert_eq!(stats.total_answered(), u32::MAX);
        assert_eq!(stats.correct_answers(), u32::MAX);
        assert_eq!(stats.current_streak(), u32::MAX);
        Ok(())
    }

    #[test]
    fn test_serialized_shape() -> Fallible<()> {
        let state = ProgressState::default()
            .mark_read(ymd(2024, 1, 2))
            .record_quiz_answer(true);
        let json = serde_json::to_value(state)?;
        assert_eq!(
            json,
            serde_json::json!({
                "streak": 1,
                "lastReadDate": "2024-01-02",
                "quizStats": {
                    "totalAnswered": 1,
                    "correctAnswers": 1,
                    "currentStreak": 1
                }
            })
        );
        Ok(())
    }
}
