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

use kural_core::Settings;

pub fn render_stats(settings: &Settings) -> String {
    let progress = settings.progress();
    let quiz = progress.quiz_stats();
    let last_read = match progress.last_read_date() {
        Some(date) => date.to_string(),
        None => "never".to_string(),
    };
    let accuracy = match quiz.accuracy() {
        Some(accuracy) => format!("{:.0}%", accuracy * 100.0),
        None => "-".to_string(),
    };
    let rows = [
        ("Reading streak", format!("{} day(s)", progress.streak())),
        ("Last read", last_read),
        ("Questions answered", quiz.total_answered().to_string()),
        ("Correct answers", quiz.correct_answers().to_string()),
        ("Correct in a row", quiz.current_streak().to_string()),
        ("Accuracy", accuracy),
        ("Favorites", settings.favorites().ids().len().to_string()),
    ];
    rows.iter()
        .map(|(label, value)| format!("{label:<20}{value}"))
        .collect::<Vec<String>>()
        .join("\n")
}
