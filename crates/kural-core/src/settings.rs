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

//! The persisted settings blob.
//!
//! The blob carries no version. Fields missing from a stored blob take their
//! default values and unknown fields are ignored, so adding or removing a
//! field never invalidates what is already on disk.

use std::fmt::Display;
use std::fmt::Formatter;

use serde::Deserialize;
use serde::Serialize;

use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::history::Favorites;
use crate::history::History;
use crate::progress::ProgressState;
use crate::types::date::Date;
use crate::types::entry::EntryId;

pub const DEFAULT_FONT_SIZE: f64 = 24.0;
pub const MIN_FONT_SIZE: f64 = 12.0;
pub const MAX_FONT_SIZE: f64 = 48.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
    Sepia,
}

impl Display for ThemeMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::Sepia => "sepia",
        };
        write!(f, "{name}")
    }
}

impl TryFrom<&str> for ThemeMode {
    type Error = ErrorReport;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "sepia" => Ok(ThemeMode::Sepia),
            _ => Err(ErrorReport::new(format!("invalid theme mode: {value}"))),
        }
    }
}

/// A change to the settings. Applied by [`Settings::apply`].
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    MarkRead(Date),
    RecordQuizAnswer(bool),
    RecordView(EntryId),
    ToggleFavorite(EntryId),
    SetThemeMode(ThemeMode),
    ToggleTamil,
    ToggleEnglish,
    ToggleNotifications,
    ToggleShareIncludeTamil,
    ToggleShareIncludeEnglish,
    ToggleShareIncludeExplanation,
    SetFontSize(f64),
    SetVoice(Option<String>),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    theme_mode: ThemeMode,
    show_tamil: bool,
    show_english: bool,
    notifications_enabled: bool,
    favorites: Favorites,
    history: History,
    share_include_tamil: bool,
    share_include_english: bool,
    share_include_explanation: bool,
    #[serde(flatten)]
    progress: ProgressState,
    font_size: f64,
    selected_voice_identifier: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::Light,
            show_tamil: true,
            show_english: true,
            notifications_enabled: true,
            favorites: Favorites::default(),
            history: History::default(),
            share_include_tamil: true,
            share_include_english: true,
            share_include_explanation: false,
            progress: ProgressState::default(),
            font_size: DEFAULT_FONT_SIZE,
            selected_voice_identifier: None,
        }
    }
}

impl Settings {
    pub fn from_blob(blob: &str) -> Fallible<Self> {
        Ok(serde_json::from_str(blob)?)
    }

    pub fn to_blob(&self) -> Fallible<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// The reducer: every mutation of the settings goes through here.
    pub fn apply(self, action: Action) -> Self {
        match action {
            Action::MarkRead(today) => Self {
                progress: self.progress.mark_read(today),
                ..self
            },
            Action::RecordQuizAnswer(is_correct) => Self {
                progress: self.progress.record_quiz_answer(is_correct),
                ..self
            },
            Action::RecordView(id) => {
                let mut history = self.history;
                history.record_view(id);
                Self { history, ..self }
            }
            Action::ToggleFavorite(id) => {
                let mut favorites = self.favorites;
                favorites.toggle(id);
                Self { favorites, ..self }
            }
            Action::SetThemeMode(theme_mode) => Self { theme_mode, ..self },
            Action::ToggleTamil => Self {
                show_tamil: !self.show_tamil,
                ..self
            },
            Action::ToggleEnglish => Self {
                show_english: !self.show_english,
                ..self
            },
            Action::ToggleNotifications => Self {
                notifications_enabled: !self.notifications_enabled,
                ..self
            },
            Action::ToggleShareIncludeTamil => Self {
                share_include_tamil: !self.share_include_tamil,
                ..self
            },
            Action::ToggleShareIncludeEnglish => Self {
                share_include_english: !self.share_include_english,
                ..self
            },
            Action::ToggleShareIncludeExplanation => Self {
                share_include_explanation: !self.share_include_explanation,
                ..self
            },
            // Non-finite sizes cannot be written to the JSON blob.
            Action::SetFontSize(font_size) if !font_size.is_finite() => self,
            Action::SetFontSize(font_size) => Self {
                font_size: font_size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE),
                ..self
            },
            Action::SetVoice(selected_voice_identifier) => Self {
                selected_voice_identifier,
                ..self
            },
        }
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }

    pub fn show_tamil(&self) -> bool {
        self.show_tamil
    }

    pub fn show_english(&self) -> bool {
        self.show_english
    }

    pub fn notifications_enabled(&self) -> bool {
        self.notifications_enabled
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn share_include_tamil(&self) -> bool {
        self.share_include_tamil
    }

    pub fn share_include_english(&self) -> bool {
        self.share_include_english
    }

    pub fn share_include_explanation(&self) -> bool {
        self.share_include_explanation
    }

    pub fn progress(&self) -> &ProgressState {
        &self.progress
    }

    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    pub fn selected_voice_identifier(&self) -> Option<&str> {
        self.selected_voice_identifier.as_deref()
    }
}
