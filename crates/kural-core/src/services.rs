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

//! Contracts for the host-provided speech, sharing and reminder services,
//! and the text the core hands to them.

use crate::error::Fallible;
use crate::error::fail;
use crate::settings::Settings;
use crate::types::entry::Entry;

/// Verses are read aloud in Tamil.
pub const SPEECH_LANGUAGE: &str = "ta-IN";

pub trait Speaker {
    fn speak(&mut self, text: &str, language: &str, voice: Option<&str>) -> Fallible<()>;

    fn stop(&mut self) -> Fallible<()>;
}

pub trait Sharer {
    fn share_text(&mut self, message: &str) -> Fallible<()>;
}

pub trait ReminderScheduler {
    fn schedule_daily_reminder(&mut self, time: ReminderTime) -> Fallible<()>;

    fn cancel_all(&mut self) -> Fallible<()>;
}

/// Local wall-clock time of the daily reminder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReminderTime {
    hour: u32,
    minute: u32,
}

impl ReminderTime {
    pub fn new(hour: u32, minute: u32) -> Fallible<Self> {
        if hour > 23 || minute > 59 {
            return fail(format!("invalid reminder time {hour}:{minute:02}."));
        }
        Ok(Self { hour, minute })
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }
}

impl Default for ReminderTime {
    fn default() -> Self {
        Self { hour: 9, minute: 0 }
    }
}

pub fn speech_text(entry: &Entry) -> String {
    format!("{} ... {}", entry.line1, entry.line2)
}

/// The message shared to other apps, shaped by the share preferences.
pub fn share_message(entry: &Entry, settings: &Settings) -> String {
    let mut message = format!("Thirukkural #{}", entry.id);
    if settings.share_include_tamil() {
        message.push_str(&format!("\n\n{}\n{}", entry.line1, entry.line2));
    }
    if settings.share_include_english() {
        message.push_str(&format!("\n\nMeaning:\n{}", entry.translation));
    }
    if settings.share_include_explanation() {
        if settings.share_include_tamil() {
            message.push_str(&format!(
                "\n\nTamil Explanation:\n{}",
                entry.explanation_primary
            ));
        }
        if settings.share_include_english() {
            message.push_str(&format!(
                "\n\nEnglish Explanation:\n{}",
                entry.explanation_secondary
            ));
        }
    }
    message
}

/// The clipboard text: always carries both explanations.
pub fn copy_message(entry: &Entry, settings: &Settings) -> String {
    let mut message = format!(
        "Thirukkural #{}\n\n{}\n{}",
        entry.id, entry.line1, entry.line2
    );
    if settings.show_english() {
        message.push_str(&format!("\n\nMeaning:\n{}", entry.translation));
    }
    message.push_str(&format!(
        "\n\nTamil Explanation:\n{}",
        entry.explanation_primary
    ));
    message.push_str(&format!(
        "\n\nEnglish Explanation:\n{}",
        entry.explanation_secondary
    ));
    message
}

pub fn speak_entry(
    speaker: &mut impl Speaker,
    entry: &Entry,
    settings: &Settings,
) -> Fallible<()> {
    speaker.speak(
        &speech_text(entry),
        SPEECH_LANGUAGE,
        settings.selected_voice_identifier(),
    )
}

pub fn share_entry(
    sharer: &mut impl Sharer,
    entry: &Entry,
    settings: &Settings,
) -> Fallible<()> {
    sharer.share_text(&share_message(entry, settings))
}

/// Bring the scheduled reminders in line with the notifications setting.
/// Existing reminders are always cancelled first so enabling twice never
/// schedules twice. Failures are logged and swallowed.
pub fn sync_reminder(
    scheduler: &mut impl ReminderScheduler,
    settings: &Settings,
    time: ReminderTime,
) {
    if let Err(e) = scheduler.cancel_all() {
        log::warn!("Failed to cancel reminders: {e}");
    }
    if settings.notifications_enabled() {
        if let Err(e) = scheduler.schedule_daily_reminder(time) {
            log::warn!("Failed to schedule the daily reminder: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helper::sample_entry;
    use crate::settings::Action;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl Speaker for Recorder {
        fn speak(&mut self, text: &str, language: &str, voice: Option<&str>) -> Fallible<()> {
            self.calls
                .push(format!("speak {language} {voice:?} {text}"));
            Ok(())
        }

        fn stop(&mut self) -> Fallible<()> {
            self.calls.push("stop".to_string());
            Ok(())
        }
    }

    impl Sharer for Recorder {
        fn share_text(&mut self, message: &str) -> Fallible<()> {
            self.calls.push(message.to_string());
            Ok(())
        }
    }

    impl ReminderScheduler for Recorder {
        fn schedule_daily_reminder(&mut self, time: ReminderTime) -> Fallible<()> {
            self.calls
                .push(format!("schedule {}:{:02}", time.hour(), time.minute()));
            Ok(())
        }

        fn cancel_all(&mut self) -> Fallible<()> {
            self.calls.push("cancel".to_string());
            Ok(())
        }
    }

    #[test]
    fn test_share_message_defaults() {
        let entry = sample_entry(6);
        let message = share_message(&entry, &Settings::default());
        assert_eq!(
            message,
            format!(
                "Thirukkural #391\n\n{}\n{}\n\nMeaning:\n{}",
                entry.line1, entry.line2, entry.translation
            )
        );
    }

    #[test]
    fn test_share_message_explanation_follows_languages() {
        let entry = sample_entry(1);
        let settings = Settings::default()
            .apply(Action::ToggleShareIncludeExplanation)
            .apply(Action::ToggleShareIncludeTamil);
        let message = share_message(&entry, &settings);
        assert!(!message.contains(&entry.line1));
        assert!(!message.contains("Tamil Explanation"));
        assert!(message.contains("English Explanation"));
        assert!(message.ends_with(&entry.explanation_secondary));
    }

    #[test]
    fn test_copy_message_has_both_explanations() {
        let entry = sample_entry(2);
        let settings = Settings::default().apply(Action::ToggleEnglish);
        let message = copy_message(&entry, &settings);
        assert!(!message.contains("Meaning:"));
        assert!(message.contains(&entry.explanation_primary));
        assert!(message.contains(&entry.explanation_secondary));
    }

    #[test]
    fn test_speak_uses_selected_voice() -> Fallible<()> {
        let entry = sample_entry(1);
        let settings = Settings::default().apply(Action::SetVoice(Some("v1".to_string())));
        let mut speaker = Recorder::default();
        speak_entry(&mut speaker, &entry, &settings)?;
        speaker.stop()?;
        assert_eq!(
            speaker.calls,
            vec![
                format!("speak ta-IN Some(\"v1\") {} ... {}", entry.line1, entry.line2),
                "stop".to_string()
            ]
        );
        Ok(())
    }

    #[test]
    fn test_share_entry() -> Fallible<()> {
        let entry = sample_entry(3);
        let mut sharer = Recorder::default();
        share_entry(&mut sharer, &entry, &Settings::default())?;
        assert!(sharer.calls[0].starts_with("Thirukkural #12"));
        Ok(())
    }

    #[test]
    fn test_sync_reminder() {
        let mut scheduler = Recorder::default();
        sync_reminder(&mut scheduler, &Settings::default(), ReminderTime::default());
        assert_eq!(scheduler.calls, vec!["cancel", "schedule 9:00"]);

        let disabled = Settings::default().apply(Action::ToggleNotifications);
        let mut scheduler = Recorder::default();
        sync_reminder(&mut scheduler, &disabled, ReminderTime::new(20, 30).unwrap());
        assert_eq!(scheduler.calls, vec!["cancel"]);
    }

    #[test]
    fn test_reminder_time_bounds() {
        assert!(ReminderTime::new(23, 59).is_ok());
        assert!(ReminderTime::new(24, 0).is_err());
        assert!(ReminderTime::new(7, 60).is_err());
    }
}
