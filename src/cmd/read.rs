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

//! Reading commands: the kural of the day, lookups, search and lists.

use std::io::Write;

use kural_core::Action;
use kural_core::Corpus;
use kural_core::Date;
use kural_core::Entry;
use kural_core::EntryId;
use kural_core::RandomSource;
use kural_core::Settings;
use kural_core::daily_entry;
use kural_core::error::ErrorReport;
use kural_core::error::Fallible;
use kural_core::error::fail;
use kural_core::random_entry;
use kural_core::services::Sharer;
use kural_core::services::share_entry;

use crate::cmd::Session;

/// Prints shared messages instead of handing them to another app.
pub struct PrintSharer<W: Write> {
    out: W,
}

impl<W: Write> PrintSharer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Sharer for PrintSharer<W> {
    fn share_text(&mut self, message: &str) -> Fallible<()> {
        writeln!(self.out, "{message}")?;
        Ok(())
    }
}

/// Show the kural of the day and mark it read.
pub fn today(session: &mut Session, today: Date, explain: bool) -> Fallible<String> {
    let entry = daily_entry(&session.corpus, today, session.config.epoch)?;
    session.state.dispatch(Action::MarkRead(today));
    session.state.dispatch(Action::RecordView(entry.id));
    let settings = session.state.settings();
    Ok(format!(
        "{}\n\nStreak: {} day(s)",
        render_entry(entry, settings, explain),
        settings.progress().streak()
    ))
}

pub fn random(
    session: &mut Session,
    rng: &mut impl RandomSource,
    explain: bool,
) -> Fallible<String> {
    let entry = random_entry(&session.corpus, rng)?;
    session.state.dispatch(Action::RecordView(entry.id));
    Ok(render_entry(entry, session.state.settings(), explain))
}

pub fn show(session: &mut Session, id: EntryId, explain: bool) -> Fallible<String> {
    let entry = lookup(&session.corpus, id)?;
    session.state.dispatch(Action::RecordView(entry.id));
    Ok(render_entry(entry, session.state.settings(), explain))
}

pub fn search(session: &Session, query: &str) -> String {
    let found = session.corpus.search(query);
    if found.is_empty() {
        return format!("No kurals match {query:?}.");
    }
    render_list(&found)
}

pub fn chapters(session: &Session) -> String {
    session.corpus.chapters().join("\n")
}

pub fn chapter(session: &Session, name: &str) -> Fallible<String> {
    let entries = session.corpus.by_chapter(name);
    if entries.is_empty() {
        return fail(format!("no chapter named {name:?}."));
    }
    Ok(render_list(&entries))
}

pub fn history(session: &Session) -> String {
    let ids = session.state.settings().history().ids();
    let entries = session.corpus.resolve(ids);
    if entries.is_empty() {
        return "No kurals read yet.".to_string();
    }
    render_list(&entries)
}

pub fn favorites(session: &Session) -> String {
    let ids = session.state.settings().favorites().ids();
    let entries = session.corpus.resolve(ids);
    if entries.is_empty() {
        return "No favorites yet.".to_string();
    }
    render_list(&entries)
}

pub fn toggle_favorite(session: &mut Session, id: EntryId) -> Fallible<String> {
    lookup(&session.corpus, id)?;
    session.state.dispatch(Action::ToggleFavorite(id));
    if session.state.settings().favorites().contains(id) {
        Ok(format!("Added #{id} to favorites."))
    } else {
        Ok(format!("Removed #{id} from favorites."))
    }
}

pub fn share(session: &Session, id: EntryId, sharer: &mut impl Sharer) -> Fallible<()> {
    let entry = lookup(&session.corpus, id)?;
    share_entry(sharer, entry, session.state.settings())
}

fn lookup(corpus: &Corpus, id: EntryId) -> Fallible<&Entry> {
    corpus
        .get(id)
        .ok_or_else(|| ErrorReport::new(format!("no kural numbered {id}.")))
}

fn render_entry(entry: &Entry, settings: &Settings, explain: bool) -> String {
    let mut out = format!("Kural #{} · {}", entry.id, entry.chapter_tamil);
    if let Some(chapter) = &entry.chapter_english {
        out.push_str(&format!(" ({chapter})"));
    }
    if settings.show_tamil() {
        out.push_str(&format!("\n\n{}\n{}", entry.line1, entry.line2));
    }
    if settings.show_english() {
        out.push_str(&format!("\n\n{}", entry.translation));
    }
    if explain {
        if settings.show_tamil() {
            out.push_str(&format!("\n\n{}", entry.explanation_primary));
        }
        if settings.show_english() {
            out.push_str(&format!("\n\n{}", entry.explanation_secondary));
        }
    }
    out
}

fn render_list(entries: &[&Entry]) -> String {
    entries
        .iter()
        .map(|entry| format!("#{:<5} {} / {}", entry.id, entry.line1, entry.line2))
        .collect::<Vec<String>>()
        .join("\n")
}
