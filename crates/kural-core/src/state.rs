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

//! The settings container owned by the host.
//!
//! Holds the in-memory settings, applies actions through the reducer,
//! notifies subscribers and writes the blob back to the store after every
//! change. A failed write is logged and otherwise ignored: the in-memory
//! state stays authoritative for the session.

use crate::settings::Action;
use crate::settings::Settings;
use crate::store::KeyValueStore;
use crate::store::SETTINGS_KEY;

/// Handle returned by [`AppState::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubscriptionId(usize);

type Listener = Box<dyn FnMut(&Settings)>;

pub struct AppState<S: KeyValueStore> {
    settings: Settings,
    store: S,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: usize,
}

impl<S: KeyValueStore> AppState<S> {
    /// Read the settings blob from the store. A missing blob yields the
    /// defaults; so does an unreadable one, after a warning.
    pub fn load(store: S) -> Self {
        let settings = match store.get(SETTINGS_KEY) {
            Ok(Some(blob)) => Settings::from_blob(&blob).unwrap_or_else(|e| {
                log::warn!("Discarding unreadable settings: {e}");
                Settings::default()
            }),
            Ok(None) => Settings::default(),
            Err(e) => {
                log::warn!("Failed to read settings: {e}");
                Settings::default()
            }
        };
        Self {
            settings,
            store,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Apply an action. Actions that change nothing are neither persisted
    /// nor announced to subscribers.
    pub fn dispatch(&mut self, action: Action) {
        let next = self.settings.clone().apply(action);
        if next == self.settings {
            return;
        }
        self.settings = next;
        self.persist();
        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.settings);
        }
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&Settings) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if the subscription was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    fn persist(&mut self) {
        let result = self
            .settings
            .to_blob()
            .and_then(|blob| self.store.set(SETTINGS_KEY, &blob));
        if let Err(e) = result {
            log::warn!("Failed to persist settings: {e}");
        }
    }
}
