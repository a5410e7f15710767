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

//! Daily reminders scheduled by the page through JavaScript callbacks.

use js_sys::Function;
use kural_core::error::Fallible;
use kural_core::services::ReminderScheduler;
use kural_core::services::ReminderTime;
use wasm_bindgen::JsValue;

use crate::storage::js_error;

pub struct JsReminderScheduler {
    schedule: Function,
    cancel: Function,
}

impl JsReminderScheduler {
    pub fn new(schedule: Function, cancel: Function) -> Self {
        Self { schedule, cancel }
    }
}

impl ReminderScheduler for JsReminderScheduler {
    fn schedule_daily_reminder(&mut self, time: ReminderTime) -> Fallible<()> {
        let hour = JsValue::from(time.hour());
        let minute = JsValue::from(time.minute());
        self.schedule
            .call2(&JsValue::NULL, &hour, &minute)
            .map_err(js_error)?;
        Ok(())
    }

    fn cancel_all(&mut self) -> Fallible<()> {
        self.cancel.call0(&JsValue::NULL).map_err(js_error)?;
        Ok(())
    }
}
