// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Event value type.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named, timestamped event.
///
/// The name is the routing key: [`EventEmitter::emit`](super::EventEmitter::emit)
/// delivers the event to every endpoint registered under it. Events carry no
/// identity beyond their fields; each listener receives its own clone.
///
/// # Examples
///
/// ```
/// use event_emitter::event::Event;
///
/// let event = Event::new("event_type_1");
/// assert_eq!(event.name(), "event_type_1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Event {
    name: String,
    timestamp: DateTime<Utc>,
}

impl Event {
    /// Creates an event stamped with the current time.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::at(name, Utc::now())
    }

    /// Creates an event with an explicit timestamp.
    #[must_use]
    pub fn at(name: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            timestamp,
        }
    }

    /// Returns the event name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.name, self.timestamp.to_rfc3339())
    }
}
