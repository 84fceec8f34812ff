// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Line formats for printed events.

use serde::Serialize;

use crate::event::Event;

/// Format of the line a printing listener writes per received event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `Listener 1 received event: event_type_1 at 2024-05-01T12:00:00+00:00`
    #[default]
    Text,
    /// One JSON object per line with `listener`, `name` and `timestamp` fields.
    Json,
}

#[derive(Serialize)]
struct JsonLine<'a> {
    listener: &'a str,
    #[serde(flatten)]
    event: &'a Event,
}

impl OutputFormat {
    /// Renders the line for `event` as received by `listener`.
    #[must_use]
    pub fn render(self, listener: &str, event: &Event) -> String {
        match self {
            Self::Text => format!("{listener} received event: {event}"),
            Self::Json => {
                let line = JsonLine { listener, event };
                // Serializing strings and a timestamp cannot fail
                serde_json::to_string(&line).unwrap_or_default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    fn sample() -> Event {
        let at = DateTime::parse_from_rfc3339("2024-05-01T12:00:00+00:00")
            .unwrap()
            .with_timezone(&Utc);
        Event::at("event_type_1", at)
    }

    #[test]
    fn default_is_text() {
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }

    #[test]
    fn text_line() {
        let line = OutputFormat::Text.render("Listener 1", &sample());
        assert_eq!(
            line,
            "Listener 1 received event: event_type_1 at 2024-05-01T12:00:00+00:00"
        );
    }

    #[test]
    fn json_line() {
        let line = OutputFormat::Json.render("Listener 2", &sample());
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();

        assert_eq!(value["listener"], "Listener 2");
        assert_eq!(value["name"], "event_type_1");
        assert_eq!(value["timestamp"], "2024-05-01T12:00:00Z");
    }
}
