// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Configuration for the demonstration driver.

use std::time::Duration;

use crate::error::ConfigError;
use crate::listener::OutputFormat;

/// Default number of emission cycles.
const DEFAULT_CYCLES: usize = 5;

/// Default pause after each emission cycle.
const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

/// Default time given to listeners to drain before shutdown.
const DEFAULT_DRAIN: Duration = Duration::from_secs(5);

/// Event names used when none are configured.
const DEFAULT_EVENT_NAMES: [&str; 2] = ["event_type_1", "event_type_2"];

/// Configuration for [`run_demo`](super::run_demo).
///
/// One listener is created per event name. Each cycle emits one event per
/// name, then pauses for `interval`.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use event_emitter::demo::DemoConfig;
/// use event_emitter::listener::OutputFormat;
///
/// // Five cycles, one second apart, five seconds to drain
/// let config = DemoConfig::default();
/// assert_eq!(config.cycles, 5);
///
/// let config = DemoConfig::default()
///     .with_cycles(3)
///     .with_interval(Duration::from_millis(100))
///     .with_event_names(["clicks", "keys", "scrolls"])
///     .with_output(OutputFormat::Json);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Number of emission cycles.
    pub cycles: usize,
    /// Pause after each cycle.
    pub interval: Duration,
    /// Wait after the last cycle before listeners are cancelled.
    pub drain: Duration,
    /// Event names, one listener each.
    pub event_names: Vec<String>,
    /// Line format used by the printing listeners.
    pub output: OutputFormat,
}

impl DemoConfig {
    /// Sets the number of emission cycles.
    #[must_use]
    pub fn with_cycles(mut self, cycles: usize) -> Self {
        self.cycles = cycles;
        self
    }

    /// Sets the pause after each emission cycle.
    #[must_use]
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Sets the drain wait after the last cycle.
    #[must_use]
    pub fn with_drain(mut self, drain: Duration) -> Self {
        self.drain = drain;
        self
    }

    /// Replaces the event names.
    #[must_use]
    pub fn with_event_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.event_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the output format of the printing listeners.
    #[must_use]
    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }

    /// Total number of events the demo emits.
    #[must_use]
    pub fn total_events(&self) -> usize {
        self.cycles * self.event_names.len()
    }

    /// Checks that the configuration describes a runnable demo.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if there are no event names, an event name is
    /// empty, or the cycle count is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.event_names.is_empty() {
            return Err(ConfigError::NoEventNames);
        }
        if let Some(position) = self.event_names.iter().position(String::is_empty) {
            return Err(ConfigError::EmptyEventName(position));
        }
        if self.cycles == 0 {
            return Err(ConfigError::ZeroCycles);
        }
        Ok(())
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            cycles: DEFAULT_CYCLES,
            interval: DEFAULT_INTERVAL,
            drain: DEFAULT_DRAIN,
            event_names: DEFAULT_EVENT_NAMES.iter().map(ToString::to_string).collect(),
            output: OutputFormat::default(),
        }
    }
}
