// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the event emitter.
//!
//! Emission itself never fails: emitting to a name nobody listens to is a
//! no-op, and a stalled listener only leaves delivery tasks pending. The
//! errors here cover the demo driver: configuration validation and listener
//! tasks that ended abnormally.

use thiserror::Error;

/// The main error type for this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// The demo configuration is invalid.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A listener task panicked or was aborted before reporting.
    #[error("listener task failed: {0}")]
    ListenerTask(String),
}

/// Errors raised while validating a [`DemoConfig`](crate::demo::DemoConfig).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No event names were configured, so there is nothing to listen to.
    #[error("at least one event name is required")]
    NoEventNames,

    /// An event name is the empty string.
    #[error("event name at position {0} is empty")]
    EmptyEventName(usize),

    /// The emission loop would not run at all.
    #[error("emission cycle count must be greater than zero")]
    ZeroCycles,
}

impl From<tokio::task::JoinError> for Error {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::ListenerTask(err.to_string())
    }
}

/// A specialized Result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
