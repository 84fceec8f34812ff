// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Listeners draining delivery endpoints.
//!
//! A [`Listener`] owns the receiving half of one endpoint for its whole
//! lifetime. It has a single resting state, waiting for the next event, and
//! returns there right after processing each one. Stopping is explicit: the
//! listener runs until its cancellation token fires.

mod event_listener;
mod output;

pub use event_listener::{Listener, ListenerReport};
pub use output::OutputFormat;
