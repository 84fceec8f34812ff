// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Event Emitter - in-process publish/subscribe over single-slot channels.
//!
//! An [`EventEmitter`] maps event names to delivery endpoints. Each endpoint
//! connects the emitter to exactly one [`Listener`], which drains it in its
//! own task. Emitting an event spawns one detached hand-off per subscriber,
//! so the caller never waits for a listener.
//!
//! # Behavior
//!
//! - **Unknown names**: emitting to a name nobody registered is a silent no-op
//! - **Snapshot delivery**: an emission reaches the endpoints registered at the
//!   moment of the call, not those added later
//! - **No ordering across deliveries**: each hand-off is its own task, so two
//!   events emitted back to back may reach a listener in either order
//! - **No backpressure**: a stalled listener leaves delivery tasks pending
//!   without bound; see [`EventEmitter::pending_deliveries`]
//!
//! # Quick Start
//!
//! ```
//! use event_emitter::{Event, EventEmitter, Listener, endpoint};
//! use tokio_util::sync::CancellationToken;
//!
//! #[tokio::main]
//! async fn main() {
//!     let emitter = EventEmitter::new();
//!
//!     let (tx, rx) = endpoint();
//!     emitter.add_listener("event_type_1", tx);
//!
//!     let token = CancellationToken::new();
//!     let listener = Listener::new("Listener 1", rx).spawn(token.clone());
//!
//!     emitter.emit(Event::new("event_type_1"));
//!     tokio::time::sleep(std::time::Duration::from_millis(50)).await;
//!
//!     token.cancel();
//!     let report = listener.await.unwrap();
//!     assert_eq!(report.processed, 1);
//! }
//! ```

pub mod demo;
pub mod error;
pub mod event;
pub mod listener;

pub use error::{ConfigError, Error, Result};
pub use event::{Endpoint, EndpointId, EndpointReceiver, Event, EventEmitter, endpoint};
pub use listener::{Listener, ListenerReport, OutputFormat};
