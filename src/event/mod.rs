// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Events, delivery endpoints and the emitter that routes between them.
//!
//! The [`EventEmitter`] maps event names to [`Endpoint`]s. Each endpoint is a
//! single-slot channel created with [`endpoint()`], whose receiving half is
//! drained by one listener. Emitting an event hands a clone of it to every
//! endpoint registered under the event's name.
//!
//! # Examples
//!
//! ```
//! use event_emitter::event::{endpoint, Event, EventEmitter};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let emitter = EventEmitter::new();
//!
//! let (tx, mut rx) = endpoint();
//! emitter.add_listener("event_type_1", tx);
//!
//! emitter.emit(Event::new("event_type_1"));
//! // No listener for this one: silently ignored
//! emitter.emit(Event::new("event_type_2"));
//!
//! assert_eq!(rx.recv().await.unwrap().name(), "event_type_1");
//! # }
//! ```

mod endpoint;
mod endpoint_id;
mod event_emitter;
mod named_event;

pub use endpoint::{Endpoint, EndpointReceiver, endpoint};
pub use endpoint_id::EndpointId;
pub use event_emitter::EventEmitter;
pub use named_event::Event;
