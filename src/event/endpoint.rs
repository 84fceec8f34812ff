// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Single-slot delivery endpoints.
//!
//! An endpoint connects the emitter to exactly one listener. It is backed by
//! a tokio `mpsc` channel with a capacity of one, so at most one event sits
//! in the slot; every further hand-off waits until the listener takes it.

use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TryRecvError;

use super::{EndpointId, Event};

/// Slot capacity of every endpoint.
const SLOT_CAPACITY: usize = 1;

/// Creates a new endpoint, returning its sending and receiving halves.
///
/// Register the [`Endpoint`] with an [`EventEmitter`](super::EventEmitter)
/// and hand the [`EndpointReceiver`] to the listener that drains it.
///
/// # Examples
///
/// ```
/// use event_emitter::event::{endpoint, EventEmitter};
///
/// let emitter = EventEmitter::new();
/// let (tx, _rx) = endpoint();
/// emitter.add_listener("event_type_1", tx);
/// assert_eq!(emitter.listener_count("event_type_1"), 1);
/// ```
#[must_use]
pub fn endpoint() -> (Endpoint, EndpointReceiver) {
    let id = EndpointId::new();
    let (sender, receiver) = mpsc::channel(SLOT_CAPACITY);
    (Endpoint { id, sender }, EndpointReceiver { id, receiver })
}

/// Sending half of an endpoint.
///
/// Cloning an `Endpoint` does not create a new endpoint: the clone shares
/// the id and the slot, and registering it twice yields duplicate
/// deliveries to the same listener.
#[derive(Debug, Clone)]
pub struct Endpoint {
    id: EndpointId,
    sender: mpsc::Sender<Event>,
}

impl Endpoint {
    /// Returns the endpoint id.
    #[must_use]
    pub fn id(&self) -> EndpointId {
        self.id
    }

    /// Returns `true` once the receiving half has been dropped.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }

    /// Hands an event to the listener, waiting for the slot to free up.
    ///
    /// Returns `false` if the receiving half is gone.
    pub(crate) async fn deliver(&self, event: Event) -> bool {
        self.sender.send(event).await.is_ok()
    }
}

/// Receiving half of an endpoint, owned by a single listener.
#[derive(Debug)]
pub struct EndpointReceiver {
    id: EndpointId,
    receiver: mpsc::Receiver<Event>,
}

impl EndpointReceiver {
    /// Returns the endpoint id.
    #[must_use]
    pub fn id(&self) -> EndpointId {
        self.id
    }

    /// Waits for the next event.
    ///
    /// Returns `None` once every [`Endpoint`] clone has been dropped and the
    /// slot is empty.
    pub async fn recv(&mut self) -> Option<Event> {
        self.receiver.recv().await
    }

    /// Takes the event currently in the slot, if any, without waiting.
    pub fn try_recv(&mut self) -> Option<Event> {
        match self.receiver.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }
}
