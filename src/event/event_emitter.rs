// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Event emitter fanning out named events to registered endpoints.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;

use super::{Endpoint, Event};

/// Default number of in-flight deliveries above which a warning is logged.
const DEFAULT_PENDING_WARNING: usize = 1024;

/// Emitter mapping event names to subscriber endpoints.
///
/// Registrations are append-only: there is no way to remove an endpoint,
/// so the list registered under a name only grows. All access to the map
/// goes through a single mutex which is held for the map lookup or append
/// only, never while an event is being handed off.
///
/// # Delivery
///
/// [`emit`](Self::emit) spawns one detached tokio task per subscriber. Each
/// task waits for its endpoint's slot without timeout, so a listener that
/// never drains its endpoint leaves tasks pending indefinitely. These tasks
/// cannot be cancelled; [`pending_deliveries`](Self::pending_deliveries)
/// reports how many are outstanding.
///
/// # Examples
///
/// ```
/// use event_emitter::event::{endpoint, Event, EventEmitter};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let emitter = EventEmitter::new();
/// let (tx, mut rx) = endpoint();
/// emitter.add_listener("event_type_1", tx);
///
/// emitter.emit(Event::new("event_type_1"));
///
/// let event = rx.recv().await.unwrap();
/// assert_eq!(event.name(), "event_type_1");
/// # }
/// ```
#[derive(Debug)]
pub struct EventEmitter {
    /// Subscriber endpoints, keyed by event name.
    listeners: Mutex<HashMap<String, Vec<Endpoint>>>,
    /// Delivery tasks spawned but not yet finished.
    pending: Arc<AtomicUsize>,
    /// Pending count at which growth is reported; 0 disables the warning.
    pending_warning: usize,
}

impl EventEmitter {
    /// Creates an emitter with no subscriptions.
    #[must_use]
    pub fn new() -> Self {
        Self {
            listeners: Mutex::new(HashMap::new()),
            pending: Arc::new(AtomicUsize::new(0)),
            pending_warning: DEFAULT_PENDING_WARNING,
        }
    }

    /// Sets the pending-delivery count at which a warning is logged.
    ///
    /// Pass `0` to disable the warning. Delivery is never throttled or
    /// dropped either way.
    #[must_use]
    pub fn with_pending_warning(mut self, threshold: usize) -> Self {
        self.pending_warning = threshold;
        self
    }

    /// Registers an endpoint as a subscriber of `event_name`.
    ///
    /// The endpoint is appended to the existing list, which is created on
    /// first use. Registering the same endpoint twice is allowed and results
    /// in duplicate deliveries.
    pub fn add_listener(&self, event_name: impl Into<String>, endpoint: Endpoint) {
        let event_name = event_name.into();
        tracing::debug!(event = %event_name, endpoint = %endpoint.id(), "Registering listener");
        self.listeners
            .lock()
            .entry(event_name)
            .or_default()
            .push(endpoint);
    }

    /// Emits an event to every endpoint currently registered under its name.
    ///
    /// Returns immediately. If nobody is registered under the name, the
    /// event is silently dropped.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime, as delivery tasks are
    /// spawned with [`tokio::spawn`].
    pub fn emit(&self, event: Event) {
        let _ = self.emit_counted(event);
    }

    /// Emits an event and returns the number of delivery tasks dispatched.
    ///
    /// Only endpoints registered at the time of the call receive the event;
    /// an endpoint added afterwards, even while deliveries are still pending,
    /// does not.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    #[must_use]
    pub fn emit_counted(&self, event: Event) -> usize {
        // Snapshot under the lock, deliver without it
        let targets = self
            .listeners
            .lock()
            .get(event.name())
            .cloned()
            .unwrap_or_default();

        if targets.is_empty() {
            tracing::trace!(event = %event.name(), "No listeners for event");
            return 0;
        }

        let count = targets.len();
        for endpoint in targets {
            self.dispatch(endpoint, event.clone());
        }
        count
    }

    /// Spawns the detached hand-off of one event to one endpoint.
    fn dispatch(&self, endpoint: Endpoint, event: Event) {
        let in_flight = self.pending.fetch_add(1, Ordering::SeqCst) + 1;
        if self.pending_warning > 0 && in_flight == self.pending_warning {
            tracing::warn!(
                pending = in_flight,
                "Undelivered events are accumulating; a listener may be stalled"
            );
        }

        let guard = PendingGuard(Arc::clone(&self.pending));
        tokio::spawn(async move {
            let _guard = guard;
            let name = event.name().to_string();
            if endpoint.deliver(event).await {
                tracing::trace!(event = %name, endpoint = %endpoint.id(), "Event delivered");
            } else {
                tracing::debug!(
                    event = %name,
                    endpoint = %endpoint.id(),
                    "Endpoint closed, event discarded"
                );
            }
        });
    }

    /// Returns the number of endpoints registered under `event_name`.
    #[must_use]
    pub fn listener_count(&self, event_name: &str) -> usize {
        self.listeners.lock().get(event_name).map_or(0, Vec::len)
    }

    /// Returns the number of registrations across all event names.
    #[must_use]
    pub fn total_listener_count(&self) -> usize {
        self.listeners.lock().values().map(Vec::len).sum()
    }

    /// Returns the event names that have at least one registration, sorted.
    #[must_use]
    pub fn event_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.listeners.lock().keys().cloned().collect();
        names.sort();
        names
    }

    /// Returns the number of delivery tasks that have not completed yet.
    #[must_use]
    pub fn pending_deliveries(&self) -> usize {
        self.pending.load(Ordering::SeqCst)
    }
}

impl Default for EventEmitter {
    fn default() -> Self {
        Self::new()
    }
}

/// Decrements the pending counter when a delivery task finishes or is dropped.
struct PendingGuard(Arc<AtomicUsize>);

impl Drop for PendingGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}
