// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Listener task draining a single endpoint.

use std::fmt;
use std::sync::Arc;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::event::{EndpointReceiver, Event};

use super::OutputFormat;

/// Callback invoked for every received event with the listener name.
type EventCallback = Arc<dyn Fn(&str, &Event) + Send + Sync>;

/// Summary returned when a listener stops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListenerReport {
    /// Name of the listener.
    pub name: String,
    /// Number of events processed before stopping.
    pub processed: usize,
}

/// Consumer loop for one endpoint.
///
/// A listener waits on its [`EndpointReceiver`], processes each event as it
/// arrives and goes back to waiting. By default processing prints one line
/// to stdout; [`on_event`](Self::on_event) replaces that with a callback.
///
/// The loop ends when its [`CancellationToken`] is cancelled, or when every
/// sending half of the endpoint has been dropped.
///
/// # Examples
///
/// ```
/// use event_emitter::event::{endpoint, Event, EventEmitter};
/// use event_emitter::listener::Listener;
/// use tokio_util::sync::CancellationToken;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let emitter = EventEmitter::new();
/// let (tx, rx) = endpoint();
/// emitter.add_listener("event_type_1", tx);
///
/// let token = CancellationToken::new();
/// let handle = Listener::new("Listener 1", rx).spawn(token.clone());
///
/// emitter.emit(Event::new("event_type_1"));
/// # tokio::task::yield_now().await;
/// # tokio::task::yield_now().await;
///
/// token.cancel();
/// let report = handle.await.unwrap();
/// assert_eq!(report.name, "Listener 1");
/// # }
/// ```
pub struct Listener {
    name: String,
    receiver: EndpointReceiver,
    handler: EventCallback,
}

impl Listener {
    /// Creates a listener that prints received events as text.
    #[must_use]
    pub fn new(name: impl Into<String>, receiver: EndpointReceiver) -> Self {
        Self {
            name: name.into(),
            receiver,
            handler: printer(OutputFormat::Text),
        }
    }

    /// Prints received events in the given format.
    #[must_use]
    pub fn with_output(mut self, format: OutputFormat) -> Self {
        self.handler = printer(format);
        self
    }

    /// Processes received events with `callback` instead of printing them.
    ///
    /// The callback receives the listener name and the event.
    #[must_use]
    pub fn on_event<F>(mut self, callback: F) -> Self
    where
        F: Fn(&str, &Event) + Send + Sync + 'static,
    {
        self.handler = Arc::new(callback);
        self
    }

    /// Returns the listener name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Drains the endpoint until cancelled or disconnected.
    pub async fn run(mut self, token: CancellationToken) -> ListenerReport {
        let endpoint = self.receiver.id();
        let mut processed = 0;
        tracing::debug!(listener = %self.name, endpoint = %endpoint, "Listener started");

        loop {
            tokio::select! {
                biased;

                () = token.cancelled() => {
                    tracing::debug!(listener = %self.name, "Listener cancelled");
                    break;
                }
                received = self.receiver.recv() => {
                    let Some(event) = received else {
                        tracing::debug!(listener = %self.name, "Endpoint closed, listener stopping");
                        break;
                    };
                    tracing::trace!(listener = %self.name, event = %event.name(), "Processing event");
                    (self.handler)(&self.name, &event);
                    processed += 1;
                }
            }
        }

        ListenerReport {
            name: self.name,
            processed,
        }
    }

    /// Runs the listener as a tokio task.
    pub fn spawn(self, token: CancellationToken) -> JoinHandle<ListenerReport> {
        tokio::spawn(self.run(token))
    }
}

fn printer(format: OutputFormat) -> EventCallback {
    Arc::new(move |name, event| println!("{}", format.render(name, event)))
}

impl fmt::Debug for Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listener")
            .field("name", &self.name)
            .field("endpoint", &self.receiver.id())
            .finish_non_exhaustive()
    }
}
