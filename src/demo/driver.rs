// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Demonstration run wiring an emitter to printing listeners.

use tokio_util::sync::CancellationToken;

use crate::error::Result;
use crate::event::{Event, EventEmitter, endpoint};
use crate::listener::{Listener, ListenerReport};

use super::DemoConfig;

/// Outcome of a demo run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoReport {
    /// Number of events emitted.
    pub events_emitted: usize,
    /// Number of delivery tasks dispatched across all emissions.
    pub deliveries_dispatched: usize,
    /// Delivery tasks still waiting on an endpoint when the run ended.
    pub undelivered: usize,
    /// Reports of the listeners, in event-name order.
    pub listeners: Vec<ListenerReport>,
}

impl DemoReport {
    /// Total number of events processed by all listeners.
    #[must_use]
    pub fn total_processed(&self) -> usize {
        self.listeners.iter().map(|l| l.processed).sum()
    }
}

/// Runs the demonstration described by `config`.
///
/// Creates one emitter and, for each configured event name, an endpoint
/// registered under that name and a printing listener (`Listener 1`,
/// `Listener 2`, ...) draining it. It then emits one event per name per
/// cycle, pausing `interval` after each cycle, waits `drain`, cancels the
/// listeners and collects their reports.
///
/// # Errors
///
/// Returns [`Error::Config`](crate::Error::Config) if the configuration is
/// invalid, or [`Error::ListenerTask`](crate::Error::ListenerTask) if a
/// listener task panicked.
pub async fn run_demo(config: &DemoConfig) -> Result<DemoReport> {
    config.validate()?;

    let emitter = EventEmitter::new();
    let token = CancellationToken::new();

    let mut handles = Vec::with_capacity(config.event_names.len());
    for (index, name) in config.event_names.iter().enumerate() {
        let (tx, rx) = endpoint();
        emitter.add_listener(name.as_str(), tx);

        let listener = Listener::new(format!("Listener {}", index + 1), rx).with_output(config.output);
        handles.push(listener.spawn(token.clone()));
    }

    tracing::info!(
        listeners = handles.len(),
        cycles = config.cycles,
        "Demo started"
    );

    let mut events_emitted = 0;
    let mut deliveries_dispatched = 0;
    for cycle in 1..=config.cycles {
        for name in &config.event_names {
            deliveries_dispatched += emitter.emit_counted(Event::new(name.as_str()));
            events_emitted += 1;
        }
        tracing::debug!(cycle, "Emission cycle complete");
        tokio::time::sleep(config.interval).await;
    }

    tracing::debug!(drain = ?config.drain, "Waiting for listeners to drain");
    tokio::time::sleep(config.drain).await;
    token.cancel();

    let mut listeners = Vec::with_capacity(handles.len());
    for handle in handles {
        listeners.push(handle.await?);
    }

    let undelivered = emitter.pending_deliveries();
    if undelivered > 0 {
        tracing::warn!(undelivered, "Demo finished with undelivered events");
    }
    tracing::info!(events_emitted, "Demo finished");

    Ok(DemoReport {
        events_emitted,
        deliveries_dispatched,
        undelivered,
        listeners,
    })
}
