// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end tests wiring the emitter to running listeners.

use std::sync::Arc;
use std::time::Duration;

use event_emitter::{Event, EventEmitter, Listener, ListenerReport, endpoint};
use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

type Seen = Arc<Mutex<Vec<Event>>>;

/// Registers a collecting listener under `event_name` and starts it.
fn start_listener(
    emitter: &EventEmitter,
    event_name: &str,
    listener_name: &str,
    token: &CancellationToken,
) -> (JoinHandle<ListenerReport>, Seen) {
    let (tx, rx) = endpoint();
    emitter.add_listener(event_name, tx);

    let seen: Seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let handle = Listener::new(listener_name, rx)
        .on_event(move |_, event| sink.lock().push(event.clone()))
        .spawn(token.clone());
    (handle, seen)
}

/// Gives spawned tasks time to run; time is paused so this is instant.
async fn settle() {
    tokio::time::sleep(Duration::from_millis(100)).await;
}

fn sorted(mut events: Vec<Event>) -> Vec<Event> {
    events.sort_by(|a, b| (a.timestamp(), a.name()).cmp(&(b.timestamp(), b.name())));
    events
}

// ============================================================================
// Routing
// ============================================================================

mod routing {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn each_listener_gets_only_its_event() {
        let emitter = EventEmitter::new();
        let token = CancellationToken::new();
        let (a_handle, a_seen) = start_listener(&emitter, "event_type_1", "Listener 1", &token);
        let (b_handle, b_seen) = start_listener(&emitter, "event_type_2", "Listener 2", &token);

        emitter.emit(Event::new("event_type_1"));
        emitter.emit(Event::new("event_type_2"));
        settle().await;
        token.cancel();

        assert_eq!(a_handle.await.unwrap().processed, 1);
        assert_eq!(b_handle.await.unwrap().processed, 1);

        let a = a_seen.lock();
        let b = b_seen.lock();
        assert_eq!(a.len(), 1);
        assert_eq!(a[0].name(), "event_type_1");
        assert_eq!(b.len(), 1);
        assert_eq!(b[0].name(), "event_type_2");
    }

    #[tokio::test(start_paused = true)]
    async fn unknown_name_reaches_nobody() {
        let emitter = EventEmitter::new();
        let token = CancellationToken::new();
        let (handle, seen) = start_listener(&emitter, "event_type_1", "Listener 1", &token);

        assert_eq!(emitter.emit_counted(Event::new("event_type_3")), 0);
        settle().await;
        token.cancel();

        assert_eq!(handle.await.unwrap().processed, 0);
        assert!(seen.lock().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn every_subscriber_gets_identical_copy() {
        let emitter = EventEmitter::new();
        let token = CancellationToken::new();
        let listeners: Vec<_> = (1..=4)
            .map(|i| start_listener(&emitter, "event_type_1", &format!("Listener {i}"), &token))
            .collect();

        let event = Event::new("event_type_1");
        assert_eq!(emitter.emit_counted(event.clone()), 4);
        settle().await;
        token.cancel();

        for (handle, seen) in listeners {
            assert_eq!(handle.await.unwrap().processed, 1);
            assert_eq!(*seen.lock(), vec![event.clone()]);
        }
    }
}

// ============================================================================
// Delivery
// ============================================================================

mod delivery {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn sequential_emissions_arrive_as_multiset() {
        let emitter = EventEmitter::new();
        let token = CancellationToken::new();
        let (handle, seen) = start_listener(&emitter, "event_type_1", "Listener 1", &token);

        let mut emitted = Vec::new();
        for _ in 0..5 {
            let event = Event::new("event_type_1");
            emitter.emit(event.clone());
            emitted.push(event);
        }
        settle().await;
        token.cancel();

        assert_eq!(handle.await.unwrap().processed, 5);
        // Hand-offs run as independent tasks, so only the multiset is fixed
        assert_eq!(sorted(seen.lock().clone()), sorted(emitted));
        assert_eq!(emitter.pending_deliveries(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn listener_added_after_emit_misses_it() {
        let emitter = EventEmitter::new();
        let token = CancellationToken::new();
        let (first_handle, first_seen) =
            start_listener(&emitter, "event_type_1", "Listener 1", &token);

        let event = Event::new("event_type_1");
        assert_eq!(emitter.emit_counted(event.clone()), 1);

        let (late_handle, late_seen) = start_listener(&emitter, "event_type_1", "Listener 2", &token);
        settle().await;
        token.cancel();

        assert_eq!(first_handle.await.unwrap().processed, 1);
        assert_eq!(late_handle.await.unwrap().processed, 0);
        assert_eq!(*first_seen.lock(), vec![event]);
        assert!(late_seen.lock().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn later_emissions_reach_late_listener() {
        let emitter = EventEmitter::new();
        let token = CancellationToken::new();
        let (_first, _) = start_listener(&emitter, "event_type_1", "Listener 1", &token);

        emitter.emit(Event::new("event_type_1"));
        let (late_handle, late_seen) = start_listener(&emitter, "event_type_1", "Listener 2", &token);
        let second = Event::new("event_type_1");
        emitter.emit(second.clone());
        settle().await;
        token.cancel();

        assert_eq!(late_handle.await.unwrap().processed, 1);
        assert_eq!(*late_seen.lock(), vec![second]);
    }
}

// ============================================================================
// Stalled listeners
// ============================================================================

mod stalled {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn emit_returns_while_endpoint_is_never_drained() {
        let emitter = EventEmitter::new();
        let (tx, mut rx) = endpoint();
        emitter.add_listener("event_type_1", tx);

        let emitting = async {
            for _ in 0..10 {
                emitter.emit(Event::new("event_type_1"));
            }
        };
        tokio::time::timeout(Duration::from_millis(10), emitting)
            .await
            .expect("emit should not wait for the listener");

        settle().await;
        // One event occupies the slot; the rest are still being handed off
        assert_eq!(emitter.pending_deliveries(), 9);

        // Draining late lets every pending delivery complete
        let mut received = 0;
        while received < 10 {
            rx.recv().await.unwrap();
            received += 1;
        }
        settle().await;
        assert_eq!(emitter.pending_deliveries(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn stalled_listener_does_not_affect_others() {
        let emitter = EventEmitter::new();
        let token = CancellationToken::new();

        let (stalled_tx, _stalled_rx) = endpoint();
        emitter.add_listener("event_type_1", stalled_tx);
        let (handle, seen) = start_listener(&emitter, "event_type_1", "Listener 2", &token);

        for _ in 0..3 {
            emitter.emit(Event::new("event_type_1"));
        }
        settle().await;
        token.cancel();

        assert_eq!(handle.await.unwrap().processed, 3);
        assert_eq!(seen.lock().len(), 3);
        assert_eq!(emitter.pending_deliveries(), 2);
    }
}

// ============================================================================
// Shared emitter
// ============================================================================

mod shared {
    use super::*;

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_registration_and_emission() {
        let emitter = Arc::new(EventEmitter::new());
        let token = CancellationToken::new();
        let (handle, seen) = start_listener(&emitter, "event_type_1", "Listener 1", &token);

        let mut tasks = Vec::new();
        for _ in 0..8 {
            let emitter = Arc::clone(&emitter);
            tasks.push(tokio::spawn(async move {
                let (tx, _rx) = endpoint();
                emitter.add_listener("unrelated", tx);
                emitter.emit(Event::new("event_type_1"));
            }));
        }
        for task in tasks {
            task.await.unwrap();
        }

        while seen.lock().len() < 8 {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        token.cancel();

        assert_eq!(handle.await.unwrap().processed, 8);
        assert_eq!(emitter.listener_count("unrelated"), 8);
    }
}
