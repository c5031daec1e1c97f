//! Integration tests for the generic store: commit/no-op semantics,
//! snapshot immutability, and the subscriber delivery contract.

#![allow(clippy::panic)] // test assertions may panic

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use todoflow_core::reducer::{Reducer, Transition};
use todoflow_runtime::{Store, Subscription};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct LampState {
    on: bool,
}

#[derive(Clone, Debug)]
enum LampCommand {
    /// Set the lamp to an explicit level; a no-op when already there.
    Set(bool),
    /// Invert the lamp; always commits.
    Flip,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum LampEvent {
    Switched { on: bool },
}

struct LampEnvironment;

struct LampReducer;

impl Reducer for LampReducer {
    type State = LampState;
    type Command = LampCommand;
    type Event = LampEvent;
    type Environment = LampEnvironment;

    fn reduce(
        &self,
        state: &LampState,
        command: LampCommand,
        _env: &LampEnvironment,
    ) -> Option<Transition<LampState, LampEvent>> {
        let on = match command {
            LampCommand::Set(on) => {
                if state.on == on {
                    return None;
                }
                on
            }
            LampCommand::Flip => !state.on,
        };
        Some(Transition::new(LampState { on }, LampEvent::Switched { on }))
    }
}

fn lamp_store() -> Store<LampReducer> {
    Store::new(LampState::default(), LampReducer, LampEnvironment)
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[tokio::test]
async fn send_commits_state_and_returns_the_delivered_event() {
    let store = lamp_store();
    let seen = Arc::new(Mutex::new(Vec::new()));

    let sink = Arc::clone(&seen);
    let _subscription = store.subscribe(move |event: &LampEvent| {
        lock(&sink).push(event.clone());
    });

    let event = store.send(LampCommand::Set(true)).await;

    assert_eq!(event, Some(LampEvent::Switched { on: true }));
    assert!(store.state(|s| s.on).await);
    assert_eq!(*lock(&seen), vec![LampEvent::Switched { on: true }]);
}

#[tokio::test]
async fn noop_commands_change_nothing_and_stay_silent() {
    let store = lamp_store();
    let hits = Arc::new(AtomicUsize::new(0));

    let counter = Arc::clone(&hits);
    let _subscription = store.subscribe(move |_event: &LampEvent| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    let before = store.snapshot().await;
    let event = store.send(LampCommand::Set(false)).await;
    let after = store.snapshot().await;

    assert!(event.is_none());
    assert_eq!(hits.load(Ordering::SeqCst), 0);
    // Referentially unchanged: the very same state value, not an equal copy.
    assert!(Arc::ptr_eq(&before, &after));
}

#[tokio::test]
async fn snapshots_are_immutable_across_later_mutations() {
    let store = lamp_store();
    let before = store.snapshot().await;

    let _ = store.send(LampCommand::Flip).await;

    assert!(!before.on);
    assert!(store.snapshot().await.on);
}

#[tokio::test]
async fn delivery_follows_registration_order() {
    let store = lamp_store();
    let order = Arc::new(Mutex::new(Vec::new()));

    for tag in ["first", "second", "third"] {
        let order = Arc::clone(&order);
        let _subscription = store.subscribe(move |_event: &LampEvent| {
            lock(&order).push(tag);
        });
    }

    let _ = store.send(LampCommand::Flip).await;
    assert_eq!(*lock(&order), vec!["first", "second", "third"]);
}

#[tokio::test]
async fn unsubscribing_stops_only_that_registration() {
    let store = lamp_store();
    let first_hits = Arc::new(AtomicUsize::new(0));
    let second_hits = Arc::new(AtomicUsize::new(0));

    let counter = Arc::clone(&first_hits);
    let first = store.subscribe(move |_event: &LampEvent| {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    let counter = Arc::clone(&second_hits);
    let _second = store.subscribe(move |_event: &LampEvent| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    let _ = store.send(LampCommand::Flip).await;
    first.unsubscribe();
    first.unsubscribe(); // duplicate unsubscribe is a safe no-op
    let _ = store.send(LampCommand::Flip).await;

    assert_eq!(first_hits.load(Ordering::SeqCst), 1);
    assert_eq!(second_hits.load(Ordering::SeqCst), 2);
    assert_eq!(store.subscriber_count(), 1);
}

#[tokio::test]
async fn unsubscribing_during_delivery_never_skips_remaining_subscribers() {
    let store = lamp_store();
    let later_hits = Arc::new(AtomicUsize::new(0));
    let victim: Arc<Mutex<Option<Subscription<LampEvent>>>> = Arc::new(Mutex::new(None));

    // First subscriber removes the later one mid-delivery.
    let target = Arc::clone(&victim);
    let _saboteur = store.subscribe(move |_event: &LampEvent| {
        if let Some(subscription) = lock(&target).take() {
            subscription.unsubscribe();
        }
    });

    let counter = Arc::clone(&later_hits);
    let subscription = store.subscribe(move |_event: &LampEvent| {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    *lock(&victim) = Some(subscription);

    // The pass that removes the victim must still deliver to it.
    let _ = store.send(LampCommand::Flip).await;
    assert_eq!(later_hits.load(Ordering::SeqCst), 1);

    // Subsequent passes no longer include it.
    let _ = store.send(LampCommand::Flip).await;
    assert_eq!(later_hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn concurrent_sends_serialize_to_one_event_per_mutation() {
    let store = lamp_store();
    let hits = Arc::new(AtomicUsize::new(0));

    let counter = Arc::clone(&hits);
    let _subscription = store.subscribe(move |_event: &LampEvent| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    let handles: Vec<_> = (0..10)
        .map(|_| {
            let store = store.clone();
            tokio::spawn(async move {
                let _ = store.send(LampCommand::Flip).await;
            })
        })
        .collect();

    for handle in handles {
        if let Err(e) = handle.await {
            panic!("concurrent send task panicked: {e}");
        }
    }

    assert_eq!(hits.load(Ordering::SeqCst), 10);
    // An even number of flips lands back on the initial level.
    assert!(!store.state(|s| s.on).await);
}
