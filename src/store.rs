//! Store: drives a reducer with an ordered intent queue and effect runner.
//!
//! Each store owns one feature's state. A driver task applies intents one
//! at a time, publishes every state snapshot through a watch channel, and
//! spawns [`Effect::Task`] futures on a `JoinSet`. Dropping the store
//! aborts the driver and with it every in-flight effect.

use std::collections::VecDeque;
use std::mem;

use tokio::sync::{mpsc, watch};
use tokio::task::{JoinHandle, JoinSet};

use crate::mvi::{Effect, Reducer};

/// Handle to a running feature state machine.
///
/// Cheap to interact with from any task: `dispatch` enqueues an intent,
/// `state`/`watch` observe snapshots. Must be created inside a tokio
/// runtime because the driver is a spawned task.
pub struct Store<R: Reducer> {
    intents: mpsc::UnboundedSender<R::Intent>,
    state_rx: watch::Receiver<R::State>,
    driver: JoinHandle<()>,
}

impl<R> Store<R>
where
    R: Reducer + Send + 'static,
{
    /// Spawn the driver task around `reducer`, starting from the default state.
    pub fn new(reducer: R) -> Self {
        let (intent_tx, intent_rx) = mpsc::unbounded_channel::<R::Intent>();
        let (state_tx, state_rx) = watch::channel(R::State::default());

        let driver = tokio::spawn(drive(reducer, intent_rx, state_tx));

        Self {
            intents: intent_tx,
            state_rx,
            driver,
        }
    }

    /// Enqueue an intent. Intents are applied in the order dispatched.
    pub fn dispatch(&self, intent: R::Intent) {
        if self.intents.send(intent).is_err() {
            tracing::warn!("store: intent dropped (driver gone)");
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> R::State {
        self.state_rx.borrow().clone()
    }

    /// Watch channel receiving every published state snapshot.
    pub fn watch(&self) -> watch::Receiver<R::State> {
        self.state_rx.clone()
    }
}

impl<R: Reducer> Drop for Store<R> {
    fn drop(&mut self) {
        // Aborting the driver drops its JoinSet, which aborts every
        // in-flight effect task.
        self.driver.abort();
    }
}

/// Driver loop: one intent at a time, effects on a JoinSet.
async fn drive<R>(
    reducer: R,
    mut intents: mpsc::UnboundedReceiver<R::Intent>,
    state_tx: watch::Sender<R::State>,
) where
    R: Reducer,
{
    let mut state = R::State::default();
    let mut effects: JoinSet<R::Intent> = JoinSet::new();

    loop {
        let intent = tokio::select! {
            received = intents.recv() => match received {
                Some(intent) => intent,
                None => break,
            },
            Some(finished) = effects.join_next(), if !effects.is_empty() => {
                match finished {
                    Ok(intent) => intent,
                    Err(err) => {
                        if err.is_panic() {
                            tracing::error!("store: effect task panicked: {err}");
                        }
                        continue;
                    }
                }
            }
        };

        // Effect::Send intents are applied before the next queued intent.
        let mut pending = VecDeque::from([intent]);
        while let Some(next) = pending.pop_front() {
            tracing::trace!(intent = ?next, "store: applying intent");
            let (new_state, effect) = reducer.reduce(mem::take(&mut state), next);
            state = new_state;
            state_tx.send_replace(state.clone());

            match effect {
                Effect::None => {}
                Effect::Send(intent) => pending.push_back(intent),
                Effect::Task(future) => {
                    tracing::debug!("store: spawning effect task");
                    effects.spawn(future);
                }
            }
        }
    }
}
