//! Effects: side effects declared by a reducer.
//!
//! Effects are returned from `reduce` and executed by the store driver.
//! This keeps the reducer pure while making async operations explicit:
//! all I/O lives inside an effect, never inside `reduce`.

use std::fmt;
use std::future::Future;
use std::pin::Pin;

/// Boxed future produced by [`Effect::task`].
pub type EffectFuture<I> = Pin<Box<dyn Future<Output = I> + Send + 'static>>;

/// Deferred work scheduled by a reducer, resolving into a follow-up intent.
pub enum Effect<I> {
    /// No follow-up work.
    None,
    /// Dispatch one intent immediately, before the next queued intent.
    Send(I),
    /// Run async work on the store's task set; its outcome is dispatched
    /// back as an intent. Abandoned if the owning store is dropped.
    Task(EffectFuture<I>),
}

impl<I> Effect<I> {
    pub fn none() -> Self {
        Effect::None
    }

    pub fn send(intent: I) -> Self {
        Effect::Send(intent)
    }

    pub fn task<F>(future: F) -> Self
    where
        F: Future<Output = I> + Send + 'static,
    {
        Effect::Task(Box::pin(future))
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Effect::None)
    }
}

impl<I: fmt::Debug> fmt::Debug for Effect<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Effect::None => write!(f, "Effect::None"),
            Effect::Send(intent) => write!(f, "Effect::Send({intent:?})"),
            Effect::Task(_) => write!(f, "Effect::Task(..)"),
        }
    }
}
