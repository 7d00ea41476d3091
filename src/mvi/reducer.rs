//! Reducer trait for the MVI architecture.

use super::effect::Effect;
use super::intent::Intent;
use super::state::FeatureState;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen. It must
/// be a pure function of `(State, Intent)`: deterministic, non-blocking,
/// and free of side effects. Anything asynchronous is described by the
/// returned [`Effect`] and executed later by the store driver.
///
/// Reducers take `&self` so collaborators (fetch/write services, caches)
/// are injected through the constructor rather than looked up globally.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: FeatureState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state plus follow-up work.
    ///
    /// Failures never surface here: a collaborator error arrives later as
    /// a result-carrying intent and is folded into state.
    fn reduce(&self, state: Self::State, intent: Self::Intent)
        -> (Self::State, Effect<Self::Intent>);
}
