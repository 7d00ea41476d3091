//! Base trait for intents (user/system actions) in the MVI architecture.

use std::fmt;

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (tap "buy", pull to refresh)
/// - Collaborator results (fetch completed, purchase failed)
///
/// Intents are closed enums processed by reducers to produce new states.
pub trait Intent: fmt::Debug + Send + 'static {}
