//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides the base traits for implementing unidirectional
//! data flow in feature modules.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ (State, Effect) ──→ View
//!    ↑                        │
//!    └────── Effect ──────────┘
//! ```
//!
//! - **State**: Immutable snapshot of one feature's data
//! - **Intent**: User actions or collaborator results
//! - **Reducer**: Pure function that transforms state based on intents
//! - **Effect**: Deferred async work that resolves into further intents

mod effect;
mod intent;
mod reducer;
mod state;

pub use effect::{Effect, EffectFuture};
pub use intent::Intent;
pub use reducer::Reducer;
pub use state::FeatureState;
