//! boxoffice: unidirectional state core for an event-ticketing marketplace.
//!
//! Every screen of the marketplace (browse events, ticket detail, seller
//! profile) is a feature state machine: an immutable state snapshot, a
//! closed set of intents, and a pure reducer returning the next state
//! plus deferred async effects. A [`store::Store`] drives each machine on
//! the tokio runtime, applying intents strictly in order. Seller profiles
//! additionally flow through a shared [`cache::ExpiringCache`] so repeat
//! visits within the TTL skip the network.
//!
//! ```text
//! UI event ──→ Intent ──→ Store ──→ Reducer ──→ (State, Effect)
//!                           ↑                        │
//!                           └── result intent ←── async effect
//!                                                (service / cache)
//! ```
//!
//! Collaborators (fetch/write services, the cache, the clock) are
//! injected through constructors; nothing is resolved through globals.

pub mod cache;
pub mod error;
pub mod events;
pub mod model;
pub mod mvi;
pub mod seller;
pub mod service;
pub mod store;
pub mod ticket;

pub use error::ServiceError;
pub use store::Store;
