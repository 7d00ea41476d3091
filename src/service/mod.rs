//! Collaborator interfaces consumed by effects.
//!
//! Each trait is the async boundary between a feature state machine and
//! the outside world. Implementations are injected as `Arc<dyn ..>` at
//! construction, never looked up through globals.

mod fixtures;

use async_trait::async_trait;

use crate::error::ServiceError;
use crate::model::{EventSummary, SellerId, SellerProfile, Ticket, TicketId};

pub use fixtures::FixtureCatalog;

/// Lists events for the browse screen.
#[async_trait]
pub trait EventService: Send + Sync {
    async fn list_events(&self) -> Result<Vec<EventSummary>, ServiceError>;
}

/// Fetches and purchases individual tickets.
#[async_trait]
pub trait TicketService: Send + Sync {
    async fn fetch_ticket(&self, id: &TicketId) -> Result<Ticket, ServiceError>;

    /// Purchase a listed ticket, returning the updated entity.
    async fn purchase_ticket(&self, id: &TicketId) -> Result<Ticket, ServiceError>;
}

/// Fetches a seller plus their listed tickets.
#[async_trait]
pub trait SellerService: Send + Sync {
    async fn fetch_profile(&self, id: &SellerId) -> Result<SellerProfile, ServiceError>;
}
