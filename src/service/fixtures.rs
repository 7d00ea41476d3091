//! In-memory catalog seeded from JSON fixtures.
//!
//! Stands in for the real marketplace backend in tests and demos. Latency
//! is simulated with a tokio sleep so callers observe a real suspension
//! point, and single failures can be scripted for error-path coverage.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde::Deserialize;
use uuid::Uuid;

use crate::error::ServiceError;
use crate::model::{
    EventSummary, SellerId, SellerProfile, Ticket, TicketId, TicketStatus,
};

use super::{EventService, SellerService, TicketService};

/// Seed document shape. Sellers carry no ticket list of their own; a
/// profile is assembled from the tickets that reference the seller.
#[derive(Debug, Deserialize)]
struct FixtureDoc {
    #[serde(default)]
    events: Vec<EventSummary>,
    #[serde(default)]
    tickets: Vec<Ticket>,
    #[serde(default)]
    sellers: Vec<SellerSeed>,
}

#[derive(Debug, Deserialize)]
struct SellerSeed {
    id: SellerId,
    name: String,
    rating: f32,
}

/// Fixture-backed implementation of every collaborator trait.
#[derive(Debug)]
pub struct FixtureCatalog {
    latency: Duration,
    data: Mutex<FixtureDoc>,
    fail_next: Mutex<Option<ServiceError>>,
}

impl FixtureCatalog {
    /// Parse a seed document from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ServiceError> {
        let data: FixtureDoc = serde_json::from_str(json)?;
        Ok(Self {
            latency: Duration::ZERO,
            data: Mutex::new(data),
            fail_next: Mutex::new(None),
        })
    }

    /// Load a seed document from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self, ServiceError> {
        let json = std::fs::read_to_string(path)
            .map_err(|err| ServiceError::internal(format!("reading fixtures: {err}")))?;
        Self::from_json(&json)
    }

    /// Add artificial latency before every operation completes.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Make the next operation fail with `err` instead of answering.
    pub fn fail_next(&self, err: ServiceError) {
        *self.fail_next.lock() = Some(err);
    }

    async fn simulate_io(&self) -> Result<(), ServiceError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        match self.fail_next.lock().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl EventService for FixtureCatalog {
    async fn list_events(&self) -> Result<Vec<EventSummary>, ServiceError> {
        self.simulate_io().await?;
        Ok(self.data.lock().events.clone())
    }
}

#[async_trait]
impl TicketService for FixtureCatalog {
    async fn fetch_ticket(&self, id: &TicketId) -> Result<Ticket, ServiceError> {
        self.simulate_io().await?;
        let data = self.data.lock();
        data.tickets
            .iter()
            .find(|ticket| &ticket.id == id)
            .cloned()
            .ok_or_else(|| ServiceError::not_found(format!("ticket {id}")))
    }

    async fn purchase_ticket(&self, id: &TicketId) -> Result<Ticket, ServiceError> {
        self.simulate_io().await?;
        let mut data = self.data.lock();
        let ticket = data
            .tickets
            .iter_mut()
            .find(|ticket| &ticket.id == id)
            .ok_or_else(|| ServiceError::not_found(format!("ticket {id}")))?;
        if ticket.status == TicketStatus::Sold {
            return Err(ServiceError::conflict(format!("ticket {id} already sold")));
        }
        ticket.status = TicketStatus::Sold;
        ticket.order_id = Some(Uuid::new_v4().to_string());
        Ok(ticket.clone())
    }
}

#[async_trait]
impl SellerService for FixtureCatalog {
    async fn fetch_profile(&self, id: &SellerId) -> Result<SellerProfile, ServiceError> {
        self.simulate_io().await?;
        let data = self.data.lock();
        let seed = data
            .sellers
            .iter()
            .find(|seller| &seller.id == id)
            .ok_or_else(|| ServiceError::not_found(format!("seller {id}")))?;
        let tickets = data
            .tickets
            .iter()
            .filter(|ticket| &ticket.seller == id)
            .cloned()
            .collect();
        Ok(SellerProfile {
            id: seed.id.clone(),
            name: seed.name.clone(),
            rating: seed.rating,
            tickets,
        })
    }
}
