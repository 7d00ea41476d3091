//! Shared test utilities and stub collaborators.

#![allow(dead_code, unused_imports)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use boxoffice::error::ServiceError;
use boxoffice::model::{
    EventId, SellerId, SellerProfile, Ticket, TicketId, TicketStatus,
};
use boxoffice::service::{SellerService, TicketService};

/// Seed document used by fixture-backed tests.
pub const FIXTURE_JSON: &str = r#"{
    "events": [
        {"id": "e-1", "name": "Concert", "venue": "Riverside Arena",
         "starts_at": "2026-09-12T20:00:00Z"},
        {"id": "e-2", "name": "Late Night Comedy", "venue": "The Cellar",
         "starts_at": "2026-10-01T22:30:00Z"}
    ],
    "tickets": [
        {"id": "42", "event": "e-1", "event_name": "Concert", "seller": "s-1",
         "price_cents": 4500, "status": "listed"},
        {"id": "43", "event": "e-1", "event_name": "Concert", "seller": "s-1",
         "price_cents": 5200, "status": "sold"},
        {"id": "44", "event": "e-2", "event_name": "Late Night Comedy",
         "seller": "s-2", "price_cents": 1800, "status": "listed"}
    ],
    "sellers": [
        {"id": "s-1", "name": "Ada", "rating": 4.8},
        {"id": "s-2", "name": "Grace", "rating": 4.3}
    ]
}"#;

pub fn init_tracing() {
    use std::sync::Once;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub fn concert_ticket() -> Ticket {
    Ticket {
        id: TicketId::new("42"),
        event: EventId::new("e-1"),
        event_name: "Concert".to_string(),
        seller: SellerId::new("s-1"),
        price_cents: 4500,
        status: TicketStatus::Listed,
        order_id: None,
    }
}

pub fn ada_profile() -> SellerProfile {
    SellerProfile {
        id: SellerId::new("s-1"),
        name: "Ada".to_string(),
        rating: 4.8,
        tickets: vec![concert_ticket()],
    }
}

/// Ticket service answering with a canned result after a delay, counting
/// how many fetches actually reached it.
pub struct ScriptedTicketService {
    response: Result<Ticket, ServiceError>,
    delay: Duration,
    fetches: AtomicUsize,
}

impl ScriptedTicketService {
    pub fn ok_after(ticket: Ticket, delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            response: Ok(ticket),
            delay,
            fetches: AtomicUsize::new(0),
        })
    }

    pub fn failing(err: ServiceError, delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            response: Err(err),
            delay,
            fetches: AtomicUsize::new(0),
        })
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TicketService for ScriptedTicketService {
    async fn fetch_ticket(&self, _id: &TicketId) -> Result<Ticket, ServiceError> {
        tokio::time::sleep(self.delay).await;
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.response.clone()
    }

    async fn purchase_ticket(&self, _id: &TicketId) -> Result<Ticket, ServiceError> {
        tokio::time::sleep(self.delay).await;
        self.response.clone()
    }
}

/// Seller service counting how many fetches reached it.
pub struct CountingSellerService {
    profile: SellerProfile,
    fetches: AtomicUsize,
}

impl CountingSellerService {
    pub fn new(profile: SellerProfile) -> Arc<Self> {
        Arc::new(Self {
            profile,
            fetches: AtomicUsize::new(0),
        })
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SellerService for CountingSellerService {
    async fn fetch_profile(&self, _id: &SellerId) -> Result<SellerProfile, ServiceError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        // Wide enough for tests to observe the loading snapshot.
        tokio::time::sleep(Duration::from_millis(20)).await;
        Ok(self.profile.clone())
    }
}
