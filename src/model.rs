//! Domain entities for the ticketing marketplace.
//!
//! Plain serializable data; JSON is the seed format for the in-memory
//! fixture catalog.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! id_type {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }
    };
}

id_type!(
    /// Identifier of a listed event.
    EventId
);
id_type!(
    /// Identifier of a ticket listing.
    TicketId
);
id_type!(
    /// Identifier of a seller account.
    SellerId
);

/// One event as shown in the browse list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventSummary {
    pub id: EventId,
    pub name: String,
    pub venue: String,
    /// Opaque display timestamp from the seed data.
    pub starts_at: String,
}

/// Whether a ticket is still purchasable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    Listed,
    Sold,
}

/// One ticket listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: TicketId,
    pub event: EventId,
    pub event_name: String,
    pub seller: SellerId,
    pub price_cents: u64,
    pub status: TicketStatus,
    /// Order confirmation, present once the ticket has been purchased.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
}

impl Ticket {
    pub fn is_listed(&self) -> bool {
        self.status == TicketStatus::Listed
    }
}

/// A seller plus their currently listed tickets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerProfile {
    pub id: SellerId,
    pub name: String,
    pub rating: f32,
    pub tickets: Vec<Ticket>,
}
