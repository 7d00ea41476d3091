use crate::error::ServiceError;
use crate::model::{Ticket, TicketId};
use crate::mvi::Intent;

#[derive(Debug)]
pub enum TicketDetailIntent {
    /// Fetch the ticket. Ignored while a load is already in flight.
    Load(TicketId),
    LoadFinished(Result<Ticket, ServiceError>),
    /// Purchase the loaded ticket. Ignored unless purchasable.
    Purchase,
    PurchaseFinished(Result<Ticket, ServiceError>),
}

impl Intent for TicketDetailIntent {}
