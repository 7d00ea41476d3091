use crate::error::ServiceError;
use crate::model::EventSummary;
use crate::mvi::Intent;

#[derive(Debug)]
pub enum EventBrowseIntent {
    /// Fetch the event list. Ignored while a load is already in flight.
    Load,
    LoadFinished(Result<Vec<EventSummary>, ServiceError>),
}

impl Intent for EventBrowseIntent {}
