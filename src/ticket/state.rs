use crate::model::Ticket;
use crate::mvi::FeatureState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TicketDetailState {
    /// Absent until the first successful fetch; kept stale on later failures.
    pub ticket: Option<Ticket>,
    pub loading: bool,
    /// Purchase in flight. Distinct from `loading`.
    pub purchasing: bool,
    pub error_message: Option<String>,
}

impl FeatureState for TicketDetailState {}

impl TicketDetailState {
    /// A purchase only makes sense with a loaded, still-listed ticket.
    pub fn can_purchase(&self) -> bool {
        !self.purchasing
            && self
                .ticket
                .as_ref()
                .is_some_and(|ticket| ticket.is_listed())
    }
}
