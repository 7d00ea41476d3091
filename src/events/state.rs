use crate::model::EventSummary;
use crate::mvi::FeatureState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EventBrowseState {
    pub events: Vec<EventSummary>,
    pub loading: bool,
    pub error_message: Option<String>,
}

impl FeatureState for EventBrowseState {}
