use std::sync::Arc;

use crate::mvi::{Effect, Reducer};
use crate::service::EventService;

use super::intent::EventBrowseIntent;
use super::state::EventBrowseState;

/// Reducer for the event browse screen.
pub struct EventBrowseReducer {
    service: Arc<dyn EventService>,
}

impl EventBrowseReducer {
    pub fn new(service: Arc<dyn EventService>) -> Self {
        Self { service }
    }
}

impl Reducer for EventBrowseReducer {
    type State = EventBrowseState;
    type Intent = EventBrowseIntent;

    fn reduce(
        &self,
        state: Self::State,
        intent: Self::Intent,
    ) -> (Self::State, Effect<Self::Intent>) {
        match intent {
            EventBrowseIntent::Load => {
                // At most one fetch in flight per instance.
                if state.loading {
                    return (state, Effect::none());
                }
                let service = Arc::clone(&self.service);
                let next = EventBrowseState {
                    loading: true,
                    error_message: None,
                    ..state
                };
                (
                    next,
                    Effect::task(async move {
                        EventBrowseIntent::LoadFinished(service.list_events().await)
                    }),
                )
            }

            EventBrowseIntent::LoadFinished(Ok(events)) => (
                EventBrowseState {
                    events,
                    loading: false,
                    error_message: None,
                },
                Effect::none(),
            ),

            // A failed refresh keeps whatever list we already had.
            EventBrowseIntent::LoadFinished(Err(err)) => (
                EventBrowseState {
                    loading: false,
                    error_message: Some(err.message),
                    ..state
                },
                Effect::none(),
            ),
        }
    }
}
