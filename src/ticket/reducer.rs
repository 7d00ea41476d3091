use std::sync::Arc;

use crate::mvi::{Effect, Reducer};
use crate::service::TicketService;

use super::intent::TicketDetailIntent;
use super::state::TicketDetailState;

/// Reducer for the ticket detail screen.
pub struct TicketDetailReducer {
    service: Arc<dyn TicketService>,
}

impl TicketDetailReducer {
    pub fn new(service: Arc<dyn TicketService>) -> Self {
        Self { service }
    }
}

impl Reducer for TicketDetailReducer {
    type State = TicketDetailState;
    type Intent = TicketDetailIntent;

    fn reduce(
        &self,
        state: Self::State,
        intent: Self::Intent,
    ) -> (Self::State, Effect<Self::Intent>) {
        match intent {
            TicketDetailIntent::Load(id) => {
                if state.loading {
                    return (state, Effect::none());
                }
                let service = Arc::clone(&self.service);
                let next = TicketDetailState {
                    loading: true,
                    error_message: None,
                    ..state
                };
                (
                    next,
                    Effect::task(async move {
                        TicketDetailIntent::LoadFinished(service.fetch_ticket(&id).await)
                    }),
                )
            }

            TicketDetailIntent::LoadFinished(Ok(ticket)) => (
                TicketDetailState {
                    ticket: Some(ticket),
                    loading: false,
                    error_message: None,
                    ..state
                },
                Effect::none(),
            ),

            // Keep the stale ticket so the screen stays usable.
            TicketDetailIntent::LoadFinished(Err(err)) => (
                TicketDetailState {
                    loading: false,
                    error_message: Some(err.message),
                    ..state
                },
                Effect::none(),
            ),

            TicketDetailIntent::Purchase => {
                if !state.can_purchase() {
                    return (state, Effect::none());
                }
                let Some(id) = state.ticket.as_ref().map(|t| t.id.clone()) else {
                    return (state, Effect::none());
                };
                let service = Arc::clone(&self.service);
                let next = TicketDetailState {
                    purchasing: true,
                    error_message: None,
                    ..state
                };
                (
                    next,
                    Effect::task(async move {
                        TicketDetailIntent::PurchaseFinished(
                            service.purchase_ticket(&id).await,
                        )
                    }),
                )
            }

            TicketDetailIntent::PurchaseFinished(Ok(ticket)) => (
                TicketDetailState {
                    ticket: Some(ticket),
                    purchasing: false,
                    error_message: None,
                    ..state
                },
                Effect::none(),
            ),

            TicketDetailIntent::PurchaseFinished(Err(err)) => (
                TicketDetailState {
                    purchasing: false,
                    error_message: Some(err.message),
                    ..state
                },
                Effect::none(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServiceError;
    use crate::model::{EventId, SellerId, Ticket, TicketId, TicketStatus};
    use async_trait::async_trait;

    struct NeverService;

    #[async_trait]
    impl TicketService for NeverService {
        async fn fetch_ticket(&self, _id: &TicketId) -> Result<Ticket, ServiceError> {
            Err(ServiceError::internal("unreachable in reducer tests"))
        }

        async fn purchase_ticket(&self, _id: &TicketId) -> Result<Ticket, ServiceError> {
            Err(ServiceError::internal("unreachable in reducer tests"))
        }
    }

    fn reducer() -> TicketDetailReducer {
        TicketDetailReducer::new(Arc::new(NeverService))
    }

    fn listed_ticket() -> Ticket {
        Ticket {
            id: TicketId::new("t-42"),
            event: EventId::new("e-1"),
            event_name: "Concert".to_string(),
            seller: SellerId::new("s-1"),
            price_cents: 4500,
            status: TicketStatus::Listed,
            order_id: None,
        }
    }

    fn loaded_state() -> TicketDetailState {
        TicketDetailState {
            ticket: Some(listed_ticket()),
            ..Default::default()
        }
    }

    #[test]
    fn load_sets_loading_and_clears_error() {
        let state = TicketDetailState {
            error_message: Some("boom".to_string()),
            ..Default::default()
        };
        let (state, effect) =
            reducer().reduce(state, TicketDetailIntent::Load(TicketId::new("t-42")));
        assert!(state.loading);
        assert_eq!(state.error_message, None);
        assert!(!effect.is_none());
    }

    #[test]
    fn load_while_loading_spawns_no_second_fetch() {
        let state = TicketDetailState {
            loading: true,
            ..Default::default()
        };
        let (state, effect) =
            reducer().reduce(state, TicketDetailIntent::Load(TicketId::new("t-42")));
        assert!(state.loading);
        assert_eq!(state.error_message, None);
        assert!(effect.is_none());
    }

    #[test]
    fn load_success_stores_ticket() {
        let state = TicketDetailState {
            loading: true,
            ..Default::default()
        };
        let (state, _) =
            reducer().reduce(state, TicketDetailIntent::LoadFinished(Ok(listed_ticket())));
        assert!(!state.loading);
        assert_eq!(state.ticket, Some(listed_ticket()));
        assert_eq!(state.error_message, None);
    }

    #[test]
    fn load_failure_keeps_stale_ticket() {
        let state = TicketDetailState {
            ticket: Some(listed_ticket()),
            loading: true,
            ..Default::default()
        };
        let (state, _) = reducer().reduce(
            state,
            TicketDetailIntent::LoadFinished(Err(ServiceError::timeout())),
        );
        assert!(!state.loading);
        assert_eq!(state.ticket, Some(listed_ticket()));
        assert_eq!(state.error_message.as_deref(), Some("timeout"));
    }

    #[test]
    fn first_load_failure_has_no_ticket() {
        let state = TicketDetailState {
            loading: true,
            ..Default::default()
        };
        let (state, _) = reducer().reduce(
            state,
            TicketDetailIntent::LoadFinished(Err(ServiceError::not_found("ticket t-42"))),
        );
        assert_eq!(state.ticket, None);
        assert_eq!(state.error_message.as_deref(), Some("ticket t-42 not found"));
    }

    #[test]
    fn purchase_sets_purchasing_flag_not_loading() {
        let (state, effect) = reducer().reduce(loaded_state(), TicketDetailIntent::Purchase);
        assert!(state.purchasing);
        assert!(!state.loading);
        assert!(!effect.is_none());
    }

    #[test]
    fn purchase_without_ticket_is_ignored() {
        let (state, effect) =
            reducer().reduce(TicketDetailState::default(), TicketDetailIntent::Purchase);
        assert!(!state.purchasing);
        assert!(effect.is_none());
    }

    #[test]
    fn purchase_while_purchasing_is_ignored() {
        let state = TicketDetailState {
            purchasing: true,
            ..loaded_state()
        };
        let (state, effect) = reducer().reduce(state, TicketDetailIntent::Purchase);
        assert!(state.purchasing);
        assert!(effect.is_none());
    }

    #[test]
    fn purchase_of_sold_ticket_is_ignored() {
        let mut sold = listed_ticket();
        sold.status = TicketStatus::Sold;
        let state = TicketDetailState {
            ticket: Some(sold),
            ..Default::default()
        };
        let (state, effect) = reducer().reduce(state, TicketDetailIntent::Purchase);
        assert!(!state.purchasing);
        assert!(effect.is_none());
    }

    #[test]
    fn purchase_success_replaces_ticket() {
        let mut updated = listed_ticket();
        updated.status = TicketStatus::Sold;
        updated.order_id = Some("order-1".to_string());

        let state = TicketDetailState {
            purchasing: true,
            ..loaded_state()
        };
        let (state, _) = reducer().reduce(
            state,
            TicketDetailIntent::PurchaseFinished(Ok(updated.clone())),
        );
        assert!(!state.purchasing);
        assert_eq!(state.ticket, Some(updated));
    }

    #[test]
    fn purchase_failure_keeps_ticket_and_records_error() {
        let state = TicketDetailState {
            purchasing: true,
            ..loaded_state()
        };
        let (state, _) = reducer().reduce(
            state,
            TicketDetailIntent::PurchaseFinished(Err(ServiceError::conflict(
                "ticket t-42 already sold",
            ))),
        );
        assert!(!state.purchasing);
        assert_eq!(state.ticket, Some(listed_ticket()));
        assert_eq!(
            state.error_message.as_deref(),
            Some("ticket t-42 already sold")
        );
    }

    #[test]
    fn reduce_is_deterministic() {
        let intent = |r: Result<Ticket, ServiceError>| TicketDetailIntent::LoadFinished(r);
        let (a, _) = reducer().reduce(loaded_state(), intent(Ok(listed_ticket())));
        let (b, _) = reducer().reduce(loaded_state(), intent(Ok(listed_ticket())));
        assert_eq!(a, b);
    }
}
