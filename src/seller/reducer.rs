use std::sync::Arc;

use crate::model::SellerId;
use crate::mvi::{Effect, Reducer};
use crate::service::SellerService;

use super::intent::SellerProfileIntent;
use super::state::SellerProfileState;
use super::SellerProfileCache;

/// Reducer for the seller profile screen.
///
/// Both collaborators are injected: the fetch service and the cache
/// shared with every other seller screen in the process.
pub struct SellerProfileReducer {
    service: Arc<dyn SellerService>,
    cache: Arc<SellerProfileCache>,
}

impl SellerProfileReducer {
    pub fn new(service: Arc<dyn SellerService>, cache: Arc<SellerProfileCache>) -> Self {
        Self { service, cache }
    }

    fn start_load(
        &self,
        state: SellerProfileState,
        id: SellerId,
        bypass_cache: bool,
    ) -> (SellerProfileState, Effect<SellerProfileIntent>) {
        if state.loading {
            return (state, Effect::none());
        }
        let service = Arc::clone(&self.service);
        let cache = Arc::clone(&self.cache);
        let next = SellerProfileState {
            loading: true,
            error_message: None,
            ..state
        };
        // Cache consultation happens inside the effect, never in reduce.
        let effect = Effect::task(async move {
            if bypass_cache {
                cache.invalidate(&id);
            } else if let Some(profile) = cache.get(&id) {
                tracing::debug!(seller = %id, "seller profile served from cache");
                return SellerProfileIntent::LoadFinished(Ok(profile));
            }
            let result = service.fetch_profile(&id).await;
            if let Ok(profile) = &result {
                cache.put(id, profile.clone());
            }
            SellerProfileIntent::LoadFinished(result)
        });
        (next, effect)
    }
}

impl Reducer for SellerProfileReducer {
    type State = SellerProfileState;
    type Intent = SellerProfileIntent;

    fn reduce(
        &self,
        state: Self::State,
        intent: Self::Intent,
    ) -> (Self::State, Effect<Self::Intent>) {
        match intent {
            SellerProfileIntent::Load(id) => self.start_load(state, id, false),
            SellerProfileIntent::Refresh(id) => self.start_load(state, id, true),

            SellerProfileIntent::LoadFinished(Ok(profile)) => (
                SellerProfileState {
                    profile: Some(profile),
                    loading: false,
                    error_message: None,
                },
                Effect::none(),
            ),

            // A failed refresh keeps the stale profile on screen.
            SellerProfileIntent::LoadFinished(Err(err)) => (
                SellerProfileState {
                    loading: false,
                    error_message: Some(err.message),
                    ..state
                },
                Effect::none(),
            ),
        }
    }
}
