//! Seller profile feature module.
//!
//! Loads a seller plus their listed tickets through a shared expiring
//! cache: a profile fetched within the last 30 minutes is served from the
//! cache without touching the service. The cache instance is shared by
//! every seller screen in the process.

mod intent;
mod reducer;
mod state;

use std::time::Duration;

use crate::cache::ExpiringCache;
use crate::model::{SellerId, SellerProfile};

pub use intent::SellerProfileIntent;
pub use reducer::SellerProfileReducer;
pub use state::SellerProfileState;

/// How long a fetched profile stays fresh.
pub const SELLER_PROFILE_TTL: Duration = Duration::from_secs(1800);

/// The cache shared across seller profile screens.
pub type SellerProfileCache = ExpiringCache<SellerId, SellerProfile>;
