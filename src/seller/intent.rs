use crate::error::ServiceError;
use crate::model::{SellerId, SellerProfile};
use crate::mvi::Intent;

#[derive(Debug)]
pub enum SellerProfileIntent {
    /// Fetch the profile, serving from the cache when fresh.
    /// Ignored while a load is already in flight.
    Load(SellerId),
    /// Fetch the profile from the service, dropping any cached copy first.
    Refresh(SellerId),
    LoadFinished(Result<SellerProfile, ServiceError>),
}

impl Intent for SellerProfileIntent {}
