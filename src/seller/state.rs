use crate::model::SellerProfile;
use crate::mvi::FeatureState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SellerProfileState {
    /// Absent until the first successful fetch; kept stale on later failures.
    pub profile: Option<SellerProfile>,
    pub loading: bool,
    pub error_message: Option<String>,
}

impl FeatureState for SellerProfileState {}
