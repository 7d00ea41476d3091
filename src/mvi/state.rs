//! Base trait for feature state in the MVI architecture.

use std::fmt;

/// Marker trait for feature state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data needed to render the feature)
/// - Comparable (PartialEq for detecting changes)
///
/// `Sync` is required because snapshots are published through a watch
/// channel shared across tasks.
pub trait FeatureState:
    fmt::Debug + Clone + PartialEq + Default + Send + Sync + 'static
{
}
