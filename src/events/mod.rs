//! Event browse feature module.
//!
//! Loads the list of events shown on the marketplace home screen.

mod intent;
mod reducer;
mod state;

pub use intent::EventBrowseIntent;
pub use reducer::EventBrowseReducer;
pub use state::EventBrowseState;
