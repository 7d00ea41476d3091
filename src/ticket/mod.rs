//! Ticket detail feature module.
//!
//! Loads one ticket listing and drives the purchase flow:
//! `Idle → Loading → {Loaded, Failed}` and
//! `Loaded → Purchasing → {Loaded(updated), Failed}`. The machine is
//! long-lived; retry re-dispatches the original intent.

mod intent;
mod reducer;
mod state;

pub use intent::TicketDetailIntent;
pub use reducer::TicketDetailReducer;
pub use state::TicketDetailState;
