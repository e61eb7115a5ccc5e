//! State management module
//!
//! The countdown engine is stateless; this module holds the explicit
//! stopped/running/paused/expired state machine its callers drive.

pub mod session;
pub mod timer_state;

// Re-export main types
pub use session::CountdownSession;
pub use timer_state::{TimerState, TimerStatus};
