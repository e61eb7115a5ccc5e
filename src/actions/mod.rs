//! Preset management actions
//!
//! Handlers run one [`PresetAction`](crate::config::PresetAction) against the
//! store and turn the outcome into a user-facing response.

pub mod handlers;
pub mod responses;

pub use handlers::handle_preset_action;
pub use responses::{ActionResponse, ActionStatus};
