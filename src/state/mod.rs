//! State - GPUI Entity State Modules
//!
//! Plain state structs. The app-wide ones live in GPUI entities; the sidebar
//! keeps `NavigationState` inline.

pub mod config_state;
pub mod i18n_state;
pub mod nav_state;
pub mod route_state;
pub mod session_state;
