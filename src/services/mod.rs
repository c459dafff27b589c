//! Service Layer
//!
//! Backend access and the async flows built on it. Nothing here renders UI.

pub mod auth_api;
pub mod logout;
pub mod runtime;

pub use auth_api::{AuthApi, AuthService, HttpAuthApi};
pub use logout::{LogoutOutcome, settle_logout, request_logout};
