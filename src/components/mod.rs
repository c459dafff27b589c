//! Components - Reusable UI Components
//!
//! UI building blocks. Only the sidebar touches application state.

pub mod composite;
pub mod layout;
pub mod primitives;
