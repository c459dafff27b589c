//! Features - Vertical Feature Slices
//!
//! Each feature owns the page shown for its routes.

pub mod login;
pub mod section;
pub mod settings;
