//! Domain - Data Types
//!
//! Plain data structures shared across layers.

pub mod config;
pub mod identity;
