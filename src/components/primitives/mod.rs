//! Primitive Components
//!
//! Basic building blocks like buttons and avatars.

pub mod avatar;
pub mod button;
