//! Composite Components

pub mod confirm_dialog;
