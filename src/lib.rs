//! Spotline Admin Library
//!
//! Application logic for the Spotline Admin desktop console: the dashboard
//! shell, its navigation sidebar and the session/logout flow behind it.

rust_i18n::i18n!("locales", fallback = "en");

pub mod app;
pub mod assets;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod features;
pub mod i18n;
pub mod services;
pub mod state;
pub mod theme;
pub mod utils;
