//! UI Constants
//!
//! Centralized UI constants for consistent layout across the application.

/// Sidebar width in pixels
pub const SIDEBAR_WIDTH: f32 = 272.0;

/// Height of a top-level navigation item
pub const NAV_ITEM_HEIGHT: f32 = 48.0;

/// Avatar diameter in the profile summary
pub const AVATAR_SIZE: f32 = 48.0;

/// Confirmation dialog width
pub const DIALOG_WIDTH: f32 = 420.0;

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;

/// Environment variable overriding the config file location
pub const CONFIG_PATH_ENV: &str = "SPOTLINE_CONFIG";

/// Config file name inside the platform config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";
