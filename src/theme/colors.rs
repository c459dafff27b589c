//! Colors - Spotline Theme Colors

use gpui::{Rgba, rgb, rgba};

/// Spotline color palette - All colors are accessed via associated functions
pub struct SpotColors;

impl SpotColors {
    // Brand colors
    /// Brand blue, used for the active navigation item
    pub fn brand() -> Rgba { rgb(0x168bd3) }
    /// Faint brand tint for sub-menu guides
    pub fn brand_faint() -> Rgba { rgba(0x168bd333) }

    // Background colors
    /// Main background
    pub fn background() -> Rgba { rgb(0xf5f7fa) }
    /// Content area background
    pub fn content_bg() -> Rgba { rgb(0xffffff) }
    /// Sidebar background
    pub fn sidebar_bg() -> Rgba { rgb(0xeaf4fd) }
    /// Navigation item hover
    pub fn nav_hover_bg() -> Rgba { rgb(0xd8e8f8) }
    /// Avatar fallback background
    pub fn avatar_bg() -> Rgba { rgb(0xbfdbfe) }
    /// Dialog backdrop
    pub fn backdrop() -> Rgba { rgba(0x00000088) }

    // Text colors
    /// Primary text
    pub fn text_primary() -> Rgba { rgb(0x1f2937) }
    /// Secondary text (idle navigation items)
    pub fn text_secondary() -> Rgba { rgb(0x4b5563) }
    /// Muted text
    pub fn text_muted() -> Rgba { rgb(0x64748b) }
    /// Light text (on brand backgrounds)
    pub fn text_light() -> Rgba { rgb(0xffffff) }

    // Status colors
    /// Error/Danger - Red
    pub fn danger() -> Rgba { rgb(0xef4444) }
    /// Danger outline
    pub fn danger_border() -> Rgba { rgb(0xfca5a5) }
    /// Danger hover background
    pub fn danger_hover_bg() -> Rgba { rgb(0xfef2f2) }

    // Border colors
    /// Default border
    pub fn border() -> Rgba { rgb(0xe5e7eb) }
    /// Sidebar edge
    pub fn sidebar_border() -> Rgba { rgb(0xdbeafe) }

    // Button colors
    /// Outline button hover
    pub fn button_outline_hover() -> Rgba { rgb(0xf3f4f6) }
    /// Destructive button hover
    pub fn button_danger_hover() -> Rgba { rgb(0xdc2626) }

    /// Fully transparent
    pub fn transparent() -> Rgba { rgba(0x00000000) }
}
