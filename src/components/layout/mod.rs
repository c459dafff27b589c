//! Layout Components
//!
//! Sidebar and page chrome.

pub mod page_header;
pub mod sidebar;
