//! Embedded assets for Spotline Admin
//!
//! Uses rust-embed to bundle icons at compile time, falling back to the
//! gpui-component icon set.

use gpui::{AssetSource, Result, SharedString};
use gpui_component::Icon;
use gpui_component_assets::Assets as ComponentAssets;
use rust_embed::RustEmbed;
use std::borrow::Cow;

/// Embedded assets from the assets directory
#[derive(RustEmbed)]
#[folder = "assets"]
#[include = "icons/**/*.svg"]
pub struct Assets;

impl AssetSource for Assets {
    fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        if path.is_empty() {
            return Ok(None);
        }
        // Our own icons shadow the component set
        if let Some(f) = Self::get(path) {
            return Ok(Some(f.data));
        }
        ComponentAssets::get(path)
            .map(|f| Some(f.data))
            .ok_or_else(|| anyhow::anyhow!(r#"could not find asset at path "{path}""#))
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        let mut files: Vec<SharedString> = Self::iter()
            .filter_map(|p| p.starts_with(path).then(|| p.into()))
            .collect();

        files.extend(
            ComponentAssets::iter()
                .filter_map(|p| p.starts_with(path).then(|| p.into()))
                .collect::<Vec<_>>(),
        );

        Ok(files)
    }
}

/// Icons used by the console shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarIcon {
    LayoutGrid,
    Users,
    Banknote,
    Settings,
    ChevronDown,
    ChevronRight,
    LogOut,
    /// Brand mark
    Fish,
    Close,
    Languages,
}

impl SidebarIcon {
    /// Get the SVG path for this icon
    pub fn path(self) -> SharedString {
        match self {
            SidebarIcon::LayoutGrid => "icons/layout-grid.svg",
            SidebarIcon::Users => "icons/users.svg",
            SidebarIcon::Banknote => "icons/banknote.svg",
            SidebarIcon::Settings => "icons/settings.svg",
            SidebarIcon::ChevronDown => "icons/chevron-down.svg",
            SidebarIcon::ChevronRight => "icons/chevron-right.svg",
            SidebarIcon::LogOut => "icons/log-out.svg",
            SidebarIcon::Fish => "icons/fish.svg",
            SidebarIcon::Close => "icons/x.svg",
            SidebarIcon::Languages => "icons/languages.svg",
        }
        .into()
    }
}

impl From<SidebarIcon> for Icon {
    fn from(val: SidebarIcon) -> Self {
        Icon::empty().path(val.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_icon_is_embedded() {
        let icons = [
            SidebarIcon::LayoutGrid,
            SidebarIcon::Users,
            SidebarIcon::Banknote,
            SidebarIcon::Settings,
            SidebarIcon::ChevronDown,
            SidebarIcon::ChevronRight,
            SidebarIcon::LogOut,
            SidebarIcon::Fish,
            SidebarIcon::Close,
            SidebarIcon::Languages,
        ];
        for icon in icons {
            let loaded = Assets.load(&icon.path()).expect("load icon");
            assert!(loaded.is_some(), "{icon:?} missing");
        }
    }
}
