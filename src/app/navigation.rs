//! Navigation - Routes and Sidebar Entries
//!
//! Defines the routes the console can display and the sidebar entries that
//! point at them.

use serde::{Deserialize, Serialize};

use crate::assets::SidebarIcon;

/// Path prefix shared by every user-list route
pub const USERS_PREFIX: &str = "/users";

/// Routes the console can display
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(into = "String", from = "String")]
pub enum Route {
    /// Dashboard overview
    #[default]
    Dashboard,
    /// Fisherman list (under the user list section)
    Fishermen,
    /// Spot owner list (under the user list section)
    SpotOwners,
    /// Commission report
    CommissionReport,
    /// Console settings
    Settings,
    /// Sign-in screen
    Login,
    /// Any path without a dedicated page
    Unknown(String),
}

impl Route {
    /// Parse a path, tolerating a single trailing slash
    pub fn from_path(path: &str) -> Self {
        let trimmed = match path.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => path,
        };

        match trimmed {
            "/dashboard" => Route::Dashboard,
            "/users/fishermen" => Route::Fishermen,
            "/users/spot-owners" => Route::SpotOwners,
            "/commission-report" => Route::CommissionReport,
            "/settings" => Route::Settings,
            "/login" => Route::Login,
            other => Route::Unknown(other.to_string()),
        }
    }

    /// The path this route is displayed under
    pub fn path(&self) -> &str {
        match self {
            Route::Dashboard => "/dashboard",
            Route::Fishermen => "/users/fishermen",
            Route::SpotOwners => "/users/spot-owners",
            Route::CommissionReport => "/commission-report",
            Route::Settings => "/settings",
            Route::Login => "/login",
            Route::Unknown(path) => path,
        }
    }

    /// Translation key for the page title
    pub fn title_key(&self) -> &'static str {
        match self {
            Route::Dashboard => "nav.dashboard",
            Route::Fishermen => "nav.fishermen",
            Route::SpotOwners => "nav.spot_owners",
            Route::CommissionReport => "nav.commission_report",
            Route::Settings => "nav.settings",
            Route::Login => "login.title",
            Route::Unknown(_) => "page.not_found",
        }
    }
}

impl From<String> for Route {
    fn from(path: String) -> Self {
        Route::from_path(&path)
    }
}

impl From<Route> for String {
    fn from(route: Route) -> Self {
        route.path().to_string()
    }
}

/// Top-level sidebar entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavItem {
    Dashboard,
    /// Toggles the user sub-menu instead of navigating
    UserList,
    CommissionReport,
    Settings,
}

impl NavItem {
    /// All top-level entries in display order
    pub fn all() -> &'static [NavItem] {
        &[
            NavItem::Dashboard,
            NavItem::UserList,
            NavItem::CommissionReport,
            NavItem::Settings,
        ]
    }

    /// Route opened by clicking the entry, `None` for the sub-menu toggle
    pub fn target(&self) -> Option<Route> {
        match self {
            NavItem::Dashboard => Some(Route::Dashboard),
            NavItem::UserList => None,
            NavItem::CommissionReport => Some(Route::CommissionReport),
            NavItem::Settings => Some(Route::Settings),
        }
    }

    /// Whether the entry is highlighted for the given path.
    ///
    /// Links match their target exactly; the user list matches any path
    /// under [`USERS_PREFIX`].
    pub fn is_active(&self, path: &str) -> bool {
        match self.target() {
            Some(route) => path == route.path(),
            None => path.starts_with(USERS_PREFIX),
        }
    }

    pub fn icon(&self) -> SidebarIcon {
        match self {
            NavItem::Dashboard => SidebarIcon::LayoutGrid,
            NavItem::UserList => SidebarIcon::Users,
            NavItem::CommissionReport => SidebarIcon::Banknote,
            NavItem::Settings => SidebarIcon::Settings,
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            NavItem::Dashboard => "nav.dashboard",
            NavItem::UserList => "nav.user_list",
            NavItem::CommissionReport => "nav.commission_report",
            NavItem::Settings => "nav.settings",
        }
    }

    pub fn element_id(&self) -> &'static str {
        match self {
            NavItem::Dashboard => "nav-dashboard",
            NavItem::UserList => "nav-user-list",
            NavItem::CommissionReport => "nav-commission-report",
            NavItem::Settings => "nav-settings",
        }
    }
}

/// Links revealed by expanding the user list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubNavItem {
    Fishermen,
    SpotOwners,
}

impl SubNavItem {
    pub fn all() -> &'static [SubNavItem] {
        &[SubNavItem::Fishermen, SubNavItem::SpotOwners]
    }

    pub fn route(&self) -> Route {
        match self {
            SubNavItem::Fishermen => Route::Fishermen,
            SubNavItem::SpotOwners => Route::SpotOwners,
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            SubNavItem::Fishermen => "nav.fishermen",
            SubNavItem::SpotOwners => "nav.spot_owners",
        }
    }

    pub fn element_id(&self) -> &'static str {
        match self {
            SubNavItem::Fishermen => "nav-fishermen",
            SubNavItem::SpotOwners => "nav-spot-owners",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_items(path: &str) -> Vec<NavItem> {
        NavItem::all()
            .iter()
            .copied()
            .filter(|item| item.is_active(path))
            .collect()
    }

    #[test]
    fn test_route_path_parsing() {
        assert_eq!(Route::from_path("/dashboard"), Route::Dashboard);
        assert_eq!(Route::from_path("/users/fishermen"), Route::Fishermen);
        assert_eq!(Route::from_path("/users/spot-owners/"), Route::SpotOwners);
        assert_eq!(Route::from_path("/login"), Route::Login);
        assert_eq!(Route::from_path("/"), Route::Unknown("/".to_string()));
        assert_eq!(Route::from_path("/reports"), Route::Unknown("/reports".to_string()));
        assert_eq!(Route::CommissionReport.path(), "/commission-report");
    }

    #[test]
    fn test_exactly_one_item_active_for_top_level_routes() {
        assert_eq!(active_items("/dashboard"), vec![NavItem::Dashboard]);
        assert_eq!(
            active_items("/commission-report"),
            vec![NavItem::CommissionReport]
        );
        assert_eq!(active_items("/settings"), vec![NavItem::Settings]);
    }

    #[test]
    fn test_user_routes_mark_only_user_list() {
        for path in ["/users", "/users/fishermen", "/users/spot-owners", "/users/42"] {
            assert_eq!(active_items(path), vec![NavItem::UserList], "path {path}");
        }
    }

    #[test]
    fn test_unrelated_routes_mark_nothing() {
        assert!(active_items("/login").is_empty());
        assert!(active_items("/dashboard/extra").is_empty());
    }

    #[test]
    fn test_route_serde_uses_paths() {
        #[derive(Deserialize)]
        struct Wrapper {
            route: Route,
        }

        let parsed: Wrapper = toml::from_str(r#"route = "/settings""#).expect("parse");
        assert_eq!(parsed.route, Route::Settings);
    }
}
