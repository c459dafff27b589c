//! Config - Application Configuration

use serde::{Deserialize, Serialize};

use crate::app::navigation::Route;
use crate::domain::identity::Identity;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Backend API endpoints
    pub api: ApiConfig,
    /// Profile used to sign in
    pub profile: ProfileConfig,
    /// Interface preferences
    pub ui: UiConfig,
}

/// Backend API configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the admin API (no trailing slash)
    pub base_url: String,
    /// Path of the logout endpoint, relative to `base_url`
    pub logout_path: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/api".to_string(),
            logout_path: "/auth/logout".to_string(),
        }
    }
}

impl ApiConfig {
    /// Full URL of the logout endpoint
    pub fn logout_url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        if self.logout_path.starts_with('/') {
            format!("{base}{}", self.logout_path)
        } else {
            format!("{base}/{}", self.logout_path)
        }
    }
}

/// Signed-in profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProfileConfig {
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
    /// Access token sent with the logout request
    pub token: Option<String>,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: "Admin".to_string(),
            email: "admin@spotline.io".to_string(),
            avatar: None,
            token: None,
        }
    }
}

impl ProfileConfig {
    pub fn identity(&self) -> Identity {
        Identity {
            name: self.name.clone(),
            email: self.email.clone(),
            avatar: self.avatar.clone(),
        }
    }
}

/// Interface preferences
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    /// Locale code ("en" or "zh-CN")
    pub locale: String,
    /// Route shown after sign-in
    pub start_route: Route,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            locale: "en".to_string(),
            start_route: Route::Dashboard,
        }
    }
}

impl UiConfig {
    /// Route to open after sign-in.
    ///
    /// Only dashboard pages qualify; the login screen and unknown paths fall
    /// back to the dashboard.
    pub fn landing_route(&self) -> Route {
        match &self.start_route {
            Route::Login | Route::Unknown(_) => Route::Dashboard,
            route => route.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [api]
            base_url = "https://admin.spotline.io/api/"

            [profile]
            name = "Maya"
            token = "abc"

            [ui]
            start_route = "/users/fishermen"
            "#,
        )
        .expect("parse config");

        assert_eq!(config.api.logout_path, "/auth/logout");
        assert_eq!(
            config.api.logout_url(),
            "https://admin.spotline.io/api/auth/logout"
        );
        assert_eq!(config.profile.email, "admin@spotline.io");
        assert_eq!(config.profile.token.as_deref(), Some("abc"));
        assert_eq!(config.ui.locale, "en");
        assert_eq!(config.ui.start_route, Route::Fishermen);
    }

    #[test]
    fn test_logout_url_joins_relative_path() {
        let api = ApiConfig {
            base_url: "http://localhost:9000".to_string(),
            logout_path: "logout".to_string(),
        };
        assert_eq!(api.logout_url(), "http://localhost:9000/logout");
    }

    #[test]
    fn test_profile_identity() {
        let profile = ProfileConfig {
            avatar: Some("https://cdn.spotline.io/m.png".to_string()),
            ..Default::default()
        };
        let identity = profile.identity();
        assert_eq!(identity.name, "Admin");
        assert_eq!(identity.avatar_url(), Some("https://cdn.spotline.io/m.png"));
    }

    #[test]
    fn test_landing_route_skips_login_and_unknown() {
        for (start, landing) in [
            ("/login", Route::Dashboard),
            ("/reports", Route::Dashboard),
            ("/settings", Route::Settings),
            ("/users/spot-owners/", Route::SpotOwners),
        ] {
            let config: AppConfig =
                toml::from_str(&format!("[ui]\nstart_route = \"{start}\"")).expect("parse");
            assert_eq!(config.ui.landing_route(), landing, "start_route {start}");
        }
    }
}
