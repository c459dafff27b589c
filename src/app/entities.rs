//! AppEntities - Global Entity Handles
//!
//! All global GPUI entities are collected here for easy access and management.
//! State is split by concern so views only re-render for what they observe.

use gpui::{App, AppContext, Entity, Global};

use crate::domain::config::AppConfig;
use crate::i18n::Locale;
use crate::state::{
    config_state::ConfigState, i18n_state::I18nState, route_state::RouteState,
    session_state::SessionState,
};

/// Collection of all global Entity handles
#[derive(Clone)]
pub struct AppEntities {
    /// Loaded configuration
    pub config: Entity<ConfigState>,
    /// Current route and history
    pub routes: Entity<RouteState>,
    /// Signed-in user
    pub session: Entity<SessionState>,
    /// Internationalization state
    pub i18n: Entity<I18nState>,
}

impl Global for AppEntities {}

impl AppEntities {
    /// Initialize all entities from the loaded configuration
    pub fn init(config: ConfigState, cx: &mut App) -> Self {
        let app_config: &AppConfig = &config.config;
        let session = SessionState::signed_in(
            app_config.profile.identity(),
            app_config.profile.token.clone(),
        );
        let routes = RouteState::new(app_config.ui.landing_route());
        let i18n = I18nState::new(Locale::from_code(&app_config.ui.locale));

        Self {
            routes: cx.new(|_| routes),
            session: cx.new(|_| session),
            i18n: cx.new(|_| i18n),
            config: cx.new(|_| config),
        }
    }
}
