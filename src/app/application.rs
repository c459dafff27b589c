//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    App, AppContext, Application, Bounds, KeyBinding, TitlebarOptions, WindowBounds, WindowOptions,
    actions, px,
};

use crate::app::entities::AppEntities;
use crate::app::workspace::Workspace;
use crate::assets::Assets;
use crate::constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use crate::i18n::{Locale, t};
use crate::services::{AuthService, HttpAuthApi};
use crate::state::config_state::ConfigState;

actions!(spotline, [Quit, GoBack]);

/// Run the Spotline Admin application
pub fn run_app(config: ConfigState) {
    Application::new().with_assets(Assets).run(move |cx: &mut App| {
        gpui_component::init(cx);

        // Set up action handlers
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());
        cx.bind_keys([
            KeyBinding::new("cmd-q", Quit, None),
            KeyBinding::new("alt-left", GoBack, None),
        ]);

        // Quit the app when all windows are closed
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        // Auth backend; without it logout still signs out locally
        match HttpAuthApi::new(&config.config.api) {
            Ok(api) => {
                tracing::info!("Logout endpoint: {}", api.logout_url());
                cx.set_global(AuthService::new(api));
            }
            Err(e) => tracing::warn!("Auth client unavailable: {}", e),
        }

        let locale = Locale::from_code(&config.config.ui.locale);

        // Initialize global entities
        let entities = AppEntities::init(config, cx);
        cx.set_global(entities.clone());

        let routes = entities.routes.clone();
        cx.on_action(move |_: &GoBack, cx: &mut App| {
            routes.update(cx, |routes, cx| {
                if routes.back() {
                    cx.notify();
                }
            });
        });

        // Create main window
        let bounds = Bounds::centered(
            None,
            gpui::size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)),
            cx,
        );
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(t(locale, "app.title")),
                appears_transparent: false,
                traffic_light_position: None,
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |_window, cx| {
            cx.new(|cx| Workspace::new(entities.clone(), cx))
        });
        if let Err(e) = opened {
            tracing::error!("Failed to open main window: {}", e);
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
