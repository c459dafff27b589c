//! Spotline Admin - Main Entry Point
//!
//! Desktop console for the Spotline fishing-spot marketplace.

use spotline_admin::app::application::run_app;
use spotline_admin::domain::config::AppConfig;
use spotline_admin::state::config_state::ConfigState;
use spotline_admin::utils::config_store;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Log to stdout and, when the data directory is available, to a daily file.
fn init_tracing() -> Option<WorkerGuard> {
    let filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());
    let stdout = tracing_subscriber::fmt::layer();

    match config_store::app_data_dir() {
        Ok(dir) => {
            let appender = tracing_appender::rolling::daily(dir.join("logs"), "spotline-admin.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::registry()
                .with(filter)
                .with(stdout)
                .with(tracing_subscriber::fmt::layer().with_writer(writer).with_ansi(false))
                .init();
            Some(guard)
        }
        Err(e) => {
            tracing_subscriber::registry().with(filter).with(stdout).init();
            tracing::warn!("File logging disabled: {}", e);
            None
        }
    }
}

fn load_config() -> ConfigState {
    let path = match config_store::config_path() {
        Ok(path) => path,
        Err(e) => {
            tracing::warn!("Using default configuration: {}", e);
            return ConfigState::default();
        }
    };

    match config_store::load_from::<AppConfig>(&path) {
        Ok(config) => {
            let source = path.exists().then_some(path);
            match &source {
                Some(path) => tracing::info!("Configuration loaded from {}", path.display()),
                None => tracing::info!("No configuration file, using defaults"),
            }
            ConfigState::new(config, source)
        }
        Err(e) => {
            tracing::warn!("Failed to load {}: {}; using defaults", path.display(), e);
            ConfigState::default()
        }
    }
}

fn main() {
    let _guard = init_tracing();

    tracing::info!("Starting Spotline Admin...");

    let config = load_config();

    // Run the GPUI application
    run_app(config);
}
