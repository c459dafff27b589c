//! ConfigStore - Local Configuration Storage
//!
//! Reads and writes `config.toml` in the platform config directory.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Serialize, de::DeserializeOwned};

use crate::constants::{CONFIG_FILE_NAME, CONFIG_PATH_ENV};
use crate::error::{Error, Result};

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("io", "Spotline", "spotline-admin").ok_or_else(|| Error::Config {
        message: "could not determine home directory".to_string(),
    })
}

/// Get the application config directory, creating it if needed
pub fn app_config_dir() -> Result<PathBuf> {
    let dir = project_dirs()?.config_dir().to_path_buf();
    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }
    Ok(dir)
}

/// Get the application data directory (logs), creating it if needed
pub fn app_data_dir() -> Result<PathBuf> {
    let dir = project_dirs()?.data_local_dir().to_path_buf();
    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }
    Ok(dir)
}

/// Path of the config file, honoring the override variable
pub fn config_path() -> Result<PathBuf> {
    match std::env::var_os(CONFIG_PATH_ENV) {
        Some(path) if !path.is_empty() => Ok(PathBuf::from(path)),
        _ => Ok(app_config_dir()?.join(CONFIG_FILE_NAME)),
    }
}

/// Load a TOML config file; a missing file yields the default
pub fn load_from<T: DeserializeOwned + Default>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Ok(T::default());
    }

    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Save a TOML config file
pub fn save_to<T: Serialize>(path: &Path, config: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::AppConfig;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("spotline-admin-test-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_missing_file_yields_default() {
        let config: AppConfig = load_from(&scratch_path("absent.toml")).expect("load");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let path = scratch_path("saved.toml");
        let mut config = AppConfig::default();
        config.profile.name = "Maya".to_string();
        config.ui.locale = "zh-CN".to_string();

        save_to(&path, &config).expect("save");
        let loaded: AppConfig = load_from(&path).expect("load");
        assert_eq!(loaded, config);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let path = scratch_path("broken.toml");
        fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
        fs::write(&path, "[api\nbase_url = ").expect("write");

        let result: Result<AppConfig> = load_from(&path);
        assert!(matches!(result, Err(Error::TomlDe { .. })));

        let _ = fs::remove_file(&path);
    }
}
