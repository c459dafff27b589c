//! ConfigState - Application Configuration State

use std::path::PathBuf;

use crate::domain::config::AppConfig;
use crate::error::Result;
use crate::i18n::Locale;
use crate::utils::config_store;

/// Loaded configuration and where it came from
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration
    pub config: AppConfig,
    /// File the configuration was read from, if any
    pub source: Option<PathBuf>,
}

impl ConfigState {
    pub fn new(config: AppConfig, source: Option<PathBuf>) -> Self {
        Self { config, source }
    }

    /// Remember the chosen locale and write the configuration back.
    ///
    /// Without a source file the default config location is created.
    pub fn save_locale(&mut self, locale: Locale) -> Result<PathBuf> {
        self.config.ui.locale = locale.code().to_string();

        let path = match &self.source {
            Some(path) => path.clone(),
            None => config_store::config_path()?,
        };
        config_store::save_to(&path, &self.config)?;
        self.source = Some(path.clone());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_locale_writes_source_file() {
        let path = std::env::temp_dir()
            .join(format!("spotline-admin-state-{}", std::process::id()))
            .join("config.toml");
        let mut state = ConfigState::new(AppConfig::default(), Some(path.clone()));

        let written = state.save_locale(Locale::ZhCn).expect("save");
        assert_eq!(written, path);
        assert_eq!(state.config.ui.locale, "zh-CN");

        let loaded: AppConfig = config_store::load_from(&path).expect("load");
        assert_eq!(loaded.ui.locale, "zh-CN");
        assert_eq!(loaded.profile, state.config.profile);

        let _ = std::fs::remove_file(&path);
    }
}
