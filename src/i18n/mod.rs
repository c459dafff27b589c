//! i18n - Internationalization Module
//!
//! Thin wrapper over `rust-i18n`; translations live in `locales/*.yml`.

use gpui::SharedString;
use rust_i18n::t;

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English
    #[default]
    En,
    /// Chinese (Simplified)
    ZhCn,
}

impl Locale {
    /// Locale code as used by the translation files
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::ZhCn => "zh-CN",
        }
    }

    /// Parse a locale code, falling back to English
    pub fn from_code(code: &str) -> Self {
        let code = code.trim().to_ascii_lowercase().replace('_', "-");
        if code == "zh" || code.starts_with("zh-") {
            Locale::ZhCn
        } else {
            Locale::En
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::ZhCn => "中文",
        }
    }
}

/// Translate a key; unknown keys come back as the key itself
pub fn t(locale: Locale, key: &str) -> SharedString {
    SharedString::from(t!(key, locale = locale.code()).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_codes() {
        assert_eq!(Locale::from_code("zh-CN"), Locale::ZhCn);
        assert_eq!(Locale::from_code("zh_cn"), Locale::ZhCn);
        assert_eq!(Locale::from_code("en-US"), Locale::En);
        assert_eq!(Locale::from_code(""), Locale::En);
    }

    #[test]
    fn test_sidebar_labels_translate() {
        assert_eq!(t(Locale::En, "nav.user_list").to_string(), "User List");
        assert_eq!(t(Locale::En, "logout.confirm").to_string(), "Yes");
        assert_eq!(t(Locale::ZhCn, "logout.confirm").to_string(), "是");
    }
}
