//! Identity - Signed-in User Profile

use serde::{Deserialize, Serialize};

/// Letter shown when no name is available
pub const AVATAR_FALLBACK: &str = "U";

/// Display data for the signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Identity {
    /// Display name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Avatar image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Identity {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            avatar: None,
        }
    }

    #[cfg(test)]
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    /// Avatar URL, ignoring blank values
    pub fn avatar_url(&self) -> Option<&str> {
        self.avatar.as_deref().filter(|url| !url.trim().is_empty())
    }

    /// First character of the name, or [`AVATAR_FALLBACK`] for an empty name
    pub fn avatar_fallback(&self) -> String {
        self.name
            .chars()
            .next()
            .map(String::from)
            .unwrap_or_else(|| AVATAR_FALLBACK.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avatar_fallback_uses_first_letter() {
        let identity = Identity::new("Maya Hart", "maya@spotline.io");
        assert_eq!(identity.avatar_fallback(), "M");
    }

    #[test]
    fn test_avatar_fallback_for_empty_name() {
        let identity = Identity::new("", "anon@spotline.io");
        assert_eq!(identity.avatar_fallback(), "U");
    }

    #[test]
    fn test_avatar_fallback_keeps_whole_character() {
        let identity = Identity::new("Øyvind", "oy@spotline.io");
        assert_eq!(identity.avatar_fallback(), "Ø");
    }

    #[test]
    fn test_blank_avatar_url_is_ignored() {
        let identity = Identity::new("Maya", "maya@spotline.io").with_avatar("  ");
        assert_eq!(identity.avatar_url(), None);

        let identity = identity.with_avatar("https://cdn.spotline.io/a.png");
        assert_eq!(identity.avatar_url(), Some("https://cdn.spotline.io/a.png"));
    }
}
