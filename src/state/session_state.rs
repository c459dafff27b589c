//! SessionState - Local Authentication Session

use crate::domain::identity::Identity;

/// Locally held session for the signed-in user
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    identity: Identity,
    token: Option<String>,
    authenticated: bool,
}

impl SessionState {
    /// Create an authenticated session
    pub fn signed_in(identity: Identity, token: Option<String>) -> Self {
        Self {
            identity,
            token,
            authenticated: true,
        }
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Replace the session with a freshly signed-in one
    pub fn sign_in(&mut self, identity: Identity, token: Option<String>) {
        tracing::info!("Signed in as {}", identity.email);
        *self = Self::signed_in(identity, token);
    }

    /// Drop the local session without contacting the server
    pub fn invalidate(&mut self) {
        if self.authenticated {
            tracing::info!("Session invalidated for {}", self.identity.email);
        }
        self.token = None;
        self.authenticated = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalidate_clears_token() {
        let mut session = SessionState::signed_in(
            Identity::new("Maya", "maya@spotline.io"),
            Some("token".to_string()),
        );
        assert!(session.is_authenticated());

        session.invalidate();
        assert!(!session.is_authenticated());
        assert_eq!(session.token(), None);
    }

    #[test]
    fn test_sign_in_after_invalidate() {
        let mut session = SessionState::default();
        assert!(!session.is_authenticated());

        session.sign_in(Identity::new("Maya", "maya@spotline.io"), None);
        assert!(session.is_authenticated());
        assert_eq!(session.identity().name, "Maya");
    }
}
