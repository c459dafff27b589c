//! NavigationState - Sidebar-local UI State
//!
//! Sub-menu expansion and the logout confirmation flow. Lives only as long as
//! the sidebar that owns it.

use crate::app::navigation::USERS_PREFIX;

/// Where the logout confirmation flow currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogoutPhase {
    /// No dialog shown
    #[default]
    Idle,
    /// Dialog shown, waiting for the user to answer
    ConfirmPending,
    /// User confirmed, logout request in flight
    LoggingOut,
}

/// Local state of the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationState {
    sub_menu_expanded: bool,
    logout_dialog_open: bool,
    logging_out: bool,
}

impl NavigationState {
    /// Initial state for the given path: the user sub-menu starts expanded
    /// when a user list is being shown.
    pub fn for_path(path: &str) -> Self {
        Self {
            sub_menu_expanded: path.starts_with(USERS_PREFIX),
            ..Default::default()
        }
    }

    pub fn sub_menu_expanded(&self) -> bool {
        self.sub_menu_expanded
    }

    pub fn logout_dialog_open(&self) -> bool {
        self.logout_dialog_open
    }

    pub fn logging_out(&self) -> bool {
        self.logging_out
    }

    pub fn phase(&self) -> LogoutPhase {
        match (self.logout_dialog_open, self.logging_out) {
            (_, true) => LogoutPhase::LoggingOut,
            (true, false) => LogoutPhase::ConfirmPending,
            (false, false) => LogoutPhase::Idle,
        }
    }

    /// Dialog buttons are locked while a logout request is in flight
    pub fn dialog_buttons_enabled(&self) -> bool {
        !self.logging_out
    }

    /// Flip the user sub-menu
    pub fn toggle_sub_menu(&mut self) {
        self.sub_menu_expanded = !self.sub_menu_expanded;
    }

    /// Show the confirmation dialog
    pub fn open_logout_dialog(&mut self) {
        self.logout_dialog_open = true;
    }

    /// Close the dialog without logging out.
    ///
    /// Returns `false` and leaves the dialog open while logging out.
    pub fn dismiss_logout_dialog(&mut self) -> bool {
        if self.logging_out {
            return false;
        }
        self.logout_dialog_open = false;
        true
    }

    /// Enter the logging-out phase.
    ///
    /// Returns `false` when the dialog is not awaiting an answer, which also
    /// rejects a second confirmation while the first is still running.
    pub fn begin_logout(&mut self) -> bool {
        if self.phase() != LogoutPhase::ConfirmPending {
            return false;
        }
        self.logging_out = true;
        true
    }

    /// Leave the logging-out phase and close the dialog
    pub fn finish_logout(&mut self) {
        self.logging_out = false;
        self.logout_dialog_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_sub_menu_follows_route() {
        for path in ["/users", "/users/fishermen", "/users/spot-owners"] {
            assert!(NavigationState::for_path(path).sub_menu_expanded(), "{path}");
        }
        for path in ["/dashboard", "/settings", "/commission-report", "/login", "/"] {
            assert!(!NavigationState::for_path(path).sub_menu_expanded(), "{path}");
        }
    }

    #[test]
    fn test_initial_state_is_idle() {
        let state = NavigationState::for_path("/users/fishermen");
        assert_eq!(state.phase(), LogoutPhase::Idle);
        assert!(!state.logout_dialog_open());
        assert!(!state.logging_out());
    }

    #[test]
    fn test_toggle_sub_menu_negates() {
        let mut state = NavigationState::for_path("/dashboard");
        state.toggle_sub_menu();
        assert!(state.sub_menu_expanded());
        state.toggle_sub_menu();
        assert!(!state.sub_menu_expanded());

        let mut state = NavigationState::for_path("/users/spot-owners");
        state.toggle_sub_menu();
        assert!(!state.sub_menu_expanded());
    }

    #[test]
    fn test_open_dialog_keeps_logging_out_flag() {
        let mut state = NavigationState::default();
        state.open_logout_dialog();
        assert!(state.logout_dialog_open());
        assert!(!state.logging_out());
        assert_eq!(state.phase(), LogoutPhase::ConfirmPending);
    }

    #[test]
    fn test_dismiss_returns_to_idle() {
        let mut state = NavigationState::default();
        state.open_logout_dialog();
        assert!(state.dismiss_logout_dialog());
        assert_eq!(state.phase(), LogoutPhase::Idle);
    }

    #[test]
    fn test_confirm_locks_buttons_until_finished() {
        let mut state = NavigationState::default();
        state.open_logout_dialog();
        assert!(state.dialog_buttons_enabled());

        assert!(state.begin_logout());
        assert_eq!(state.phase(), LogoutPhase::LoggingOut);
        assert!(!state.dialog_buttons_enabled());

        // Neither button does anything while the request runs
        assert!(!state.begin_logout());
        assert!(!state.dismiss_logout_dialog());
        assert!(state.logout_dialog_open());

        state.finish_logout();
        assert_eq!(state.phase(), LogoutPhase::Idle);
        assert!(!state.logging_out());
        assert!(!state.logout_dialog_open());
        assert!(state.dialog_buttons_enabled());
    }

    #[test]
    fn test_begin_requires_open_dialog() {
        let mut state = NavigationState::default();
        assert!(!state.begin_logout());
        assert!(!state.logging_out());
    }

    #[test]
    fn test_sub_menu_survives_logout_flow() {
        let mut state = NavigationState::for_path("/users/fishermen");
        state.open_logout_dialog();
        state.dismiss_logout_dialog();
        assert!(state.sub_menu_expanded());
    }
}
