//! Logout - Best-effort Sign-out Flow
//!
//! The remote call may fail; local teardown always runs afterwards.
//!
//! ```text
//! request_logout(api)  ──► Acknowledged | Failed | Skipped   (never an error)
//!        │
//!        ▼
//! settle_logout(session, routes, nav)   invalidate + replace("/login"),
//!                                       then close the dialog
//! ```

use crate::app::navigation::Route;
use crate::services::auth_api::AuthApi;
use crate::state::nav_state::NavigationState;
use crate::state::route_state::RouteState;
use crate::state::session_state::SessionState;

/// What the server said about the logout request.
///
/// Kept for tracing only; every outcome leads to the same teardown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogoutOutcome {
    /// Server accepted the logout
    Acknowledged,
    /// Call failed or was rejected
    Failed(String),
    /// No auth backend configured
    Skipped,
}

/// Call the logout endpoint, swallowing any failure
pub async fn request_logout(api: Option<&dyn AuthApi>, token: Option<String>) -> LogoutOutcome {
    let Some(api) = api else {
        return LogoutOutcome::Skipped;
    };

    match api.logout(token).await {
        Ok(()) => LogoutOutcome::Acknowledged,
        Err(e) => {
            tracing::debug!("Logout request failed, continuing with local sign-out: {}", e);
            LogoutOutcome::Failed(e.to_string())
        }
    }
}

/// Local teardown after the logout request settles, whatever the outcome.
///
/// Drops the session and replaces the current history entry with the login
/// route, then resets the sidebar state if the sidebar is still mounted.
/// `logging_out` is only cleared once sign-out has happened.
pub fn settle_logout(
    outcome: &LogoutOutcome,
    session: &mut SessionState,
    routes: &mut RouteState,
    nav: Option<&mut NavigationState>,
) {
    tracing::info!("Signing out ({:?})", outcome);
    session.invalidate();
    routes.replace(Route::Login);

    if let Some(nav) = nav {
        nav.finish_logout();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::identity::Identity;
    use crate::error::{Error, Result};
    use futures::FutureExt;
    use futures::future::BoxFuture;
    use std::sync::Mutex;

    /// Records the tokens it was called with and answers with a fixed status
    struct FakeAuthApi {
        status: Option<u16>,
        calls: Mutex<Vec<Option<String>>>,
    }

    impl FakeAuthApi {
        fn accepting() -> Self {
            Self {
                status: None,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn rejecting(status: u16) -> Self {
            Self {
                status: Some(status),
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    impl AuthApi for FakeAuthApi {
        fn logout(&self, token: Option<String>) -> BoxFuture<'static, Result<()>> {
            self.calls.lock().expect("lock").push(token);
            let result = match self.status {
                None => Ok(()),
                Some(status) => Err(Error::LogoutRejected { status }),
            };
            futures::future::ready(result).boxed()
        }
    }

    fn signed_in_at(route: Route) -> (SessionState, RouteState) {
        let session = SessionState::signed_in(
            Identity::new("Maya", "maya@spotline.io"),
            Some("secret".to_string()),
        );
        let mut routes = RouteState::new(Route::Dashboard);
        routes.push(route);
        (session, routes)
    }

    /// Open, confirm, call, then settle through the same step the sidebar uses
    fn confirm_logout(
        api: Option<&dyn AuthApi>,
        nav: &mut NavigationState,
        session: &mut SessionState,
        routes: &mut RouteState,
    ) -> LogoutOutcome {
        nav.open_logout_dialog();
        assert!(nav.begin_logout());
        assert!(nav.logging_out());
        assert!(!nav.dialog_buttons_enabled());

        let token = session.token().map(str::to_owned);
        let outcome = futures::executor::block_on(request_logout(api, token));

        settle_logout(&outcome, session, routes, Some(nav));
        outcome
    }

    fn assert_signed_out(nav: &NavigationState, session: &SessionState, routes: &RouteState, depth: usize) {
        assert!(!nav.logging_out());
        assert!(!nav.logout_dialog_open());
        assert!(!session.is_authenticated());
        assert_eq!(session.token(), None);
        assert_eq!(routes.current(), &Route::Login);
        assert_eq!(routes.depth(), depth, "logout must replace, not push");
    }

    #[test]
    fn test_successful_logout_signs_out() {
        let api = FakeAuthApi::accepting();
        let (mut session, mut routes) = signed_in_at(Route::Settings);
        let mut nav = NavigationState::for_path(routes.current_path());

        let outcome = confirm_logout(Some(&api as &dyn AuthApi), &mut nav, &mut session, &mut routes);

        assert_eq!(outcome, LogoutOutcome::Acknowledged);
        assert_signed_out(&nav, &session, &routes, 2);
        assert_eq!(
            *api.calls.lock().expect("lock"),
            vec![Some("secret".to_string())]
        );
    }

    #[test]
    fn test_failed_logout_signs_out_identically() {
        let api = FakeAuthApi::rejecting(503);
        let (mut session, mut routes) = signed_in_at(Route::Fishermen);
        let mut nav = NavigationState::for_path(routes.current_path());

        let outcome = confirm_logout(Some(&api as &dyn AuthApi), &mut nav, &mut session, &mut routes);

        assert!(matches!(outcome, LogoutOutcome::Failed(_)));
        assert_signed_out(&nav, &session, &routes, 2);
        // Local sub-menu state is untouched by the flow
        assert!(nav.sub_menu_expanded());
    }

    #[test]
    fn test_missing_backend_still_signs_out() {
        let (mut session, mut routes) = signed_in_at(Route::CommissionReport);
        let mut nav = NavigationState::for_path(routes.current_path());

        let outcome = confirm_logout(None, &mut nav, &mut session, &mut routes);

        assert_eq!(outcome, LogoutOutcome::Skipped);
        assert_signed_out(&nav, &session, &routes, 2);
    }

    #[test]
    fn test_sign_out_completes_without_sidebar() {
        let (mut session, mut routes) = signed_in_at(Route::Settings);

        settle_logout(
            &LogoutOutcome::Failed("connection reset".to_string()),
            &mut session,
            &mut routes,
            None,
        );

        assert!(!session.is_authenticated());
        assert_eq!(routes.current(), &Route::Login);
        assert_eq!(routes.depth(), 2);
    }

    #[test]
    fn test_every_outcome_settles_the_same_way() {
        let outcomes = [
            LogoutOutcome::Acknowledged,
            LogoutOutcome::Failed("HTTP 500".to_string()),
            LogoutOutcome::Skipped,
        ];

        for outcome in outcomes {
            let (mut session, mut routes) = signed_in_at(Route::SpotOwners);
            let mut nav = NavigationState::for_path(routes.current_path());
            nav.open_logout_dialog();
            assert!(nav.begin_logout());

            settle_logout(&outcome, &mut session, &mut routes, Some(&mut nav));

            assert_signed_out(&nav, &session, &routes, 2);
        }
    }

    #[test]
    fn test_cancel_leaves_session_and_route() {
        let api = FakeAuthApi::accepting();
        let (session, routes) = signed_in_at(Route::Settings);
        let mut nav = NavigationState::for_path(routes.current_path());

        nav.open_logout_dialog();
        assert!(nav.dismiss_logout_dialog());

        assert!(session.is_authenticated());
        assert_eq!(routes.current(), &Route::Settings);
        assert!(api.calls.lock().expect("lock").is_empty());
    }
}
