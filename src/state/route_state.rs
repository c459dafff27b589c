//! RouteState - In-memory Router

use crate::app::navigation::Route;

/// Current route plus the history stack behind it
#[derive(Debug, Clone)]
pub struct RouteState {
    history: Vec<Route>,
}

impl Default for RouteState {
    fn default() -> Self {
        Self::new(Route::default())
    }
}

impl RouteState {
    pub fn new(start: Route) -> Self {
        Self {
            history: vec![start],
        }
    }

    /// Currently displayed route
    pub fn current(&self) -> &Route {
        // history is never empty: every mutation keeps at least one entry
        &self.history[self.history.len() - 1]
    }

    pub fn current_path(&self) -> &str {
        self.current().path()
    }

    /// Number of entries in the history stack
    #[cfg(test)]
    pub fn depth(&self) -> usize {
        self.history.len()
    }

    /// Navigate to a new route, keeping the current one in history.
    ///
    /// Navigating to the route already shown is a no-op.
    pub fn push(&mut self, route: Route) {
        if *self.current() == route {
            return;
        }
        tracing::debug!("Navigate: {} -> {}", self.current_path(), route.path());
        self.history.push(route);
    }

    /// Overwrite the current history entry.
    ///
    /// When the new route equals the entry behind it, the two collapse into
    /// one so going back never lands on the same page.
    pub fn replace(&mut self, route: Route) {
        tracing::debug!("Replace: {} -> {}", self.current_path(), route.path());
        let len = self.history.len();
        if len >= 2 && self.history[len - 2] == route {
            self.history.pop();
        } else if let Some(last) = self.history.last_mut() {
            *last = route;
        }
    }

    /// Go back one entry; returns `false` at the start of history
    pub fn back(&mut self) -> bool {
        if self.history.len() <= 1 {
            return false;
        }
        self.history.pop();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_back() {
        let mut routes = RouteState::new(Route::Dashboard);
        routes.push(Route::Settings);
        assert_eq!(routes.current(), &Route::Settings);
        assert_eq!(routes.depth(), 2);

        assert!(routes.back());
        assert_eq!(routes.current(), &Route::Dashboard);
        assert!(!routes.back());
    }

    #[test]
    fn test_push_same_route_is_noop() {
        let mut routes = RouteState::new(Route::Dashboard);
        routes.push(Route::Dashboard);
        assert_eq!(routes.depth(), 1);
    }

    #[test]
    fn test_replace_overwrites_current_entry() {
        let mut routes = RouteState::new(Route::Dashboard);
        routes.push(Route::Fishermen);
        routes.replace(Route::Login);

        assert_eq!(routes.current_path(), "/login");
        assert_eq!(routes.depth(), 2);

        // Back skips the replaced entry
        assert!(routes.back());
        assert_eq!(routes.current(), &Route::Dashboard);
    }

    #[test]
    fn test_replace_collapses_into_previous_entry() {
        // Sign out from settings, then sign back in to the dashboard
        let mut routes = RouteState::new(Route::Dashboard);
        routes.push(Route::Settings);
        routes.replace(Route::Login);
        routes.replace(Route::Dashboard);

        assert_eq!(routes.current(), &Route::Dashboard);
        assert_eq!(routes.depth(), 1);
        assert!(!routes.back());
    }
}
