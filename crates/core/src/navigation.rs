//! Scroll-to-top on route change.

use serde::Serialize;

/// What the client should do with the viewport after a navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollAction {
    /// Move the viewport to (0, 0) before paint.
    ResetToOrigin,
    /// Leave the viewport where it is.
    Keep,
}

/// Tracks the current route path and decides when to reset scroll.
#[derive(Debug, Clone, Default)]
pub struct RouteTracker {
    current: Option<String>,
}

impl RouteTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a navigation to `path`. Resets only when the path changes.
    pub fn navigate(&mut self, path: &str) -> ScrollAction {
        if self.current.as_deref() == Some(path) {
            return ScrollAction::Keep;
        }
        self.current = Some(path.to_string());
        ScrollAction::ResetToOrigin
    }

    pub fn current_path(&self) -> Option<&str> {
        self.current.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_navigation_resets() {
        let mut tracker = RouteTracker::new();
        assert_eq!(tracker.navigate("/"), ScrollAction::ResetToOrigin);
        assert_eq!(tracker.current_path(), Some("/"));
    }

    #[test]
    fn same_path_keeps_scroll() {
        let mut tracker = RouteTracker::new();
        tracker.navigate("/venues");
        assert_eq!(tracker.navigate("/venues"), ScrollAction::Keep);
    }

    #[test]
    fn new_path_resets_again() {
        let mut tracker = RouteTracker::new();
        tracker.navigate("/venues");
        assert_eq!(tracker.navigate("/venues/3"), ScrollAction::ResetToOrigin);
        assert_eq!(tracker.navigate("/venues"), ScrollAction::ResetToOrigin);
    }
}
