//! Pathname-based routing.
//!
//! Every URL path is a location in the remote tree (`/movies/a.mp4`). The route
//! keeps the decoded, normalized form; encoding happens only when a URL is
//! produced.

use crate::config::APP_NAME;
use crate::core::path::{decode_path, encode_path, path_join};
use crate::utils::dom;

/// Location in the remote tree.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct AppRoute {
    /// Decoded, normalized path without a leading separator. Empty at root.
    path: String,
}

impl AppRoute {
    pub fn root() -> Self {
        Self::default()
    }

    /// Build a route from an already decoded path.
    pub fn new(path: &str) -> Self {
        Self {
            path: path_join(&[path]),
        }
    }

    /// Parse a (possibly percent-encoded) URL pathname.
    pub fn from_pathname(pathname: &str) -> Self {
        Self::new(&decode_path(pathname))
    }

    /// Route for the browser's current location.
    pub fn current() -> Self {
        Self::from_pathname(&dom::pathname())
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }

    /// Last path segment, empty at root.
    pub fn name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or_default()
    }

    pub fn join(&self, name: &str) -> Self {
        Self {
            path: path_join(&[self.path.as_str(), name]),
        }
    }

    /// Absolute, percent-encoded URL path (`/a%20b/c.mp4`).
    pub fn url(&self) -> String {
        format!("/{}", encode_path(&self.path))
    }

    /// Document title for this location.
    pub fn title(&self) -> String {
        if self.is_root() {
            APP_NAME.to_string()
        } else {
            self.name().to_string()
        }
    }

    /// Add this route to browser history.
    pub fn push(&self) {
        dom::push_url(&self.url());
    }

    /// Replace the current history entry with this route.
    pub fn replace(&self) {
        dom::replace_url(&self.url());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pathname() {
        assert_eq!(AppRoute::from_pathname("/"), AppRoute::root());
        assert_eq!(AppRoute::from_pathname(""), AppRoute::root());
        assert_eq!(AppRoute::from_pathname("/movies/").path(), "movies");
        assert_eq!(
            AppRoute::from_pathname("/my%20movies/a.mp4").path(),
            "my movies/a.mp4"
        );
        assert_eq!(AppRoute::from_pathname("/a/./b/../c").path(), "a/c");
    }

    #[test]
    fn test_navigation_helpers() {
        let route = AppRoute::new("shows/season 1/ep1.mp4");
        assert_eq!(route.name(), "ep1.mp4");
        assert_eq!(
            AppRoute::new("shows/season 1").join("ep2.mp4").path(),
            "shows/season 1/ep2.mp4"
        );
        assert_eq!(AppRoute::root().join("..").path(), "");
        assert_eq!(AppRoute::root().name(), "");
    }

    #[test]
    fn test_url_encodes_segments() {
        assert_eq!(AppRoute::root().url(), "/");
        assert_eq!(
            AppRoute::new("my movies/a#1.mp4").url(),
            "/my%20movies/a%231.mp4"
        );
    }

    #[test]
    fn test_title() {
        assert_eq!(AppRoute::root().title(), APP_NAME);
        assert_eq!(AppRoute::new("shows/ep1.mp4").title(), "ep1.mp4");
    }
}
