//! Hash-based routing for the viewer shell.

/// Prefix of file routes.
const VIEW_PREFIX: &str = "view/";

/// Application routes for hash-based navigation.
/// URL format: #/view/path/to/file.ext (e.g., #/view/music/late-set.flac)
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    /// Library view: #/ or empty hash
    Home,
    /// Viewing a file maximized: #/view/path/to/file.ext
    View {
        /// Full path with extension (e.g., "clips/harbor.mp4")
        path: String,
    },
}

impl AppRoute {
    /// Route for viewing `path`.
    pub fn view(path: impl Into<String>) -> Self {
        Self::View { path: path.into() }
    }

    /// Parse URL hash into AppRoute
    pub fn from_hash(hash: &str) -> Self {
        let route = hash.trim_start_matches('#').trim_start_matches('/');

        match route.strip_prefix(VIEW_PREFIX) {
            Some(path) if !path.trim_matches('/').is_empty() => Self::View {
                path: path.trim_matches('/').to_string(),
            },
            _ => Self::Home,
        }
    }

    /// Convert AppRoute to URL hash
    pub fn to_hash(&self) -> String {
        match self {
            Self::Home => "#/".to_string(),
            Self::View { path } => format!("#/{}{}", VIEW_PREFIX, path),
        }
    }

    /// File path of a view route.
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Home => None,
            Self::View { path } => Some(path),
        }
    }

    /// Get current route from browser URL
    pub fn current() -> Self {
        Self::from_hash(&crate::utils::dom::get_hash())
    }

    /// Update browser URL to match this route.
    ///
    /// Sets `location.hash` so `hashchange` listeners observe the navigation.
    pub fn push(&self) {
        crate::utils::dom::set_hash(&self.to_hash());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_parsing() {
        assert_eq!(AppRoute::from_hash(""), AppRoute::Home);
        assert_eq!(AppRoute::from_hash("#"), AppRoute::Home);
        assert_eq!(AppRoute::from_hash("#/"), AppRoute::Home);
        assert_eq!(AppRoute::from_hash("#/view/"), AppRoute::Home);
        assert_eq!(AppRoute::from_hash("#/unknown/thing"), AppRoute::Home);
        assert_eq!(
            AppRoute::from_hash("#/view/clips/harbor-at-dawn.mp4"),
            AppRoute::view("clips/harbor-at-dawn.mp4")
        );
        // get_hash() strips the '#'
        assert_eq!(
            AppRoute::from_hash("/view/papers/survey.pdf"),
            AppRoute::view("papers/survey.pdf")
        );
    }

    #[test]
    fn test_route_to_hash() {
        assert_eq!(AppRoute::Home.to_hash(), "#/");
        assert_eq!(
            AppRoute::view("music/late-set.flac").to_hash(),
            "#/view/music/late-set.flac"
        );
        let route = AppRoute::view("notes/reading-list.md");
        assert_eq!(AppRoute::from_hash(&route.to_hash()), route);
    }

    #[test]
    fn test_route_path() {
        assert_eq!(AppRoute::Home.path(), None);
        assert_eq!(AppRoute::view("a/b.png").path(), Some("a/b.png"));
    }
}
