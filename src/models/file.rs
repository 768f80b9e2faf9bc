//! File identity types.

use std::fmt;

/// Identity of a file under consideration by the viewer.
///
/// Immutable once constructed: navigation or a selection change replaces the
/// whole value. Two targets are the same file when their paths are equal.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FileTarget {
    /// Path relative to the content root (unique within a session)
    pub path: String,
    /// Final path segment, used as the default title
    pub name: String,
    /// Lowercased extension without the dot (empty when absent)
    pub extension: String,
}

impl FileTarget {
    /// Build a target from a slash-separated path.
    ///
    /// Leading and trailing slashes are ignored. Dotfiles such as `.profile`
    /// have no extension.
    pub fn from_path(path: &str) -> Self {
        let path = path.trim_matches('/');
        let name = path.rsplit('/').next().unwrap_or_default().to_string();
        let extension = match name.rfind('.') {
            Some(idx) if idx > 0 => name[idx + 1..].to_ascii_lowercase(),
            _ => String::new(),
        };

        Self {
            path: path.to_string(),
            name,
            extension,
        }
    }

    /// Listing path this file belongs to (parent directory, empty at the root).
    ///
    /// Selection queues are keyed by this value.
    pub fn source(&self) -> &str {
        self.path
            .rfind('/')
            .map(|idx| &self.path[..idx])
            .unwrap_or("")
    }

    /// Whether this target points at nothing.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}

impl fmt::Display for FileTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path)
    }
}
