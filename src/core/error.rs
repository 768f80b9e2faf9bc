//! Custom error types for the viewer.
//!
//! Provides structured error handling with meaningful error messages
//! and proper error categorization for each domain:
//!
//! - [`ConfigError`] - Embedded renderer/library table problems
//! - [`SelectionError`] - Selection queue precondition violations
//! - [`FetchError`] - Network/fetch-related errors for content renderers

use thiserror::Error;

/// Errors raised while loading the embedded configuration tables.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The TOML document could not be parsed.
    #[error("invalid {table} table: {message}")]
    Parse {
        /// Which table failed ("renderer" or "library")
        table: &'static str,
        /// Parser message
        message: String,
    },
    /// The same extension is claimed by two renderer entries.
    #[error("extension '{0}' is mapped to more than one renderer")]
    DuplicateExtension(String),
}

/// Selection queue errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// Requested focus index does not address a queued file.
    #[error("focus index {index} out of bounds for queue of {len}")]
    FocusOutOfBounds {
        /// Requested index
        index: usize,
        /// Queue length at the time of the request
        len: usize,
    },
}

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Failed to create HTTP request
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, offline, etc.)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    #[error("HTTP error: {0}")]
    HttpError(u16),
    /// Failed to read response body
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// Invalid response content (not text)
    #[error("Invalid response content")]
    InvalidContent,
    /// Request timed out
    #[error("Request timed out")]
    Timeout,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SelectionError::FocusOutOfBounds { index: 3, len: 2 }.to_string(),
            "focus index 3 out of bounds for queue of 2"
        );
        assert_eq!(
            ConfigError::DuplicateExtension("mp4".into()).to_string(),
            "extension 'mp4' is mapped to more than one renderer"
        );
        assert_eq!(FetchError::HttpError(404).to_string(), "HTTP error: 404");
    }
}
