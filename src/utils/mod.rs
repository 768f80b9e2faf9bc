//! Utility modules for web, DOM, and formatting operations.
//!
//! Provides:
//! - [`dom`] - Window access and hash navigation
//! - [`fetch_text`] - Network fetching with timeout
//! - [`format`] - Time and caption formatting
//! - [`markdown_to_html`] - Markdown rendering with XSS sanitization

pub mod dom;
mod fetch;
pub mod format;
mod markdown;

pub use fetch::fetch_text;
pub use markdown::{markdown_to_html, word_count};
