//! Data models and types for the viewer.
//!
//! Contains domain types for:
//! - [`FileTarget`] - Identity of the file being viewed
//! - [`SelectionQueue`] - Multi-file selection with a focus index
//! - [`PlaybackState`], [`PlaybackAction`] - Transient playback/display state
//! - [`VisualMode`], [`SelectionState`], [`Placement`], [`ViewerLayout`] - Layout state
//! - [`AppRoute`] - Hash-based navigation

mod file;
mod mode;
mod playback;
mod route;
mod selection;

pub use file::FileTarget;
pub use mode::{Placement, SelectionState, ViewerLayout, VisualMode};
pub use playback::{PlaybackAction, PlaybackState};
pub use route::AppRoute;
pub use selection::SelectionQueue;
