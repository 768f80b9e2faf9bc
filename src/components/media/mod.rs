//! Media viewer.
//!
//! [`Media`] orchestrates one file: it resolves a renderer for the effective
//! target, owns the transient playback state and lays out the renderer slot,
//! controls and selection panel for the current visual mode.
//!
//! Call [`provide_media_context`] once above any viewer.

mod actions;
mod controls;
mod file;
mod hooks;
mod selection;
mod viewer;

pub use actions::MediaActions;
pub use hooks::{
    MediaContext, PlacementSignals, provide_media_context, use_media_selection, use_placement,
    use_playback_reset, use_renderer,
};
pub use viewer::Media;
