//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;
use crate::core::RendererKind;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuBookOpen as Book, LuBookOpen as Pdf, LuChevronLeft as ChevronLeft,
        LuChevronRight as ChevronRight, LuExternalLink as ExternalLink, LuFile as File,
        LuFileText as FileText, LuFilm as Video, LuImage as Image, LuMaximize2 as Maximize,
        LuMinimize2 as Minimize, LuMusic as Audio, LuPause as Pause, LuPlay as Play,
        LuVolume2 as Volume, LuVolumeX as Muted, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowsAngleContract as Minimize, BsArrowsAngleExpand as Maximize, BsBook as Book,
        BsBoxArrowUpRight as ExternalLink, BsChevronLeft as ChevronLeft,
        BsChevronRight as ChevronRight, BsFileEarmark as File, BsFileEarmarkImage as Image,
        BsFileEarmarkPdf as Pdf, BsFileEarmarkText as FileText, BsFilm as Video,
        BsMusicNoteBeamed as Audio, BsPauseFill as Pause, BsPlayFill as Play,
        BsVolumeMuteFill as Muted, BsVolumeUpFill as Volume, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(PLAY, Play);
themed_icon!(PAUSE, Pause);
themed_icon!(VOLUME, Volume);
themed_icon!(MUTED, Muted);
themed_icon!(MAXIMIZE, Maximize);
themed_icon!(MINIMIZE, Minimize);
themed_icon!(EXTERNAL_LINK, ExternalLink);
themed_icon!(CLOSE, Close);
themed_icon!(CHEVRON_LEFT, ChevronLeft);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(FILE, File);
themed_icon!(FILE_TEXT, FileText);
themed_icon!(FILE_PDF, Pdf);
themed_icon!(FILE_IMAGE, Image);
themed_icon!(FILE_VIDEO, Video);
themed_icon!(FILE_AUDIO, Audio);
themed_icon!(BOOK, Book);

/// Icon for a file handled by `kind` (generic file when unresolved).
pub fn for_kind(kind: Option<RendererKind>) -> Icon {
    match kind {
        Some(RendererKind::Image) => FILE_IMAGE,
        Some(RendererKind::Video) => FILE_VIDEO,
        Some(RendererKind::Audio) => FILE_AUDIO,
        Some(RendererKind::Book) => BOOK,
        Some(RendererKind::Pdf) => FILE_PDF,
        Some(RendererKind::Markdown | RendererKind::Text) => FILE_TEXT,
        None => FILE,
    }
}
