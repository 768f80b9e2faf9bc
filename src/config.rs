//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the viewer.
//! Table assets are loaded at compile time using `include_str!`.

// =============================================================================
// Table Assets (loaded at compile time)
// =============================================================================

/// Renderer table mapping file extensions to renderer kinds.
pub const RENDERER_TABLE: &str = include_str!("../assets/renderers.toml");

/// Sample library listing shown by the demo shell.
pub const LIBRARY_TABLE: &str = include_str!("../assets/library.toml");

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the shell header.
pub const APP_NAME: &str = "mediaview";

/// Application version.
pub const APP_VERSION: &str = "0.1.0";

/// Base URL that file paths are resolved against when loading content.
pub const CONTENT_BASE_URL: &str = "media";

/// Build the content URL for a file path.
pub fn content_url(path: &str) -> String {
    format!("{}/{}", CONTENT_BASE_URL, path.trim_start_matches('/'))
}

// =============================================================================
// Layout Configuration
// =============================================================================

/// Extra-small breakpoint in CSS pixels.
///
/// At or below this viewport width the viewer collapses to a full-width,
/// edge-to-edge layout in both visual modes.
pub const BREAKPOINT_XS_PX: f64 = 576.0;

/// Distance of the floating viewer from the bottom-right corner.
pub const FLOATING_OFFSET_PX: f64 = 20.0;

/// Corner radius of the floating viewer.
pub const FLOATING_RADIUS_PX: f64 = 8.0;

/// Border width of the floating viewer.
pub const HAIRLINE_PX: f64 = 1.0;

/// Drop shadow of the floating viewer.
pub const FLOATING_SHADOW: &str = "rgba(0, 0, 0, 0.2) 0px 2px 2px 1px";

/// Floating size used when the renderer does not declare one.
pub const DEFAULT_FLOATING: (f64, f64) = (360.0, 203.0);

/// Smallest width the floating viewer is scaled down to.
pub const MIN_FLOATING_WIDTH_PX: f64 = 160.0;

// =============================================================================
// Playback Configuration
// =============================================================================

/// Placeholder caption shown until a renderer reports info.
///
/// A left-to-right mark keeps the caption line at full height while blank.
pub const BLANK_GLYPH: &str = "\u{200E}";

/// Volume applied to every freshly opened file.
pub const DEFAULT_VOLUME: u8 = 100;

/// Maximum volume level.
pub const MAX_VOLUME: u8 = 100;

/// Playback drift (seconds) tolerated before a requested position is applied
/// to the media element.
pub const SEEK_TOLERANCE_SECS: f64 = 0.5;

// =============================================================================
// Network Configuration
// =============================================================================

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_url() {
        assert_eq!(content_url("music/song.mp3"), "media/music/song.mp3");
        assert_eq!(content_url("/music/song.mp3"), "media/music/song.mp3");
    }
}
