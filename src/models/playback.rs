//! Playback and display state shared by renderers and controls.

use crate::config::{BLANK_GLYPH, DEFAULT_VOLUME, MAX_VOLUME};

/// Transient playback/display state for the file being viewed.
///
/// Reset to defaults whenever the effective target changes; otherwise only
/// mutated by applying a [`PlaybackAction`].
#[derive(Clone, Debug, PartialEq)]
pub struct PlaybackState {
    /// Display title (seeded from the file name)
    pub title: String,
    /// Display-only caption
    pub info: String,
    /// Cover image reference (empty when none)
    pub cover: String,
    /// Whether audio output is muted
    pub muted: bool,
    /// Volume level (0..=100)
    pub volume: u8,
    /// Whether playback is running
    pub playing: bool,
    /// Elapsed position in seconds
    pub current: f64,
    /// Total length in seconds (0 when unknown)
    pub duration: f64,
}

impl PlaybackState {
    /// Fresh state for a newly opened file.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            info: BLANK_GLYPH.to_string(),
            cover: String::new(),
            muted: false,
            volume: DEFAULT_VOLUME,
            playing: false,
            current: 0.0,
            duration: 0.0,
        }
    }

    /// Reset to the defaults for a file named `title`.
    ///
    /// Returns `true` if anything changed.
    pub fn reset(&mut self, title: &str) -> bool {
        let fresh = Self::titled(title);
        if *self == fresh {
            return false;
        }
        *self = fresh;
        true
    }

    /// Apply a single action.
    ///
    /// Returns `true` if the state changed. Applying a value the state already
    /// holds is a no-op.
    pub fn apply(&mut self, action: PlaybackAction) -> bool {
        match action {
            PlaybackAction::SetTitle(title) => replace(&mut self.title, title),
            PlaybackAction::SetInfo(info) => replace(&mut self.info, info),
            PlaybackAction::SetCover(cover) => replace(&mut self.cover, cover),
            PlaybackAction::SetMuted(muted) => replace(&mut self.muted, muted),
            PlaybackAction::SetVolume(volume) => replace(&mut self.volume, volume.min(MAX_VOLUME)),
            PlaybackAction::SetPlaying(playing) => replace(&mut self.playing, playing),
            PlaybackAction::SetCurrent(current) => replace(&mut self.current, seconds(current)),
            PlaybackAction::SetDuration(duration) => {
                replace(&mut self.duration, seconds(duration))
            }
        }
    }

    /// Playback progress in `0.0..=1.0` (0 when the duration is unknown).
    pub fn progress(&self) -> f64 {
        if self.duration > 0.0 {
            (self.current / self.duration).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Whether the file reported a time-based length.
    pub fn has_timeline(&self) -> bool {
        self.duration > 0.0
    }
}

/// A single mutation of [`PlaybackState`].
#[derive(Clone, Debug, PartialEq)]
pub enum PlaybackAction {
    SetTitle(String),
    SetInfo(String),
    SetCover(String),
    SetMuted(bool),
    SetVolume(u8),
    SetPlaying(bool),
    SetCurrent(f64),
    SetDuration(f64),
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

/// Media elements report NaN/Infinity before metadata is known.
fn seconds(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}
