//! Action surface handed to renderers and controls.
//!
//! All writes to [`PlaybackState`] go through [`MediaActions`]; children get
//! no other path to mutate it.

use leptos::prelude::*;

use crate::models::{PlaybackAction, PlaybackState};

/// The viewer's action surface.
///
/// `Copy` because every field is an arena handle. A viewer builds one value
/// for its whole lifetime; the navigation URL is read at call time, so the
/// surface never needs to be rebuilt when the target changes.
#[derive(Clone, Copy)]
pub struct MediaActions {
    playback: RwSignal<PlaybackState>,
    url: Signal<String>,
    navigate: Callback<String>,
    close: Callback<()>,
}

impl MediaActions {
    pub fn new(
        playback: RwSignal<PlaybackState>,
        url: Signal<String>,
        navigate: Callback<String>,
        close: Callback<()>,
    ) -> Self {
        Self {
            playback,
            url,
            navigate,
            close,
        }
    }

    /// Navigate to the viewed file's canonical URL.
    pub fn open(&self) {
        self.navigate.run(self.url.get_untracked());
    }

    /// Dismiss the viewer.
    pub fn close(&self) {
        self.close.run(());
    }

    pub fn set_title(&self, title: impl Into<String>) {
        self.dispatch(PlaybackAction::SetTitle(title.into()));
    }

    pub fn set_info(&self, info: impl Into<String>) {
        self.dispatch(PlaybackAction::SetInfo(info.into()));
    }

    pub fn set_cover(&self, cover: impl Into<String>) {
        self.dispatch(PlaybackAction::SetCover(cover.into()));
    }

    pub fn set_muted(&self, muted: bool) {
        self.dispatch(PlaybackAction::SetMuted(muted));
    }

    pub fn set_volume(&self, volume: u8) {
        self.dispatch(PlaybackAction::SetVolume(volume));
    }

    pub fn set_playing(&self, playing: bool) {
        self.dispatch(PlaybackAction::SetPlaying(playing));
    }

    pub fn set_current(&self, current: f64) {
        self.dispatch(PlaybackAction::SetCurrent(current));
    }

    pub fn set_duration(&self, duration: f64) {
        self.dispatch(PlaybackAction::SetDuration(duration));
    }

    /// Read-only view of the state this surface writes.
    pub fn playback(&self) -> Signal<PlaybackState> {
        self.playback.into()
    }

    /// Subscribers are only notified when the action changes something.
    fn dispatch(&self, action: PlaybackAction) {
        let _ = self
            .playback
            .try_maybe_update(|state| (state.apply(action), ()));
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    struct Harness {
        actions: MediaActions,
        playback: RwSignal<PlaybackState>,
        url: RwSignal<String>,
        navigations: Arc<AtomicUsize>,
        closes: Arc<AtomicUsize>,
    }

    fn harness() -> Harness {
        let playback = RwSignal::new(PlaybackState::titled("clip.mp4"));
        let url = RwSignal::new("#/view/clips/clip.mp4".to_string());
        let navigations = Arc::new(AtomicUsize::new(0));
        let closes = Arc::new(AtomicUsize::new(0));

        let nav_count = navigations.clone();
        let close_count = closes.clone();
        let actions = MediaActions::new(
            playback,
            url.into(),
            Callback::new(move |_: String| {
                nav_count.fetch_add(1, Ordering::SeqCst);
            }),
            Callback::new(move |_: ()| {
                close_count.fetch_add(1, Ordering::SeqCst);
            }),
        );

        Harness {
            actions,
            playback,
            url,
            navigations,
            closes,
        }
    }

    #[test]
    fn test_setters_write_playback() {
        let owner = Owner::new();
        owner.with(|| {
            let h = harness();
            h.actions.set_playing(true);
            h.actions.set_volume(40);
            h.actions.set_muted(true);
            h.actions.set_duration(120.0);
            h.actions.set_current(30.0);
            h.actions.set_info("H.264");
            h.actions.set_cover("cover.png");
            h.actions.set_title("Harbor");

            let state = h.playback.get_untracked();
            assert!(state.playing);
            assert_eq!(state.volume, 40);
            assert!(state.muted);
            assert_eq!(state.duration, 120.0);
            assert_eq!(state.current, 30.0);
            assert_eq!(state.info, "H.264");
            assert_eq!(state.cover, "cover.png");
            assert_eq!(state.title, "Harbor");
            assert_eq!(h.actions.playback().get_untracked(), state);
        });
    }

    #[test]
    fn test_repeated_setters_do_not_navigate() {
        let owner = Owner::new();
        owner.with(|| {
            let h = harness();
            let before = h.playback.get_untracked();
            h.actions.set_volume(before.volume);
            h.actions.set_playing(before.playing);
            h.actions.set_title(before.title.clone());
            assert_eq!(h.playback.get_untracked(), before);
            assert_eq!(h.navigations.load(Ordering::SeqCst), 0);
            assert_eq!(h.closes.load(Ordering::SeqCst), 0);
        });
    }

    #[test]
    fn test_open_reads_url_at_call_time() {
        let owner = Owner::new();
        owner.with(|| {
            let h = harness();
            let seen = Arc::new(std::sync::Mutex::new(Vec::new()));
            let sink = seen.clone();
            let actions = MediaActions::new(
                h.playback,
                h.url.into(),
                Callback::new(move |url: String| {
                    if let Ok(mut urls) = sink.lock() {
                        urls.push(url);
                    }
                }),
                Callback::new(|_: ()| {}),
            );

            actions.open();
            h.url.set("#/view/music/late-set.flac".to_string());
            actions.open();

            assert_eq!(
                *seen.lock().unwrap(),
                vec![
                    "#/view/clips/clip.mp4".to_string(),
                    "#/view/music/late-set.flac".to_string()
                ]
            );
        });
    }

    #[test]
    fn test_close_runs_callback() {
        let owner = Owner::new();
        owner.with(|| {
            let h = harness();
            h.actions.close();
            h.actions.close();
            assert_eq!(h.closes.load(Ordering::SeqCst), 2);
            assert_eq!(h.navigations.load(Ordering::SeqCst), 0);
        });
    }
}
