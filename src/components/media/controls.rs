//! Playback and window controls.
//!
//! Reads [`PlaybackState`](crate::models::PlaybackState) only and writes
//! through [`MediaActions`]. The transport appears once the renderer reports
//! a duration.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::actions::MediaActions;
use crate::components::icons as ic;
use crate::config::{BLANK_GLYPH, MAX_VOLUME};
use crate::utils::format::format_progress;

stylance::import_crate_style!(css, "src/components/media/controls.module.css");

#[component]
pub fn MediaControls(maximized: Signal<bool>, actions: MediaActions) -> impl IntoView {
    let playback = actions.playback();

    let title = Memo::new(move |_| playback.with(|p| p.title.clone()));
    let info = Memo::new(move |_| {
        playback.with(|p| {
            if p.info.is_empty() {
                BLANK_GLYPH.to_string()
            } else {
                p.info.clone()
            }
        })
    });
    let cover = Memo::new(move |_| playback.with(|p| p.cover.clone()));
    let has_timeline = Memo::new(move |_| playback.with(|p| p.has_timeline()));

    view! {
        <div class=css::controls>
            {move || {
                let cover = cover.get();
                (!cover.is_empty()).then(|| view! {
                    <img src=cover alt="" class=css::thumb />
                })
            }}

            <div class=css::details>
                <span class=css::title title=move || title.get()>{move || title.get()}</span>
                <span class=css::info>{move || info.get()}</span>
            </div>

            <Show when=move || has_timeline.get()>
                <Transport actions=actions />
            </Show>

            <div class=css::actions>
                <Show when=move || !maximized.get()>
                    <button
                        class=css::button
                        on:click=move |_| actions.open()
                        title="Open"
                        aria-label="Open file"
                    >
                        <Icon icon=ic::EXTERNAL_LINK />
                    </button>
                </Show>
                <button
                    class=css::button
                    on:click=move |_| actions.close()
                    title="Close"
                    aria-label="Close viewer"
                >
                    <Icon icon=ic::CLOSE />
                </button>
            </div>
        </div>
    }
}

/// Play/pause, seek bar, time label and volume.
#[component]
fn Transport(actions: MediaActions) -> impl IntoView {
    let playback = actions.playback();

    let playing = Memo::new(move |_| playback.with(|p| p.playing));
    let muted = Memo::new(move |_| playback.with(|p| p.muted));
    let volume = Memo::new(move |_| playback.with(|p| p.volume));
    let current = Memo::new(move |_| playback.with(|p| p.current));
    let duration = Memo::new(move |_| playback.with(|p| p.duration));

    let set_volume = move |raw: String| {
        if let Ok(level) = raw.parse::<u8>() {
            actions.set_volume(level);
            if level > 0 && muted.get_untracked() {
                actions.set_muted(false);
            }
        }
    };

    view! {
        <div class=css::transport>
            <button
                class=css::button
                on:click=move |_| actions.set_playing(!playing.get_untracked())
                title=move || if playing.get() { "Pause" } else { "Play" }
                aria-label=move || if playing.get() { "Pause" } else { "Play" }
            >
                {move || if playing.get() {
                    view! { <Icon icon=ic::PAUSE /> }
                } else {
                    view! { <Icon icon=ic::PLAY /> }
                }}
            </button>

            <input
                type="range"
                class=css::seek
                min="0"
                step="0.1"
                max=move || duration.get().to_string()
                prop:value=move || current.get().to_string()
                on:input=move |ev| {
                    if let Ok(secs) = event_target_value(&ev).parse::<f64>() {
                        actions.set_current(secs);
                    }
                }
                aria-label="Seek"
            />

            <span class=css::time>
                {move || format_progress(current.get(), duration.get())}
            </span>

            <button
                class=css::button
                on:click=move |_| actions.set_muted(!muted.get_untracked())
                title=move || if muted.get() { "Unmute" } else { "Mute" }
                aria-label=move || if muted.get() { "Unmute" } else { "Mute" }
            >
                {move || if muted.get() || volume.get() == 0 {
                    view! { <Icon icon=ic::MUTED /> }
                } else {
                    view! { <Icon icon=ic::VOLUME /> }
                }}
            </button>

            <input
                type="range"
                class=css::volume
                min="0"
                max=MAX_VOLUME.to_string()
                prop:value=move || volume.get().to_string()
                on:input=move |ev| set_volume(event_target_value(&ev))
                aria-label="Volume"
            />
        </div>
    }
}
