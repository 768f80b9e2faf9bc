//! File renderer slot.
//!
//! Picks the renderer for the resolved [`RendererKind`] and lets it report
//! what it learns about the file (duration, dimensions, cover) through
//! [`MediaActions`]. Renderers never touch the selection queue or the visual
//! mode.

use leptos::prelude::*;
use leptos_icons::Icon;
use web_sys::HtmlMediaElement;

use super::actions::MediaActions;
use crate::components::icons as ic;
use crate::config::{SEEK_TOLERANCE_SECS, content_url};
use crate::core::{RendererDescriptor, RendererKind};
use crate::models::{FileTarget, PlaybackState};
use crate::utils::format::{format_count, format_dimensions};
use crate::utils::{fetch_text, markdown_to_html, word_count};

stylance::import_crate_style!(css, "src/components/media/file.module.css");

/// Renderer slot for the shown target.
///
/// Shows a neutral empty state while the renderer is unresolved or when no
/// renderer handles the file. The renderer subtree is rebuilt per file, so a
/// renderer only ever reports about the file it was mounted for.
#[component]
pub fn FileSlot(
    target: Signal<FileTarget>,
    renderer: Signal<Option<RendererDescriptor>>,
    maximized: Signal<bool>,
    actions: MediaActions,
) -> impl IntoView {
    let slot = Memo::new(move |_| {
        (
            target.with(|t| t.path.clone()),
            renderer.with(|r| r.as_ref().map(|d| d.kind)),
        )
    });

    view! {
        {move || {
            let (path, kind) = slot.get();
            let src = content_url(&path);
            let name = target.with_untracked(|t| t.name.clone());
            match kind {
                None => view! { <div class=css::empty></div> }.into_any(),
                Some(RendererKind::Image) => view! {
                    <ImageRenderer src=src name=name maximized=maximized actions=actions />
                }.into_any(),
                Some(RendererKind::Video) => view! {
                    <VideoRenderer src=src actions=actions />
                }.into_any(),
                Some(RendererKind::Audio) => view! {
                    <AudioRenderer src=src actions=actions />
                }.into_any(),
                Some(RendererKind::Book) => view! {
                    <FrameRenderer url=src name=name info="EPUB" actions=actions />
                }.into_any(),
                Some(RendererKind::Pdf) => view! {
                    <FrameRenderer url=pdf_viewer_url(&src) name=name info="PDF" actions=actions />
                }.into_any(),
                Some(RendererKind::Markdown) => view! {
                    <TextRenderer src=src markdown=true actions=actions />
                }.into_any(),
                Some(RendererKind::Text) => view! {
                    <TextRenderer src=src markdown=false actions=actions />
                }.into_any(),
            }
        }}
    }
}

/// PDFs are shown through Mozilla's PDF.js viewer.
fn pdf_viewer_url(file_url: &str) -> String {
    let encoded = js_sys::encode_uri_component(file_url);
    format!(
        "https://mozilla.github.io/pdf.js/web/viewer.html?file={}",
        String::from(encoded)
    )
}

// =============================================================================
// Image
// =============================================================================

#[component]
fn ImageRenderer(
    src: String,
    name: String,
    maximized: Signal<bool>,
    actions: MediaActions,
) -> impl IntoView {
    let image = NodeRef::<leptos::html::Img>::new();

    view! {
        <img
            node_ref=image
            src=src
            alt=name
            class=move || if maximized.get() { css::imageFull } else { css::image }
            on:load=move |_| {
                if let Some(img) = image.try_get_untracked().flatten() {
                    actions.set_info(format_dimensions(img.natural_width(), img.natural_height()));
                    actions.set_cover(img.current_src());
                }
            }
        />
    }
}

// =============================================================================
// Video / Audio
// =============================================================================

/// Bring the element in line with the requested playback state.
fn sync_element(el: &HtmlMediaElement, state: &PlaybackState) {
    if state.playing && el.paused() {
        let _ = el.play();
    } else if !state.playing && !el.paused() {
        let _ = el.pause();
    }

    if el.muted() != state.muted {
        el.set_muted(state.muted);
    }

    let volume = f64::from(state.volume) / 100.0;
    if (el.volume() - volume).abs() > 0.005 {
        el.set_volume(volume);
    }

    if (el.current_time() - state.current).abs() > SEEK_TOLERANCE_SECS {
        el.set_current_time(state.current);
    }
}

fn report_duration(el: &HtmlMediaElement, actions: MediaActions) {
    actions.set_duration(el.duration());
}

fn report_time(el: &HtmlMediaElement, actions: MediaActions) {
    actions.set_current(el.current_time());
}

fn report_volume(el: &HtmlMediaElement, actions: MediaActions) {
    actions.set_muted(el.muted());
    actions.set_volume((el.volume() * 100.0).round() as u8);
}

#[component]
fn VideoRenderer(src: String, actions: MediaActions) -> impl IntoView {
    let video = NodeRef::<leptos::html::Video>::new();
    let playback = actions.playback();

    Effect::new(move |_| {
        let state = playback.get();
        if let Some(el) = video.get() {
            sync_element(&el, &state);
        }
    });

    let report = move |f: fn(&HtmlMediaElement, MediaActions)| {
        // Detached elements keep firing events after the renderer is gone
        if let Some(el) = video.try_get_untracked().flatten() {
            f(&el, actions);
        }
    };

    view! {
        <video
            node_ref=video
            src=src
            class=css::video
            preload="metadata"
            on:loadedmetadata=move |_| report(report_duration)
            on:durationchange=move |_| report(report_duration)
            on:timeupdate=move |_| report(report_time)
            on:volumechange=move |_| report(report_volume)
            on:play=move |_| actions.set_playing(true)
            on:pause=move |_| actions.set_playing(false)
            on:ended=move |_| actions.set_playing(false)
        />
    }
}

#[component]
fn AudioRenderer(src: String, actions: MediaActions) -> impl IntoView {
    let audio = NodeRef::<leptos::html::Audio>::new();
    let playback = actions.playback();
    let cover = Memo::new(move |_| playback.with(|p| p.cover.clone()));

    Effect::new(move |_| {
        let state = playback.get();
        if let Some(el) = audio.get() {
            sync_element(&el, &state);
        }
    });

    let report = move |f: fn(&HtmlMediaElement, MediaActions)| {
        if let Some(el) = audio.try_get_untracked().flatten() {
            f(&el, actions);
        }
    };

    view! {
        <div class=css::audio>
            {move || {
                let cover = cover.get();
                if cover.is_empty() {
                    view! { <span class=css::audioIcon><Icon icon=ic::FILE_AUDIO /></span> }
                        .into_any()
                } else {
                    view! { <img src=cover alt="" class=css::cover /> }.into_any()
                }
            }}
            <audio
                node_ref=audio
                src=src
                preload="metadata"
                on:loadedmetadata=move |_| report(report_duration)
                on:durationchange=move |_| report(report_duration)
                on:timeupdate=move |_| report(report_time)
                on:volumechange=move |_| report(report_volume)
                on:play=move |_| actions.set_playing(true)
                on:pause=move |_| actions.set_playing(false)
                on:ended=move |_| actions.set_playing(false)
            />
        </div>
    }
}

// =============================================================================
// Documents
// =============================================================================

#[component]
fn FrameRenderer(
    url: String,
    name: String,
    info: &'static str,
    actions: MediaActions,
) -> impl IntoView {
    actions.set_info(info);

    view! { <iframe src=url title=name class=css::document /> }
}

#[component]
fn TextRenderer(src: String, markdown: bool, actions: MediaActions) -> impl IntoView {
    let content = LocalResource::new(move || {
        let url = src.clone();
        async move { fetch_text(&url).await }
    });

    Effect::new(move |_| {
        if let Some(Ok(text)) = content.get() {
            let info = if markdown {
                format_count(word_count(&text), "word")
            } else {
                format_count(text.lines().count(), "line")
            };
            actions.set_info(info);
        }
    });

    view! {
        <div class=css::textFrame>
            <Suspense fallback=move || view! { <div class=css::loading>"Loading..."</div> }>
                {move || content.get().map(|result| match result {
                    Ok(text) if markdown => view! {
                        <div class=css::markdown inner_html=markdown_to_html(&text) />
                    }.into_any(),
                    Ok(text) => view! { <pre class=css::text>{text}</pre> }.into_any(),
                    Err(e) => view! {
                        <div class=css::error>
                            <p>"Failed to load file"</p>
                            <p class=css::errorDetail>{e.to_string()}</p>
                        </div>
                    }.into_any(),
                })}
            </Suspense>
        </div>
    }
}
