//! Media viewer orchestrator.
//!
//! Owns playback/display state for the effective target, resolves its
//! renderer, derives geometry for the current visual mode and wires the
//! renderer slot, controls and selection panel to one action surface.
//!
//! ## Reactive flow
//!
//! - **Target change** (effective path): playback state is reset, title
//!   reseeded from the file name; the renderer slot is rebuilt for the new
//!   file only after the reset
//! - **Extension change**: a new resolve ticket is issued and the slot is
//!   cleared until the registry answers; stale answers are dropped
//! - **Mode change**: only geometry and selection panel visibility follow

use leptos::prelude::*;

use super::actions::MediaActions;
use super::controls::MediaControls;
use super::file::FileSlot;
use super::hooks::{use_media_selection, use_placement, use_playback_reset, use_renderer};
use super::selection::MediaSelection;
use crate::config::BREAKPOINT_XS_PX;
use crate::core::{SharedRegistry, ViewerGeometry, effective_target};
use crate::models::{AppRoute, FileTarget, PlaybackState, SelectionState, ViewerLayout, VisualMode};

stylance::import_crate_style!(css, "src/components/media/media.module.css");

/// Media viewer widget.
///
/// # Props
/// - `target`: The directly opened file
/// - `maximized`: Full-viewport placement when true, floating otherwise
/// - `vertical`: Layout orientation hint (raises the flex weight)
/// - `on_close`: Invoked by the `close` action
/// - `on_navigate`: Invoked by the `open` action with the file's URL;
///   defaults to pushing the hash route
#[component]
pub fn Media(
    #[prop(into)] target: Signal<FileTarget>,
    #[prop(into)] maximized: Signal<bool>,
    #[prop(into, default = Signal::stored(false))] vertical: Signal<bool>,
    on_close: Callback<()>,
    #[prop(optional)] on_navigate: Option<Callback<String>>,
) -> impl IntoView {
    let registry = use_context::<SharedRegistry>().expect("SharedRegistry must be provided");

    // File selection
    let source = Signal::derive(move || target.with(|t| t.source().to_string()));
    let selection = use_media_selection(source);
    let effective =
        Memo::new(move |_| selection.with(|queue| effective_target(&target.get(), queue)));
    let target_path = Memo::new(move |_| effective.with(|t| t.path.clone()));

    // File information
    let playback = RwSignal::new(PlaybackState::titled(
        effective.with_untracked(|t| t.name.clone()),
    ));
    let shown = use_playback_reset(effective.into(), playback);
    let renderer = use_renderer(effective.into(), registry);

    // File actions
    let url = Signal::derive(move || AppRoute::view(target_path.get()).to_hash());
    let navigate = on_navigate
        .unwrap_or_else(|| Callback::new(|url: String| crate::utils::dom::set_hash(&url)));
    let actions = MediaActions::new(playback, url, navigate, on_close);

    // File visualization
    let placement = use_placement(renderer);
    let layout = Memo::new(move |_| {
        ViewerLayout::new(
            VisualMode::from_maximized(maximized.get()),
            selection.with(SelectionState::of),
            placement.viewport_width.get(),
            BREAKPOINT_XS_PX,
        )
    });
    let geometry = Memo::new(move |_| {
        ViewerGeometry::derive(
            layout.get().placement,
            vertical.get(),
            placement.resolution.get(),
        )
    });
    let show_selection = Memo::new(move |_| layout.with(|l| l.show_selection()));

    view! {
        <div
            class=css::root
            style=move || geometry.with(|g| g.root.to_css())
        >
            <Show when=move || show_selection.get()>
                <div class=css::selection>
                    <MediaSelection
                        source=source
                        queue=selection.into()
                        maximized=maximized
                    />
                </div>
            </Show>
            <div class=css::frame style=move || geometry.with(|g| g.frame.to_css())>
                <div class=css::contents>
                    <FileSlot
                        target=shown
                        renderer=renderer
                        maximized=maximized
                        actions=actions
                    />
                </div>
            </div>
            <MediaControls maximized=maximized actions=actions />
        </div>
    }
}
