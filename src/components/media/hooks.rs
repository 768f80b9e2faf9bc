//! Viewer context and hooks.
//!
//! [`MediaContext`] carries the selection tracker shared by listings, the
//! selection panel and the viewer. The renderer registry travels separately as
//! a [`SharedRegistry`] context value.

use leptos::logging::{debug_warn, log};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_use::use_window_size;

use crate::core::{
    RendererDescriptor, Resolution, ResolveGuard, SelectionTracker, SharedRegistry, fit_floating,
};
use crate::models::{FileTarget, PlaybackState, SelectionQueue};

/// Reactive selection state shared through context.
///
/// `Copy` because the only field is a signal.
#[derive(Clone, Copy)]
pub struct MediaContext {
    /// Selection queues keyed by listing path.
    pub selection: RwSignal<SelectionTracker>,
}

impl MediaContext {
    pub fn new() -> Self {
        Self {
            selection: RwSignal::new(SelectionTracker::new()),
        }
    }

    /// Add or remove `target` from the queue of its listing.
    pub fn toggle(&self, target: FileTarget) {
        let source = target.source().to_string();
        self.selection.update(|tracker| {
            tracker.toggle(&source, target);
        });
    }

    /// Queue every file of a listing, focused on the first.
    pub fn select_all(&self, source: &str, targets: Vec<FileTarget>) {
        self.selection
            .update(|tracker| tracker.select_all(source, targets));
    }

    /// Focus the queue entry at `index`.
    ///
    /// Out-of-range requests are logged and ignored.
    pub fn focus(&self, source: &str, index: usize) {
        let result = self
            .selection
            .try_update(|tracker| tracker.focus(source, index));
        if let Some(Err(e)) = result {
            leptos::logging::debug_warn!("selection focus ignored: {}", e);
        }
    }

    pub fn focus_next(&self, source: &str) {
        self.selection.update(|tracker| tracker.focus_next(source));
    }

    pub fn focus_prev(&self, source: &str) {
        self.selection.update(|tracker| tracker.focus_prev(source));
    }

    pub fn clear(&self, source: &str) {
        self.selection.update(|tracker| tracker.clear(source));
    }
}

impl Default for MediaContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide the viewer contexts for a subtree.
///
/// Call once above any [`super::Media`] instance.
pub fn provide_media_context(registry: SharedRegistry) -> MediaContext {
    let ctx = MediaContext::new();
    provide_context(ctx);
    provide_context(registry);
    ctx
}

/// Reactive selection queue for `source`.
pub fn use_media_selection(source: Signal<String>) -> Memo<SelectionQueue> {
    let ctx = use_context::<MediaContext>().expect("MediaContext must be provided");
    Memo::new(move |_| {
        let source = source.get();
        ctx.selection.with(|tracker| tracker.track(&source))
    })
}

/// Viewport and floating-size signals.
#[derive(Clone, Copy)]
pub struct PlacementSignals {
    /// Floating-mode target size
    pub resolution: Signal<Resolution>,
    /// Current viewport width in CSS pixels
    pub viewport_width: Signal<f64>,
}

/// Placement provider for the viewer.
///
/// The floating size follows the resolved renderer and shrinks to fit narrow
/// viewports. While a new renderer is pending the previous size is kept.
pub fn use_placement(renderer: Signal<Option<RendererDescriptor>>) -> PlacementSignals {
    let window = use_window_size();
    let viewport_width = window.width;

    let preferred = Memo::new(move |prev: Option<&Option<Resolution>>| {
        renderer.with(|r| match r {
            Some(descriptor) => descriptor.floating,
            None => prev.copied().flatten(),
        })
    });
    let resolution = Memo::new(move |_| fit_floating(preferred.get(), viewport_width.get()));

    PlacementSignals {
        resolution: resolution.into(),
        viewport_width,
    }
}

/// Reset `playback` whenever the effective target changes.
///
/// Returns the target renderers may show. It only moves once the reset for
/// that target has been applied, so anything a renderer reports lands in the
/// new file's state.
pub fn use_playback_reset(
    target: Signal<FileTarget>,
    playback: RwSignal<PlaybackState>,
) -> Signal<FileTarget> {
    let target = Memo::new(move |_| target.get());
    let shown = RwSignal::new(target.get_untracked());

    Effect::new(move |_| {
        let next = target.get();
        let changed = playback.try_maybe_update(|state| {
            let changed = state.reset(&next.name);
            (changed, changed)
        });
        log!("media: viewing {} (reset: {})", next.path, changed == Some(true));

        if shown.with_untracked(|current| *current != next) {
            let _ = shown.try_set(next);
        }
    });

    shown.read_only().into()
}

/// Resolve the renderer for the target's extension.
///
/// Every extension change issues a new ticket; answers for older tickets are
/// dropped. A descriptor is only visible while the target still has the
/// extension it was resolved for.
pub fn use_renderer(
    target: Signal<FileTarget>,
    registry: SharedRegistry,
) -> Signal<Option<RendererDescriptor>> {
    let extension = Memo::new(move |_| target.with(|t| t.extension.clone()));
    let resolved = RwSignal::new(None::<(String, RendererDescriptor)>);
    let guard = ResolveGuard::new();

    Effect::new(move |_| {
        let ext = extension.get();
        let ticket = guard.issue(&ext);
        resolved.set(None);

        let registry = registry.clone();
        let guard = guard.clone();
        spawn_local(async move {
            let answer = registry.resolve(ticket.extension()).await;
            match guard.accept(&ticket, answer) {
                Some(Some(descriptor)) => {
                    log!("media: '.{}' -> {}", ticket.extension(), descriptor.label);
                    let _ = resolved.try_set(Some((ticket.extension().to_string(), descriptor)));
                }
                Some(None) => log!("media: no renderer for '.{}'", ticket.extension()),
                None => debug_warn!(
                    "media: dropped stale renderer for '.{}' (generation {})",
                    ticket.extension(),
                    ticket.generation()
                ),
            }
        });
    });

    Memo::new(move |_| {
        let ext = extension.get();
        resolved.with(|r| {
            r.as_ref()
                .filter(|(resolved_for, _)| *resolved_for == ext)
                .map(|(_, descriptor)| descriptor.clone())
        })
    })
    .into()
}
