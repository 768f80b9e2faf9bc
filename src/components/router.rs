//! Application router component.
//!
//! Handles URL-based routing with hash history. Uses native hashchange
//! events instead of leptos_router for true hash routing.
//!
//! # Architecture
//!
//! - **URL hash drives maximized viewing**: `#/view/<path>` opens the file
//!   maximized; leaving the route drops back to the floating viewer
//! - **Library never re-renders on navigation**: it is always mounted
//! - **Viewer is conditional**: only shown while a file is open

use leptos::prelude::*;
use leptos_icons::Icon;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::library::Library;
use crate::components::media::Media;
use crate::models::{AppRoute, FileTarget};
use crate::utils::dom::replace_hash;

stylance::import_crate_style!(css, "src/components/router.module.css");

// ============================================================================
// Main Router
// ============================================================================

/// Main application router.
///
/// - `#/` → Library
/// - `#/view/path/file.ext` → Library with the file viewed maximized
#[component]
pub fn AppRouter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // Create route signal from current URL hash
    let route = RwSignal::new(AppRoute::current());

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            route.set(AppRoute::current());
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    // Route -> shell state
    Effect::new(move |prev: Option<AppRoute>| {
        let current = route.get();
        match current.path() {
            Some(path) => ctx.view(FileTarget::from_path(path)),
            None if prev.as_ref().is_some_and(|p| p.path().is_some()) => {
                ctx.maximized.set(false);
            }
            None => {}
        }
        current
    });

    let on_close = Callback::new(move |_: ()| {
        ctx.close();
        if route.with_untracked(|r| r.path().is_some()) {
            // Dismissing must not leave a view route Back would reopen
            replace_hash(&AppRoute::Home.to_hash());
            route.set(AppRoute::Home);
        }
    });

    view! {
        <main class=css::shell>
            <Library />

            <Show when=move || ctx.open.with(|o| o.is_some())>
                <ViewerHost on_close=on_close />
            </Show>
        </main>
    }
}

// ============================================================================
// Viewer Host
// ============================================================================

/// Mounts the viewer for the open file with a maximize toggle.
#[component]
fn ViewerHost(on_close: Callback<()>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let target = Memo::new(move |_| ctx.open.get().unwrap_or_default());
    let maximized = Memo::new(move |_| ctx.maximized.get());

    view! {
        <div class=move || if maximized.get() { css::overlayFull } else { css::overlay }>
            <button
                class=css::modeToggle
                on:click=move |_| ctx.toggle_maximized()
                title=move || if maximized.get() { "Minimize" } else { "Maximize" }
                aria-label=move || if maximized.get() { "Minimize viewer" } else { "Maximize viewer" }
            >
                {move || if maximized.get() {
                    view! { <Icon icon=ic::MINIMIZE /> }
                } else {
                    view! { <Icon icon=ic::MAXIMIZE /> }
                }}
            </button>
            <Media target=target maximized=maximized on_close=on_close />
        </div>
    }
}
