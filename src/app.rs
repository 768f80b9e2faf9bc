//! Root application module.
//!
//! Contains the main App component, the [`AppContext`] shell state and
//! application-level setup following Leptos conventions.

use std::sync::Arc;

use leptos::logging::{error, log};
use leptos::prelude::*;

use crate::components::AppRouter;
use crate::components::media::{MediaContext, provide_media_context};
use crate::config::{APP_NAME, APP_VERSION};
use crate::core::{SharedRegistry, StaticRegistry};
use crate::models::FileTarget;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and read with
/// `use_context::<AppContext>()`.
///
/// # Note
///
/// `Copy` because all fields are Leptos signals or signal bundles.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// File shown by the viewer, if any.
    pub open: RwSignal<Option<FileTarget>>,
    /// Whether the viewer occupies the full viewport.
    pub maximized: RwSignal<bool>,
    /// Selection state shared with the viewer.
    pub media: MediaContext,
}

impl AppContext {
    pub fn new(media: MediaContext) -> Self {
        Self {
            open: RwSignal::new(None),
            maximized: RwSignal::new(false),
            media,
        }
    }

    /// Show `target` in the floating viewer.
    pub fn preview(&self, target: FileTarget) {
        self.open.set(Some(target));
    }

    /// Show `target` maximized.
    pub fn view(&self, target: FileTarget) {
        self.open.set(Some(target));
        self.maximized.set(true);
    }

    /// Dismiss the viewer.
    pub fn close(&self) {
        self.open.set(None);
        self.maximized.set(false);
    }

    pub fn toggle_maximized(&self) {
        self.maximized.update(|m| *m = !*m);
    }
}

/// Registry from the embedded renderer table.
///
/// A broken table is logged and leaves every file without a renderer.
fn builtin_registry() -> SharedRegistry {
    match StaticRegistry::builtin() {
        Ok(registry) => {
            log!("{} {}: {} renderer extensions", APP_NAME, APP_VERSION, registry.len());
            Arc::new(registry)
        }
        Err(e) => {
            error!("renderer table rejected: {}", e);
            Arc::new(StaticRegistry::default())
        }
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Provides the viewer contexts and the global AppContext
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the router
#[component]
pub fn App() -> impl IntoView {
    let media = provide_media_context(builtin_registry());
    provide_context(AppContext::new(media));

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #111318;
                    color: #e0e0e0;
                    font-family: system-ui, sans-serif;
                ">
                    <h1 style="color: #ff6b6b; margin-bottom: 1rem;">
                        "Something went wrong"
                    </h1>
                    <ul style="color: #ff6b6b; font-size: 0.9rem;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                        style="
                            background: #4a90e2;
                            color: white;
                            border: none;
                            padding: 0.75rem 2rem;
                            border-radius: 4px;
                            cursor: pointer;
                        "
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <AppRouter />
        </ErrorBoundary>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_and_close() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = AppContext::new(MediaContext::new());
            let target = FileTarget::from_path("clips/harbor-at-dawn.mp4");

            ctx.preview(target.clone());
            assert_eq!(ctx.open.get_untracked(), Some(target.clone()));
            assert!(!ctx.maximized.get_untracked());

            ctx.toggle_maximized();
            assert!(ctx.maximized.get_untracked());

            ctx.close();
            assert_eq!(ctx.open.get_untracked(), None);
            assert!(!ctx.maximized.get_untracked());

            ctx.view(target.clone());
            assert_eq!(ctx.open.get_untracked(), Some(target));
            assert!(ctx.maximized.get_untracked());
        });
    }

    #[tokio::test]
    async fn test_builtin_registry_resolves_table() {
        let registry = builtin_registry();
        let resolved = registry.resolve("MP4").await;
        assert_eq!(resolved.map(|d| d.label), Some("Video".to_string()));
    }
}
