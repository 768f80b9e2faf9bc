//! Library listing.
//!
//! Files from the embedded library table, grouped by folder. A click previews
//! a file in the floating viewer, a double click opens it maximized, and the
//! checkbox queues it in its folder's selection.

use leptos::logging::error;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::APP_NAME;
use crate::core::{SharedRegistry, builtin_library, group_by_source};
use crate::models::{AppRoute, FileTarget};
use crate::utils::format::format_count;

stylance::import_crate_style!(css, "src/components/library/library.module.css");

#[component]
pub fn Library() -> impl IntoView {
    let groups = match builtin_library() {
        Ok(files) => group_by_source(&files),
        Err(e) => {
            error!("library table rejected: {}", e);
            Vec::new()
        }
    };

    view! {
        <section class=css::library aria-label="Library">
            <header class=css::header>
                <h1 class=css::title>{APP_NAME}</h1>
                <p class=css::hint>"Click to preview, double-click to open"</p>
            </header>
            {groups
                .into_iter()
                .map(|(source, files)| view! { <Folder source=source files=files /> })
                .collect_view()}
        </section>
    }
}

#[component]
fn Folder(source: String, files: Vec<FileTarget>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let label = if source.is_empty() {
        "/".to_string()
    } else {
        format!("{}/", source)
    };
    let selected = {
        let source = source.clone();
        Memo::new(move |_| ctx.media.selection.with(|t| t.track(&source).len()))
    };

    let all = files.clone();
    let source_for_all = source.clone();
    let on_select_all = move |_: leptos::ev::MouseEvent| {
        ctx.media.select_all(&source_for_all, all.clone());
    };
    let source_for_clear = source.clone();
    let on_clear = move |_: leptos::ev::MouseEvent| {
        ctx.media.clear(&source_for_clear);
    };

    view! {
        <div class=css::folder>
            <div class=css::folderHeader>
                <span class=css::folderName>{label}</span>
                <span class=css::folderCount>
                    {move || match selected.get() {
                        0 => String::new(),
                        n => format!("{} selected", format_count(n, "file")),
                    }}
                </span>
                <button class=css::folderAction on:click=on_select_all>"Select all"</button>
                <Show when=move || { selected.get() > 0 }>
                    <button class=css::folderAction on:click=on_clear.clone()>"Clear"</button>
                </Show>
            </div>
            <ul class=css::files role="list">
                {files
                    .into_iter()
                    .map(|file| view! { <LibraryItem file=file /> })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn LibraryItem(file: FileTarget) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let registry = use_context::<SharedRegistry>().expect("SharedRegistry must be provided");

    let extension = file.extension.clone();
    let kind = LocalResource::new(move || {
        let registry = registry.clone();
        let extension = extension.clone();
        async move { registry.resolve(&extension).await.map(|d| d.kind) }
    });
    let icon = Signal::derive(move || ic::for_kind(kind.get().flatten()));

    let source = file.source().to_string();
    let path = file.path.clone();
    let is_selected =
        Memo::new(move |_| ctx.media.selection.with(|t| t.is_selected(&source, &path)));
    let is_open = {
        let path = file.path.clone();
        Memo::new(move |_| ctx.open.with(|o| o.as_ref().is_some_and(|t| t.path == path)))
    };

    let file_for_toggle = file.clone();
    let on_toggle = move |_: leptos::ev::Event| {
        ctx.media.toggle(file_for_toggle.clone());
    };
    let file_for_click = file.clone();
    let on_click = move |_: leptos::ev::MouseEvent| {
        ctx.preview(file_for_click.clone());
    };
    let path_for_open = file.path.clone();
    let on_dblclick = move |_: leptos::ev::MouseEvent| {
        AppRoute::view(path_for_open.clone()).push();
    };

    let item_class = move || {
        if is_open.get() {
            format!("{} {}", css::item, css::open)
        } else {
            css::item.to_string()
        }
    };

    view! {
        <li class=item_class>
            <input
                type="checkbox"
                class=css::check
                prop:checked=move || is_selected.get()
                on:change=on_toggle
                aria-label=format!("Select {}", file.name)
            />
            <button
                class=css::entry
                on:click=on_click
                on:dblclick=on_dblclick
                title=file.path.clone()
            >
                <span class=css::icon aria-hidden="true"><Icon icon=icon /></span>
                <span class=css::name>{file.name.clone()}</span>
            </button>
        </li>
    }
}
