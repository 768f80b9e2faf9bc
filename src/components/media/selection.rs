//! Selection panel.
//!
//! Lists the queue of the viewed file's listing and moves the focus. Shown
//! beside the frame when maximized, or whenever a queue exists.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::hooks::MediaContext;
use crate::components::icons as ic;
use crate::models::SelectionQueue;
use crate::utils::format::format_count;

stylance::import_crate_style!(css, "src/components/media/selection.module.css");

#[component]
pub fn MediaSelection(
    source: Signal<String>,
    queue: Signal<SelectionQueue>,
    maximized: Signal<bool>,
) -> impl IntoView {
    let ctx = use_context::<MediaContext>().expect("MediaContext must be provided");

    let count = Memo::new(move |_| queue.with(|q| q.len()));
    let focus = Memo::new(move |_| queue.with(|q| q.focus()));
    let navigable = Memo::new(move |_| queue.with(|q| q.is_active()));

    view! {
        <nav
            class=move || if maximized.get() { css::panelFull } else { css::panel }
            aria-label="Selected files"
        >
            <header class=css::header>
                <span class=css::count>{move || format_count(count.get(), "file")}</span>
                <Show when=move || navigable.get()>
                    <div class=css::stepper>
                        <button
                            class=css::step
                            on:click=move |_| ctx.focus_prev(&source.get_untracked())
                            title="Previous"
                            aria-label="Previous selected file"
                        >
                            <Icon icon=ic::CHEVRON_LEFT />
                        </button>
                        <span class=css::position>
                            {move || format!("{} / {}", focus.get() + 1, count.get())}
                        </span>
                        <button
                            class=css::step
                            on:click=move |_| ctx.focus_next(&source.get_untracked())
                            title="Next"
                            aria-label="Next selected file"
                        >
                            <Icon icon=ic::CHEVRON_RIGHT />
                        </button>
                    </div>
                </Show>
            </header>

            <Show
                when=move || { count.get() > 0 }
                fallback=|| view! { <p class=css::hint>"Select files in a listing to queue them here"</p> }
            >
                <ul class=css::list>
                    {move || {
                        let current = focus.get();
                        queue.with(|q| {
                            q.items()
                                .iter()
                                .enumerate()
                                .map(|(index, item)| {
                                    let focused = index == current;
                                    let name = item.name.clone();
                                    let path = item.path.clone();
                                    view! {
                                        <li>
                                            <button
                                                class=if focused { css::itemFocused } else { css::item }
                                                title=path
                                                aria-current=focused.then_some("true")
                                                on:click=move |_| ctx.focus(&source.get_untracked(), index)
                                            >
                                                {name}
                                            </button>
                                        </li>
                                    }
                                })
                                .collect_view()
                        })
                    }}
                </ul>
            </Show>
        </nav>
    }
}
