//! NavStrip component - fixed top bar with one button per view.

use crate::layout::global_context::use_poster_context;
use crate::layout::tabs::tab_class;
use contracts::enums::SelectedView;
use leptos::prelude::*;

/// Always rendered, identical for every view apart from the active marker.
#[component]
pub fn NavStrip() -> impl IntoView {
    let ctx = use_poster_context();

    view! {
        <div class="nav-strip">
            <div class="tabs">
                {SelectedView::all()
                    .into_iter()
                    .map(move |view| {
                        view! {
                            <button
                                class=move || tab_class(ctx.is_active(view))
                                aria-label={view.aria_label()}
                                data-view={view.code()}
                                on:click=move |_| ctx.select(view)
                            >
                                {view.display_name()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
