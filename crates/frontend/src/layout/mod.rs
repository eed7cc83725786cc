pub mod global_context;
pub mod nav_strip;
pub mod tabs;

use crate::shared::theme::GlobalStyles;
use contracts::enums::SelectedView;
use global_context::use_poster_context;
use leptos::prelude::*;
use nav_strip::NavStrip;

/// Page frame shared by every view.
///
/// ```text
/// +------------------------------------------+
/// |        NavStrip (fixed, always shown)    |
/// +------------------------------------------+
/// |        main: selected view content       |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let ctx = use_poster_context();

    view! {
        <div class="page">
            <GlobalStyles />
            <NavStrip />
            <main class=move || main_class(ctx.current())>
                {children()}
            </main>
        </div>
    }
}

/// Approach is laid out in a narrower, centred column.
pub fn main_class(view: SelectedView) -> &'static str {
    match view {
        SelectedView::Approach => "main main--narrow",
        _ => "main",
    }
}
