//! Application shell - root component of the poster page.

use crate::layout::global_context::use_poster_context;
use crate::layout::tabs::render_view_content;
use crate::layout::Shell;
use leptos::prelude::*;

/// Poster page: fixed Navigation Strip plus the content of the selected view.
///
/// Only the selected view is mounted; switching tabs replaces the subtree.
#[component]
pub fn PosterShell() -> impl IntoView {
    let ctx = use_poster_context();

    view! {
        <Shell>
            {move || render_view_content(ctx.current())}
        </Shell>
    }
}
