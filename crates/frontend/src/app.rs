use crate::app_shell::PosterShell;
use crate::layout::global_context::PosterContext;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Single owner of the selected view; children read it through context.
    provide_context(PosterContext::new());

    view! {
        <PosterShell />
    }
}
