//! View registry - the single place mapping `SelectedView` → View.

use crate::shared::components::ContentPage;
use contracts::enums::SelectedView;
use contracts::poster::page_for;
use leptos::prelude::*;

/// Renders the content of the given view.
///
/// The mapping is total: every `SelectedView` has a page.
pub fn render_view_content(view: SelectedView) -> AnyView {
    log::debug!("render view '{}'", view);
    let page = page_for(view);

    view! {
        <div class="view" data-view={view.code()}>
            <ContentPage page=page />
        </div>
    }
    .into_any()
}
