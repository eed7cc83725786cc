use super::{ContentBlock, PageHeader};
use contracts::enums::SelectedView;
use contracts::poster::{Block, PageContent};
use leptos::prelude::*;

/// Whole page for one view: optional header, hero blocks, then the body blocks.
#[component]
pub fn ContentPage(page: PageContent) -> impl IntoView {
    let PageContent {
        view: selected,
        title,
        divider,
        blocks,
    } = page;

    let (hero, body): (Vec<Block>, Vec<Block>) = blocks
        .into_iter()
        .partition(|block| matches!(block, Block::Hero { .. }));

    view! {
        {title.map(|title| view! { <PageHeader title=title divider=divider /> })}
        {hero.into_iter().map(|block| view! { <ContentBlock block=block /> }).collect_view()}
        <div class={body_class(selected)}>
            {body.into_iter().map(|block| view! { <ContentBlock block=block /> }).collect_view()}
        </div>
    }
}

/// Home's sections sit in a centred column below the hero.
pub fn body_class(view: SelectedView) -> &'static str {
    match view {
        SelectedView::Home => "page-body page-body--home",
        _ => "page-body",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_class() {
        assert_eq!(body_class(SelectedView::Home), "page-body page-body--home");
        assert_eq!(body_class(SelectedView::Results), "page-body");
    }
}
