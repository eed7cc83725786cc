use contracts::poster::Inline;
use leptos::prelude::*;

/// Run of inline text: plain, bold, line breaks and external links.
#[component]
pub fn InlineText(inlines: Vec<Inline>) -> impl IntoView {
    inlines.into_iter().map(render_inline).collect_view()
}

fn render_inline(inline: Inline) -> AnyView {
    match inline {
        Inline::Text(text) => text.into_any(),
        Inline::Strong(text) => view! { <strong>{text}</strong> }.into_any(),
        Inline::LineBreak => view! { <br /> }.into_any(),
        Inline::Link { label, href } => view! {
            <a class="link" href=href target="_blank" rel="noopener noreferrer">
                {label}
            </a>
        }
        .into_any(),
    }
}
