//! ContentBlock - DOM rendering of one `contracts::poster::Block`.

use super::{InlineText, PersonCard};
use contracts::poster::{Asset, Block, Body, Column, HeadingLevel, Section};
use leptos::prelude::*;

#[component]
pub fn ContentBlock(block: Block) -> impl IntoView {
    render_block(block)
}

// Recursive through `Columns`, hence the type-erased return.
fn render_block(block: Block) -> AnyView {
    match block {
        Block::Hero {
            image,
            title,
            subtitle,
        } => view! {
            <div class="hero">
                <RoundImage asset=image />
                <div class="hero__text">
                    <h1 class="heading hero__title">{title}</h1>
                    <h2 class="hero__subtitle">{subtitle}</h2>
                </div>
            </div>
        }
        .into_any(),
        Block::Section(section) => render_section(section),
        Block::Columns(columns) => view! {
            <section class="two-col section">
                {columns.into_iter().map(render_column).collect_view()}
            </section>
        }
        .into_any(),
        Block::Image(asset) => view! { <RoundImage asset=asset /> }.into_any(),
        Block::Person(person) => view! { <PersonCard person=person /> }.into_any(),
    }
}

fn render_column(column: Column) -> impl IntoView {
    view! {
        <div class="col">
            {column.blocks.into_iter().map(render_block).collect_view()}
        </div>
    }
}

fn render_section(section: Section) -> AnyView {
    let heading = section.heading.map(|heading| match heading.level {
        HeadingLevel::H2 => view! { <h2 class="h2">{heading.text}</h2> }.into_any(),
        HeadingLevel::H3 => view! { <h3 class="h3">{heading.text}</h3> }.into_any(),
    });

    view! {
        <section class="section">
            {heading}
            {section.body.into_iter().map(render_body).collect_view()}
        </section>
    }
    .into_any()
}

fn render_body(body: Body) -> AnyView {
    match body {
        Body::Paragraph(inlines) => view! {
            <p class="para">
                <InlineText inlines=inlines />
            </p>
        }
        .into_any(),
        Body::List(items) => view! {
            <ul class="list">
                {items
                    .into_iter()
                    .map(|inlines| view! { <li><InlineText inlines=inlines /></li> })
                    .collect_view()}
            </ul>
        }
        .into_any(),
    }
}

#[component]
fn RoundImage(asset: Asset) -> impl IntoView {
    view! {
        <img
            class={image_class(asset)}
            src={asset.url()}
            alt={asset.alt()}
        />
    }
}

/// The architecture diagram is height-capped so it fits beside its text.
pub fn image_class(asset: Asset) -> &'static str {
    match asset {
        Asset::Architecture => "img-round arch-img",
        _ => "img-round",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_class() {
        assert_eq!(image_class(Asset::Architecture), "img-round arch-img");
        assert_eq!(image_class(Asset::JobsChart), "img-round");
    }
}
