//! Static poster content.
//!
//! `page_for` is the whole view renderer on the data side: one page of
//! literal content per [`SelectedView`]. The frontend turns the result into DOM.

pub mod assets;
pub mod model;
pub mod pages;

pub use assets::{Asset, ASSET_BASE};
pub use model::{Block, Body, Column, Heading, HeadingLevel, Inline, PageContent, Person, Section};

use crate::enums::SelectedView;

pub const SITE_TITLE: &str = "Echoes of the Earth";

/// Static content for the given view.
pub fn page_for(view: SelectedView) -> PageContent {
    match view {
        SelectedView::Approach => pages::approach::page(),
        SelectedView::Results => pages::results::page(),
        SelectedView::Team => pages::team::page(),
        SelectedView::Home => pages::home::page(),
    }
}
