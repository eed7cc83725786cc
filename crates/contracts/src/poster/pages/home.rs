use crate::enums::SelectedView;
use crate::poster::model::{Block, Heading, PageContent, Section};
use crate::poster::{Asset, SITE_TITLE};

pub fn page() -> PageContent {
    PageContent {
        view: SelectedView::Home,
        title: None,
        divider: false,
        blocks: vec![
            Block::Hero {
                image: Asset::Woods,
                title: SITE_TITLE,
                subtitle: "Real-Time Acoustic Sensing Supercomputer at Scale with Chameleon",
            },
            Section::new(Heading::h2("Acoustic Sensing"))
                .paragraph(
                    "Listening devices are deployed to record wildlife sounds, allowing researchers \
                     to non-intrusively study animal behavior and assess habitat health through the \
                     analysis of soundscapes. Such data can involve petabytes of data from thousands \
                     of sensors.",
                )
                .into(),
            Section::new(Heading::h2(
                "Current technology: Not real-time, limited scalability",
            ))
            .list([
                "Existing recorders are not real-time, don't communicate status, and are expensive.",
                "Experts are required to manually retrieve data by opening up each sensor.",
                "This cost and effort greatly limits scalability, with about 5% of recordings lost.",
            ])
            .into(),
            Section::new(Heading::h2("Real-Time"))
                .paragraph(
                    "Real-time, continuous data is far more useful for soundscapes than low duty \
                     cycle, compressed, or stale data: you can act on insights in real time!",
                )
                .into(),
            Section::new(Heading::h2("Goal"))
                .paragraph(
                    "To reliably stream and analyze real-time, continuous raw audio data from \
                     thousands of Listeners for years at a time at low power and low cost, and to \
                     enable easy deployment, visualization, storage, and management. To increase \
                     scalability, our system will not require manual data retrieval or regular \
                     maintenance, and will be usable by non-experts.",
                )
                .into(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_comes_first() {
        let page = page();
        assert!(matches!(
            page.blocks.first(),
            Some(Block::Hero { title, image: Asset::Woods, .. }) if *title == SITE_TITLE
        ));
    }

    #[test]
    fn test_four_sections_after_hero() {
        let headings: Vec<_> = page()
            .blocks
            .iter()
            .filter_map(|b| match b {
                Block::Section(s) => s.heading.map(|h| h.text),
                _ => None,
            })
            .collect();
        assert_eq!(
            headings,
            [
                "Acoustic Sensing",
                "Current technology: Not real-time, limited scalability",
                "Real-Time",
                "Goal",
            ]
        );
    }
}
