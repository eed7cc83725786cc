use crate::enums::SelectedView;
use crate::poster::model::{Block, Column, Heading, PageContent, Section};
use crate::poster::Asset;

pub fn page() -> PageContent {
    PageContent {
        view: SelectedView::Approach,
        title: Some("Approach"),
        divider: true,
        blocks: vec![
            Block::Columns(vec![
                Column::of(vec![network_considerations().into()]),
                Column::of(vec![Block::Image(Asset::Architecture)]),
            ]),
            Section::new(Heading::h2("Solution")).into(),
            Block::Columns(vec![
                Column::of(vec![listener().into()]),
                Column::of(vec![aggregator().into()]),
            ]),
        ],
    }
}

fn network_considerations() -> Section {
    Section::new(Heading::h2("Network Considerations")).list([
        "Acoustic sensing produces too much data to use MeshTastic or LoRa.",
        "We require more range than WiFi or Bluetooth provide.",
        "Satellite & cellular are too costly and require too much power.",
        "We need to limit the number of infrastructure nodes.",
    ])
}

fn listener() -> Section {
    Section::new(Heading::h3("Listener")).list([
        "Built with ESP32S3, AudioMoth Dev MEMS mic, WiFi HaLow, and solar power system to meet \
         power budget of 0.75 W.",
        "Streaming is configurable.",
        "For tests, we use 48KHz 16bit (768 kbps).",
    ])
}

fn aggregator() -> Section {
    Section::new(Heading::h3("Aggregator")).list([
        "Built with Raspberry Pi 5 and WiFi HaLow Router.",
        "Designed for 25 concurrent Listeners, running BirdNET for analysis on all streams.",
        "Uploads raw data, analysis results, metrics & logs to Chameleon KVM and object store.",
        "Chameleon side can be scaled to handle hundreds of Aggregators, thousands of Listeners.",
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hardware_comparison_has_two_columns() {
        let page = page();
        let Some(Block::Columns(columns)) = page.blocks.last() else {
            panic!("comparison grid missing");
        };
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].blocks, vec![Block::from(listener())]);
        assert_eq!(columns[1].blocks, vec![Block::from(aggregator())]);
    }

    #[test]
    fn test_solution_heading_has_no_body() {
        assert_eq!(page().blocks[1], Block::from(Section::new(Heading::h2("Solution"))));
    }

    #[test]
    fn test_power_budget_is_literal() {
        assert!(page().plain_text().contains("power budget of 0.75 W"));
    }
}
