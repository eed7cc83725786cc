use crate::enums::SelectedView;
use crate::poster::model::{Block, Column, Heading, PageContent, Section};
use crate::poster::Asset;

pub fn page() -> PageContent {
    PageContent {
        view: SelectedView::Results,
        title: Some("Results"),
        divider: true,
        blocks: vec![
            prototype_specs().into(),
            aggregator_testing().into(),
            Block::Columns(vec![
                Column::of(vec![cpu_utilization().into()]),
                Column::of(vec![Block::Image(Asset::BothChart)]),
            ]),
            Block::Columns(vec![
                Column::of(vec![Block::Image(Asset::AnalyzeChart)]),
                Column::of(vec![Block::Image(Asset::UploadChart)]),
            ]),
            Block::Columns(vec![
                Column::of(vec![job_queue_depth().into()]),
                Column::of(vec![Block::Image(Asset::JobsChart)]),
            ]),
        ],
    }
}

fn prototype_specs() -> Section {
    Section::new(Heading::h2("Prototype Specs")).list([
        "Affordable: Each Listener costs $375, compared to $1000 for comparison device.",
        "Low power: Listener average current is 129 mA and can be cut in half. Aggregator average \
         power is 6 W.",
        "Aggregator multitasking: Tests show success with 25 concurrent Listeners.",
        "Reliability & Accuracy: Tests show success at keeping up with 25 concurrent Listeners.",
        "Robust to failures: Onboard 512GB MicroSD on Listener is used for buffer when network or \
         Aggregator are down, with catch-up logic. Seamlessly handles up to 1 week of downtime.",
        "Manual effort saved: No manual data retrieval, no expert maintenance, hugely reduces \
         overall cost because experts do not have to spend months on location tending to devices.",
    ])
}

fn aggregator_testing() -> Section {
    Section::new(Heading::h2("Aggregator Testing")).list([
        "We tested simulated Listeners with the Raspberry Pi Aggregator to benchmark Aggregator \
         performance as measured by CPU utilization and Redis Job Queue Depth.",
        "Three simulated scenarios were tested: 1, 15, and 25 Listener streams.",
        "For each number of simulated Listeners, we test the Uploader and Analyser simultaneously, \
         the Uploader alone, and the Analyser alone, each for 10 minutes, with readings captured \
         every 5 seconds.",
    ])
}

fn cpu_utilization() -> Section {
    Section::new(Heading::h2("CPU Utilization")).list([
        "The average CPU utilization for 1, 15 and 25 simulated listeners in the simultaneous \
         upload and analyze task was 3.5%, 45.1% and 81.0%, respectively",
        "For analyze alone, the average CPU utilization was 2.9%, 41.7%, and 69.9%, respectively",
        "For upload alone, the average CPU utilization was 1.3%, 9.2%, and 13.9%, respectively",
    ])
}

fn job_queue_depth() -> Section {
    Section::new(Heading::h2("Redis Job Queue Depth")).list([
        "The average job queue depth for 1, 15 and 25 simulated listeners in the upload task was \
         1, 15.6, and 25.8, respectively",
        "For the analyze task, the average job queue depth was 1, 15.6, and 25.7, respectively",
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_benchmark_figures_are_literal() {
        let text = page().plain_text();
        for figure in ["3.5%, 45.1% and 81.0%", "2.9%, 41.7%, and 69.9%", "1.3%, 9.2%, and 13.9%"] {
            assert!(text.contains(figure), "missing {figure}");
        }
        assert!(text.contains("1, 15.6, and 25.8"));
        assert!(text.contains("1, 15.6, and 25.7"));
    }

    #[test]
    fn test_sections_in_order() {
        let text = page().plain_text();
        let specs = text.find("Prototype Specs").unwrap();
        let testing = text.find("Aggregator Testing").unwrap();
        let cpu = text.find("CPU Utilization").unwrap();
        let queue = text.find("Redis Job Queue Depth\n").unwrap();
        assert!(specs < testing && testing < cpu && cpu < queue);
    }
}
