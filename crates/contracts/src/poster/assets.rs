//! Static images referenced by the poster pages.
//!
//! Files are served as-is from [`ASSET_BASE`]; nothing is fetched lazily.

/// URL prefix the bundled images are served from
pub const ASSET_BASE: &str = "/assets/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Asset {
    /// Forest scene in the Home hero
    Woods,
    /// Divider banner above every non-Home heading
    Wave,
    Architecture,
    /// CPU utilization, upload and analyze together
    BothChart,
    AnalyzeChart,
    UploadChart,
    /// Redis job queue depth
    JobsChart,
}

impl Asset {
    pub fn file_name(&self) -> &'static str {
        match self {
            Asset::Woods => "woods.png",
            Asset::Wave => "wave.png",
            Asset::Architecture => "architecture.jpeg",
            Asset::BothChart => "both.jpg",
            Asset::AnalyzeChart => "analyze.jpg",
            Asset::UploadChart => "upload.jpg",
            Asset::JobsChart => "jobs.jpg",
        }
    }

    pub fn alt(&self) -> &'static str {
        match self {
            Asset::Woods => "Ecological forest",
            Asset::Wave => "Wave design divider",
            Asset::Architecture => "System architecture",
            Asset::BothChart => "CPU utilization, upload and analyze",
            Asset::AnalyzeChart => "CPU utilization, analyze only",
            Asset::UploadChart => "CPU utilization, upload only",
            Asset::JobsChart => "Redis job queue depth",
        }
    }

    /// URL of the file relative to the site root
    pub fn url(&self) -> String {
        format!("{}{}", ASSET_BASE, self.file_name())
    }

    pub fn all() -> [Asset; 7] {
        [
            Asset::Woods,
            Asset::Wave,
            Asset::Architecture,
            Asset::BothChart,
            Asset::AnalyzeChart,
            Asset::UploadChart,
            Asset::JobsChart,
        ]
    }
}
