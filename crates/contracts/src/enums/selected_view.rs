use serde::{Deserialize, Serialize};

/// Tab currently shown on the poster site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectedView {
    #[default]
    Home,
    Approach,
    Results,
    Team,
}

impl SelectedView {
    /// Stable lowercase code
    pub fn code(&self) -> &'static str {
        match self {
            SelectedView::Home => "home",
            SelectedView::Approach => "approach",
            SelectedView::Results => "results",
            SelectedView::Team => "team",
        }
    }

    /// Label on the navigation button
    pub fn display_name(&self) -> &'static str {
        match self {
            SelectedView::Home => "Home",
            SelectedView::Approach => "Approach",
            SelectedView::Results => "Results",
            SelectedView::Team => "Team",
        }
    }

    pub fn aria_label(&self) -> &'static str {
        match self {
            SelectedView::Home => "Go to Home",
            SelectedView::Approach => "Go to Approach",
            SelectedView::Results => "Go to Results",
            SelectedView::Team => "Go to Team",
        }
    }

    /// All views in navigation order
    pub fn all() -> [SelectedView; 4] {
        [
            SelectedView::Home,
            SelectedView::Approach,
            SelectedView::Results,
            SelectedView::Team,
        ]
    }

    /// Parse from code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "home" => Some(SelectedView::Home),
            "approach" => Some(SelectedView::Approach),
            "results" => Some(SelectedView::Results),
            "team" => Some(SelectedView::Team),
            _ => None,
        }
    }

    /// Total variant of [`SelectedView::from_code`]: anything unknown is Home.
    pub fn from_code_or_home(code: &str) -> Self {
        Self::from_code(code).unwrap_or_default()
    }
}

impl std::fmt::Display for SelectedView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
