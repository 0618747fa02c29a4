use serde::Serialize;

use crate::decorations::HeatmapCell;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileViewModel {
    pub login: String,
    pub name: String,
    pub avatar_url: String,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub blog: Option<String>,
    pub joined: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatTileViewModel {
    pub label: &'static str,
    pub icon: &'static str,
    pub value: u32,
    pub delay: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RepositoryCardViewModel {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub url: String,
    pub stars: u32,
    pub forks: u32,
    pub language: Option<String>,
    pub language_color: String,
    pub topics: Vec<String>,
    pub updated: String,
    pub delay: f32,
}

#[derive(Debug, Serialize)]
pub struct ErrorViewModel {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ReadyViewModel {
    pub profile: ProfileViewModel,
    pub stats: Vec<StatTileViewModel>,
    pub repositories: Vec<RepositoryCardViewModel>,
    pub heatmap: Vec<HeatmapCell>,
    pub heatmap_legend: Vec<&'static str>,
}

/// What the GitHub section shows, one variant per fetch state.
#[derive(Debug)]
pub enum PanelView {
    Loading,
    Error(ErrorViewModel),
    Ready(Box<ReadyViewModel>),
}

impl PanelView {
    pub fn template_name(&self) -> &'static str {
        match self {
            PanelView::Loading => "github/loading",
            PanelView::Error(_) => "github/error",
            PanelView::Ready(_) => "github/ready",
        }
    }
}
