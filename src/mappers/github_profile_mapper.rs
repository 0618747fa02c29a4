use crate::decorations::{self, HeatmapCell};
use crate::mappers::language_color_mapper::LanguageColorMapper;
use crate::models::fetch_state::FetchState;
use crate::models::panel_view::{
    ErrorViewModel, PanelView, ProfileViewModel, ReadyViewModel, RepositoryCardViewModel, StatTileViewModel,
};
use crate::models::profile_summary::ProfileSummary;
use crate::models::repository_summary::RepositorySummary;
use crate::time;

pub const VISIBLE_TOPICS: usize = 3;
const NO_DESCRIPTION: &str = "No description available";
const AVATAR_PLACEHOLDER: &str = "/placeholder.svg";

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().map(|v| v.trim()).filter(|v| !v.is_empty()).map(String::from)
}

pub fn to_profile_view(model: &ProfileSummary) -> ProfileViewModel {
    let avatar_url = if model.avatar_url.is_empty() {
        AVATAR_PLACEHOLDER.to_string()
    } else {
        model.avatar_url.clone()
    };

    ProfileViewModel {
        login: model.login.clone(),
        name: non_empty(&model.name).unwrap_or_else(|| model.login.clone()),
        avatar_url,
        bio: non_empty(&model.bio),
        location: non_empty(&model.location),
        blog: non_empty(&model.blog),
        joined: time::format_date(&model.created_at),
    }
}

pub fn to_stat_tiles(model: &ProfileSummary) -> Vec<StatTileViewModel> {
    vec![
        StatTileViewModel { label: "Public Repositories", icon: "book-open", value: model.public_repos, delay: 0.2 },
        StatTileViewModel { label: "Followers", icon: "users", value: model.followers, delay: 0.4 },
        StatTileViewModel { label: "Following", icon: "git-branch", value: model.following, delay: 0.6 },
    ]
}

pub fn to_repository_card(
    model: &RepositorySummary,
    index: usize,
    colors: &LanguageColorMapper,
) -> RepositoryCardViewModel {
    let language = non_empty(&model.language);
    let language_color = colors.to_color(language.as_deref().unwrap_or_default()).to_string();

    RepositoryCardViewModel {
        id: model.id,
        name: model.name.clone(),
        description: non_empty(&model.description).unwrap_or_else(|| NO_DESCRIPTION.to_string()),
        url: model.html_url.clone(),
        stars: model.stargazers_count,
        forks: model.forks_count,
        language,
        language_color,
        topics: model.topics.iter().take(VISIBLE_TOPICS).cloned().collect(),
        updated: time::format_date(&model.updated_at),
        delay: index as f32 * 0.1,
    }
}

/// Derives everything the GitHub section renders from the current state.
///
/// `heatmap` is only used for the ready view; it is decoration, not data.
pub fn to_panel_view(state: &FetchState, colors: &LanguageColorMapper, heatmap: Vec<HeatmapCell>) -> PanelView {
    match state {
        FetchState::Loading => PanelView::Loading,
        FetchState::Error(message) => PanelView::Error(ErrorViewModel { message: message.clone() }),
        FetchState::Ready { profile, repositories } => PanelView::Ready(Box::new(ReadyViewModel {
            profile: to_profile_view(profile),
            stats: to_stat_tiles(profile),
            repositories: repositories
                .iter()
                .enumerate()
                .map(|(i, repo)| to_repository_card(repo, i, colors))
                .collect(),
            heatmap,
            heatmap_legend: decorations::heatmap_legend(),
        })),
    }
}
