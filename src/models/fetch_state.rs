use crate::error::PanelError;
use crate::models::profile_summary::ProfileSummary;
use crate::models::repository_summary::RepositorySummary;

/// Lifecycle of the GitHub panel's data.
///
/// Starts as `Loading` and moves to `Error` or `Ready` exactly once.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState {
    Loading,
    Error(String),
    Ready {
        profile: ProfileSummary,
        repositories: Vec<RepositorySummary>,
    },
}

impl FetchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }
}

impl From<Result<(ProfileSummary, Vec<RepositorySummary>), PanelError>> for FetchState {
    fn from(outcome: Result<(ProfileSummary, Vec<RepositorySummary>), PanelError>) -> Self {
        match outcome {
            Ok((profile, repositories)) => FetchState::Ready {
                profile,
                repositories,
            },
            Err(e) => FetchState::Error(e.to_string()),
        }
    }
}
