use reqwest::header::{HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::config::PanelConfig;
use crate::error::{PanelError, Resource, Result};
use crate::models::profile_summary::ProfileSummary;
use crate::models::repository_summary::RepositorySummary;

pub const REPOSITORY_PAGE_SIZE: usize = 6;

const USER_AGENT_VALUE: &str = concat!("portfolio-site/", env!("CARGO_PKG_VERSION"));
const ACCEPT_VALUE: &str = "application/vnd.github.v3+json";

/// Reads the configured user's profile and latest repositories from the GitHub REST API.
pub struct GitHubProfileService {
    pub client: Client,
    pub config: PanelConfig,
}

impl GitHubProfileService {
    pub fn new(client: Client, config: PanelConfig) -> Self {
        GitHubProfileService { client, config }
    }

    pub fn profile_url(&self) -> String {
        format!(
            "{}/users/{}",
            self.config.api_base,
            urlencoding::encode(&self.config.handle)
        )
    }

    pub fn repositories_url(&self) -> String {
        format!(
            "{}/users/{}/repos?sort=updated&per_page={}",
            self.config.api_base,
            urlencoding::encode(&self.config.handle),
            REPOSITORY_PAGE_SIZE
        )
    }

    /// A GET with the API headers, plus `Authorization: token ...` when a credential is set.
    pub fn request(&self, url: &str) -> Result<RequestBuilder> {
        let mut builder = self
            .client
            .get(url)
            .header(USER_AGENT, USER_AGENT_VALUE)
            .header(ACCEPT, ACCEPT_VALUE);

        if let Some(credential) = self.config.credential() {
            let mut value = HeaderValue::from_str(&format!("token {}", credential))
                .map_err(|_| PanelError::InvalidCredential)?;
            value.set_sensitive(true);
            builder = builder.header(AUTHORIZATION, value);
        }

        Ok(builder)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String, resource: Resource) -> Result<T> {
        log::info!("Making request to {}...", url);

        let response = self
            .request(&url)?
            .send()
            .await
            .map_err(|source| PanelError::Transport { resource, source })?;

        let status = response.status();
        if !status.is_success() {
            log::error!("Request for {} returned {}", resource, status);
            return Err(PanelError::Status { resource, status });
        }

        let contents = response
            .text()
            .await
            .map_err(|source| PanelError::Transport { resource, source })?;
        serde_json::from_str(&contents).map_err(|source| PanelError::Decode { resource, source })
    }

    pub async fn get_profile(&self) -> Result<ProfileSummary> {
        self.get_json(self.profile_url(), Resource::Profile).await
    }

    /// Most recently updated repositories, in the order the API returned them.
    pub async fn get_recent_repositories(&self) -> Result<Vec<RepositorySummary>> {
        let mut repositories: Vec<RepositorySummary> =
            self.get_json(self.repositories_url(), Resource::Repositories).await?;
        repositories.truncate(REPOSITORY_PAGE_SIZE);
        Ok(repositories)
    }

    /// Runs both requests concurrently. The profile's error wins when both fail;
    /// a successful half is discarded when the other half fails.
    pub async fn fetch_panel_data(&self) -> Result<(ProfileSummary, Vec<RepositorySummary>)> {
        let (profile, repositories) = tokio::join!(self.get_profile(), self.get_recent_repositories());
        let profile = profile?;
        let repositories = repositories?;
        log::info!(
            "Fetched GitHub data for {}: {} repositories",
            profile.login,
            repositories.len()
        );
        Ok((profile, repositories))
    }
}
