#![allow(dead_code)]

use std::sync::Arc;

use httpmock::MockServer;
use reqwest::Client;
use serde_json::{json, Value};

use portfolio_site::config::PanelConfig;
use portfolio_site::panels::profile_data_panel::ProfileDataPanel;
use portfolio_site::services::github_profile_service::GitHubProfileService;

pub const HANDLE: &str = "octocat";

pub fn user_json() -> Value {
    json!({
        "login": "octocat",
        "id": 583231,
        "node_id": "MDQ6VXNlcjU4MzIzMQ==",
        "name": "The Octocat",
        "avatar_url": "https://avatars.githubusercontent.com/u/583231?v=4",
        "bio": "Just a cat",
        "location": "San Francisco",
        "blog": "https://github.blog",
        "public_repos": 8,
        "followers": 1200,
        "following": 9,
        "created_at": "2011-01-25T18:44:36Z",
        "type": "User"
    })
}

pub fn repo_json(id: u64, name: &str, language: Option<&str>, topics: &[&str]) -> Value {
    json!({
        "id": id,
        "name": name,
        "full_name": format!("octocat/{}", name),
        "description": format!("{} description", name),
        "html_url": format!("https://github.com/octocat/{}", name),
        "stargazers_count": id * 2,
        "forks_count": id,
        "watchers_count": id * 2,
        "language": language,
        "updated_at": "2024-01-05T00:00:00Z",
        "topics": topics,
        "private": false
    })
}

pub fn service_for(server: &MockServer, credential: Option<&str>) -> Arc<GitHubProfileService> {
    let config = PanelConfig::new(HANDLE, credential.map(String::from), &server.base_url()).unwrap();
    Arc::new(GitHubProfileService::new(Client::new(), config))
}

pub fn panel_for(server: &MockServer, credential: Option<&str>) -> ProfileDataPanel {
    ProfileDataPanel::mount(service_for(server, credential))
}
