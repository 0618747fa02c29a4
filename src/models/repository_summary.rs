use serde::{Deserialize, Serialize};

/// One entry of `/users/{handle}/repos`. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositorySummary {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub html_url: String,
    pub stargazers_count: u32,
    pub forks_count: u32,
    #[serde(default)]
    pub language: Option<String>,
    pub updated_at: String,
    #[serde(default)]
    pub topics: Vec<String>,
}
