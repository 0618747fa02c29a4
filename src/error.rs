use std::fmt;

use reqwest::StatusCode;
use thiserror::Error;

/// The two profile API resources the panel reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Profile,
    Repositories,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Profile => write!(f, "user data"),
            Resource::Repositories => write!(f, "repositories"),
        }
    }
}

#[derive(Error, Debug)]
pub enum PanelError {
    #[error("Failed to fetch {resource} ({status})")]
    Status { resource: Resource, status: StatusCode },

    #[error("Failed to fetch {resource}: {source}")]
    Transport {
        resource: Resource,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to decode {resource}: {source}")]
    Decode {
        resource: Resource,
        #[source]
        source: serde_json::Error,
    },

    #[error("Credential is not a valid header value")]
    InvalidCredential,

    #[error("Configuration error: {message}")]
    InvalidConfig { message: String },
}

pub type Result<T> = std::result::Result<T, PanelError>;
