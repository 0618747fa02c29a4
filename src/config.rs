use std::fmt;

use crate::error::{PanelError, Result};
use crate::validators;

pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Everything the GitHub panel needs to know, resolved once at startup.
///
/// The credential is private and never printed: `Debug` redacts it.
#[derive(Clone)]
pub struct PanelConfig {
    pub handle: String,
    pub api_base: String,
    credential: Option<String>,
}

impl PanelConfig {
    pub fn new(handle: &str, credential: Option<String>, api_base: &str) -> Result<Self> {
        let handle = handle.trim();
        if !validators::is_github_handle(handle) {
            return Err(PanelError::InvalidConfig {
                message: format!("'{}' is not a valid GitHub handle", handle),
            });
        }

        let api_base = api_base.trim().trim_end_matches('/');
        if !api_base.starts_with("http://") && !api_base.starts_with("https://") {
            return Err(PanelError::InvalidConfig {
                message: format!("API base '{}' must be an http(s) URL", api_base),
            });
        }

        // An empty GITHUB_TOKEN is the same as no token at all.
        let credential = credential
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());

        Ok(PanelConfig {
            handle: handle.to_string(),
            api_base: api_base.to_string(),
            credential,
        })
    }

    pub fn credential(&self) -> Option<&str> {
        self.credential.as_deref()
    }
}

impl fmt::Debug for PanelConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PanelConfig")
            .field("handle", &self.handle)
            .field("api_base", &self.api_base)
            .field("credential", &self.credential.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
