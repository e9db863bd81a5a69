//! API configuration parsed from environment variables.

use std::fmt;
use std::str::FromStr;

use crate::api::ApiError;

pub const DEFAULT_BACKEND_URL: &str = "http://pingpong-xrback-production.up.railway.app";
pub const DEFAULT_LOCAL_URL: &str = "http://localhost:4000";

/// Which configured base URL a request is sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Backend,
    Local,
}

/// One of the four client operations. Used to pick a [`Target`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    FetchRanking,
    FetchPlayers,
    FetchMatches,
    SubmitMatch,
}

/// Maps each operation to a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiProfile {
    /// Ranking and match history from the backend; players and submissions
    /// against the local server.
    #[default]
    Split,
    /// Everything against the local server.
    Local,
    /// Everything against the backend.
    Remote,
}

impl ApiProfile {
    #[must_use]
    pub fn target(self, op: Operation) -> Target {
        match self {
            Self::Local => Target::Local,
            Self::Remote => Target::Backend,
            Self::Split => match op {
                Operation::FetchRanking | Operation::FetchMatches => Target::Backend,
                Operation::FetchPlayers | Operation::SubmitMatch => Target::Local,
            },
        }
    }
}

impl FromStr for ApiProfile {
    type Err = ApiError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "split" => Ok(Self::Split),
            "local" => Ok(Self::Local),
            "remote" => Ok(Self::Remote),
            other => Err(ApiError::ConfigParse(format!(
                "unknown PINGPONG_API_PROFILE '{other}' (expected 'split', 'local' or 'remote')"
            ))),
        }
    }
}

impl fmt::Display for ApiProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Split => "split",
            Self::Local => "local",
            Self::Remote => "remote",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub backend_url: String,
    pub local_url: String,
    pub profile: ApiProfile,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            local_url: DEFAULT_LOCAL_URL.to_string(),
            profile: ApiProfile::default(),
        }
    }
}

impl ApiConfig {
    /// Build a config from explicit base URLs. Trailing slashes are stripped.
    #[must_use]
    pub fn new(backend_url: &str, local_url: &str, profile: ApiProfile) -> Self {
        Self {
            backend_url: trim_url(backend_url),
            local_url: trim_url(local_url),
            profile,
        }
    }

    /// Build typed API config from environment variables.
    ///
    /// Optional:
    /// - `PINGPONG_BACKEND_URL`: default [`DEFAULT_BACKEND_URL`]
    /// - `PINGPONG_LOCAL_URL`: default [`DEFAULT_LOCAL_URL`]
    /// - `PINGPONG_API_PROFILE`: `split` (default), `local` or `remote`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ConfigParse`] for an unknown profile.
    pub fn from_env() -> Result<Self, ApiError> {
        let profile = match std::env::var("PINGPONG_API_PROFILE") {
            Ok(raw) => raw.parse()?,
            Err(_) => ApiProfile::default(),
        };
        let backend_url = std::env::var("PINGPONG_BACKEND_URL").unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string());
        let local_url = std::env::var("PINGPONG_LOCAL_URL").unwrap_or_else(|_| DEFAULT_LOCAL_URL.to_string());
        Ok(Self::new(&backend_url, &local_url, profile))
    }

    /// Base URL for a target, without a trailing slash.
    #[must_use]
    pub fn base_url(&self, target: Target) -> &str {
        match target {
            Target::Backend => &self.backend_url,
            Target::Local => &self.local_url,
        }
    }
}

fn trim_url(raw: &str) -> String {
    raw.trim_end_matches('/').to_string()
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
