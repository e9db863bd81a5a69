//! API client for the ranking backend.
//!
//! DESIGN
//! ======
//! Four stateless operations over an [`HttpTransport`]. Each one either
//! returns the decoded response body or logs the failure and hands back the
//! transport's error unchanged. No retry, no backoff, no timeouts: a failed
//! call surfaces exactly once.
//!
//! The [`ApiProfile`] decides which base URL each operation goes to, so one
//! client covers both the split backend/local deployment and the all-local
//! one.

pub mod transport;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::error;

use crate::config::{ApiConfig, ApiProfile, Operation};
use crate::types::{MatchRecord, MatchSubmission, Player, SubmitResponse};

pub use crate::config::Target;
pub use transport::ReqwestTransport;

pub const RANKING_PATH: &str = "/players/ranking";
pub const PLAYERS_PATH: &str = "/players";
pub const MATCHES_PATH: &str = "/matches";

// =============================================================================
// ERRORS
// =============================================================================

/// Transport or HTTP failure. Variants record where the call failed; callers
/// are not expected to branch on them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The request could not be sent or the response could not be read.
    #[error("API request failed: {0}")]
    Request(String),

    /// The server answered with a non-success HTTP status.
    #[error("API response error: status {status}")]
    Status { status: u16, body: String },

    /// The request body could not be encoded as JSON.
    #[error("API request encode failed: {0}")]
    Encode(String),

    /// The response body did not decode into the expected shape.
    #[error("API response parse failed: {0}")]
    Decode(String),
}

// =============================================================================
// TRANSPORT
// =============================================================================

/// JSON-over-HTTP seam. Enables mocking in tests.
#[async_trait::async_trait]
pub trait HttpTransport: Send + Sync {
    /// `GET {base(target)}{path}` and return the JSON body.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails, the status is not a
    /// success, or the body is not JSON.
    async fn get(&self, target: Target, path: &str) -> Result<Value, ApiError>;

    /// `POST {base(target)}{path}` with a JSON body and return the JSON body.
    ///
    /// # Errors
    ///
    /// Same as [`HttpTransport::get`].
    async fn post(&self, target: Target, path: &str, body: &Value) -> Result<Value, ApiError>;
}

// =============================================================================
// CLIENT
// =============================================================================

pub struct ApiClient<T = ReqwestTransport> {
    transport: T,
    profile: ApiProfile,
}

impl ApiClient<ReqwestTransport> {
    /// Build a reqwest-backed client from a parsed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn from_config(config: ApiConfig) -> Result<Self, ApiError> {
        let profile = config.profile;
        Ok(Self::with_transport(ReqwestTransport::new(config)?, profile))
    }
}

impl<T: HttpTransport> ApiClient<T> {
    #[must_use]
    pub fn with_transport(transport: T, profile: ApiProfile) -> Self {
        Self { transport, profile }
    }

    /// `GET /players/ranking`. Order is whatever the server returns.
    ///
    /// # Errors
    ///
    /// Returns the transport error after logging it.
    pub async fn fetch_ranking(&self) -> Result<Vec<Player>, ApiError> {
        self.get_as(Operation::FetchRanking, RANKING_PATH)
            .await
            .inspect_err(|e| error!(error = %e, "error fetching ranking"))
    }

    /// `GET /players`.
    ///
    /// # Errors
    ///
    /// Returns the transport error after logging it.
    pub async fn fetch_players(&self) -> Result<Vec<Player>, ApiError> {
        self.get_as(Operation::FetchPlayers, PLAYERS_PATH)
            .await
            .inspect_err(|e| error!(error = %e, "error fetching players"))
    }

    /// `GET /matches`.
    ///
    /// # Errors
    ///
    /// Returns the transport error after logging it.
    pub async fn fetch_matches(&self) -> Result<Vec<MatchRecord>, ApiError> {
        self.get_as(Operation::FetchMatches, MATCHES_PATH)
            .await
            .inspect_err(|e| error!(error = %e, "error fetching matches"))
    }

    /// `POST /matches` with the submission as the JSON body.
    ///
    /// # Errors
    ///
    /// Returns the transport error after logging it.
    pub async fn submit_match(&self, submission: &MatchSubmission) -> Result<SubmitResponse, ApiError> {
        self.post_json(Operation::SubmitMatch, MATCHES_PATH, submission)
            .await
            .inspect_err(|e| error!(error = %e, "error submitting match"))
    }

    async fn get_as<R: DeserializeOwned>(&self, op: Operation, path: &str) -> Result<R, ApiError> {
        let body = self.transport.get(self.profile.target(op), path).await?;
        decode(body)
    }

    async fn post_json<B: serde::Serialize>(&self, op: Operation, path: &str, body: &B) -> Result<Value, ApiError> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.transport.post(self.profile.target(op), path, &body).await
    }
}

fn decode<R: DeserializeOwned>(body: Value) -> Result<R, ApiError> {
    serde_json::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
