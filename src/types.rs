//! Wire types exchanged with the ranking backend.
//!
//! DESIGN
//! ======
//! Plain DTOs, built per call and dropped. Field names follow the backend's
//! camelCase JSON (including the document-store `_id` / `__v` fields), so a
//! record decodes and re-encodes without renaming anything.

use serde::{Deserialize, Serialize};

// =============================================================================
// PLAYERS
// =============================================================================

/// A player as returned by `GET /players` and `GET /players/ranking`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub rating: f64,
    pub games_played: u32,
    pub wins: u32,
    pub losses: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(rename = "__v", default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
}

// =============================================================================
// MATCHES
// =============================================================================

/// One player's score inside a [`MatchSubmission`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerScore {
    pub player_id: String,
    pub score: u32,
}

impl PlayerScore {
    #[must_use]
    pub fn new(player_id: impl Into<String>, score: u32) -> Self {
        Self { player_id: player_id.into(), score }
    }
}

/// Payload for `POST /matches`. Only the shape is enforced here; the backend
/// owns validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSubmission {
    pub players: Vec<PlayerScore>,
    pub winner_id: String,
    pub loser_id: String,
}

impl MatchSubmission {
    /// Build a two-player submission, winner first.
    #[must_use]
    pub fn new(winner: PlayerScore, loser: PlayerScore) -> Self {
        let winner_id = winner.player_id.clone();
        let loser_id = loser.player_id.clone();
        Self { players: vec![winner, loser], winner_id, loser_id }
    }
}

/// A match record from `GET /matches`. The backend defines its shape.
pub type MatchRecord = serde_json::Value;

/// Whatever `POST /matches` answers with.
pub type SubmitResponse = serde_json::Value;

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
