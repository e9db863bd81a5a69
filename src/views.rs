//! Plain-text renderings of the ranking and matches views.

use std::fmt::Write as _;

use serde_json::Value;

use crate::api::{ApiClient, ApiError, HttpTransport};
use crate::router::View;
use crate::types::{MatchRecord, Player};

/// Fetch what `view` shows and render it.
///
/// # Errors
///
/// Returns the API error from the underlying fetch.
pub async fn render_view<T: HttpTransport>(view: View, client: &ApiClient<T>) -> Result<String, ApiError> {
    match view {
        View::Ranking => Ok(render_ranking(&client.fetch_ranking().await?)),
        View::Matches => Ok(render_matches(&client.fetch_matches().await?)),
    }
}

/// Ranking table in the order given.
#[must_use]
pub fn render_ranking(players: &[Player]) -> String {
    if players.is_empty() {
        return "No players ranked yet.\n".to_owned();
    }

    let name_width = players
        .iter()
        .map(|p| p.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Player".len());

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>3}  {:<name_width$}  {:>7}  {:>5}  {:>4}  {:>6}",
        "#", "Player", "Rating", "Games", "Wins", "Losses"
    );
    for (i, p) in players.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>3}  {:<name_width$}  {:>7.1}  {:>5}  {:>4}  {:>6}",
            i + 1,
            p.name,
            p.rating,
            p.games_played,
            p.wins,
            p.losses
        );
    }
    out
}

/// One line per match record.
#[must_use]
pub fn render_matches(matches: &[MatchRecord]) -> String {
    if matches.is_empty() {
        return "No matches recorded yet.\n".to_owned();
    }

    let mut out = String::new();
    for record in matches {
        let _ = writeln!(out, "{}", match_line(record));
    }
    out
}

fn match_line(record: &Value) -> String {
    let winner = player_ref(record.get("winnerId"));
    let loser = player_ref(record.get("loserId"));
    let (Some(winner), Some(loser)) = (winner, loser) else {
        return record.to_string();
    };
    let (w_label, l_label) = (winner.label, loser.label);
    match (score_of(record, winner.id), score_of(record, loser.id)) {
        (Some(w), Some(l)) => format!("{w_label} beat {l_label} {w}-{l}"),
        _ => format!("{w_label} beat {l_label}"),
    }
}

/// A player reference: matched by `id`, shown as `label`.
struct PlayerRef<'a> {
    id: &'a str,
    label: &'a str,
}

/// References arrive either as plain id strings or as populated player
/// documents.
fn player_ref(value: Option<&Value>) -> Option<PlayerRef<'_>> {
    match value? {
        Value::String(id) => Some(PlayerRef { id, label: id }),
        Value::Object(doc) => {
            let id = doc.get("_id").and_then(Value::as_str);
            let name = doc.get("name").and_then(Value::as_str);
            let id = id.or(name)?;
            Some(PlayerRef { id, label: name.unwrap_or(id) })
        }
        _ => None,
    }
}

fn score_of(record: &Value, player_id: &str) -> Option<u64> {
    record.get("players")?.as_array()?.iter().find_map(|entry| {
        let entry_ref = player_ref(entry.get("playerId"))?;
        if entry_ref.id == player_id { entry.get("score")?.as_u64() } else { None }
    })
}

#[cfg(test)]
#[path = "views_test.rs"]
mod tests;
