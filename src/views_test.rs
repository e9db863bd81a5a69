use super::*;
use crate::config::{ApiProfile, Target};
use serde_json::json;

fn player(id: &str, name: &str, rating: f64, wins: u32, losses: u32) -> Player {
    Player {
        id: id.into(),
        name: name.into(),
        rating,
        games_played: wins + losses,
        wins,
        losses,
        created_at: None,
        updated_at: None,
        version: None,
    }
}

struct FixedTransport(Value);

#[async_trait::async_trait]
impl HttpTransport for FixedTransport {
    async fn get(&self, _target: Target, _path: &str) -> Result<Value, ApiError> {
        Ok(self.0.clone())
    }

    async fn post(&self, _target: Target, _path: &str, _body: &Value) -> Result<Value, ApiError> {
        Ok(self.0.clone())
    }
}

#[test]
fn ranking_lists_players_in_given_order() {
    let out = render_ranking(&[player("p2", "Zoe", 1620.0, 15, 5), player("p1", "Ana", 1540.25, 8, 4)]);
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("Player") && lines[0].contains("Rating"));
    assert!(lines[1].trim_start().starts_with("1  Zoe"));
    assert!(lines[1].contains("1620.0"));
    assert!(lines[2].trim_start().starts_with("2  Ana"));
    assert!(lines[2].contains("1540.2") || lines[2].contains("1540.3"));
}

#[test]
fn ranking_empty_has_placeholder() {
    assert_eq!(render_ranking(&[]), "No players ranked yet.\n");
}

#[test]
fn matches_render_winner_loser_and_score() {
    let records = vec![json!({
        "winnerId": "p1",
        "loserId": "p2",
        "players": [{ "playerId": "p2", "score": 8 }, { "playerId": "p1", "score": 11 }]
    })];

    assert_eq!(render_matches(&records), "p1 beat p2 11-8\n");
}

#[test]
fn matches_use_names_of_populated_players() {
    let records = vec![json!({
        "winnerId": { "_id": "p1", "name": "Ana" },
        "loserId": { "_id": "p2", "name": "Bo" },
        "players": [
            { "playerId": { "_id": "p1", "name": "Ana" }, "score": 11 },
            { "playerId": { "_id": "p2", "name": "Bo" }, "score": 4 }
        ]
    })];

    assert_eq!(render_matches(&records), "Ana beat Bo 11-4\n");
}

#[test]
fn populated_sides_match_plain_player_ids() {
    let records = vec![json!({
        "winnerId": { "_id": "p1", "name": "Ana" },
        "loserId": { "_id": "p2", "name": "Bo" },
        "players": [{ "playerId": "p1", "score": 11 }, { "playerId": "p2", "score": 4 }]
    })];

    assert_eq!(render_matches(&records), "Ana beat Bo 11-4\n");
}

#[test]
fn plain_sides_match_populated_player_entries() {
    let records = vec![json!({
        "winnerId": "p1",
        "loserId": "p2",
        "players": [
            { "playerId": { "_id": "p2", "name": "Bo" }, "score": 4 },
            { "playerId": { "_id": "p1", "name": "Ana" }, "score": 11 }
        ]
    })];

    assert_eq!(render_matches(&records), "p1 beat p2 11-4\n");
}

#[test]
fn matches_without_scores_omit_them() {
    let records = vec![json!({ "winnerId": "a", "loserId": "b" })];
    assert_eq!(render_matches(&records), "a beat b\n");
}

#[test]
fn unknown_match_shape_falls_back_to_json() {
    let records = vec![json!({ "note": "walkover" })];
    assert_eq!(render_matches(&records), "{\"note\":\"walkover\"}\n");
}

#[test]
fn matches_empty_has_placeholder() {
    assert_eq!(render_matches(&[]), "No matches recorded yet.\n");
}

#[tokio::test]
async fn render_view_fetches_ranking() {
    let body = json!([{ "_id": "p1", "name": "Ana", "rating": 1500, "gamesPlayed": 1, "wins": 1, "losses": 0 }]);
    let client = ApiClient::with_transport(FixedTransport(body), ApiProfile::Split);

    let out = render_view(View::Ranking, &client).await.unwrap();

    assert!(out.contains("Ana"));
}

#[tokio::test]
async fn render_view_fetches_matches() {
    let body = json!([{ "winnerId": "a", "loserId": "b" }]);
    let client = ApiClient::with_transport(FixedTransport(body), ApiProfile::Split);

    let out = render_view(View::Matches, &client).await.unwrap();

    assert_eq!(out, "a beat b\n");
}
