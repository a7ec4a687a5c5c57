//! Unit tests for wire types

use super::*;
use chrono::TimeZone;
use serde_json::json;

#[test]
fn test_game_deserializes_completed_row() {
    let row = json!({
        "id": 12345,
        "season": 2026,
        "startDate": "2025-11-04T00:30:00.000Z",
        "homeTeamId": 72,
        "homeTeam": "Duke",
        "homePoints": 80,
        "awayTeamId": 298,
        "awayTeam": "Texas Tech",
        "awayPoints": 71,
        "status": "final"
    });

    let game: ApiGame = serde_json::from_value(row).unwrap();
    assert_eq!(game.id, Some(12345));
    assert_eq!(
        game.start_date,
        Some(Utc.with_ymd_and_hms(2025, 11, 4, 0, 30, 0).unwrap())
    );
    assert_eq!(game.home_team.as_deref(), Some("Duke"));
    assert_eq!(game.home_points, Some(80));
    assert_eq!(game.away_team_id, Some(298));
}

#[test]
fn test_game_with_null_scores() {
    let row = json!({
        "id": 1,
        "startDate": "2026-03-01T17:00:00Z",
        "homeTeam": "Kansas",
        "homePoints": null,
        "awayTeam": "Baylor",
        "awayPoints": null
    });

    let game: ApiGame = serde_json::from_value(row).unwrap();
    assert_eq!(game.home_points, None);
    assert_eq!(game.away_points, None);
    assert_eq!(game.home_team_id, None);
}

#[test]
fn test_ranking_deserializes() {
    let row = json!({
        "season": 2026,
        "seasonType": "regular",
        "week": 3,
        "pollDate": "2025-11-17T00:00:00.000Z",
        "pollType": "AP Top 25",
        "teamId": 113,
        "team": "Houston",
        "conference": "Big 12",
        "ranking": 2,
        "firstPlaceVotes": 10,
        "points": 1500
    });

    let ranking: ApiRanking = serde_json::from_value(row).unwrap();
    assert_eq!(ranking.team_id, Some(113));
    assert_eq!(ranking.ranking, Some(2));
    assert_eq!(ranking.week, Some(3));
    assert_eq!(ranking.poll_type.as_deref(), Some("AP Top 25"));
}

#[test]
fn test_rows_into_skips_bad_rows() {
    let rows = vec![
        json!({"id": 1, "school": "Duke"}),
        json!({"id": "not-a-number", "school": "Bad"}),
        json!({"id": 2, "school": "UConn", "conference": "Big East"}),
        json!("just a string"),
    ];

    let teams: Vec<ApiTeam> = rows_into(&rows, "team");
    assert_eq!(teams.len(), 2);
    assert_eq!(teams[0].school.as_deref(), Some("Duke"));
    assert_eq!(teams[1].conference.as_deref(), Some("Big East"));
}

#[test]
fn test_rows_into_skips_bad_dates() {
    let rows = vec![
        json!({"id": 1, "startDate": "yesterday", "homeTeam": "A", "awayTeam": "B"}),
        json!({"id": 2, "startDate": "2026-01-01T00:00:00Z", "homeTeam": "A", "awayTeam": "B"}),
    ];

    let games: Vec<ApiGame> = rows_into(&rows, "game");
    assert_eq!(games.len(), 1);
    assert_eq!(games[0].id, Some(2));
}
