//! Unit tests for leaderboard aggregation

use super::*;
use crate::draft::{DraftBoard, DraftPick};
use crate::pipeline::streak::Streak;
use std::num::NonZeroU32;

fn standing(team: &str, id: u32, wins: u32, losses: u32) -> TeamStanding {
    let record = Record { wins, losses };
    TeamStanding {
        team: team.to_string(),
        team_id: Some(TeamId::new(id)),
        record,
        win_percentage: record.win_percentage(),
        streak: None,
        next_game: None,
        ranking: None,
        mascot: None,
        abbreviation: None,
        conference: None,
    }
}

fn table(rows: Vec<TeamStanding>) -> BTreeMap<String, TeamStanding> {
    rows.into_iter().map(|s| (s.team.clone(), s)).collect()
}

fn names(board: &DraftBoard) -> BTreeMap<TeamId, String> {
    board
        .picks()
        .iter()
        .map(|p| (p.team_id, p.school.clone()))
        .collect()
}

#[test]
fn test_person_percentage_is_sum_over_sum_not_mean() {
    // Team A: 1-0 (1.000), team B: 1-3 (0.250). Mean would be 0.625.
    let board = DraftBoard::new(vec![
        DraftPick::new(1, "A", "Pat"),
        DraftPick::new(2, "B", "Pat"),
    ])
    .unwrap();
    let standings = table(vec![standing("A", 1, 1, 0), standing("B", 2, 1, 3)]);

    let (rows, details) = build_leaderboard(&board, &standings, &names(&board));

    assert_eq!(rows.len(), 1);
    let pat = &rows[0];
    assert_eq!((pat.wins, pat.losses, pat.total_games), (2, 3, 5));
    assert_eq!(pat.win_percentage, 2.0 / 5.0);

    let mean = (1.0 + 0.25) / 2.0;
    assert_ne!(pat.win_percentage, mean);

    // Total row uses the same arithmetic
    assert_eq!(details[0].total.win_percentage, 2.0 / 5.0);
    assert_eq!(details[0].total.school, TOTAL_LABEL);
    assert_eq!((details[0].total.wins, details[0].total.losses), (2, 3));
}

#[test]
fn test_missing_team_shows_zero_row() {
    let board = DraftBoard::new(vec![
        DraftPick::new(1, "A", "Pat"),
        DraftPick::new(9, "Ghost", "Pat"),
    ])
    .unwrap();
    let standings = table(vec![standing("A", 1, 3, 1)]);

    let (_, details) = build_leaderboard(&board, &standings, &names(&board));

    let ghost = details[0]
        .teams
        .iter()
        .find(|t| t.school == "Ghost")
        .unwrap();
    assert_eq!((ghost.wins, ghost.losses), (0, 0));
    assert_eq!(ghost.win_percentage, 0.0);
    assert_eq!(ghost.streak, None);
    assert_eq!(ghost.ranking, None);
}

#[test]
fn test_person_with_no_games_is_zero_percent() {
    let board = DraftBoard::new(vec![DraftPick::new(1, "A", "Pat")]).unwrap();

    let (rows, _) = build_leaderboard(&board, &BTreeMap::new(), &names(&board));

    assert_eq!(rows[0].total_games, 0);
    assert_eq!(rows[0].win_percentage, 0.0);
}

#[test]
fn test_leaderboard_sorted_with_deterministic_ties() {
    let board = DraftBoard::new(vec![
        DraftPick::new(1, "A", "Zed"),
        DraftPick::new(2, "B", "Amy"),
        DraftPick::new(3, "C", "Bob"),
        DraftPick::new(4, "D", "Cal"),
    ])
    .unwrap();
    let standings = table(vec![
        standing("A", 1, 2, 2), // .500, 2 wins
        standing("B", 2, 2, 2), // .500, 2 wins
        standing("C", 3, 4, 4), // .500, 4 wins
        standing("D", 4, 3, 1), // .750
    ]);

    let (rows, details) = build_leaderboard(&board, &standings, &names(&board));

    let order: Vec<&str> = rows.iter().map(|r| r.person.as_str()).collect();
    assert_eq!(order, vec!["Cal", "Bob", "Amy", "Zed"]);

    let detail_order: Vec<&str> = details.iter().map(|d| d.person.as_str()).collect();
    assert_eq!(detail_order, order);
}

#[test]
fn test_detail_rows_sorted_and_carry_streak() {
    let board = DraftBoard::new(vec![
        DraftPick::new(1, "A", "Pat"),
        DraftPick::new(2, "B", "Pat"),
    ])
    .unwrap();
    let mut hot = standing("B", 2, 5, 0);
    hot.streak = Some(Streak::Won(NonZeroU32::new(5).unwrap()));
    hot.ranking = Some(3);
    let standings = table(vec![standing("A", 1, 1, 1), hot]);

    let (_, details) = build_leaderboard(&board, &standings, &names(&board));

    let teams = &details[0].teams;
    assert_eq!(teams[0].school, "B");
    assert_eq!(teams[0].ranking, Some(3));
    assert_eq!(teams[0].streak.map(|s| s.to_string()).as_deref(), Some("W5"));
    assert_eq!(teams[1].school, "A");
}

#[test]
fn test_pick_joined_through_feed_name() {
    // The feed calls team 279 "St. John's (NY)"
    let board = DraftBoard::new(vec![DraftPick::new(279, "St. John's", "Nick")]).unwrap();
    let standings = table(vec![standing("St. John's (NY)", 279, 6, 2)]);
    let mut feed_names = BTreeMap::new();
    feed_names.insert(TeamId::new(279), "St. John's (NY)".to_string());

    let (rows, details) = build_leaderboard(&board, &standings, &feed_names);

    assert_eq!(rows[0].wins, 6);
    assert_eq!(details[0].teams[0].school, "St. John's");
}
