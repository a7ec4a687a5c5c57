//! Team-level game log: each completed game seen from both sides.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;

use super::{
    normalize::{Game, TeamInfo, TeamRef},
    rankings::RankingTable,
};
use crate::{GameId, TeamId};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameLogRow {
    pub game_id: GameId,
    pub game_date: DateTime<Utc>,
    pub team: String,
    pub team_id: Option<TeamId>,
    pub team_mascot: Option<String>,
    pub team_abbreviation: Option<String>,
    pub team_conference: Option<String>,
    pub opponent: String,
    pub opponent_id: Option<TeamId>,
    pub opponent_mascot: Option<String>,
    pub opponent_abbreviation: Option<String>,
    pub opponent_conference: Option<String>,
    pub is_home: bool,
    pub points_scored: u32,
    pub points_allowed: u32,
    pub win: bool,
    pub point_diff: i64,
    /// Rank in the latest poll published at or before tip-off
    pub team_ranking: Option<u32>,
    pub opponent_ranking: Option<u32>,
}

/// Rows for every completed game, two per game, ordered by date, game id,
/// then team. `team` limits the log to games involving that school.
pub fn build_game_log(
    games: &[Game],
    teams: &[TeamInfo],
    rankings: &RankingTable,
    team: Option<&str>,
) -> Vec<GameLogRow> {
    let directory: HashMap<TeamId, &TeamInfo> = teams.iter().map(|t| (t.id, t)).collect();
    let info_of = |side: &TeamRef| side.id.and_then(|id| directory.get(&id).copied());
    let rank_of = |side: &TeamRef, at: DateTime<Utc>| side.id.and_then(|id| rankings.as_of(id, at));

    let mut rows = Vec::new();
    for game in games {
        let (Some(home_score), Some(away_score)) = (game.home_score, game.away_score) else {
            continue;
        };

        for (side, other, scored, allowed, is_home) in [
            (&game.home, &game.away, home_score, away_score, true),
            (&game.away, &game.home, away_score, home_score, false),
        ] {
            if team.is_some_and(|t| t != side.name) {
                continue;
            }
            let (mine, theirs) = (info_of(side), info_of(other));
            rows.push(GameLogRow {
                game_id: game.id,
                game_date: game.start_time,
                team: side.name.clone(),
                team_id: side.id,
                team_mascot: mine.and_then(|i| i.mascot.clone()),
                team_abbreviation: mine.and_then(|i| i.abbreviation.clone()),
                team_conference: mine.and_then(|i| i.conference.clone()),
                opponent: other.name.clone(),
                opponent_id: other.id,
                opponent_mascot: theirs.and_then(|i| i.mascot.clone()),
                opponent_abbreviation: theirs.and_then(|i| i.abbreviation.clone()),
                opponent_conference: theirs.and_then(|i| i.conference.clone()),
                is_home,
                points_scored: scored,
                points_allowed: allowed,
                win: scored > allowed,
                point_diff: i64::from(scored) - i64::from(allowed),
                team_ranking: rank_of(side, game.start_time),
                opponent_ranking: rank_of(other, game.start_time),
            });
        }
    }

    rows.sort_by(|a, b| {
        (a.game_date, a.game_id, &a.team).cmp(&(b.game_date, b.game_id, &b.team))
    });
    rows
}
