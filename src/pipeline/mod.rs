//! The aggregation pipeline: raw rows in, standings, leaderboard and
//! scoreboard out.
//!
//! ```text
//! RawData ─ normalize ─┬─ standings ─┐
//!                      ├─ streak ────┼─ TeamStanding ─ leaderboard ─ Report
//!                      ├─ schedule ──┤
//!           rankings ──┘             │
//!                      └─ scoreboard (games + draft picks)
//! ```
//!
//! Everything here is a pure function of its inputs; running it twice on the
//! same rows yields the same tables.

pub mod game_log;
pub mod leaderboard;
pub mod normalize;
pub mod rankings;
pub mod schedule;
pub mod scoreboard;
pub mod standings;
pub mod streak;

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::{cbbd::RawData, draft::DraftBoard, TeamId};
use leaderboard::{build_leaderboard, LeaderboardRow, PersonDetail};
use normalize::{
    normalize_games, normalize_rankings, normalize_teams, Game, TeamInfo, TeamRef,
};
use rankings::RankingTable;
use schedule::{next_games, NextGame};
use standings::{compute_records, Record};
use streak::{compute_streaks, Streak};

/// Normalized inputs for one refresh
#[derive(Debug, Clone, Default)]
pub struct Inputs {
    pub games: Vec<Game>,
    pub teams: Vec<TeamInfo>,
    pub rankings: RankingTable,
}

impl Inputs {
    /// Normalize fetched rows, keeping only `poll` rankings when given.
    pub fn from_raw(raw: &RawData, poll: Option<&str>) -> Self {
        Self {
            games: normalize_games(&raw.games),
            teams: normalize_teams(&raw.teams),
            rankings: RankingTable::new(normalize_rankings(&raw.rankings), poll),
        }
    }
}

/// Everything known about one team this refresh
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamStanding {
    pub team: String,
    pub team_id: Option<TeamId>,
    #[serde(flatten)]
    pub record: Record,
    pub win_percentage: f64,
    #[serde(serialize_with = "streak::serialize_token")]
    pub streak: Option<Streak>,
    pub next_game: Option<NextGame>,
    pub ranking: Option<u32>,
    pub mascot: Option<String>,
    pub abbreviation: Option<String>,
    pub conference: Option<String>,
}

/// Name each drafted team is known by in the game feed.
///
/// The team id seen in games wins; a team with no games keeps its draft name.
pub fn canonical_names(board: &DraftBoard, games: &[Game]) -> BTreeMap<TeamId, String> {
    let mut seen: HashMap<TeamId, &str> = HashMap::new();
    for game in games {
        for side in [&game.home, &game.away] {
            if let Some(id) = side.id {
                seen.entry(id).or_insert(side.name.as_str());
            }
        }
    }

    board
        .picks()
        .iter()
        .map(|pick| {
            let name = seen
                .get(&pick.team_id)
                .map(|n| n.to_string())
                .unwrap_or_else(|| pick.school.clone());
            (pick.team_id, name)
        })
        .collect()
}

/// Who owns which team, looked up by id first and then by name.
#[derive(Debug, Clone, Default)]
pub struct Ownership {
    by_id: HashMap<TeamId, String>,
    by_name: HashMap<String, String>,
}

impl Ownership {
    pub fn new(board: &DraftBoard, names: &BTreeMap<TeamId, String>) -> Self {
        let mut ownership = Self::default();
        for pick in board.picks() {
            ownership.by_id.insert(pick.team_id, pick.person.clone());
            ownership
                .by_name
                .insert(pick.school.clone(), pick.person.clone());
            if let Some(name) = names.get(&pick.team_id) {
                ownership.by_name.insert(name.clone(), pick.person.clone());
            }
        }
        ownership
    }

    pub fn owner_of(&self, team: &TeamRef) -> Option<&str> {
        team.id
            .and_then(|id| self.by_id.get(&id))
            .or_else(|| self.by_name.get(&team.name))
            .map(String::as_str)
    }

    /// Everyone owning at least one team, sorted by name.
    pub fn persons(&self) -> Vec<String> {
        self.by_id
            .values()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

/// Standings for every team in the game feed plus every drafted team.
pub fn build_standings(
    inputs: &Inputs,
    board: &DraftBoard,
    names: &BTreeMap<TeamId, String>,
    now: DateTime<Utc>,
) -> BTreeMap<String, TeamStanding> {
    let records = compute_records(&inputs.games, names.values().map(String::as_str));
    let mut streaks = compute_streaks(&inputs.games);
    let mut upcoming = next_games(&inputs.games, now);

    let mut ids: HashMap<&str, TeamId> = HashMap::new();
    for game in &inputs.games {
        for side in [&game.home, &game.away] {
            if let Some(id) = side.id {
                ids.entry(side.name.as_str()).or_insert(id);
            }
        }
    }
    for (id, name) in names {
        ids.entry(name.as_str()).or_insert(*id);
    }
    for pick in board.picks() {
        ids.entry(pick.school.as_str()).or_insert(pick.team_id);
    }
    for team in &inputs.teams {
        ids.entry(team.school.as_str()).or_insert(team.id);
    }

    let directory: HashMap<TeamId, &TeamInfo> = inputs.teams.iter().map(|t| (t.id, t)).collect();

    records
        .into_iter()
        .map(|(team, record)| {
            let team_id = ids.get(team.as_str()).copied();
            let info = team_id.and_then(|id| directory.get(&id));
            let standing = TeamStanding {
                team_id,
                record,
                win_percentage: record.win_percentage(),
                streak: streaks.remove(&team),
                next_game: upcoming.remove(&team),
                ranking: team_id.and_then(|id| inputs.rankings.latest(id)),
                mascot: info.and_then(|i| i.mascot.clone()),
                abbreviation: info.and_then(|i| i.abbreviation.clone()),
                conference: info.and_then(|i| i.conference.clone()),
                team: team.clone(),
            };
            (team, standing)
        })
        .collect()
}

/// All derived tables for one refresh
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub standings: BTreeMap<String, TeamStanding>,
    pub leaderboard: Vec<LeaderboardRow>,
    pub details: Vec<PersonDetail>,
}

/// Run the whole pipeline.
pub fn build_report(inputs: &Inputs, board: &DraftBoard, now: DateTime<Utc>) -> Report {
    let names = canonical_names(board, &inputs.games);
    let standings = build_standings(inputs, board, &names, now);
    let (leaderboard, details) = build_leaderboard(board, &standings, &names);

    Report {
        standings,
        leaderboard,
        details,
    }
}
