//! Roll team standings up to the people who drafted them.
//!
//! A person's win percentage is total wins over total games across all of
//! their teams, never the mean of the teams' percentages.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;

use super::{
    standings::Record,
    streak::{self, Streak},
    TeamStanding,
};
use crate::{draft::DraftBoard, TeamId};

/// Label of the synthesized summary row in a person's table.
pub const TOTAL_LABEL: &str = "Total";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardRow {
    pub person: String,
    pub wins: u32,
    pub losses: u32,
    pub total_games: u32,
    pub win_percentage: f64,
}

impl LeaderboardRow {
    fn new(person: &str, record: Record) -> Self {
        Self {
            person: person.to_string(),
            wins: record.wins,
            losses: record.losses,
            total_games: record.games(),
            win_percentage: record.win_percentage(),
        }
    }
}

/// One line of a person's team table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailRow {
    pub school: String,
    pub team_id: Option<TeamId>,
    pub ranking: Option<u32>,
    pub wins: u32,
    pub losses: u32,
    pub win_percentage: f64,
    #[serde(serialize_with = "streak::serialize_token")]
    pub streak: Option<Streak>,
    pub next_opponent: Option<String>,
    pub next_game_time: Option<DateTime<Utc>>,
}

impl DetailRow {
    fn from_standing(school: &str, team_id: TeamId, standing: Option<&TeamStanding>) -> Self {
        let Some(standing) = standing else {
            return Self::zero(school, Some(team_id));
        };
        Self {
            school: school.to_string(),
            team_id: Some(team_id),
            ranking: standing.ranking,
            wins: standing.record.wins,
            losses: standing.record.losses,
            win_percentage: standing.record.win_percentage(),
            streak: standing.streak,
            next_opponent: standing.next_game.as_ref().map(|n| n.opponent.clone()),
            next_game_time: standing.next_game.as_ref().map(|n| n.start_time),
        }
    }

    fn zero(school: &str, team_id: Option<TeamId>) -> Self {
        Self {
            school: school.to_string(),
            team_id,
            ranking: None,
            wins: 0,
            losses: 0,
            win_percentage: 0.0,
            streak: None,
            next_opponent: None,
            next_game_time: None,
        }
    }

    fn record(&self) -> Record {
        Record {
            wins: self.wins,
            losses: self.losses,
        }
    }

    /// Column sums, with the percentage recomputed from them.
    fn total(rows: &[DetailRow]) -> Self {
        let record: Record = rows.iter().map(DetailRow::record).sum();
        Self {
            wins: record.wins,
            losses: record.losses,
            win_percentage: record.win_percentage(),
            ..Self::zero(TOTAL_LABEL, None)
        }
    }
}

/// A person's drafted teams plus their totals
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonDetail {
    pub person: String,
    pub teams: Vec<DetailRow>,
    pub total: DetailRow,
}

fn by_percentage_desc(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}

/// Leaderboard ordering: percentage desc, wins desc, then name.
fn leaderboard_order(a: &LeaderboardRow, b: &LeaderboardRow) -> Ordering {
    by_percentage_desc(a.win_percentage, b.win_percentage)
        .then_with(|| b.wins.cmp(&a.wins))
        .then_with(|| a.person.cmp(&b.person))
}

/// Per-person detail tables, in name order.
///
/// `names` maps a drafted team id to the name its standing is keyed under.
pub fn person_details(
    board: &DraftBoard,
    standings: &BTreeMap<String, TeamStanding>,
    names: &BTreeMap<TeamId, String>,
) -> Vec<PersonDetail> {
    board
        .persons()
        .into_iter()
        .map(|person| {
            let mut teams: Vec<DetailRow> = board
                .picks_for(&person)
                .map(|pick| {
                    let key = names.get(&pick.team_id).unwrap_or(&pick.school);
                    DetailRow::from_standing(&pick.school, pick.team_id, standings.get(key))
                })
                .collect();
            teams.sort_by(|a, b| {
                by_percentage_desc(a.win_percentage, b.win_percentage)
                    .then_with(|| a.school.cmp(&b.school))
            });
            let total = DetailRow::total(&teams);
            PersonDetail {
                person,
                teams,
                total,
            }
        })
        .collect()
}

/// Sorted leaderboard plus the detail tables reordered to match it.
pub fn build_leaderboard(
    board: &DraftBoard,
    standings: &BTreeMap<String, TeamStanding>,
    names: &BTreeMap<TeamId, String>,
) -> (Vec<LeaderboardRow>, Vec<PersonDetail>) {
    let mut details = person_details(board, standings, names);

    let mut rows: Vec<LeaderboardRow> = details
        .iter()
        .map(|d| LeaderboardRow::new(&d.person, d.total.record()))
        .collect();
    rows.sort_by(leaderboard_order);

    let position: BTreeMap<&str, usize> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| (row.person.as_str(), i))
        .collect();
    details.sort_by_key(|d| position.get(d.person.as_str()).copied());

    (rows, details)
}

#[cfg(test)]
mod tests;
