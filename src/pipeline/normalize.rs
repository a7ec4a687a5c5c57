//! Convert wire rows into validated, canonical records.
//!
//! Rows missing an identifier the rest of the pipeline depends on are
//! dropped here, one at a time.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::{
    cbbd::types::{ApiGame, ApiRanking, ApiTeam},
    GameId, TeamId,
};

/// One side of a game
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamRef {
    pub id: Option<TeamId>,
    pub name: String,
}

impl TeamRef {
    pub fn new(id: Option<u32>, name: impl Into<String>) -> Self {
        Self {
            id: id.map(TeamId::new),
            name: name.into(),
        }
    }
}

/// Result of a completed game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    HomeWin,
    AwayWin,
    Tie,
}

/// A scheduled or completed game
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Game {
    pub id: GameId,
    pub home: TeamRef,
    pub away: TeamRef,
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
    pub start_time: DateTime<Utc>,
}

impl Game {
    /// Both final scores are present.
    pub fn is_completed(&self) -> bool {
        self.home_score.is_some() && self.away_score.is_some()
    }

    /// `None` until the game is completed.
    pub fn outcome(&self) -> Option<Outcome> {
        let (home, away) = (self.home_score?, self.away_score?);
        Some(match home.cmp(&away) {
            std::cmp::Ordering::Greater => Outcome::HomeWin,
            std::cmp::Ordering::Less => Outcome::AwayWin,
            std::cmp::Ordering::Equal => Outcome::Tie,
        })
    }

    /// `(winner, loser)` for a decisive completed game.
    pub fn decision(&self) -> Option<(&TeamRef, &TeamRef)> {
        match self.outcome()? {
            Outcome::HomeWin => Some((&self.home, &self.away)),
            Outcome::AwayWin => Some((&self.away, &self.home)),
            Outcome::Tie => None,
        }
    }

    pub fn involves(&self, team: &str) -> bool {
        self.home.name == team || self.away.name == team
    }

    /// The other side of the game from `team`.
    pub fn opponent_of(&self, team: &str) -> Option<&TeamRef> {
        if self.home.name == team {
            Some(&self.away)
        } else if self.away.name == team {
            Some(&self.home)
        } else {
            None
        }
    }
}

/// Team directory entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamInfo {
    pub id: TeamId,
    pub school: String,
    pub mascot: Option<String>,
    pub abbreviation: Option<String>,
    pub conference: Option<String>,
}

/// One team's position in one poll
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PollRow {
    pub team_id: TeamId,
    pub poll_date: DateTime<Utc>,
    pub week: Option<u32>,
    pub rank: u32,
    pub poll_type: Option<String>,
}

fn non_empty(name: Option<&String>) -> Option<String> {
    name.map(|n| n.trim())
        .filter(|n| !n.is_empty())
        .map(str::to_string)
}

pub fn normalize_game(raw: &ApiGame) -> Option<Game> {
    Some(Game {
        id: GameId::new(raw.id?),
        home: TeamRef::new(raw.home_team_id, non_empty(raw.home_team.as_ref())?),
        away: TeamRef::new(raw.away_team_id, non_empty(raw.away_team.as_ref())?),
        home_score: raw.home_points,
        away_score: raw.away_points,
        start_time: raw.start_date?,
    })
}

pub fn normalize_games(raw: &[ApiGame]) -> Vec<Game> {
    let games: Vec<Game> = raw.iter().filter_map(normalize_game).collect();
    if games.len() < raw.len() {
        debug!(
            skipped = raw.len() - games.len(),
            "dropped games missing id, teams or start time"
        );
    }
    games
}

pub fn normalize_teams(raw: &[ApiTeam]) -> Vec<TeamInfo> {
    raw.iter()
        .filter_map(|t| {
            Some(TeamInfo {
                id: TeamId::new(t.id?),
                school: non_empty(t.school.as_ref())?,
                mascot: t.mascot.clone(),
                abbreviation: t.abbreviation.clone(),
                conference: t.conference.clone(),
            })
        })
        .collect()
}

pub fn normalize_rankings(raw: &[ApiRanking]) -> Vec<PollRow> {
    raw.iter()
        .filter_map(|r| {
            Some(PollRow {
                team_id: TeamId::new(r.team_id?),
                poll_date: r.poll_date?,
                week: r.week,
                rank: r.ranking?,
                poll_type: r.poll_type.clone(),
            })
        })
        .collect()
}
