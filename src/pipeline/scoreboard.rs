//! Single-day scoreboard grouped by ownership.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;

use super::{
    normalize::{Game, Outcome, TeamRef},
    Ownership,
};
use crate::{DisplayZone, GameId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Home,
    Away,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreboardRow {
    pub game_id: GameId,
    pub time: DateTime<FixedOffset>,
    pub home_label: String,
    pub home_score: Option<u32>,
    pub home_owner: Option<String>,
    pub away_label: String,
    pub away_score: Option<u32>,
    pub away_owner: Option<String>,
    /// Set only for a completed game with unequal scores
    pub winner: Option<Side>,
}

impl ScoreboardRow {
    /// Both sides drafted, by different people.
    pub fn is_marquee(&self) -> bool {
        matches!(
            (&self.home_owner, &self.away_owner),
            (Some(home), Some(away)) if home != away
        )
    }

    fn involves_owner(&self, person: &str) -> bool {
        self.home_owner.as_deref() == Some(person) || self.away_owner.as_deref() == Some(person)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scoreboard {
    pub date: NaiveDate,
    pub marquee: Vec<ScoreboardRow>,
    pub by_person: BTreeMap<String, Vec<ScoreboardRow>>,
}

/// "School (Owner)" when the team is drafted, else just the school.
fn side_label(team: &TeamRef, owner: Option<&str>) -> String {
    match owner {
        Some(owner) => format!("{} ({})", team.name, owner),
        None => team.name.clone(),
    }
}

fn to_row(game: &Game, ownership: &Ownership, zone: DisplayZone) -> ScoreboardRow {
    let home_owner = ownership.owner_of(&game.home).map(str::to_string);
    let away_owner = ownership.owner_of(&game.away).map(str::to_string);
    let winner = match game.outcome() {
        Some(Outcome::HomeWin) => Some(Side::Home),
        Some(Outcome::AwayWin) => Some(Side::Away),
        Some(Outcome::Tie) | None => None,
    };

    ScoreboardRow {
        game_id: game.id,
        time: zone.localize(game.start_time),
        home_label: side_label(&game.home, home_owner.as_deref()),
        home_score: game.home_score,
        away_label: side_label(&game.away, away_owner.as_deref()),
        away_score: game.away_score,
        home_owner,
        away_owner,
        winner,
    }
}

/// Games on `date` (in `zone`): the marquee list plus one list per selected person.
///
/// `selected` defaults to everyone in `ownership`. A marquee game also appears
/// in both owners' lists.
pub fn build_scoreboard(
    games: &[Game],
    ownership: &Ownership,
    date: NaiveDate,
    zone: DisplayZone,
    selected: Option<&[String]>,
) -> Scoreboard {
    let mut rows: Vec<ScoreboardRow> = games
        .iter()
        .filter(|g| zone.date_of(g.start_time) == date)
        .map(|g| to_row(g, ownership, zone))
        .collect();
    rows.sort_by_key(|r| (r.time, r.game_id));

    let persons: Vec<String> = match selected {
        Some(names) => names.to_vec(),
        None => ownership.persons(),
    };

    let by_person = persons
        .into_iter()
        .map(|person| {
            let games = rows
                .iter()
                .filter(|r| r.involves_owner(&person))
                .cloned()
                .collect();
            (person, games)
        })
        .collect();

    let marquee = rows.into_iter().filter(ScoreboardRow::is_marquee).collect();

    Scoreboard {
        date,
        marquee,
        by_person,
    }
}
