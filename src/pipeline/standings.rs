//! Won/loss records. Order-independent: only completed games count.

use serde::Serialize;
use std::collections::BTreeMap;

use super::normalize::Game;

/// Wins over games played; `0.0` when nothing has been played.
pub fn win_percentage(wins: u32, losses: u32) -> f64 {
    let played = wins + losses;
    if played == 0 {
        0.0
    } else {
        f64::from(wins) / f64::from(played)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Record {
    pub wins: u32,
    pub losses: u32,
}

impl Record {
    pub fn games(&self) -> u32 {
        self.wins + self.losses
    }

    pub fn win_percentage(&self) -> f64 {
        win_percentage(self.wins, self.losses)
    }
}

impl std::ops::Add for Record {
    type Output = Record;

    fn add(self, rhs: Record) -> Record {
        Record {
            wins: self.wins + rhs.wins,
            losses: self.losses + rhs.losses,
        }
    }
}

impl std::iter::Sum for Record {
    fn sum<I: Iterator<Item = Record>>(iter: I) -> Record {
        iter.fold(Record::default(), |acc, r| acc + r)
    }
}

/// Records for every team appearing in `games` plus every team in `extra`.
///
/// Ties and unplayed games give a team an entry but no wins or losses.
pub fn compute_records<'a, I>(games: &[Game], extra: I) -> BTreeMap<String, Record>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut records: BTreeMap<String, Record> = extra
        .into_iter()
        .map(|team| (team.to_string(), Record::default()))
        .collect();

    for game in games {
        records.entry(game.home.name.clone()).or_default();
        records.entry(game.away.name.clone()).or_default();

        if let Some((winner, loser)) = game.decision() {
            if let Some(r) = records.get_mut(&winner.name) {
                r.wins += 1;
            }
            if let Some(r) = records.get_mut(&loser.name) {
                r.losses += 1;
            }
        }
    }

    records
}
