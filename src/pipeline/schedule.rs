//! Next scheduled game per team.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

use super::normalize::Game;
use crate::GameId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NextGame {
    pub game_id: GameId,
    pub opponent: String,
    pub start_time: DateTime<Utc>,
    pub is_home: bool,
}

/// Earliest game starting strictly after `now` for each team.
///
/// Games starting at the same instant are ordered by game id.
pub fn next_games(games: &[Game], now: DateTime<Utc>) -> BTreeMap<String, NextGame> {
    let mut next: BTreeMap<String, NextGame> = BTreeMap::new();

    for game in games.iter().filter(|g| g.start_time > now) {
        for (team, opponent, is_home) in [
            (&game.home, &game.away, true),
            (&game.away, &game.home, false),
        ] {
            let candidate = NextGame {
                game_id: game.id,
                opponent: opponent.name.clone(),
                start_time: game.start_time,
                is_home,
            };
            let replace = match next.get(&team.name) {
                Some(current) => {
                    (candidate.start_time, candidate.game_id)
                        < (current.start_time, current.game_id)
                }
                None => true,
            };
            if replace {
                next.insert(team.name.clone(), candidate);
            }
        }
    }

    next
}
