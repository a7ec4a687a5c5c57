//! Current winning/losing streaks.
//!
//! Streaks are an ordered fold: completed decisive games are sorted oldest
//! first (ties on start time broken by game id) and every result overwrites
//! the team's running streak, so the last game played sets the final value.

use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::num::NonZeroU32;

use super::normalize::Game;

/// Shown for a team with no decisive completed games.
pub const NO_STREAK: &str = "N/A";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Streak {
    Won(NonZeroU32),
    Lost(NonZeroU32),
}

impl Streak {
    /// Streak after a win following `prev`.
    pub fn after_win(prev: Option<Streak>) -> Streak {
        match prev {
            Some(Streak::Won(n)) => Streak::Won(n.saturating_add(1)),
            _ => Streak::Won(NonZeroU32::MIN),
        }
    }

    /// Streak after a loss following `prev`.
    pub fn after_loss(prev: Option<Streak>) -> Streak {
        match prev {
            Some(Streak::Lost(n)) => Streak::Lost(n.saturating_add(1)),
            _ => Streak::Lost(NonZeroU32::MIN),
        }
    }

    pub fn len(&self) -> u32 {
        match self {
            Streak::Won(n) | Streak::Lost(n) => n.get(),
        }
    }

    pub fn is_winning(&self) -> bool {
        matches!(self, Streak::Won(_))
    }
}

impl fmt::Display for Streak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Streak::Won(n) => write!(f, "W{}", n),
            Streak::Lost(n) => write!(f, "L{}", n),
        }
    }
}

impl Serialize for Streak {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// `W<n>`/`L<n>`, or `N/A` when the team has no streak.
pub fn streak_token(streak: Option<&Streak>) -> String {
    streak
        .map(Streak::to_string)
        .unwrap_or_else(|| NO_STREAK.to_string())
}

/// `serialize_with` for optional streaks: a missing streak is written as `N/A`.
pub fn serialize_token<S: Serializer>(
    streak: &Option<Streak>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&streak_token(streak.as_ref()))
}

/// Fold every decisive completed game, oldest first, into per-team streaks.
pub fn compute_streaks(games: &[Game]) -> BTreeMap<String, Streak> {
    let mut decided: Vec<&Game> = games.iter().filter(|g| g.decision().is_some()).collect();
    decided.sort_by_key(|g| (g.start_time, g.id));

    decided
        .into_iter()
        .fold(BTreeMap::new(), |mut streaks, game| {
            if let Some((winner, loser)) = game.decision() {
                let next = Streak::after_win(streaks.get(&winner.name).copied());
                streaks.insert(winner.name.clone(), next);
                let next = Streak::after_loss(streaks.get(&loser.name).copied());
                streaks.insert(loser.name.clone(), next);
            }
            streaks
        })
}
