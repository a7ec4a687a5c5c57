//! Poll rankings: latest rank per team and rank as of a given instant.

use chrono::{DateTime, Utc};
use std::cmp::Reverse;
use std::collections::BTreeMap;

use super::normalize::PollRow;
use crate::TeamId;

/// Poll rows grouped per team, oldest first.
///
/// Rows sharing a poll date are ordered by week, then by rank descending, so
/// the last row on a date is the highest week and, within it, the best rank.
#[derive(Debug, Clone, Default)]
pub struct RankingTable {
    by_team: BTreeMap<TeamId, Vec<PollRow>>,
}

impl RankingTable {
    /// Build from poll rows, keeping only `poll` when given (case-insensitive).
    /// Rows without a poll type are always kept.
    pub fn new(rows: Vec<PollRow>, poll: Option<&str>) -> Self {
        let mut by_team: BTreeMap<TeamId, Vec<PollRow>> = BTreeMap::new();
        for row in rows {
            let keep = match (poll, row.poll_type.as_deref()) {
                (Some(wanted), Some(actual)) => wanted.eq_ignore_ascii_case(actual),
                _ => true,
            };
            if keep {
                by_team.entry(row.team_id).or_default().push(row);
            }
        }
        for rows in by_team.values_mut() {
            rows.sort_by_key(|r| (r.poll_date, r.week, Reverse(r.rank)));
        }
        Self { by_team }
    }

    /// Rank from the team's most recent poll.
    pub fn latest(&self, team: TeamId) -> Option<u32> {
        self.by_team.get(&team)?.last().map(|r| r.rank)
    }

    /// Rank from the latest poll published at or before `instant`.
    pub fn as_of(&self, team: TeamId, instant: DateTime<Utc>) -> Option<u32> {
        let rows = self.by_team.get(&team)?;
        let published = rows.partition_point(|r| r.poll_date <= instant);
        published.checked_sub(1).map(|i| rows[i].rank)
    }
}
