//! Wire types for collegebasketballdata.com responses.
//!
//! Every field is optional: the API omits scores for unplayed games and has
//! been seen to return partial rows. Validation happens in the pipeline's
//! normalizer, not here.

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// Team directory row from `/teams`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiTeam {
    pub id: Option<u32>,
    pub school: Option<String>,
    pub mascot: Option<String>,
    pub abbreviation: Option<String>,
    pub conference: Option<String>,
}

/// Poll row from `/rankings`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRanking {
    pub season: Option<u16>,
    pub week: Option<u32>,
    pub poll_date: Option<DateTime<Utc>>,
    pub poll_type: Option<String>,
    pub team_id: Option<u32>,
    pub team: Option<String>,
    pub ranking: Option<u32>,
}

/// Game row from `/games`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiGame {
    pub id: Option<u64>,
    pub season: Option<u16>,
    pub start_date: Option<DateTime<Utc>>,
    pub home_team_id: Option<u32>,
    pub home_team: Option<String>,
    pub home_points: Option<u32>,
    pub away_team_id: Option<u32>,
    pub away_team: Option<String>,
    pub away_points: Option<u32>,
}

/// Deserialize rows one at a time, dropping any row that does not fit `T`.
pub fn rows_into<T: DeserializeOwned>(rows: &[Value], what: &str) -> Vec<T> {
    rows.iter()
        .filter_map(|row| match serde_json::from_value::<T>(row.clone()) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                debug!(kind = what, error = %e, "skipping undecodable row");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests;
