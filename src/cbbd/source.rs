//! Cached, failure-tolerant loading of teams, rankings and games.
//!
//! Each logical query is independent: a failed request contributes zero rows
//! and a [`FetchWarning`], never an error for the whole load.

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashSet;
use std::fmt;
use tracing::{debug, info, warn};

use crate::{
    cbbd::{
        http::{CbbdClient, GamesQuery},
        types::{rows_into, ApiGame, ApiRanking, ApiTeam},
    },
    core::{CacheKey, QueryKey, ResponseCache},
    error::DraftError,
    Result, Season, TOKEN_ENV_VAR,
};

/// How a query was answered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    Hit,
    Miss,
    Refreshed,
}

/// How games are requested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchMode {
    /// One request for the whole season
    #[default]
    Bulk,
    /// One request per drafted team
    PerTeam,
}

/// What to load for one refresh
#[derive(Debug, Clone)]
pub struct LoadRequest {
    pub season: Season,
    pub mode: FetchMode,
    /// Schools to query in [`FetchMode::PerTeam`]
    pub teams: Vec<String>,
    /// Inclusive UTC date range for games; `None` loads the whole season
    pub dates: Option<(NaiveDate, NaiveDate)>,
    pub refresh: bool,
}

/// A sub-query that produced no rows because it failed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FetchWarning {
    pub query: String,
    pub message: String,
}

impl fmt::Display for FetchWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} failed: {}", self.query, self.message)
    }
}

/// Everything fetched for one refresh, already deduplicated
#[derive(Debug, Clone, Default)]
pub struct RawData {
    pub teams: Vec<ApiTeam>,
    pub rankings: Vec<ApiRanking>,
    pub games: Vec<ApiGame>,
    pub warnings: Vec<FetchWarning>,
}

/// Data-source adapter owning the API client and the response cache.
pub struct DataSource {
    client: Option<CbbdClient>,
    cache: ResponseCache<QueryKey, Vec<Value>>,
}

impl DataSource {
    /// `client` may be `None` when no token is configured; cached responses
    /// are still served and uncached queries report a warning.
    pub fn new(client: Option<CbbdClient>, cache: ResponseCache<QueryKey, Vec<Value>>) -> Self {
        Self { client, cache }
    }

    pub fn cache(&self) -> &ResponseCache<QueryKey, Vec<Value>> {
        &self.cache
    }

    /// Run the three logical queries.
    pub async fn load(&self, request: &LoadRequest) -> RawData {
        let mut data = RawData::default();

        if let Some(rows) = self
            .query(QueryKey::Teams, request.refresh, &mut data.warnings)
            .await
        {
            data.teams = rows_into(&rows, "team");
        }

        let rankings_key = QueryKey::Rankings {
            season: request.season,
        };
        if let Some(rows) = self
            .query(rankings_key, request.refresh, &mut data.warnings)
            .await
        {
            data.rankings = rows_into(&rows, "ranking");
        }

        let game_queries: Vec<GamesQuery> = match request.mode {
            FetchMode::Bulk => vec![GamesQuery::season(request.season)],
            FetchMode::PerTeam => request
                .teams
                .iter()
                .map(|team| GamesQuery::for_team(request.season, team.clone()))
                .collect(),
        };
        let (start, end) = request.dates.unzip();
        let game_queries = game_queries
            .into_iter()
            .map(|query| query.between(start, end));

        let mut seen = HashSet::new();
        for query in game_queries {
            let Some(rows) = self
                .query(query.cache_key(), request.refresh, &mut data.warnings)
                .await
            else {
                continue;
            };
            for game in rows_into::<ApiGame>(&rows, "game") {
                // Games between two queried teams come back twice
                if let Some(id) = game.id {
                    if !seen.insert(id) {
                        continue;
                    }
                }
                data.games.push(game);
            }
        }

        info!(
            teams = data.teams.len(),
            rankings = data.rankings.len(),
            games = data.games.len(),
            warnings = data.warnings.len(),
            "data loaded"
        );
        data
    }

    async fn query(
        &self,
        key: QueryKey,
        refresh: bool,
        warnings: &mut Vec<FetchWarning>,
    ) -> Option<Vec<Value>> {
        match self.fetch_cached(&key, refresh).await {
            Ok((rows, status)) => {
                debug!(query = %key.to_file_key(), ?status, rows = rows.len(), "query answered");
                Some(rows)
            }
            Err(e) => {
                let warning = FetchWarning {
                    query: describe(&key),
                    message: e.to_string(),
                };
                warn!(query = %warning.query, error = %warning.message, "query failed");
                warnings.push(warning);
                None
            }
        }
    }

    /// Serve `key` from cache when fresh, otherwise fetch and store it.
    pub async fn fetch_cached(
        &self,
        key: &QueryKey,
        refresh: bool,
    ) -> Result<(Vec<Value>, CacheStatus)> {
        if !refresh {
            if let Some(rows) = self.cache.get(key) {
                return Ok((rows, CacheStatus::Hit));
            }
        }

        let client = self.client.as_ref().ok_or_else(|| DraftError::MissingToken {
            env_var: TOKEN_ENV_VAR.to_string(),
        })?;

        let rows = match key {
            QueryKey::Teams => client.get_teams().await?,
            QueryKey::Rankings { season } => client.get_rankings(*season).await?,
            QueryKey::Games {
                season,
                team,
                start,
                end,
            } => {
                let query = GamesQuery {
                    season: *season,
                    team: team.clone(),
                    start: *start,
                    end: *end,
                };
                client.get_games(&query).await?
            }
        };

        self.cache.put(key.clone(), rows.clone());
        let status = if refresh {
            CacheStatus::Refreshed
        } else {
            CacheStatus::Miss
        };
        Ok((rows, status))
    }
}

fn describe(key: &QueryKey) -> String {
    match key {
        QueryKey::Teams => "teams".to_string(),
        QueryKey::Rankings { season } => format!("rankings ({})", season),
        QueryKey::Games {
            season,
            team: Some(team),
            ..
        } => format!("games for {} ({})", team, season),
        QueryKey::Games { season, .. } => format!("games ({})", season),
    }
}
