//! HTTP client for the collegebasketballdata.com API.

use chrono::NaiveDate;
use reqwest::{header::HeaderMap, Client};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::{
    core::{auth_header_map, QueryKey},
    error::DraftError,
    Result, Season,
};

/// Base URL of the public API.
pub const CBBD_BASE_URL: &str = "https://api.collegebasketballdata.com";

/// Environment variable overriding [`CBBD_BASE_URL`].
pub const BASE_URL_ENV_VAR: &str = "CBBD_BASE_URL";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Parameters for a `/games` request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GamesQuery {
    pub season: Season,
    pub team: Option<String>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl GamesQuery {
    pub fn season(season: Season) -> Self {
        Self {
            season,
            ..Self::default()
        }
    }

    pub fn for_team(season: Season, team: impl Into<String>) -> Self {
        Self {
            season,
            team: Some(team.into()),
            ..Self::default()
        }
    }

    pub fn between(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    pub fn cache_key(&self) -> QueryKey {
        QueryKey::Games {
            season: self.season,
            team: self.team.clone(),
            start: self.start,
            end: self.end,
        }
    }

    fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("season", self.season.to_string())];
        if let Some(team) = &self.team {
            params.push(("team", team.clone()));
        }
        if let Some(start) = self.start {
            params.push(("startDateRange", start.format("%Y-%m-%d").to_string()));
        }
        if let Some(end) = self.end {
            params.push(("endDateRange", end.format("%Y-%m-%d").to_string()));
        }
        params
    }
}

/// Authenticated client for the three read-only queries the leaderboard needs.
#[derive(Debug, Clone)]
pub struct CbbdClient {
    client: Client,
    base_url: String,
    headers: HeaderMap,
}

impl CbbdClient {
    /// Client against `CBBD_BASE_URL` (env) or the public API.
    pub fn new(token: &str) -> Result<Self> {
        let base_url =
            std::env::var(BASE_URL_ENV_VAR).unwrap_or_else(|_| CBBD_BASE_URL.to_string());
        Self::with_base_url(token, base_url)
    }

    pub fn with_base_url(token: &str, base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            headers: auth_header_map(token)?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /teams`
    pub async fn get_teams(&self) -> Result<Vec<Value>> {
        self.get_rows("/teams", &[]).await
    }

    /// `GET /rankings?season=`
    pub async fn get_rankings(&self, season: Season) -> Result<Vec<Value>> {
        self.get_rows("/rankings", &[("season", season.to_string())])
            .await
    }

    /// `GET /games` with optional team and date range filters
    pub async fn get_games(&self, query: &GamesQuery) -> Result<Vec<Value>> {
        self.get_rows("/games", &query.params()).await
    }

    async fn get_rows(&self, endpoint: &str, params: &[(&str, String)]) -> Result<Vec<Value>> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!(%url, ?params, "requesting");

        let res = self
            .client
            .get(&url)
            .headers(self.headers.clone())
            .query(params)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(DraftError::Api {
                status: status.as_u16(),
                endpoint: endpoint.to_string(),
            });
        }

        let body = res.json::<Value>().await?;
        let rows: Vec<Value> = serde_json::from_value(body)?;
        debug!(endpoint, rows = rows.len(), "response received");
        Ok(rows)
    }
}
