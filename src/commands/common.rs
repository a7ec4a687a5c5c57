//! Setup shared by every data command: picks, data source, and the
//! normalized inputs for one refresh.

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;

use crate::{
    cbbd::{CbbdClient, DataSource, FetchMode, FetchWarning, LoadRequest},
    cli::CommonArgs,
    core::{default_cache_dir, QueryKey, ResponseCache},
    draft::DraftBoard,
    pipeline::{canonical_names, Inputs},
    render::render_warnings,
    Result, TeamId,
};

use super::resolve_token;

/// Poll name that turns off poll filtering
pub const ANY_POLL: &str = "any";

/// `None` when every poll should be accepted.
pub fn poll_filter(poll: &str) -> Option<&str> {
    let poll = poll.trim();
    if poll.is_empty() || poll.eq_ignore_ascii_case(ANY_POLL) {
        None
    } else {
        Some(poll)
    }
}

/// Data source backed by the user cache directory.
///
/// A missing token is not an error here: cached responses can still be served.
pub fn open_source(cache_ttl: u64) -> Result<DataSource> {
    let client = match resolve_token(None) {
        Ok(token) => Some(CbbdClient::new(&token)?),
        Err(e) => {
            debug!(error = %e, "no API token, serving from cache only");
            None
        }
    };
    let cache: ResponseCache<QueryKey, Vec<Value>> =
        ResponseCache::new(Some(default_cache_dir()), cache_ttl);
    Ok(DataSource::new(client, cache))
}

/// Everything a command needs for one refresh
pub struct CommandContext {
    pub board: DraftBoard,
    pub inputs: Inputs,
    /// Name each drafted team carries in the game feed
    pub names: BTreeMap<TeamId, String>,
    pub warnings: Vec<FetchWarning>,
    pub now: DateTime<Utc>,
}

impl CommandContext {
    /// Load picks and the whole season using the default data source.
    pub async fn new(common: &CommonArgs) -> Result<Self> {
        let source = open_source(common.cache_ttl)?;
        Self::with_source(common, &source, None).await
    }

    /// Like [`CommandContext::new`], but only games dated within `dates` (UTC, inclusive).
    pub async fn for_dates(common: &CommonArgs, dates: (NaiveDate, NaiveDate)) -> Result<Self> {
        let source = open_source(common.cache_ttl)?;
        Self::with_source(common, &source, Some(dates)).await
    }

    /// Load picks and data from `source`.
    pub async fn with_source(
        common: &CommonArgs,
        source: &DataSource,
        dates: Option<(NaiveDate, NaiveDate)>,
    ) -> Result<Self> {
        let board = DraftBoard::load_or_builtin(common.picks.as_deref())?;

        let request = LoadRequest {
            season: common.season,
            mode: if common.per_team {
                FetchMode::PerTeam
            } else {
                FetchMode::Bulk
            },
            teams: board.schools(),
            dates,
            refresh: common.refresh,
        };
        let raw = source.load(&request).await;
        let inputs = Inputs::from_raw(&raw, poll_filter(&common.poll));

        Ok(Self::from_parts(board, inputs, raw.warnings, Utc::now()))
    }

    /// Context from already-loaded data.
    pub fn from_parts(
        board: DraftBoard,
        inputs: Inputs,
        warnings: Vec<FetchWarning>,
        now: DateTime<Utc>,
    ) -> Self {
        let names = canonical_names(&board, &inputs.games);
        Self {
            board,
            inputs,
            names,
            warnings,
            now,
        }
    }

    /// Print one `⚠` line per failed query; to stderr when stdout carries JSON.
    pub fn print_warnings(&self, as_json: bool) {
        if self.warnings.is_empty() {
            return;
        }
        let text = render_warnings(&self.warnings);
        if as_json {
            eprintln!("{}", text);
        } else {
            println!("{}", text);
            println!();
        }
    }
}
