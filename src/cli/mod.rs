//! CLI argument definitions and parsing.

pub mod types;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{DisplayZone, Season};

/// Data-source arguments shared between commands
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Season year (the year the season ends in, e.g. 2026).
    #[clap(long, short, default_value_t = Season::default())]
    pub season: Season,

    /// Ignore cached responses and re-query the API.
    #[clap(long)]
    pub refresh: bool,

    /// Seconds a cached API response stays valid (0 disables caching).
    #[clap(long, default_value_t = 3600)]
    pub cache_ttl: u64,

    /// Query games one drafted team at a time instead of in one bulk request.
    #[clap(long)]
    pub per_team: bool,

    /// Poll used for rankings (`any` accepts every poll).
    #[clap(long, default_value = "AP Top 25")]
    pub poll: String,

    /// JSON file with draft picks (or set `CBB_DRAFT_PICKS`).
    #[clap(long, env = "CBB_DRAFT_PICKS")]
    pub picks: Option<PathBuf>,

    /// Output results as JSON instead of tables.
    #[clap(long)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Overall leaderboard plus each person's drafted teams.
    Leaderboard {
        #[clap(flatten)]
        common: CommonArgs,

        /// Only show these people (repeatable): `--person Nico --person Sam`.
        #[clap(long = "person")]
        persons: Vec<String>,

        /// Skip the per-person team tables.
        #[clap(long)]
        summary: bool,
    },

    /// Per-team standings with streak, ranking and next game.
    Standings {
        #[clap(flatten)]
        common: CommonArgs,

        /// Include undrafted teams.
        #[clap(long)]
        all: bool,
    },

    /// Games on a single day, grouped by owner.
    Scoreboard {
        #[clap(flatten)]
        common: CommonArgs,

        /// Calendar date (YYYY-MM-DD); defaults to today in `--zone`.
        #[clap(long, short)]
        date: Option<NaiveDate>,

        /// UTC offset used to decide which day a game falls on.
        #[clap(long, default_value_t = DisplayZone::default())]
        zone: DisplayZone,

        /// Only show these people's games (repeatable).
        #[clap(long = "person")]
        persons: Vec<String>,
    },

    /// Completed games, one row per team, with rankings as of tip-off.
    GameLog {
        #[clap(flatten)]
        common: CommonArgs,

        /// Only show games for this school.
        #[clap(long, short)]
        team: Option<String>,
    },

    /// Manage the API response cache.
    Cache {
        #[clap(subcommand)]
        cmd: CacheCmd,
    },
}

#[derive(Debug, Subcommand)]
pub enum CacheCmd {
    /// Delete every cached API response.
    Clear,
}

#[derive(Debug, Parser)]
#[clap(name = "cbb-draft", about = "College basketball draft leaderboard")]
pub struct Cli {
    /// Log debug output to stderr.
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}
