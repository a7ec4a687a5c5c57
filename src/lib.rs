//! College Basketball Draft Leaderboard Library
//!
//! Tracks a draft where each person picks a set of college basketball teams
//! and is scored by the combined won/loss record of those teams.
//!
//! ## Features
//!
//! - **Data Retrieval**: Teams, poll rankings and games from collegebasketballdata.com
//! - **Response Caching**: TTL-bounded memory + file cache keyed by query
//! - **Standings**: Records, streaks, next games and latest rankings per team
//! - **Leaderboard**: Per-person totals (sum of wins over sum of games) with team breakdowns
//! - **Scoreboard**: A day's games grouped by owner, with owner-vs-owner matchups first
//! - **Game Log**: Completed games with each side's ranking as of tip-off
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cbb_draft::{
//!     cbbd::{DataSource, FetchMode, LoadRequest},
//!     core::ResponseCache,
//!     draft::DraftBoard,
//!     pipeline::{build_report, Inputs},
//!     Season,
//! };
//!
//! # async fn example() -> cbb_draft::Result<()> {
//! let source = DataSource::new(None, ResponseCache::new(None, 3600));
//! let board = DraftBoard::builtin();
//! let raw = source
//!     .load(&LoadRequest {
//!         season: Season::default(),
//!         mode: FetchMode::Bulk,
//!         teams: board.schools(),
//!         dates: None,
//!         refresh: false,
//!     })
//!     .await;
//!
//! let report = build_report(&Inputs::from_raw(&raw, Some("AP Top 25")), &board, chrono::Utc::now());
//! for row in &report.leaderboard {
//!     println!("{} {}-{}", row.person, row.wins, row.losses);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set your API token so uncached queries can be made:
//! ```bash
//! export CBBD_ACCESS_TOKEN=your-token
//! ```

pub mod cbbd;
pub mod cli;
pub mod commands;
pub mod core;
pub mod draft;
pub mod error;
pub mod pipeline;
pub mod render;

// Re-export commonly used types
pub use cli::types::{DisplayZone, GameId, Season, TeamId};
pub use error::{DraftError, Result};

pub const TOKEN_ENV_VAR: &str = "CBBD_ACCESS_TOKEN";
pub const PICKS_ENV_VAR: &str = "CBB_DRAFT_PICKS";
