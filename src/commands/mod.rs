//! Command implementations for the draft leaderboard CLI

pub mod cache;
pub mod common;
pub mod game_log;
pub mod leaderboard;
pub mod scoreboard;
pub mod standings;

use crate::{error::DraftError, Result, TOKEN_ENV_VAR};

/// Resolve the API token from an explicit value or the environment
pub fn resolve_token(token: Option<String>) -> Result<String> {
    token
        .or_else(|| std::env::var(TOKEN_ENV_VAR).ok())
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .ok_or_else(|| DraftError::MissingToken {
            env_var: TOKEN_ENV_VAR.to_string(),
        })
}
