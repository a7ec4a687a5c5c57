//! Error types for the CBB draft leaderboard

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DraftError>;

#[derive(Error, Debug)]
pub enum DraftError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Access token not provided and {env_var} environment variable not set")]
    MissingToken { env_var: String },

    #[error("Failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Team {team_id} is drafted more than once")]
    DuplicatePick { team_id: u32 },

    #[error("Invalid display zone: {value} (expected +HH:MM or -HH:MM)")]
    InvalidZone { value: String },

    #[error("API returned {status} for {endpoint}")]
    Api { status: u16, endpoint: String },

    #[error("Cache error: {message}")]
    Cache { message: String },
}

#[cfg(test)]
mod tests;
