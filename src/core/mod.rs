//! Core utilities for the draft leaderboard
//!
//! This module consolidates common utilities that are used across
//! the application:
//! - `cache`: TTL-bounded response caching (memory + file system)
//! - `http`: request headers for the data API

pub mod cache;
pub mod http;

// Re-export commonly used items for convenience
pub use cache::{default_cache_dir, CacheKey, QueryKey, ResponseCache};
pub use http::auth_header_map;
