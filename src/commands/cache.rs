//! Cache maintenance command implementation

use serde_json::Value;
use std::path::PathBuf;

use crate::{
    core::{default_cache_dir, QueryKey, ResponseCache},
    Result,
};

/// Delete every cached response under `dir`, returning how many were removed.
pub fn clear_cache_dir(dir: PathBuf) -> Result<usize> {
    let cache: ResponseCache<QueryKey, Vec<Value>> = ResponseCache::new(Some(dir), 0);
    cache.clear()
}

/// Handle `cache clear`
pub fn handle_cache_clear() -> Result<()> {
    let dir = default_cache_dir();
    let removed = clear_cache_dir(dir.clone())?;
    println!("✓ Removed {} cached responses from {}", removed, dir.display());
    Ok(())
}
