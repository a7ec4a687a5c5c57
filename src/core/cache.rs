//! Time-bounded response cache with an in-memory LRU tier and file persistence
//!
//! This module provides a two-tier caching system:
//! - L1 Cache: In-memory LRU cache for repeated refreshes within one process
//! - L2 Cache: JSON files under the user cache dir, shared across runs
//!
//! Every entry is stamped with the instant it was fetched. Reads only return
//! entries younger than the cache's time-to-live, so a refresh inside the TTL
//! window gets back exactly what was fetched before.

use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use lru::LruCache;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    hash::Hash,
    io::{Read, Write},
    num::NonZeroUsize,
    path::{Path, PathBuf},
    sync::{Mutex, MutexGuard},
};
use tracing::debug;

use crate::{error::DraftError, Result, Season};

const MEMORY_CAPACITY: usize = 64;

/// Default cache directory: ~/.cache/cbb-draft
pub fn default_cache_dir() -> PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join("cbb-draft")
}

/// Try to read a file into a String
pub fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}

/// Write a string to file
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}

/// Identity of a cached query
pub trait CacheKey: Hash + Eq + Clone + Send + Sync {
    /// Generate a string representation for file system storage
    fn to_file_key(&self) -> String;
}

/// The three logical upstream queries
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Teams,
    Rankings {
        season: Season,
    },
    Games {
        season: Season,
        team: Option<String>,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    },
}

impl CacheKey for QueryKey {
    fn to_file_key(&self) -> String {
        match self {
            QueryKey::Teams => "teams".to_string(),
            QueryKey::Rankings { season } => format!("rankings_s{}", season.as_u16()),
            QueryKey::Games {
                season,
                team,
                start,
                end,
            } => {
                let team_part = team
                    .as_ref()
                    .map(|t| {
                        let slug: String = t
                            .to_lowercase()
                            .chars()
                            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
                            .collect();
                        format!("team_{}", slug)
                    })
                    .unwrap_or_else(|| "all_teams".to_string());
                let start_part = start
                    .map(|d| d.format("%Y%m%d").to_string())
                    .unwrap_or_else(|| "open".to_string());
                let end_part = end
                    .map(|d| d.format("%Y%m%d").to_string())
                    .unwrap_or_else(|| "open".to_string());

                format!(
                    "games_s{}_{}_{}_{}",
                    season.as_u16(),
                    team_part,
                    start_part,
                    end_part
                )
            }
        }
    }
}

/// A cached value together with the instant it was fetched
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stamped<V> {
    pub fetched_at: DateTime<Utc>,
    pub value: V,
}

/// Response cache keyed by query identity with a fixed time-to-live
pub struct ResponseCache<K, V>
where
    K: CacheKey,
    V: Clone + Serialize + for<'de> Deserialize<'de>,
{
    memory: Mutex<LruCache<K, Stamped<V>>>,
    dir: Option<PathBuf>,
    ttl: TimeDelta,
}

impl<K, V> ResponseCache<K, V>
where
    K: CacheKey,
    V: Clone + Serialize + for<'de> Deserialize<'de>,
{
    /// Create a cache persisting under `dir` (memory only when `None`).
    pub fn new(dir: Option<PathBuf>, ttl_secs: u64) -> Self {
        let capacity = NonZeroUsize::new(MEMORY_CAPACITY).unwrap_or(NonZeroUsize::MIN);
        Self {
            memory: Mutex::new(LruCache::new(capacity)),
            dir,
            ttl: i64::try_from(ttl_secs)
                .ok()
                .and_then(TimeDelta::try_seconds)
                .unwrap_or(TimeDelta::MAX),
        }
    }

    /// Whether caching is turned off (`ttl == 0`).
    pub fn is_disabled(&self) -> bool {
        self.ttl <= TimeDelta::zero()
    }

    /// Get a fresh entry (checks memory first, then disk)
    pub fn get(&self, key: &K) -> Option<V> {
        self.get_at(key, Utc::now())
    }

    /// Get an entry that is still fresh at `now`.
    pub fn get_at(&self, key: &K, now: DateTime<Utc>) -> Option<V> {
        if self.is_disabled() {
            return None;
        }

        if let Some(entry) = self.lock().get(key) {
            if self.is_fresh(entry, now) {
                return Some(entry.value.clone());
            }
        }

        let entry = self.get_from_disk(key)?;
        if !self.is_fresh(&entry, now) {
            debug!(key = %key.to_file_key(), "disk cache entry expired");
            return None;
        }

        // Promote to memory cache
        let value = entry.value.clone();
        self.lock().put(key.clone(), entry);
        Some(value)
    }

    /// Store a value fetched now
    pub fn put(&self, key: K, value: V) {
        self.put_at(key, value, Utc::now());
    }

    /// Store a value fetched at `fetched_at` (stores in both memory and disk)
    pub fn put_at(&self, key: K, value: V, fetched_at: DateTime<Utc>) {
        if self.is_disabled() {
            return;
        }

        let entry = Stamped { fetched_at, value };
        if let Err(e) = self.put_to_disk(&key, &entry) {
            debug!(key = %key.to_file_key(), error = %e, "failed to persist cache entry");
        }
        self.lock().put(key, entry);
    }

    /// Remove every entry from memory and disk, returning the number of files deleted.
    pub fn clear(&self) -> Result<usize> {
        self.lock().clear();

        let Some(dir) = &self.dir else {
            return Ok(0);
        };
        if !dir.exists() {
            return Ok(0);
        }

        let mut removed = 0;
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                fs::remove_file(&path).map_err(|e| DraftError::Cache {
                    message: format!("could not remove {}: {}", path.display(), e),
                })?;
                removed += 1;
            }
        }
        Ok(removed)
    }

    /// Number of entries held in memory
    pub fn memory_len(&self) -> usize {
        self.lock().len()
    }

    fn is_fresh(&self, entry: &Stamped<V>, now: DateTime<Utc>) -> bool {
        now - entry.fetched_at < self.ttl
    }

    fn lock(&self) -> MutexGuard<'_, LruCache<K, Stamped<V>>> {
        self.memory.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn path_for(&self, key: &K) -> Option<PathBuf> {
        self.dir
            .as_ref()
            .map(|dir| dir.join(format!("{}.json", key.to_file_key())))
    }

    fn get_from_disk(&self, key: &K) -> Option<Stamped<V>> {
        let path = self.path_for(key)?;
        let content = try_read_to_string(&path)?;
        match serde_json::from_str(&content) {
            Ok(entry) => Some(entry),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "ignoring unreadable cache file");
                None
            }
        }
    }

    fn put_to_disk(&self, key: &K, entry: &Stamped<V>) -> Result<()> {
        let Some(path) = self.path_for(key) else {
            return Ok(());
        };
        let content = serde_json::to_string(entry)?;
        write_string(&path, &content)?;
        Ok(())
    }
}
