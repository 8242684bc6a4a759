//! TTL-based in-memory cache for raw PokeAPI responses.
//!
//! Thread-safe via `DashMap`, so concurrent requests can read and write
//! without a global lock. Time comes from an injected `ClockPort`.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde_json::Value;

use crate::infrastructure::ports::{CachePort, ClockPort};

/// In-memory `CachePort` with per-entry time-to-live.
///
/// An entry is live while `now < inserted_at + ttl`; at the expiry instant it
/// is already a miss. Expired entries are dropped when read, in bulk by
/// `purge_expired()`, and automatically by `set` whenever the map has doubled
/// since the last sweep (never below `DEFAULT_PURGE_THRESHOLD` entries).
pub struct InMemoryCache {
    entries: DashMap<String, CacheEntry>,
    clock: Arc<dyn ClockPort>,
    /// Size at which the next `set` sweeps expired entries
    next_purge_at: AtomicUsize,
    purge_threshold: usize,
}

/// Entry count below which `set` never sweeps.
pub const DEFAULT_PURGE_THRESHOLD: usize = 256;

struct CacheEntry {
    value: Value,
    expires_at: DateTime<Utc>,
}

impl CacheEntry {
    fn is_live(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

impl InMemoryCache {
    pub fn new(clock: Arc<dyn ClockPort>) -> Self {
        Self::with_purge_threshold(clock, DEFAULT_PURGE_THRESHOLD)
    }

    pub fn with_purge_threshold(clock: Arc<dyn ClockPort>, purge_threshold: usize) -> Self {
        let purge_threshold = purge_threshold.max(1);
        Self {
            entries: DashMap::new(),
            clock,
            next_purge_at: AtomicUsize::new(purge_threshold),
            purge_threshold,
        }
    }

    /// Remove all expired entries and return how many were removed.
    pub fn purge_expired(&self) -> usize {
        let now = self.clock.now();
        let before = self.entries.len();
        self.entries.retain(|_, entry| entry.is_live(now));
        let after = self.entries.len();
        self.next_purge_at.store(
            after.saturating_mul(2).max(self.purge_threshold),
            Ordering::Relaxed,
        );

        let removed = before.saturating_sub(after);
        if removed > 0 {
            tracing::debug!(removed, remaining = after, "Purged expired cache entries");
        }
        removed
    }

    /// Number of stored entries, including expired ones not yet purged.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn expiry(now: DateTime<Utc>, ttl: Duration) -> DateTime<Utc> {
    chrono::Duration::from_std(ttl)
        .ok()
        .and_then(|ttl| now.checked_add_signed(ttl))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

#[async_trait]
impl CachePort for InMemoryCache {
    async fn get(&self, key: &str) -> Option<Value> {
        let now = self.clock.now();
        let hit = self
            .entries
            .get(key)
            .and_then(|entry| entry.is_live(now).then(|| entry.value.clone()));

        if hit.is_none() {
            self.entries.remove_if(key, |_, entry| !entry.is_live(now));
        }
        hit
    }

    async fn set(&self, key: &str, value: Value, ttl: Duration) {
        let expires_at = expiry(self.clock.now(), ttl);
        self.entries
            .insert(key.to_string(), CacheEntry { value, expires_at });

        if self.entries.len() >= self.next_purge_at.load(Ordering::Relaxed) {
            self.purge_expired();
        }
    }

    async fn forget(&self, key: &str) {
        self.entries.remove(key);
    }
}
