// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! In-memory cache implementation with per-entry TTL and size limits

use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::debug;

use super::{
    types::{AccessSequence, TimestampMillis},
    validate_key, CacheStats, KeyValueCache,
};
use crate::errors::CacheError;

/// Entry in the memory cache with metadata
#[derive(Debug, Clone)]
struct CacheEntry {
    value: Vec<u8>,
    /// First instant at which this entry counts as a miss
    expires_at: TimestampMillis,
    /// When this entry was last accessed (for LRU eviction)
    last_accessed: TimestampMillis,
    /// Sequence number for deterministic LRU ordering when timestamps are equal
    access_seq: AccessSequence,
}

impl CacheEntry {
    fn new(value: Vec<u8>, ttl: Duration, access_seq: AccessSequence) -> Self {
        let now = TimestampMillis::now();
        Self {
            value,
            expires_at: now.after(ttl),
            last_accessed: now,
            access_seq,
        }
    }

    fn is_expired(&self) -> bool {
        self.expires_at.is_past()
    }

    fn touch(&mut self, access_seq: AccessSequence) {
        self.last_accessed = TimestampMillis::now();
        self.access_seq = access_seq;
    }
}

/// Internal state for memory cache
#[derive(Debug, Default)]
struct MemoryCacheState {
    entries: HashMap<String, CacheEntry>,
    stats: CacheStats,
    next_seq: AccessSequence,
}

impl MemoryCacheState {
    fn advance_seq(&mut self) -> AccessSequence {
        let seq = self.next_seq;
        self.next_seq = seq.next();
        seq
    }
}

/// In-memory cache with per-entry TTL and optional size limits
///
/// This cache stores raw bytes in a HashMap. It supports:
/// - A TTL per `set` call; expired entries are dropped when read
/// - Optional size limits with LRU (least recently used) eviction
/// - Thread-safe concurrent access
///
/// # Examples
///
/// ```rust,ignore
/// use recordkit::MemoryCache;
///
/// // Unbounded cache
/// let cache = MemoryCache::new();
///
/// // Cache with size limit
/// let cache = MemoryCache::new().with_max_entries(1000);
/// ```
///
/// # Performance
///
/// - Get: O(1) average case (HashMap lookup)
/// - Set: O(1) without eviction, O(n) with eviction (finds LRU)
#[derive(Debug, Default)]
pub struct MemoryCache {
    max_entries: Option<usize>,
    state: Mutex<MemoryCacheState>,
}

impl MemoryCache {
    /// Creates a new memory cache with no size limit
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of entries in the cache
    ///
    /// When the limit is reached, the least recently used (LRU) entry will be evicted
    /// to make room for new entries.
    pub fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = Some(max_entries);
        self
    }

    /// Evicts the least recently used entry from the cache
    fn evict_lru(state: &mut MemoryCacheState) {
        let lru_key = state
            .entries
            .iter()
            .min_by_key(|(_, entry)| (entry.last_accessed, entry.access_seq))
            .map(|(key, _)| key.clone());

        if let Some(key) = lru_key {
            debug!(key = %key, "Evicting LRU cache entry");
            state.entries.remove(&key);
            state.stats.evictions += 1;
        }
    }
}

#[async_trait]
impl KeyValueCache for MemoryCache {
    async fn get(&self, key: &str) -> Option<Vec<u8>> {
        let mut state = self.state.lock().await;

        match state.entries.get(key).map(CacheEntry::is_expired) {
            None => {
                state.stats.misses += 1;
                debug!(key = %key, "Cache miss (memory)");
                return None;
            }
            Some(true) => {
                debug!(key = %key, "Cache entry expired");
                state.entries.remove(key);
                state.stats.expirations += 1;
                state.stats.misses += 1;
                state.stats.entries = state.entries.len();
                return None;
            }
            Some(false) => {}
        }

        let seq = state.advance_seq();
        let (value, idle) = state.entries.get_mut(key).map(|entry| {
            let idle = entry.last_accessed.age_since_now();
            entry.touch(seq);
            (entry.value.clone(), idle)
        })?;
        state.stats.hits += 1;
        debug!(key = %key, idle_ms = idle.as_millis() as u64, "Cache hit (memory)");
        Some(value)
    }

    async fn set(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<(), CacheError> {
        validate_key(key)?;
        let mut state = self.state.lock().await;

        // Overwriting an existing key never needs room
        if let Some(max_entries) = self.max_entries {
            if !state.entries.contains_key(key) {
                while !state.entries.is_empty() && state.entries.len() >= max_entries {
                    Self::evict_lru(&mut state);
                }
            }
        }

        debug!(key = %key, ttl_ms = ttl.as_millis() as u64, "Inserting entry into memory cache");
        let seq = state.advance_seq();
        state
            .entries
            .insert(key.to_string(), CacheEntry::new(value, ttl, seq));
        state.stats.entries = state.entries.len();

        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool, CacheError> {
        let mut state = self.state.lock().await;
        let removed = state.entries.remove(key).is_some();
        state.stats.entries = state.entries.len();
        Ok(removed)
    }

    async fn clear(&self) -> Result<(), CacheError> {
        let mut state = self.state.lock().await;
        debug!(entries = state.entries.len(), "Clearing memory cache");
        state.entries.clear();
        state.stats.entries = 0;
        Ok(())
    }

    async fn stats(&self) -> CacheStats {
        let state = self.state.lock().await;
        state.stats.clone()
    }

    fn name(&self) -> &'static str {
        "MemoryCache"
    }
}
