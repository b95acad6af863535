// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Key-value cache backends
//!
//! The resolver treats its cache as an expiring, advisory side channel: a
//! string key maps to opaque bytes for at most a time-to-live. Backends:
//!
//! - [`MemoryCache`]: In-memory cache with per-entry TTL and optional size limits
//! - [`NoOpCache`]: Disables caching entirely (for testing or specific use cases)
//!
//! Any other store (memcached, Redis, ...) can be plugged in by implementing
//! [`KeyValueCache`].
//!
//! # Examples
//!
//! ```rust,ignore
//! use recordkit::{MemoryCache, NoOpCache, TypeResolver};
//! use std::sync::Arc;
//!
//! // Shared memory cache with a size limit
//! let cache = Arc::new(MemoryCache::new().with_max_entries(500));
//! let resolver = TypeResolver::new(store, cache);
//!
//! // No cache (always hit the store)
//! let resolver = TypeResolver::new(store, Arc::new(NoOpCache));
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use crate::errors::CacheError;

mod memory;
mod noop;
pub mod types;

pub use memory::MemoryCache;
pub use noop::NoOpCache;

/// Longest key accepted, matching memcached's limit
pub const MAX_KEY_LENGTH: usize = 250;

/// Statistics about cache performance
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CacheStats {
    /// Number of cache hits (successful retrievals)
    pub hits: u64,
    /// Number of cache misses (key not found)
    pub misses: u64,
    /// Number of entries evicted due to size limits
    pub evictions: u64,
    /// Number of entries expired due to TTL
    pub expirations: u64,
    /// Current number of entries in the cache
    pub entries: usize,
}

impl CacheStats {
    /// Calculates the cache hit rate as a percentage (0.0 to 100.0)
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }
}

impl fmt::Display for CacheStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hits={}, misses={}, evictions={}, expirations={}, entries={}, hit_rate={:.1}%",
            self.hits,
            self.misses,
            self.evictions,
            self.expirations,
            self.entries,
            self.hit_rate()
        )
    }
}

/// Trait for key-value cache backends
///
/// # Thread Safety
///
/// Implementations must be thread-safe and support concurrent access. Use interior
/// mutability (e.g., `Mutex`, `RwLock`) as needed. Concurrent writers of one key
/// are last-writer-wins.
///
/// # Error Handling
///
/// Callers treat the cache as best-effort. Expiry and eviction may happen at any
/// time; a failed read should surface as a miss.
#[async_trait]
pub trait KeyValueCache: Send + Sync {
    /// Retrieves the bytes stored under `key`
    ///
    /// Returns `None` if:
    /// - The key is not in the cache
    /// - The entry has outlived its TTL
    /// - The key is not valid for this backend
    async fn get(&self, key: &str) -> Option<Vec<u8>>;

    /// Stores `value` under `key` for at most `ttl`
    async fn set(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<(), CacheError>;

    /// Removes `key`, returning whether an entry was present
    async fn delete(&self, key: &str) -> Result<bool, CacheError>;

    /// Clears all entries from the cache
    async fn clear(&self) -> Result<(), CacheError>;

    /// Returns current cache statistics
    async fn stats(&self) -> CacheStats;

    /// Returns a human-readable name for this cache backend
    ///
    /// Used for logging and debugging.
    fn name(&self) -> &'static str;
}

/// Checks `key` against the rules of memcached-style backends
///
/// Keys must be non-empty, at most [`MAX_KEY_LENGTH`] bytes, and free of
/// whitespace and control characters.
pub fn validate_key(key: &str) -> Result<(), CacheError> {
    let well_formed = !key.is_empty()
        && key.len() <= MAX_KEY_LENGTH
        && !key.chars().any(|c| c.is_whitespace() || c.is_control());

    if well_formed {
        Ok(())
    } else {
        Err(CacheError::invalid_key(key))
    }
}
