//! No-operation cache that disables caching entirely

use async_trait::async_trait;
use std::time::Duration;

use super::{CacheStats, KeyValueCache};
use crate::errors::CacheError;

/// A no-operation cache that disables caching entirely
///
/// This cache backend always returns `None` for reads and ignores writes.
/// Every resolution goes to the record store.
///
/// # Examples
///
/// ```rust,ignore
/// use recordkit::{NoOpCache, TypeResolver};
/// use std::sync::Arc;
///
/// let resolver = TypeResolver::new(store, Arc::new(NoOpCache));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpCache;

#[async_trait]
impl KeyValueCache for NoOpCache {
    async fn get(&self, _key: &str) -> Option<Vec<u8>> {
        None
    }

    async fn set(&self, _key: &str, _value: Vec<u8>, _ttl: Duration) -> Result<(), CacheError> {
        Ok(())
    }

    async fn delete(&self, _key: &str) -> Result<bool, CacheError> {
        Ok(false)
    }

    async fn clear(&self) -> Result<(), CacheError> {
        Ok(())
    }

    async fn stats(&self) -> CacheStats {
        CacheStats::default()
    }

    fn name(&self) -> &'static str {
        "NoOpCache"
    }
}
