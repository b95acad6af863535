// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Record store contract
//!
//! Persistence is an external collaborator. The library only needs three
//! queries from it: fetch by key, fetch one by name, and scan with a
//! predicate. [`MemoryStore`] is a complete in-process implementation used by
//! tests and small deployments.
//!
//! # Examples
//!
//! ```rust,ignore
//! use recordkit::{MemoryStore, RecordStore};
//!
//! let store = MemoryStore::new();
//! let news = store.insert_with(|id| Category::new(id, "news", "News items")).await?;
//!
//! assert_eq!(store.get(news.id).await?, Some(news.clone()));
//! assert_eq!(store.find_one_by_name("NEWS", true).await?, Some(news));
//! ```

use async_trait::async_trait;
use std::sync::Arc;

use crate::errors::StoreError;

mod memory;

pub use memory::MemoryStore;

/// Store-assigned integer primary key
pub type RecordId = i64;

/// A persisted entity
pub trait Record: Clone + Send + Sync + 'static {
    /// The store-assigned key
    fn id(&self) -> RecordId;

    /// The unique name of this record, for record kinds that have one
    fn name(&self) -> Option<&str> {
        None
    }
}

/// Predicate used for full scans
pub type Predicate<'a, T> = &'a (dyn Fn(&T) -> bool + Send + Sync);

/// Trait for record store backends
///
/// Absence is not an error: lookups return `Ok(None)` when nothing matches and
/// reserve `Err` for backend failures.
///
/// # Thread Safety
///
/// Implementations must support concurrent access; the library issues
/// independent calls without any cross-call locking.
#[async_trait]
pub trait RecordStore<T: Record>: Send + Sync {
    /// Fetches the record with the given key
    async fn get(&self, id: RecordId) -> Result<Option<T>, StoreError>;

    /// Fetches the record whose name matches `name`
    ///
    /// Names are unique per record kind, so at most one record matches.
    async fn find_one_by_name(
        &self,
        name: &str,
        case_insensitive: bool,
    ) -> Result<Option<T>, StoreError>;

    /// Returns every record for which `predicate` holds, ordered by key
    async fn query_all(&self, predicate: Predicate<'_, T>) -> Result<Vec<T>, StoreError>;

    /// Returns a human-readable name for this store backend
    ///
    /// Used for logging and debugging.
    fn name(&self) -> &'static str;
}

#[async_trait]
impl<T, S> RecordStore<T> for Arc<S>
where
    T: Record,
    S: RecordStore<T> + ?Sized,
{
    async fn get(&self, id: RecordId) -> Result<Option<T>, StoreError> {
        (**self).get(id).await
    }

    async fn find_one_by_name(
        &self,
        name: &str,
        case_insensitive: bool,
    ) -> Result<Option<T>, StoreError> {
        (**self).find_one_by_name(name, case_insensitive).await
    }

    async fn query_all(&self, predicate: Predicate<'_, T>) -> Result<Vec<T>, StoreError> {
        (**self).query_all(predicate).await
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Compares two names the way the store's name index does
pub(crate) fn names_match(stored: &str, wanted: &str, case_insensitive: bool) -> bool {
    if case_insensitive {
        stored.to_lowercase() == wanted.to_lowercase()
    } else {
        stored == wanted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_match() {
        assert!(names_match("news", "news", false));
        assert!(!names_match("news", "News", false));
        assert!(names_match("news", "News", true));
    }
}
