//! In-memory record store

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::debug;

use super::{names_match, Predicate, Record, RecordId, RecordStore};
use crate::errors::StoreError;

/// Internal state for the memory store
#[derive(Debug)]
struct MemoryStoreState<T> {
    rows: BTreeMap<RecordId, T>,
    next_id: RecordId,
}

impl<T> Default for MemoryStoreState<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

/// In-memory record table
///
/// Keys are assigned in increasing order starting at 1. Named records are
/// subject to a case-insensitive uniqueness constraint, like a unique index
/// on `lower(name)`.
///
/// # Examples
///
/// ```rust,ignore
/// let store = MemoryStore::new();
/// let first = store.insert_with(|id| Category::new(id, "news", "")).await?;
/// assert_eq!(first.id, 1);
///
/// // Names collide regardless of case
/// assert!(store.insert_with(|id| Category::new(id, "News", "")).await.is_err());
/// ```
#[derive(Debug)]
pub struct MemoryStore<T> {
    state: RwLock<MemoryStoreState<T>>,
}

impl<T: Record> MemoryStore<T> {
    /// Creates an empty store
    pub fn new() -> Self {
        Self {
            state: RwLock::new(MemoryStoreState::default()),
        }
    }

    /// Inserts a record built from the next free key
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateName`] if the record's name is already taken.
    pub async fn insert_with<F>(&self, build: F) -> Result<T, StoreError>
    where
        F: FnOnce(RecordId) -> T,
    {
        let mut state = self.state.write().await;
        let id = state.next_id;
        let record = build(id);

        if let Some(name) = record.name() {
            if state
                .rows
                .values()
                .any(|row| row.name().is_some_and(|n| names_match(n, name, true)))
            {
                return Err(StoreError::duplicate_name(name));
            }
        }

        debug!(id, name = ?record.name(), "Inserting record into memory store");
        state.next_id += 1;
        state.rows.insert(id, record.clone());
        Ok(record)
    }

    /// Replaces the stored record that has the same key
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::MissingRecord`] if no record has that key, or
    /// [`StoreError::DuplicateName`] if the new name belongs to another record.
    pub async fn update(&self, record: T) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        let id = record.id();

        if !state.rows.contains_key(&id) {
            return Err(StoreError::MissingRecord { id });
        }
        if let Some(name) = record.name() {
            let taken = state.rows.iter().any(|(other, row)| {
                *other != id && row.name().is_some_and(|n| names_match(n, name, true))
            });
            if taken {
                return Err(StoreError::duplicate_name(name));
            }
        }

        debug!(id, "Updating record in memory store");
        state.rows.insert(id, record);
        Ok(())
    }

    /// Number of stored records
    pub async fn len(&self) -> usize {
        self.state.read().await.rows.len()
    }

    /// Returns `true` if the store holds no records
    pub async fn is_empty(&self) -> bool {
        self.state.read().await.rows.is_empty()
    }
}

impl<T: Record> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Record> RecordStore<T> for MemoryStore<T> {
    async fn get(&self, id: RecordId) -> Result<Option<T>, StoreError> {
        Ok(self.state.read().await.rows.get(&id).cloned())
    }

    async fn find_one_by_name(
        &self,
        name: &str,
        case_insensitive: bool,
    ) -> Result<Option<T>, StoreError> {
        let state = self.state.read().await;
        Ok(state
            .rows
            .values()
            .find(|row| {
                row.name()
                    .is_some_and(|n| names_match(n, name, case_insensitive))
            })
            .cloned())
    }

    async fn query_all(&self, predicate: Predicate<'_, T>) -> Result<Vec<T>, StoreError> {
        let state = self.state.read().await;
        Ok(state
            .rows
            .values()
            .filter(|row| predicate(*row))
            .cloned()
            .collect())
    }

    fn name(&self) -> &'static str {
        "MemoryStore"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Tag {
        id: RecordId,
        name: String,
    }

    impl Record for Tag {
        fn id(&self) -> RecordId {
            self.id
        }

        fn name(&self) -> Option<&str> {
            Some(&self.name)
        }
    }

    fn tag(name: &str) -> impl FnOnce(RecordId) -> Tag + '_ {
        move |id| Tag {
            id,
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn test_keys_are_assigned_in_order() {
        let store = MemoryStore::new();
        let a = store.insert_with(tag("alpha")).await.unwrap();
        let b = store.insert_with(tag("beta")).await.unwrap();

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(store.len().await, 2);
        assert_eq!(store.get(2).await.unwrap(), Some(b));
        assert_eq!(store.get(-1).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_name_lookup_case_sensitivity() {
        let store = MemoryStore::new();
        let news = store.insert_with(tag("news")).await.unwrap();

        assert_eq!(
            store.find_one_by_name("NEWS", true).await.unwrap(),
            Some(news.clone())
        );
        assert_eq!(store.find_one_by_name("NEWS", false).await.unwrap(), None);
        assert_eq!(
            store.find_one_by_name("news", false).await.unwrap(),
            Some(news)
        );
    }

    #[tokio::test]
    async fn test_duplicate_names_rejected() {
        let store = MemoryStore::new();
        store.insert_with(tag("news")).await.unwrap();

        let err = store.insert_with(tag("News")).await.unwrap_err();
        assert!(matches!(err, StoreError::DuplicateName { .. }));
        // Failed insert must not consume a key
        assert_eq!(store.insert_with(tag("sport")).await.unwrap().id, 2);
    }

    #[tokio::test]
    async fn test_update() {
        let store = MemoryStore::new();
        let news = store.insert_with(tag("news")).await.unwrap();
        store.insert_with(tag("sport")).await.unwrap();

        let renamed = Tag {
            name: "headlines".to_string(),
            ..news.clone()
        };
        store.update(renamed.clone()).await.unwrap();
        assert_eq!(store.get(news.id).await.unwrap(), Some(renamed));

        let clash = Tag {
            name: "SPORT".to_string(),
            ..news
        };
        assert!(matches!(
            store.update(clash).await,
            Err(StoreError::DuplicateName { .. })
        ));

        let ghost = Tag {
            id: 99,
            name: "ghost".to_string(),
        };
        assert!(matches!(
            store.update(ghost).await,
            Err(StoreError::MissingRecord { id: 99 })
        ));
    }

    #[tokio::test]
    async fn test_query_all_filters_in_key_order() {
        let store = MemoryStore::new();
        for name in ["gamma", "alpha", "beta", "delta"] {
            store.insert_with(tag(name)).await.unwrap();
        }

        let long_names = store.query_all(&|t: &Tag| t.name.len() == 5).await.unwrap();
        let names: Vec<_> = long_names.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["gamma", "alpha", "delta"]);
    }
}
