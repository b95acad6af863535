// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Cache-aside resolution of type records
//!
//! Type records are small lookup tables (categories, kinds, statuses) that
//! change rarely and are read constantly. [`TypeResolver`] turns any
//! [`Identifier`] into a record:
//!
//! 1. An instance is returned untouched, without touching cache or store
//! 2. Otherwise the cache is consulted under a key derived from the record
//!    kind and the identifier
//! 3. On a miss the store is queried by key or by case-insensitive name and
//!    the result is written back with the configured TTL
//!
//! The cache is advisory. Read failures count as misses and write failures
//! are logged, so correctness never depends on it.
//!
//! # Examples
//!
//! ```rust,ignore
//! use recordkit::{MemoryCache, MemoryStore, TypeEntry, TypeKind, TypeResolver};
//! use std::sync::Arc;
//!
//! struct CategoryKind;
//! impl TypeKind for CategoryKind {
//!     const NAMESPACE: &'static str = "blog";
//!     const KIND: &'static str = "Category";
//! }
//! type Category = TypeEntry<CategoryKind>;
//!
//! let store = Arc::new(MemoryStore::new());
//! store.insert_with(|id| Category::new(id, "news", "News items")).await?;
//!
//! let resolver = TypeResolver::new(store, Arc::new(MemoryCache::new()));
//! let news = resolver.resolve("News").await?;
//! assert_eq!(resolver.resolve(news.id).await?, news);
//! ```

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::{debug, warn, Instrument};

use crate::cache::{KeyValueCache, NoOpCache};
use crate::config::ResolverConfig;
use crate::errors::{BoundaryError, CacheError, ResolveError};
use crate::store::{Record, RecordId, RecordStore};
use crate::tracing::spans;

mod identifier;
pub mod key;

pub use identifier::Identifier;
pub use key::CacheKey;

/// A record from a type table
///
/// The namespace and kind together identify the table; they become part of
/// every cache key, so two tables never share entries.
pub trait TypeRecord: Record + Serialize + DeserializeOwned {
    /// Application or schema the table belongs to
    const NAMESPACE: &'static str;

    /// Name of the table's record kind
    const KIND: &'static str;

    /// The unique slug identifying this entry in code
    fn slug(&self) -> &str;

    /// Human-readable description of this entry and its semantics
    fn description(&self) -> &str;

    /// `namespace.Kind`, used in messages
    fn qualified_kind() -> String {
        format!("{}.{}", Self::NAMESPACE, Self::KIND)
    }
}

/// Declares a type table
///
/// ```rust
/// use recordkit::{TypeEntry, TypeKind};
///
/// struct StatusKind;
/// impl TypeKind for StatusKind {
///     const NAMESPACE: &'static str = "schedule";
///     const KIND: &'static str = "Status";
/// }
/// type Status = TypeEntry<StatusKind>;
///
/// let draft = Status::new(1, "draft", "Not yet approved");
/// assert_eq!(draft.to_string(), "draft");
/// ```
pub trait TypeKind: Send + Sync + 'static {
    const NAMESPACE: &'static str;
    const KIND: &'static str;
}

/// The standard shape of a type record: key, slug and description
#[derive(Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TypeEntry<K> {
    pub id: RecordId,
    pub name: String,
    pub description: String,
    #[serde(skip)]
    kind: PhantomData<fn() -> K>,
}

impl<K> TypeEntry<K> {
    pub fn new(id: RecordId, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            kind: PhantomData,
        }
    }
}

impl<K> Clone for TypeEntry<K> {
    fn clone(&self) -> Self {
        Self::new(self.id, self.name.clone(), self.description.clone())
    }
}

impl<K> PartialEq for TypeEntry<K> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.name == other.name && self.description == other.description
    }
}

impl<K> Eq for TypeEntry<K> {}

impl<K> fmt::Debug for TypeEntry<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeEntry")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("description", &self.description)
            .finish()
    }
}

impl<K> fmt::Display for TypeEntry<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl<K: TypeKind> Record for TypeEntry<K> {
    fn id(&self) -> RecordId {
        self.id
    }

    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }
}

impl<K: TypeKind> TypeRecord for TypeEntry<K> {
    const NAMESPACE: &'static str = K::NAMESPACE;
    const KIND: &'static str = K::KIND;

    fn slug(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }
}

impl<K> From<TypeEntry<K>> for Identifier<TypeEntry<K>> {
    fn from(entry: TypeEntry<K>) -> Self {
        Identifier::Instance(entry)
    }
}

/// What to ask the store for on a cache miss
enum StoreQuery {
    Key(RecordId),
    Name(String),
}

impl StoreQuery {
    fn token(&self) -> String {
        match self {
            StoreQuery::Key(id) => key::key_token(*id),
            StoreQuery::Name(name) => key::name_token(name),
        }
    }
}

/// Resolves identifiers to type records through a shared cache
///
/// # Examples
///
/// ```rust,ignore
/// use recordkit::{MemoryCache, ResolverConfigBuilder, TypeResolver};
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// let cache = Arc::new(MemoryCache::new());
/// let config = ResolverConfigBuilder::with_defaults()
///     .ttl(Duration::from_secs(300))
///     .build();
///
/// // Resolvers for different tables can share one cache
/// let categories =
///     TypeResolver::<Category, _>::with_config(category_store, cache.clone(), config.clone());
/// let statuses = TypeResolver::<Status, _>::with_config(status_store, cache, config);
/// ```
pub struct TypeResolver<T, S> {
    store: S,
    cache: Arc<dyn KeyValueCache>,
    config: ResolverConfig,
    record: PhantomData<fn() -> T>,
}

impl<T, S> TypeResolver<T, S>
where
    T: TypeRecord,
    S: RecordStore<T>,
{
    /// Creates a resolver with the default configuration
    pub fn new(store: S, cache: Arc<dyn KeyValueCache>) -> Self {
        Self::with_config(store, cache, ResolverConfig::default())
    }

    pub fn with_config(store: S, cache: Arc<dyn KeyValueCache>, config: ResolverConfig) -> Self {
        Self {
            store,
            cache,
            config,
            record: PhantomData,
        }
    }

    /// Creates a resolver that always queries the store
    pub fn uncached(store: S) -> Self {
        Self::new(store, Arc::new(NoOpCache))
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The cache key `identifier` is stored under, or `None` for instances
    pub fn cache_key(&self, identifier: &Identifier<T>) -> Option<CacheKey> {
        identifier.token().map(|token| self.key_for(&token))
    }

    fn key_for(&self, token: &str) -> CacheKey {
        CacheKey::new(self.config.key_prefix, T::NAMESPACE, T::KIND, token)
    }

    /// Resolves `identifier`, failing with [`ResolveError::NotFound`] if nothing matches
    pub async fn resolve(&self, identifier: impl Into<Identifier<T>>) -> Result<T, ResolveError> {
        let identifier = identifier.into();
        let shown = identifier.to_string();
        self.lookup(identifier)
            .await?
            .ok_or_else(|| ResolveError::not_found(T::qualified_kind(), shown))
    }

    /// Resolves `identifier`, returning `None` if nothing matches
    ///
    /// Unsupported identifiers and store failures are still errors.
    pub async fn resolve_or_none(
        &self,
        identifier: impl Into<Identifier<T>>,
    ) -> Result<Option<T>, ResolveError> {
        self.lookup(identifier.into()).await
    }

    /// Resolves `identifier` for a presentation layer
    ///
    /// Absence becomes [`BoundaryError::NotFound`], which a web layer maps to
    /// its own not-found response.
    pub async fn resolve_or_not_found(
        &self,
        identifier: impl Into<Identifier<T>>,
    ) -> Result<T, BoundaryError> {
        Ok(self.resolve(identifier).await?)
    }

    /// Resolves an identifier received as JSON
    pub async fn resolve_value(&self, value: &Value) -> Result<T, ResolveError> {
        self.resolve(Identifier::from_json(value)?).await
    }

    /// Drops the cached entry for `identifier`, if any
    ///
    /// Returns whether an entry was removed.
    pub async fn invalidate(
        &self,
        identifier: impl Into<Identifier<T>>,
    ) -> Result<bool, CacheError> {
        match self.cache_key(&identifier.into()) {
            Some(key) => self.cache.delete(key.as_str()).await,
            None => Ok(false),
        }
    }

    async fn lookup(&self, identifier: Identifier<T>) -> Result<Option<T>, ResolveError> {
        let span = spans::resolve_type(T::NAMESPACE, T::KIND, &identifier.to_string());
        let query = match identifier {
            Identifier::Instance(record) => {
                debug!(
                    kind = T::KIND,
                    id = record.id(),
                    "Passing resolved instance through"
                );
                return Ok(Some(record));
            }
            Identifier::Key(id) => StoreQuery::Key(id),
            Identifier::Name(name) => StoreQuery::Name(name),
        };
        let key = self.key_for(&query.token());

        self.fetch(&key, &query).instrument(span).await
    }

    async fn fetch(&self, key: &CacheKey, query: &StoreQuery) -> Result<Option<T>, ResolveError> {
        if let Some(record) = self.read_cache(key).await {
            return Ok(Some(record));
        }

        let found = match query {
            StoreQuery::Key(id) => self.store.get(*id).await?,
            StoreQuery::Name(name) => self.store.find_one_by_name(name, true).await?,
        };

        match found {
            Some(record) => {
                debug!(
                    key = %key,
                    store = self.store.name(),
                    id = record.id(),
                    "Resolved type from store"
                );
                self.write_cache(key, &record).await;
                Ok(Some(record))
            }
            None => {
                debug!(key = %key, store = self.store.name(), "No type matches identifier");
                Ok(None)
            }
        }
    }

    async fn read_cache(&self, key: &CacheKey) -> Option<T> {
        let bytes = self.cache.get(key.as_str()).await?;
        match serde_json::from_slice(&bytes) {
            Ok(record) => {
                debug!(
                    key = %key,
                    cache = self.cache.name(),
                    cached = true,
                    "Resolved type from cache"
                );
                Some(record)
            }
            Err(e) => {
                warn!(key = %key, error = %e, "Discarding undecodable cache entry");
                None
            }
        }
    }

    /// Caching is best-effort: failures are logged and otherwise ignored
    async fn write_cache(&self, key: &CacheKey, record: &T) {
        let bytes = match serde_json::to_vec(record) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(key = %key, error = %e, "Failed to encode type for caching");
                return;
            }
        };
        if let Err(e) = self.cache.set(key.as_str(), bytes, self.config.ttl).await {
            warn!(
                key = %key,
                cache = self.cache.name(),
                error = %e,
                "Failed to cache type (continuing anyway)"
            );
        }
    }
}
