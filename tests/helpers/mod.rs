// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for recordkit integration tests
//!
//! Provides call-counting wrappers around the in-memory backends so tests can
//! assert exactly which collaborator a resolver touched.

use async_trait::async_trait;
use recordkit::{
    CacheError, CacheStats, KeyValueCache, MemoryCache, MemoryStore, Predicate, Record, RecordId,
    RecordStore, StoreError, TypeEntry, TypeKind,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Type table used throughout the integration tests
pub struct SectionKind;

impl TypeKind for SectionKind {
    const NAMESPACE: &'static str = "newsroom";
    const KIND: &'static str = "Section";
}

pub type Section = TypeEntry<SectionKind>;

/// Installs a test subscriber honouring `RUST_LOG`
///
/// Safe to call from every test; only the first call takes effect.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Seeds a store with `(name, description)` pairs, keyed 1, 2, ...
#[allow(dead_code)]
pub async fn seeded_sections(rows: &[(&str, &str)]) -> MemoryStore<Section> {
    let store = MemoryStore::new();
    for (name, description) in rows {
        store
            .insert_with(|id| Section::new(id, *name, *description))
            .await
            .expect("seed rows have unique names");
    }
    store
}

/// Record store that counts every query it forwards
pub struct CountingStore<T> {
    inner: MemoryStore<T>,
    gets: AtomicUsize,
    name_lookups: AtomicUsize,
    scans: AtomicUsize,
}

#[allow(dead_code)]
impl<T: Record> CountingStore<T> {
    pub fn new(inner: MemoryStore<T>) -> Self {
        Self {
            inner,
            gets: AtomicUsize::new(0),
            name_lookups: AtomicUsize::new(0),
            scans: AtomicUsize::new(0),
        }
    }

    pub fn inner(&self) -> &MemoryStore<T> {
        &self.inner
    }

    pub fn gets(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }

    pub fn name_lookups(&self) -> usize {
        self.name_lookups.load(Ordering::SeqCst)
    }

    pub fn scans(&self) -> usize {
        self.scans.load(Ordering::SeqCst)
    }

    /// Total queries of any kind
    pub fn calls(&self) -> usize {
        self.gets() + self.name_lookups() + self.scans()
    }
}

#[async_trait]
impl<T: Record> RecordStore<T> for CountingStore<T> {
    async fn get(&self, id: RecordId) -> Result<Option<T>, StoreError> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        self.inner.get(id).await
    }

    async fn find_one_by_name(
        &self,
        name: &str,
        case_insensitive: bool,
    ) -> Result<Option<T>, StoreError> {
        self.name_lookups.fetch_add(1, Ordering::SeqCst);
        self.inner.find_one_by_name(name, case_insensitive).await
    }

    async fn query_all(&self, predicate: Predicate<'_, T>) -> Result<Vec<T>, StoreError> {
        self.scans.fetch_add(1, Ordering::SeqCst);
        self.inner.query_all(predicate).await
    }

    fn name(&self) -> &'static str {
        "counting"
    }
}

/// Cache that counts reads and writes, optionally failing every write
pub struct CountingCache {
    inner: MemoryCache,
    reads: AtomicUsize,
    writes: AtomicUsize,
    fail_writes: bool,
}

#[allow(dead_code)]
impl CountingCache {
    pub fn new() -> Self {
        Self {
            inner: MemoryCache::new(),
            reads: AtomicUsize::new(0),
            writes: AtomicUsize::new(0),
            fail_writes: false,
        }
    }

    /// A cache whose backend rejects every write
    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::new()
        }
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn calls(&self) -> usize {
        self.reads() + self.writes()
    }
}

#[async_trait]
impl KeyValueCache for CountingCache {
    async fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<(), CacheError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes {
            return Err(CacheError::backend("connection refused"));
        }
        self.inner.set(key, value, ttl).await
    }

    async fn delete(&self, key: &str) -> Result<bool, CacheError> {
        self.inner.delete(key).await
    }

    async fn clear(&self) -> Result<(), CacheError> {
        self.inner.clear().await
    }

    async fn stats(&self) -> CacheStats {
        self.inner.stats().await
    }

    fn name(&self) -> &'static str {
        "counting"
    }
}
