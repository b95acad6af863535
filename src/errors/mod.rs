// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the recordkit library.
//!
//! This module provides strongly-typed errors for all public APIs in recordkit.
//! It follows a hybrid approach:
//!
//! - **Module-specific errors** for fine-grained error handling (`ResolveError`,
//!   `DateArgumentError`, etc.)
//! - **Unified error type** (`RecordkitError`) for convenience when you don't need
//!   to distinguish between error sources
//!
//! # Architecture
//!
//! Each major module has its own error type:
//! - [`IntervalError`] - Errors from interval arithmetic on effective ranges
//! - [`DateArgumentError`] - Errors from ISO week conversion and date normalization
//! - [`ResolveError`] - Errors from the cache-aside type resolver
//! - [`BoundaryError`] - The resolver's not-found signal for presentation layers
//! - [`StoreError`] - Failures reported by a record store
//! - [`CacheError`] - Failures reported by a key-value cache backend
//!
//! # Examples
//!
//! ```rust,ignore
//! use recordkit::{ResolveError, TypeResolver};
//!
//! async fn example(resolver: &TypeResolver<Category, Store>) -> Result<(), ResolveError> {
//!     match resolver.resolve("news").await {
//!         Ok(category) => println!("Category: {category}"),
//!         Err(ResolveError::NotFound { kind, identifier }) => {
//!             eprintln!("No {kind} called {identifier}");
//!         }
//!         Err(e) => return Err(e),
//!     }
//!     Ok(())
//! }
//! ```

mod cache;
mod dates;
mod interval;
mod resolve;
mod store;

pub use cache::CacheError;
pub use dates::DateArgumentError;
pub use interval::IntervalError;
pub use resolve::{BoundaryError, ResolveError};
pub use store::StoreError;

/// Unified error type for all recordkit operations.
///
/// All module-specific error types automatically convert to `RecordkitError` via
/// `From` implementations, so you can use `?` to propagate errors naturally.
#[derive(Debug, thiserror::Error)]
pub enum RecordkitError {
    /// Error from interval arithmetic.
    #[error("Interval error: {0}")]
    Interval(#[from] IntervalError),

    /// Error from date argument normalization.
    #[error("Date argument error: {0}")]
    Dates(#[from] DateArgumentError),

    /// Error from type resolution.
    #[error("Resolve error: {0}")]
    Resolve(#[from] ResolveError),

    /// Error from a record store.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Error from a cache backend.
    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),
}
