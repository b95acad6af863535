// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration for recordkit operations
//!
//! # Example: Using defaults
//!
//! ```rust
//! use recordkit::ResolverConfig;
//!
//! // One hour TTL, "type" key prefix
//! let config = ResolverConfig::default();
//! assert_eq!(config.ttl.as_secs(), 3600);
//! ```
//!
//! # Example: Custom configuration
//!
//! ```rust
//! use recordkit::ResolverConfigBuilder;
//! use std::time::Duration;
//!
//! let config = ResolverConfigBuilder::with_defaults()
//!     .ttl(Duration::from_secs(300))
//!     .key_prefix("lookup")
//!     .build();
//! assert_eq!(config.key_prefix, "lookup");
//! ```

use std::time::Duration;

pub mod constants;

use constants::{CACHE_KEY_PREFIX, DEFAULT_TYPE_TTL};

/// Configuration for the type resolver
///
/// Use [`ResolverConfigBuilder`] for a fluent API to construct instances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    /// How long resolved records stay cached
    /// Default: 1 hour
    pub ttl: Duration,

    /// First segment of every cache key
    /// Default: "type"
    pub key_prefix: &'static str,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            ttl: DEFAULT_TYPE_TTL,
            key_prefix: CACHE_KEY_PREFIX,
        }
    }
}

impl ResolverConfig {
    /// Create config whose cache entries expire immediately
    ///
    /// Every resolution reaches the store, while the cache still sees the
    /// writes. Suitable for tests and for tables that change often.
    pub fn minimal() -> Self {
        Self {
            ttl: Duration::ZERO,
            ..Self::default()
        }
    }
}

/// Builder for [`ResolverConfig`]
#[derive(Debug, Clone, Default)]
pub struct ResolverConfigBuilder {
    config: ResolverConfig,
}

impl ResolverConfigBuilder {
    /// Start from the default configuration
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Set the cache time-to-live
    pub fn ttl(mut self, ttl: Duration) -> Self {
        self.config.ttl = ttl;
        self
    }

    /// Set the cache key prefix
    pub fn key_prefix(mut self, prefix: &'static str) -> Self {
        self.config.key_prefix = prefix;
        self
    }

    pub fn build(self) -> ResolverConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_overrides_defaults() {
        let config = ResolverConfigBuilder::with_defaults()
            .ttl(Duration::from_secs(5))
            .build();
        assert_eq!(config.ttl, Duration::from_secs(5));
        assert_eq!(config.key_prefix, CACHE_KEY_PREFIX);
    }

    #[test]
    fn test_minimal_has_zero_ttl() {
        let config = ResolverConfig::minimal();
        assert_eq!(config.ttl, Duration::ZERO);
        assert_eq!(config.key_prefix, "type");
    }
}
