//! Error types reported by key-value cache backends.

/// Failures a [`KeyValueCache`](crate::KeyValueCache) can report.
///
/// Cache errors never fail a resolution: the resolver logs them and falls
/// back to the record store.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// The key contains characters the backend refuses (whitespace or
    /// control characters).
    #[error("Invalid cache key: {key:?}")]
    InvalidKey {
        /// The rejected key
        key: String,
    },

    /// The backend failed to read or write.
    #[error("Cache backend failure: {details}")]
    Backend {
        /// Details about the failure
        details: String,
    },
}

impl CacheError {
    /// Create an `InvalidKey` error.
    pub fn invalid_key(key: impl Into<String>) -> Self {
        CacheError::InvalidKey { key: key.into() }
    }

    /// Create a `Backend` error.
    pub fn backend(details: impl Into<String>) -> Self {
        CacheError::Backend {
            details: details.into(),
        }
    }
}
