//! Error types reported by record stores.

use crate::store::RecordId;

/// Failures a [`RecordStore`](crate::RecordStore) can report.
///
/// A missing record is *not* an error at this level: lookups return
/// `Ok(None)` and the caller decides how absence is represented.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A record with the same case-insensitive name already exists.
    #[error("A record named '{name}' already exists")]
    DuplicateName {
        /// The conflicting name
        name: String,
    },

    /// An update targeted a key that holds no record.
    #[error("No record with key {id}")]
    MissingRecord {
        /// The key that was not present
        id: RecordId,
    },

    /// The backing storage failed.
    #[error("Store backend failure: {details}")]
    Backend {
        /// Details about the failure
        details: String,
        /// The underlying error, if available
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl StoreError {
    /// Create a `DuplicateName` error.
    pub fn duplicate_name(name: impl Into<String>) -> Self {
        StoreError::DuplicateName { name: name.into() }
    }

    /// Create a `Backend` error from any underlying error.
    pub fn backend(
        details: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        StoreError::Backend {
            details: details.into(),
            source: Some(Box::new(source)),
        }
    }
}
