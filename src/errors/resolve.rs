//! Error types for the cache-aside type resolver.

use super::StoreError;

/// Errors that can occur when resolving a type record.
///
/// # Examples
///
/// ```rust
/// use recordkit::ResolveError;
///
/// let error = ResolveError::not_found("blog.Category", -1);
/// assert_eq!(
///     error.to_string(),
///     "blog.Category not found for identifier '-1'"
/// );
/// ```
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// No record matches the identifier.
    #[error("{kind} not found for identifier '{identifier}'")]
    NotFound {
        /// Qualified record kind (`namespace.Kind`)
        kind: String,
        /// String form of the identifier that failed to resolve
        identifier: String,
    },

    /// The identifier was neither an instance, an integer key nor a name.
    #[error("Unsupported identifier kind: {kind}")]
    UnsupportedIdentifierKind {
        /// Description of the rejected input shape
        kind: &'static str,
    },

    /// The record store failed while looking up the identifier.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl ResolveError {
    /// Create a `NotFound` error.
    pub fn not_found(kind: impl Into<String>, identifier: impl ToString) -> Self {
        ResolveError::NotFound {
            kind: kind.into(),
            identifier: identifier.to_string(),
        }
    }

    /// Create an `UnsupportedIdentifierKind` error.
    pub fn unsupported(kind: &'static str) -> Self {
        ResolveError::UnsupportedIdentifierKind { kind }
    }

    /// Returns `true` if this error means the identifier matched nothing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ResolveError::NotFound { .. })
    }
}

/// Resolution error shaped for a presentation boundary.
///
/// [`TypeResolver::resolve_or_not_found`](crate::TypeResolver::resolve_or_not_found)
/// collapses [`ResolveError::NotFound`] into [`BoundaryError::NotFound`] so a web
/// layer can map it straight onto its own not-found response, while every
/// other failure stays available as [`BoundaryError::Resolve`].
#[derive(Debug, thiserror::Error)]
pub enum BoundaryError {
    /// Nothing to show for this identifier.
    #[error("Not found")]
    NotFound,

    /// Resolution failed for a reason other than absence.
    #[error(transparent)]
    Resolve(ResolveError),
}

impl From<ResolveError> for BoundaryError {
    fn from(error: ResolveError) -> Self {
        if error.is_not_found() {
            BoundaryError::NotFound
        } else {
            BoundaryError::Resolve(error)
        }
    }
}
