//! Span creation helpers for recordkit operations.
//!
//! Telemetry is kept apart from business logic: instead of `#[instrument]`
//! attributes, each instrumented operation has a span helper here.
//!
//! Usage pattern:
//! ```rust,ignore
//! pub async fn my_operation(&self, param: Type) -> Result<T> {
//!     let span = spans::my_operation(param_value);
//!     self.inner(param).instrument(span).await
//! }
//! ```

use chrono::{DateTime, Utc};
use tracing::Span;

/// Create span for resolving a type identifier through cache and store.
///
/// Parent: caller's request span
/// Children: none
#[inline]
pub(crate) fn resolve_type(namespace: &str, kind: &str, identifier: &str) -> Span {
    tracing::debug_span!(
        "recordkit.resolve_type",
        namespace = %namespace,
        kind = %kind,
        identifier = %identifier,
    )
}

/// Create span for an effective-range containment query.
///
/// Parent: caller's request span
/// Children: none
#[inline]
pub(crate) fn effective_range_query(from: DateTime<Utc>, to: DateTime<Utc>) -> Span {
    tracing::debug_span!(
        "recordkit.effective_range_query",
        from = %from,
        to = %to,
    )
}

/// Create span for listing attachments owned by one record.
#[inline]
pub(crate) fn attachments_for(model: &str, element: i64) -> Span {
    tracing::trace_span!("recordkit.attachments_for", model = %model, element)
}
