//! Error types for interval arithmetic.

/// Errors that can occur when computing with effective ranges.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntervalError {
    /// A duration was requested for a range with an absent endpoint.
    ///
    /// Inert ranges have no start and open-ended ranges have no end; neither
    /// has a finite length.
    #[error("Duration is indeterminate: range has no {missing}")]
    IndeterminateDuration {
        /// Name of the absent endpoint
        missing: &'static str,
    },
}

impl IntervalError {
    /// Create an `IndeterminateDuration` error naming the absent endpoint.
    pub fn indeterminate(missing: &'static str) -> Self {
        IntervalError::IndeterminateDuration { missing }
    }
}
