//! Error types for date argument normalization.
//!
//! This module provides error types for operations in the `dates` module:
//! ISO week conversion and the reduction of view arguments to a single date.

/// Errors that can occur while turning request arguments into a date.
///
/// # Examples
///
/// ```rust
/// use recordkit::{DateArgumentError, DateArguments};
///
/// let args = DateArguments::new().year(1993).day(13);
/// match args.normalize() {
///     Err(DateArgumentError::InvalidArgumentCombination { given }) => {
///         assert_eq!(given, "year, day");
///     }
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateArgumentError {
    /// The supplied arguments match none of the accepted shapes.
    ///
    /// Accepted shapes are: `start` alone, `year` + `month` (+ `day`),
    /// `year` + `week` (+ `weekday`), or nothing at all.
    #[error("Incorrect combination of date arguments: {given}")]
    InvalidArgumentCombination {
        /// Comma-separated names of the arguments that were supplied
        given: String,
    },

    /// Year, month and day do not name a real calendar date.
    #[error("Invalid calendar date: {year}-{month}-{day}")]
    InvalidDate {
        /// Requested year
        year: i32,
        /// Requested month
        month: u32,
        /// Requested day of month
        day: u32,
    },

    /// A textual argument could not be parsed as an integer.
    #[error("Invalid value for argument '{name}': {value:?}")]
    InvalidArgument {
        /// Argument name
        name: &'static str,
        /// Raw value as received
        value: String,
    },

    /// Date arithmetic left the representable calendar range.
    #[error("Date out of range: {details}")]
    OutOfRange {
        /// Description of the computation that overflowed
        details: String,
    },
}

impl DateArgumentError {
    /// Create an `InvalidArgumentCombination` error listing the given arguments.
    pub fn invalid_combination(given: &[&str]) -> Self {
        DateArgumentError::InvalidArgumentCombination {
            given: given.join(", "),
        }
    }

    /// Create an `InvalidDate` error.
    pub fn invalid_date(year: i32, month: u32, day: u32) -> Self {
        DateArgumentError::InvalidDate { year, month, day }
    }

    /// Create an `InvalidArgument` error for a raw value that failed to parse.
    pub fn invalid_argument(name: &'static str, value: impl Into<String>) -> Self {
        DateArgumentError::InvalidArgument {
            name,
            value: value.into(),
        }
    }

    /// Create an `OutOfRange` error.
    pub fn out_of_range(details: impl Into<String>) -> Self {
        DateArgumentError::OutOfRange {
            details: details.into(),
        }
    }
}
