// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Effective-date intervals
//!
//! An interval is a pair of optional UTC timestamps describing when a record is
//! in effect:
//!
//! - an absent start marks the record as *inert*: it is never active
//! - an absent end marks the record as *open-ended*: once started it stays active
//!
//! Any type can take part by implementing [`IntervalSource`]. The containment
//! rules live once, as free functions in [`policy`], and the [`DateRange`]
//! helpers come for free through a blanket implementation.
//!
//! # Examples
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use recordkit::{active_at, DateRange, Interval};
//!
//! let start = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
//! let interval = Interval::open(start);
//!
//! assert!(active_at(&interval, start));
//! assert!(interval.duration().is_err());
//! ```

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::IntervalError;

pub mod policy;

pub use policy::{active_at, covers, overlaps};

/// A point in time, always UTC
pub type Timestamp = DateTime<Utc>;

/// Anything that owns an effective interval
pub trait IntervalSource {
    /// Start of the interval, or `None` if the owner is inert
    fn start(&self) -> Option<Timestamp>;

    /// End of the interval, or `None` if it never ends
    fn end(&self) -> Option<Timestamp>;
}

impl<T: IntervalSource + ?Sized> IntervalSource for &T {
    fn start(&self) -> Option<Timestamp> {
        (**self).start()
    }

    fn end(&self) -> Option<Timestamp> {
        (**self).end()
    }
}

/// A standalone interval value
///
/// `start <= end` is assumed when both are present but never checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    /// Inclusive start; `None` means inert
    pub start: Option<Timestamp>,
    /// Inclusive end; `None` means open-ended
    pub end: Option<Timestamp>,
}

impl Interval {
    /// Creates an interval from raw endpoints
    pub fn new(start: Option<Timestamp>, end: Option<Timestamp>) -> Self {
        Self { start, end }
    }

    /// An interval that is never active
    pub fn inert() -> Self {
        Self::default()
    }

    /// An interval starting at `start` with no end
    pub fn open(start: Timestamp) -> Self {
        Self {
            start: Some(start),
            end: None,
        }
    }

    /// An interval with both endpoints present
    pub fn bounded(start: Timestamp, end: Timestamp) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }
}

impl IntervalSource for Interval {
    fn start(&self) -> Option<Timestamp> {
        self.start
    }

    fn end(&self) -> Option<Timestamp> {
        self.end
    }
}

/// Range helpers available on every [`IntervalSource`]
pub trait DateRange: IntervalSource {
    /// Returns both endpoints of the range
    fn date_range(&self) -> (Option<Timestamp>, Option<Timestamp>) {
        (self.start(), self.end())
    }

    /// Returns `end - start`
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::IndeterminateDuration`] if either endpoint is absent.
    fn duration(&self) -> Result<TimeDelta, IntervalError> {
        let start = self
            .start()
            .ok_or_else(|| IntervalError::indeterminate("start"))?;
        let end = self.end().ok_or_else(|| IntervalError::indeterminate("end"))?;
        Ok(end - start)
    }

    /// Start of the range as UNIX seconds
    fn range_start_unix(&self) -> Option<i64> {
        self.start().map(|ts| ts.timestamp())
    }

    /// End of the range as UNIX seconds
    fn range_end_unix(&self) -> Option<i64> {
        self.end().map(|ts| ts.timestamp())
    }
}

impl<T: IntervalSource + ?Sized> DateRange for T {}
