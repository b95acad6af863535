//! Strong types for cache metadata
//!
//! - [`TimestampMillis`]: Unix timestamp in milliseconds for expiry and LRU ordering
//! - [`AccessSequence`]: Monotonic sequence number for deterministic LRU ordering

use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

fn now_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
}

/// Unix timestamp in milliseconds
///
/// # Examples
///
/// ```
/// use recordkit::TimestampMillis;
/// use std::time::Duration;
///
/// let deadline = TimestampMillis::now().after(Duration::from_secs(60));
/// assert!(!deadline.is_past());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimestampMillis(u128);

impl TimestampMillis {
    /// Creates a new timestamp representing the current time
    pub fn now() -> Self {
        Self(now_millis())
    }

    #[cfg(test)]
    pub(crate) fn from_millis(millis: u128) -> Self {
        Self(millis)
    }

    /// The timestamp `duration` after this one
    pub fn after(&self, duration: Duration) -> Self {
        Self(self.0.saturating_add(duration.as_millis()))
    }

    /// Returns `true` once the current time has reached this timestamp
    pub fn is_past(&self) -> bool {
        now_millis() >= self.0
    }

    /// Time elapsed since this timestamp; zero if it lies in the future
    pub fn age_since_now(&self) -> Duration {
        let age_millis = now_millis().saturating_sub(self.0);
        Duration::from_millis(u64::try_from(age_millis).unwrap_or(u64::MAX))
    }
}

impl Default for TimestampMillis {
    fn default() -> Self {
        Self::now()
    }
}

/// Monotonic sequence number for deterministic LRU ordering
///
/// Entries touched within the same millisecond are ordered by this counter.
/// Lower sequence numbers are older.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct AccessSequence(u64);

impl AccessSequence {
    /// Returns the next sequence number
    pub fn next(&self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_after_adds_duration() {
        let base = TimestampMillis::from_millis(1_000);
        assert_eq!(
            base.after(Duration::from_millis(250)),
            TimestampMillis::from_millis(1_250)
        );
        assert_eq!(
            TimestampMillis::from_millis(u128::MAX).after(Duration::from_secs(1)),
            TimestampMillis::from_millis(u128::MAX)
        );
    }

    #[test]
    fn timestamp_is_past() {
        assert!(TimestampMillis::from_millis(0).is_past());
        assert!(!TimestampMillis::now()
            .after(Duration::from_secs(3600))
            .is_past());
        // A zero TTL expires immediately
        assert!(TimestampMillis::now().after(Duration::ZERO).is_past());
    }

    #[test]
    fn timestamp_age_future_is_zero() {
        let future = TimestampMillis::now().after(Duration::from_secs(5));
        assert_eq!(future.age_since_now(), Duration::ZERO);
    }

    #[test]
    fn timestamp_age_past() {
        let past = TimestampMillis::from_millis(now_millis() - 5000);
        let age = past.age_since_now();
        assert!(age >= Duration::from_millis(5000));
        assert!(age < Duration::from_millis(6000));
    }

    #[test]
    fn access_sequence_next_saturating() {
        assert!(AccessSequence::default() < AccessSequence::default().next());
        let seq = AccessSequence(u64::MAX);
        assert_eq!(seq.next().0, u64::MAX);
    }

    #[test]
    fn timestamp_millis_serialization() {
        let ts = TimestampMillis::from_millis(1234567890);
        let json = serde_json::to_string(&ts).unwrap();
        assert_eq!(json, "1234567890");

        let deserialized: TimestampMillis = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, ts);
    }
}
