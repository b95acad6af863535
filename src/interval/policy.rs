//! Containment rules for effective intervals
//!
//! A window query asks whether an interval is in effect *throughout* the
//! window, not whether the two merely intersect:
//!
//! ```text
//! start present && start <= window_start && (end absent || end >= window_end)
//! ```
//!
//! A missing start excludes the interval from every query. A missing end
//! satisfies every window. A point query is a window query with equal bounds.

use super::{IntervalSource, Timestamp};

/// Returns `true` if `interval` is in effect for the whole of
/// `[window_start, window_end]`
pub fn covers<I>(interval: &I, window_start: Timestamp, window_end: Timestamp) -> bool
where
    I: IntervalSource + ?Sized,
{
    let Some(start) = interval.start() else {
        return false;
    };
    if start > window_start {
        return false;
    }
    match interval.end() {
        None => true,
        Some(end) => end >= window_end,
    }
}

/// Window predicate under its query-builder name; identical to [`covers`]
#[inline]
pub fn overlaps<I>(interval: &I, window_start: Timestamp, window_end: Timestamp) -> bool
where
    I: IntervalSource + ?Sized,
{
    covers(interval, window_start, window_end)
}

/// Returns `true` if `interval` is in effect at `instant`
#[inline]
pub fn active_at<I>(interval: &I, instant: Timestamp) -> bool
where
    I: IntervalSource + ?Sized,
{
    covers(interval, instant, instant)
}
