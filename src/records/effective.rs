//! Records with an effective-from / effective-to pair
//!
//! A record is created effective immediately and indefinitely. Approval sets
//! `effective_from`, retirement sets `effective_to`; clearing
//! `effective_from` makes the record inert. Records are never deleted here.
//!
//! Store queries use the containment rule from [`crate::interval::policy`]:
//! a record matches a window only if it is effective for all of it.

use chrono::{TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, Instrument};

use crate::errors::{IntervalError, StoreError};
use crate::interval::{active_at, covers, DateRange, IntervalSource, Timestamp};
use crate::store::{Record, RecordStore};
use crate::tracing::spans;

/// The effective interval of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EffectiveRange {
    /// The moment from which the record applies; `None` while not approved
    pub effective_from: Option<Timestamp>,
    /// The moment the record ceases to apply, if any
    pub effective_to: Option<Timestamp>,
}

impl Default for EffectiveRange {
    /// Effective from now, with no end
    fn default() -> Self {
        Self::starting(Utc::now())
    }
}

impl EffectiveRange {
    pub fn new(effective_from: Option<Timestamp>, effective_to: Option<Timestamp>) -> Self {
        Self {
            effective_from,
            effective_to,
        }
    }

    /// Effective from `at`, with no end
    pub fn starting(at: Timestamp) -> Self {
        Self::new(Some(at), None)
    }

    /// Never effective until approved
    pub fn inert() -> Self {
        Self::new(None, None)
    }

    /// Makes the record effective from `at`
    pub fn approve(&mut self, at: Timestamp) {
        self.effective_from = Some(at);
    }

    /// Ends the record's effectiveness at `at`
    pub fn retire(&mut self, at: Timestamp) {
        self.effective_to = Some(at);
    }

    pub fn is_inert(&self) -> bool {
        self.effective_from.is_none()
    }
}

impl IntervalSource for EffectiveRange {
    fn start(&self) -> Option<Timestamp> {
        self.effective_from
    }

    fn end(&self) -> Option<Timestamp> {
        self.effective_to
    }
}

/// A persisted record owning one [`EffectiveRange`]
pub trait EffectiveRangeRecord: Record {
    fn effective_range(&self) -> &EffectiveRange;

    /// Both endpoints of the record's range
    fn date_range(&self) -> (Option<Timestamp>, Option<Timestamp>) {
        self.effective_range().date_range()
    }

    /// Length of the record's range
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::IndeterminateDuration`] for inert or open-ended records.
    fn duration(&self) -> Result<TimeDelta, IntervalError> {
        self.effective_range().duration()
    }

    fn is_active_at(&self, instant: Timestamp) -> bool {
        active_at(self.effective_range(), instant)
    }
}

/// Records effective throughout `[from, to]`
///
/// Inert records never match; open-ended records match any window that starts
/// on or after their start.
pub async fn in_range<R, S>(
    store: &S,
    from: Timestamp,
    to: Timestamp,
) -> Result<Vec<R>, StoreError>
where
    R: EffectiveRangeRecord,
    S: RecordStore<R> + ?Sized,
{
    let span = spans::effective_range_query(from, to);
    async move {
        let predicate = move |record: &R| covers(record.effective_range(), from, to);
        let records = store.query_all(&predicate).await?;
        debug!(
            store = store.name(),
            matched = records.len(),
            "Effective range query"
        );
        Ok(records)
    }
    .instrument(span)
    .await
}

/// Records effective at `instant`; the same as `in_range(store, instant, instant)`
pub async fn at<R, S>(store: &S, instant: Timestamp) -> Result<Vec<R>, StoreError>
where
    R: EffectiveRangeRecord,
    S: RecordStore<R> + ?Sized,
{
    in_range(store, instant, instant).await
}

/// The record with the latest `effective_from`, ignoring inert records
///
/// Ties go to the record with the higher key.
pub async fn latest<R, S>(store: &S) -> Result<Option<R>, StoreError>
where
    R: EffectiveRangeRecord,
    S: RecordStore<R> + ?Sized,
{
    let started = store
        .query_all(&|record: &R| !record.effective_range().is_inert())
        .await?;
    Ok(started
        .into_iter()
        .max_by_key(|record| (record.effective_range().effective_from, record.id())))
}
