//! Submission stamps

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::StoreError;
use crate::interval::Timestamp;
use crate::store::{Record, RecordStore};

/// When a record was submitted, if it has been
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Submission {
    pub date_submitted: Option<Timestamp>,
}

impl Default for Submission {
    /// Submitted at creation time
    fn default() -> Self {
        Self::at(Utc::now())
    }
}

impl Submission {
    pub fn at(date_submitted: Timestamp) -> Self {
        Self {
            date_submitted: Some(date_submitted),
        }
    }

    /// Not yet submitted
    pub fn pending() -> Self {
        Self {
            date_submitted: None,
        }
    }

    pub fn submit(&mut self, at: Timestamp) {
        self.date_submitted = Some(at);
    }

    pub fn is_submitted(&self) -> bool {
        self.date_submitted.is_some()
    }
}

/// A record carrying a [`Submission`] stamp
pub trait Submittable {
    fn submission(&self) -> &Submission;

    fn is_submitted(&self) -> bool {
        self.submission().is_submitted()
    }

    fn date_submitted(&self) -> Option<Timestamp> {
        self.submission().date_submitted
    }
}

/// Records that have not been submitted yet
pub async fn pending<R, S>(store: &S) -> Result<Vec<R>, StoreError>
where
    R: Record + Submittable,
    S: RecordStore<R> + ?Sized,
{
    store.query_all(&|record: &R| !record.is_submitted()).await
}
