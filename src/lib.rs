//! Effective-date records, ISO week date handling and cached type lookups.
//!
//! - [`interval`]: containment checks over optional-bounded time intervals
//! - [`dates`]: ISO week conversion and date argument normalization
//! - [`records`]: effective ranges, submission stamps and attachments
//! - [`resolve`]: cache-aside resolution of small lookup tables
//! - [`store`] / [`cache`]: the persistence and cache contracts, with in-memory backends

pub mod cache;
pub mod config;
pub mod dates;
mod errors;
pub mod interval;
pub mod records;
pub mod resolve;
pub mod store;
mod tracing;

pub use cache::types::{AccessSequence, TimestampMillis};
pub use cache::{validate_key, CacheStats, KeyValueCache, MemoryCache, NoOpCache};
pub use config::{ResolverConfig, ResolverConfigBuilder};
pub use dates::{
    iso_to_date, iso_year_start, with_date_normalization, DateArguments, DateNormalized,
    StartArgument,
};
pub use errors::*;
pub use interval::{active_at, covers, overlaps, DateRange, Interval, IntervalSource, Timestamp};
pub use records::{
    attachments_for, Attachment, AttachmentSpec, EffectiveRange, EffectiveRangeRecord, Submission,
    Submittable,
};
pub use resolve::{CacheKey, Identifier, TypeEntry, TypeKind, TypeRecord, TypeResolver};
pub use store::{MemoryStore, Predicate, Record, RecordId, RecordStore};
