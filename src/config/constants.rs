//! Well-known constants
//!
//! This module centralizes the magic values used by the resolver and its cache
//! keys.

use std::time::Duration;

/// How long a resolved type record stays in the cache
pub const DEFAULT_TYPE_TTL: Duration = Duration::from_secs(60 * 60);

/// First segment of every type cache key
pub const CACHE_KEY_PREFIX: &str = "type";

/// Separator between cache key segments
pub const KEY_SEGMENT_SEPARATOR: char = '-';
