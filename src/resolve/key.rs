//! Cache keys for type lookups
//!
//! A key is `{prefix}-{namespace}-{kind}-{token}`. The token is the identifier
//! tagged with `k` for an integer key or `n` for a name, so `1` and `"1"`
//! never share an entry. Every segment after the prefix is escaped so that
//! memcached-style backends accept it and so that it can never be confused
//! with the `-` separator:
//!
//! | Character | Escaped |
//! |---|---|
//! | `-` | `--` |
//! | space | `-_` |
//! | other whitespace or control | `-x{hex};` |
//!
//! Every escape begins with `-` and the character after it tells the escapes
//! apart, so [`unescape_segment`] recovers the original text exactly.

use std::fmt;

use crate::config::constants::KEY_SEGMENT_SEPARATOR;
use crate::store::RecordId;

const KEY_TAG: char = 'k';
const NAME_TAG: char = 'n';

/// A fully built cache key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    /// Builds a key from its segments, escaping all but `prefix`
    pub fn new(prefix: &str, namespace: &str, kind: &str, token: &str) -> Self {
        let sep = KEY_SEGMENT_SEPARATOR;
        Self(format!(
            "{prefix}{sep}{}{sep}{}{sep}{}",
            escape_segment(namespace),
            escape_segment(kind),
            escape_segment(token)
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Token for an integer key
pub fn key_token(id: RecordId) -> String {
    format!("{KEY_TAG}{id}")
}

/// Token for a name
pub fn name_token(name: &str) -> String {
    format!("{NAME_TAG}{name}")
}

/// Escapes one key segment
pub fn escape_segment(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            KEY_SEGMENT_SEPARATOR => {
                escaped.push(KEY_SEGMENT_SEPARATOR);
                escaped.push(KEY_SEGMENT_SEPARATOR);
            }
            ' ' => {
                escaped.push(KEY_SEGMENT_SEPARATOR);
                escaped.push('_');
            }
            c if c.is_whitespace() || c.is_control() => {
                escaped.push_str(&format!("{KEY_SEGMENT_SEPARATOR}x{:x};", c as u32));
            }
            c => escaped.push(c),
        }
    }
    escaped
}

/// Reverses [`escape_segment`]
///
/// Returns `None` if `escaped` is not something [`escape_segment`] can produce.
pub fn unescape_segment(escaped: &str) -> Option<String> {
    let mut raw = String::with_capacity(escaped.len());
    let mut chars = escaped.chars();

    while let Some(c) = chars.next() {
        if c != KEY_SEGMENT_SEPARATOR {
            raw.push(c);
            continue;
        }
        match chars.next()? {
            KEY_SEGMENT_SEPARATOR => raw.push(KEY_SEGMENT_SEPARATOR),
            '_' => raw.push(' '),
            'x' => {
                let mut hex = String::new();
                loop {
                    match chars.next()? {
                        ';' => break,
                        h => hex.push(h),
                    }
                }
                let code = u32::from_str_radix(&hex, 16).ok()?;
                raw.push(char::from_u32(code)?);
            }
            _ => return None,
        }
    }
    Some(raw)
}
