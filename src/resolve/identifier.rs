//! Identifier normalization
//!
//! A type can be named in three ways: by an instance already in hand, by its
//! integer key, or by its name. [`Identifier`] folds all three into one value
//! so the resolver has a single lookup path.

use serde_json::Value;
use std::fmt;

use super::key::{key_token, name_token};
use crate::errors::ResolveError;
use crate::store::RecordId;

/// Something that names a type record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identifier<T> {
    /// An already-resolved record, returned as is
    Instance(T),
    /// The store-assigned key
    Key(RecordId),
    /// The record's name, matched case-insensitively
    Name(String),
}

impl<T> Identifier<T> {
    /// Interprets a JSON value received at a service boundary
    ///
    /// Integers become keys and strings become names; every other shape is
    /// rejected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recordkit::{Identifier, ResolveError};
    /// use serde_json::json;
    ///
    /// let id: Identifier<()> = Identifier::from_json(&json!(7)).unwrap();
    /// assert_eq!(id, Identifier::Key(7));
    ///
    /// let err = Identifier::<()>::from_json(&json!({})).unwrap_err();
    /// assert!(matches!(err, ResolveError::UnsupportedIdentifierKind { kind: "object" }));
    /// ```
    pub fn from_json(value: &Value) -> Result<Self, ResolveError> {
        match value {
            Value::String(name) => Ok(Identifier::Name(name.clone())),
            Value::Number(number) => match number.as_i64() {
                Some(id) => Ok(Identifier::Key(id)),
                None if number.is_u64() => Err(ResolveError::unsupported("out-of-range integer")),
                None => Err(ResolveError::unsupported("non-integer number")),
            },
            Value::Null => Err(ResolveError::unsupported("null")),
            Value::Bool(_) => Err(ResolveError::unsupported("boolean")),
            Value::Array(_) => Err(ResolveError::unsupported("array")),
            Value::Object(_) => Err(ResolveError::unsupported("object")),
        }
    }

    /// Tagged string form used in cache keys, or `None` for instances
    ///
    /// Keys and names are tagged differently, so key `1` and name `"1"`
    /// never share a token.
    pub fn token(&self) -> Option<String> {
        match self {
            Identifier::Instance(_) => None,
            Identifier::Key(id) => Some(key_token(*id)),
            Identifier::Name(name) => Some(name_token(name)),
        }
    }

    pub fn is_instance(&self) -> bool {
        matches!(self, Identifier::Instance(_))
    }
}

impl<T> fmt::Display for Identifier<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Instance(_) => f.write_str("<instance>"),
            Identifier::Key(id) => write!(f, "{id}"),
            Identifier::Name(name) => f.write_str(name),
        }
    }
}

impl<T> From<RecordId> for Identifier<T> {
    fn from(id: RecordId) -> Self {
        Identifier::Key(id)
    }
}

impl<T> From<i32> for Identifier<T> {
    fn from(id: i32) -> Self {
        Identifier::Key(RecordId::from(id))
    }
}

impl<T> From<u32> for Identifier<T> {
    fn from(id: u32) -> Self {
        Identifier::Key(RecordId::from(id))
    }
}

impl<T> From<&str> for Identifier<T> {
    fn from(name: &str) -> Self {
        Identifier::Name(name.to_string())
    }
}

impl<T> From<String> for Identifier<T> {
    fn from(name: String) -> Self {
        Identifier::Name(name)
    }
}

impl<T> From<&String> for Identifier<T> {
    fn from(name: &String) -> Self {
        Identifier::Name(name.clone())
    }
}
