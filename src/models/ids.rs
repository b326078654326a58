//! Strongly-typed identifiers for transactions and categories
//!
//! Transaction ids are random UUIDs, which replaces the timestamp-derived
//! identifiers of earlier designs: two rapid calls can never collide.
//! Category ids are plain strings because the built-in categories use fixed,
//! human-readable ids (`salary`, `food`, ...) that act as stable identity
//! anchors across persistence.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(Uuid);

impl TransactionId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TransactionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TransactionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix("txn-").unwrap_or(s);
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Identifier for a category
///
/// Built-in categories carry fixed string ids; custom categories get a
/// generated `custom-` id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(String);

/// Prefix for generated custom category ids
const CUSTOM_PREFIX: &str = "custom-";

impl CategoryId {
    /// Create a category ID from a fixed string (used for the built-in defaults)
    pub fn fixed(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a new custom category ID
    pub fn custom() -> Self {
        Self(format!("{}{}", CUSTOM_PREFIX, Uuid::new_v4()))
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is a generated custom id
    pub fn is_custom(&self) -> bool {
        self.0.starts_with(CUSTOM_PREFIX)
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CategoryId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for CategoryId {
    fn from(s: String) -> Self {
        Self(s)
    }
}
