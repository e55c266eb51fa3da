//! Record identifier type
//!
//! The identifier is both the document key and the partition key value of a
//! record. That coupling lives here, in [`RecordId::partition_key`], so no
//! caller ever spells it out on its own.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Record identifier newtype wrapper
///
/// Any non-empty string is a valid identifier.
///
/// # Examples
///
/// ```
/// use cosmos_crud::domain::RecordId;
///
/// let id = RecordId::new("item-1").unwrap();
/// assert_eq!(id.as_str(), "item-1");
/// assert_eq!(id.partition_key(), "item-1");
/// assert!(RecordId::new("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RecordId(String);

impl RecordId {
    /// Creates a new RecordId, rejecting the empty string
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.is_empty() {
            return Err("record id cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Returns the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Partition key value for the record with this id
    ///
    /// Always identical to the id itself.
    pub fn partition_key(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for RecordId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RecordId> for String {
    fn from(id: RecordId) -> Self {
        id.0
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_id_valid() {
        let id = RecordId::new("abc").unwrap();
        assert_eq!(id.as_str(), "abc");
        assert_eq!(id.to_string(), "abc");
    }

    #[test]
    fn test_record_id_empty_rejected() {
        assert!(RecordId::new("").is_err());
        assert!(RecordId::from_str("").is_err());
    }

    #[test]
    fn test_record_id_whitespace_accepted() {
        // Only the empty string counts as unset
        assert!(RecordId::new(" ").is_ok());
    }

    #[test]
    fn test_partition_key_equals_id() {
        let id = RecordId::new("order-42").unwrap();
        assert_eq!(id.partition_key(), id.as_str());
    }

    #[test]
    fn test_record_id_deserialize_rejects_empty() {
        let result: Result<RecordId, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }
}
