//! The record stored in the container
//!
//! A record is built immediately before a write, serialized, sent, and
//! discarded. On the wire it is exactly `{"id":"<id>","value":"<value>"}`.

use super::errors::CrudError;
use super::ids::RecordId;
use super::result::Result;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Two-field document
///
/// Invariant: the partition key of a record is its id. Every store operation
/// keys on [`Record::partition_key`] and [`Record::id`] together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Document key and partition key
    pub id: RecordId,

    /// Opaque payload; absent or `null` decodes as empty
    #[serde(default, deserialize_with = "null_as_empty")]
    pub value: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Record {
    /// Creates a record from an id and a value
    pub fn new(id: RecordId, value: impl Into<String>) -> Self {
        Self {
            id,
            value: value.into(),
        }
    }

    /// Partition key value for this record
    pub fn partition_key(&self) -> &str {
        self.id.partition_key()
    }

    /// Encodes the record as its JSON wire payload
    pub fn to_json(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).map_err(|e| {
            CrudError::Serialization(format!("Failed to encode record {}: {e}", self.id))
        })
    }

    /// Decodes a record from a JSON wire payload
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value(value)
            .map_err(|e| CrudError::Serialization(format!("Failed to decode record: {e}")))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{id:{} value:{}}}", self.id, self.value)
    }
}
