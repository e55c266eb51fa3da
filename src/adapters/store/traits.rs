//! Record store abstraction
//!
//! Every operation addresses exactly one record, keyed by its id and by a
//! partition key equal to that id.

use crate::domain::{Record, RecordId, Result};
use async_trait::async_trait;
use std::fmt;

/// Summary of a raw service response to a write
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StoreResponse {
    /// HTTP status code
    pub status: u16,

    /// Entity tag of the written document, if returned
    pub etag: Option<String>,

    /// Request units consumed
    pub request_charge: Option<f64>,

    /// Service-side activity id for support requests
    pub activity_id: Option<String>,
}

impl StoreResponse {
    /// Creates a response summary carrying only a status code
    pub fn with_status(status: u16) -> Self {
        Self {
            status,
            ..Default::default()
        }
    }
}

impl fmt::Display for StoreResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{status:{}", self.status)?;
        match &self.etag {
            Some(etag) => write!(f, " etag:{etag}")?,
            None => write!(f, " etag:-")?,
        }
        match self.request_charge {
            Some(charge) => write!(f, " request_charge:{charge}")?,
            None => write!(f, " request_charge:-")?,
        }
        match &self.activity_id {
            Some(id) => write!(f, " activity_id:{id}")?,
            None => write!(f, " activity_id:-")?,
        }
        write!(f, "}}")
    }
}

/// Single-record storage operations
///
/// Implementations never retry and never fall back: a create on an existing
/// id is a conflict, and a read, replace, or delete on a missing id is a
/// not-found error.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Insert a new record
    ///
    /// # Errors
    ///
    /// Returns a conflict error if a record with the same id exists.
    async fn create(&self, record: &Record) -> Result<StoreResponse>;

    /// Fetch a record by id
    ///
    /// # Errors
    ///
    /// Returns a not-found error if no record has this id, or a
    /// serialization error if the stored document is not a record.
    async fn read(&self, id: &RecordId) -> Result<Record>;

    /// Overwrite an existing record in full
    ///
    /// # Errors
    ///
    /// Returns a not-found error if no record has this id. Nothing is created.
    async fn replace(&self, record: &Record) -> Result<StoreResponse>;

    /// Remove a record by id
    ///
    /// # Errors
    ///
    /// Returns a not-found error if no record has this id.
    async fn delete(&self, id: &RecordId) -> Result<StoreResponse>;

    /// Name of the container operations are sent to
    fn container_name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_response_display_full() {
        let response = StoreResponse {
            status: 201,
            etag: Some("\"00000000-0000\"".to_string()),
            request_charge: Some(6.29),
            activity_id: Some("a1b2".to_string()),
        };
        assert_eq!(
            response.to_string(),
            "{status:201 etag:\"00000000-0000\" request_charge:6.29 activity_id:a1b2}"
        );
    }

    #[test]
    fn test_store_response_display_status_only() {
        assert_eq!(
            StoreResponse::with_status(204).to_string(),
            "{status:204 etag:- request_charge:- activity_id:-}"
        );
    }
}
