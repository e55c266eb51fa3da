//! Cosmos DB record store
//!
//! This module provides the [`RecordStore`] implementation backed by an Azure
//! Cosmos DB container.

use crate::adapters::store::traits::{RecordStore, StoreResponse};
use crate::config::DocumentDbConfig;
use crate::domain::{CosmosDbError, CrudError, Record, RecordId, Result};
use async_trait::async_trait;
use azure_core::credentials::Secret;
use azure_core::http::headers::{HeaderName, Headers};
use azure_core::http::StatusCode;
use azure_data_cosmos::clients::ContainerClient;
use azure_data_cosmos::{CosmosClient, CosmosClientOptions, PartitionKey};

const ETAG: HeaderName = HeaderName::from_static("etag");
const REQUEST_CHARGE: HeaderName = HeaderName::from_static("x-ms-request-charge");
const ACTIVITY_ID: HeaderName = HeaderName::from_static("x-ms-activity-id");

/// Record store bound to one database/container pair
pub struct CosmosRecordStore {
    /// Container handle
    container: ContainerClient,

    /// Container name, kept for logging
    container_name: String,
}

impl CosmosRecordStore {
    /// Create a new store from a validated configuration
    ///
    /// # Errors
    ///
    /// Returns a connection error if the client cannot be created.
    pub fn new(config: &DocumentDbConfig) -> Result<Self> {
        use secrecy::ExposeSecret;

        let key_str: String = config.key.expose_secret().clone().into();
        let key = Secret::new(key_str);
        let options = Some(CosmosClientOptions::default());

        let client = CosmosClient::with_key(&config.endpoint, key, options).map_err(|e| {
            CrudError::Connection(format!("failed to init client: {e}"))
        })?;

        let container = client
            .database_client(&config.database_name)
            .container_client(&config.container_name);

        Ok(Self {
            container,
            container_name: config.container_name.clone(),
        })
    }
}

/// Partition key for a record id
fn partition_key(id: &RecordId) -> PartitionKey {
    PartitionKey::from(id.partition_key().to_string())
}

/// Summarize a raw response from its status and headers
fn summarize(status: StatusCode, headers: &Headers) -> StoreResponse {
    StoreResponse {
        status: u16::from(status),
        etag: headers.get_optional_str(&ETAG).map(str::to_string),
        request_charge: headers
            .get_optional_str(&REQUEST_CHARGE)
            .and_then(|v| v.parse().ok()),
        activity_id: headers.get_optional_str(&ACTIVITY_ID).map(str::to_string),
    }
}

fn remote_error(action: &str, err: azure_core::Error) -> CrudError {
    classify_remote(
        err.http_status().map(u16::from),
        format!("failed to {action} item: {err}"),
    )
}

/// Status code first; the message is only searched when the SDK reports none
fn classify_remote(status: Option<u16>, message: String) -> CrudError {
    let err = match status {
        Some(status) => CosmosDbError::from_status(status, message),
        None => CosmosDbError::classify(message),
    };
    CrudError::CosmosDb(err)
}

#[async_trait]
impl RecordStore for CosmosRecordStore {
    async fn create(&self, record: &Record) -> Result<StoreResponse> {
        let payload = record.to_json()?;

        tracing::debug!(id = %record.id, payload = %payload, "Creating item");

        let response = self
            .container
            .create_item(partition_key(&record.id), payload, None)
            .await
            .map_err(|e| remote_error("create", e))?;

        Ok(summarize(response.status(), response.headers()))
    }

    async fn read(&self, id: &RecordId) -> Result<Record> {
        tracing::debug!(id = %id, "Reading item");

        let response = self
            .container
            .read_item::<serde_json::Value>(partition_key(id), id.as_str(), None)
            .await
            .map_err(|e| remote_error("read", e))?;

        tracing::debug!(
            id = %id,
            status = u16::from(response.status()),
            "Item read"
        );

        let body = response.into_body().map_err(|e| {
            CrudError::Serialization(format!("Failed to deserialize item {id}: {e}"))
        })?;

        Record::from_json(body)
    }

    async fn replace(&self, record: &Record) -> Result<StoreResponse> {
        let payload = record.to_json()?;

        tracing::debug!(id = %record.id, payload = %payload, "Replacing item");

        let response = self
            .container
            .replace_item(partition_key(&record.id), record.id.as_str(), payload, None)
            .await
            .map_err(|e| remote_error("replace", e))?;

        Ok(summarize(response.status(), response.headers()))
    }

    async fn delete(&self, id: &RecordId) -> Result<StoreResponse> {
        tracing::debug!(id = %id, "Deleting item");

        let response = self
            .container
            .delete_item(partition_key(id), id.as_str(), None)
            .await
            .map_err(|e| remote_error("delete", e))?;

        Ok(summarize(response.status(), response.headers()))
    }

    fn container_name(&self) -> &str {
        &self.container_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::secret_string;

    fn test_config() -> DocumentDbConfig {
        DocumentDbConfig {
            endpoint: "https://test.documents.azure.com:443/".to_string(),
            key: secret_string("dGVzdC1rZXk=".to_string()),
            database_name: "test-db".to_string(),
            container_name: "test".to_string(),
        }
    }

    #[test]
    fn test_new_binds_container() {
        let store = CosmosRecordStore::new(&test_config()).unwrap();
        assert_eq!(store.container_name(), "test");
    }

    #[test]
    fn test_remote_error_classified() {
        let err = classify_remote(None, "failed to read item: 404 NotFound".to_string());
        assert!(err.is_not_found());
        assert_eq!(err.exit_code(), 5);
    }

    #[test]
    fn test_remote_error_prefers_status() {
        let err = classify_remote(
            Some(429),
            "failed to create item: ActivityId: 5f1e4040-0000-8404-0404".to_string(),
        );
        assert!(matches!(err, CrudError::CosmosDb(CosmosDbError::Throttled(_))));

        let err = classify_remote(Some(409), "failed to create item: NotFound 404".to_string());
        assert!(err.is_conflict());
    }

    #[test]
    fn test_summarize_reads_headers() {
        let mut headers = Headers::new();
        headers.insert(ETAG, "\"abc\"");
        headers.insert(REQUEST_CHARGE, "5.71");
        headers.insert(ACTIVITY_ID, "act-1");

        let summary = summarize(StatusCode::Created, &headers);
        assert_eq!(summary.status, 201);
        assert_eq!(summary.etag.as_deref(), Some("\"abc\""));
        assert_eq!(summary.request_charge, Some(5.71));
        assert_eq!(summary.activity_id.as_deref(), Some("act-1"));
    }

    #[test]
    fn test_summarize_missing_headers() {
        let summary = summarize(StatusCode::NoContent, &Headers::new());
        assert_eq!(summary, StoreResponse::with_status(204));
    }
}
