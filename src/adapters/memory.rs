//! In-process record store
//!
//! Holds the JSON payloads a real container would receive, keyed by
//! (partition key, id), and answers with the same conflict and not-found
//! failures. Used by the operation tests and by anyone who wants to exercise
//! the commands without an account.

use crate::adapters::store::traits::{RecordStore, StoreResponse};
use crate::domain::{CosmosDbError, CrudError, Record, RecordId, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};

type Key = (String, String);

/// Record store backed by a `HashMap`
#[derive(Default)]
pub struct MemoryRecordStore {
    documents: Mutex<HashMap<Key, serde_json::Value>>,
    calls: AtomicUsize,
    container_name: String,
}

impl MemoryRecordStore {
    /// Create an empty store
    pub fn new(container_name: impl Into<String>) -> Self {
        Self {
            container_name: container_name.into(),
            ..Default::default()
        }
    }

    /// Raw stored payload for an id, as it would appear on the wire
    pub fn document(&self, id: &RecordId) -> Option<serde_json::Value> {
        self.lock().get(&key(id)).cloned()
    }

    /// Number of stored documents
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns true if nothing is stored
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Number of operations issued against the store
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<Key, serde_json::Value>> {
        // A poisoned map still holds consistent documents
        self.documents
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn record_call(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

fn key(id: &RecordId) -> Key {
    (id.partition_key().to_string(), id.as_str().to_string())
}

fn not_found(action: &str, id: &RecordId) -> CrudError {
    CrudError::CosmosDb(CosmosDbError::DocumentNotFound(format!(
        "failed to {action} item: 404 NotFound: Entity with the specified id {id} does not exist"
    )))
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn create(&self, record: &Record) -> Result<StoreResponse> {
        self.record_call();
        let payload = record.to_json()?;
        let mut documents = self.lock();
        let key = key(&record.id);

        if documents.contains_key(&key) {
            return Err(CrudError::CosmosDb(CosmosDbError::Conflict(format!(
                "failed to create item: 409 Conflict: Entity with the specified id {} already exists",
                record.id
            ))));
        }

        documents.insert(key, payload);
        Ok(StoreResponse::with_status(201))
    }

    async fn read(&self, id: &RecordId) -> Result<Record> {
        self.record_call();
        let payload = self
            .lock()
            .get(&key(id))
            .cloned()
            .ok_or_else(|| not_found("read", id))?;

        Record::from_json(payload)
    }

    async fn replace(&self, record: &Record) -> Result<StoreResponse> {
        self.record_call();
        let payload = record.to_json()?;
        let mut documents = self.lock();

        match documents.get_mut(&key(&record.id)) {
            Some(existing) => {
                *existing = payload;
                Ok(StoreResponse::with_status(200))
            }
            None => Err(not_found("replace", &record.id)),
        }
    }

    async fn delete(&self, id: &RecordId) -> Result<StoreResponse> {
        self.record_call();
        match self.lock().remove(&key(id)) {
            Some(_) => Ok(StoreResponse::with_status(204)),
            None => Err(not_found("delete", id)),
        }
    }

    fn container_name(&self) -> &str {
        &self.container_name
    }
}
