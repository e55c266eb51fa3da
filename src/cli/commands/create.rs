//! Create operation

use crate::adapters::store::RecordStore;
use crate::domain::{Record, RecordId, Result};

/// Insert a new record with the given id and value
///
/// An existing record with the same id is a conflict error; nothing is
/// overwritten.
pub async fn execute(store: &dyn RecordStore, id: &RecordId, value: &str) -> Result<String> {
    let record = Record::new(id.clone(), value);
    let response = store.create(&record).await?;

    tracing::debug!(id = %id, status = response.status, "Item created");

    Ok(format!("successfully created item: {response}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryRecordStore;

    #[tokio::test]
    async fn test_create_stores_exact_payload() {
        let store = MemoryRecordStore::new("test");
        let id = RecordId::new("A").unwrap();

        let output = execute(&store, &id, "B").await.unwrap();

        assert_eq!(
            output,
            "successfully created item: {status:201 etag:- request_charge:- activity_id:-}"
        );
        assert_eq!(
            store.document(&id).unwrap(),
            serde_json::json!({"id": "A", "value": "B"})
        );
    }

    #[tokio::test]
    async fn test_create_twice_conflicts() {
        let store = MemoryRecordStore::new("test");
        let id = RecordId::new("A").unwrap();

        execute(&store, &id, "B").await.unwrap();
        let err = execute(&store, &id, "C").await.unwrap_err();

        assert!(err.is_conflict());
        assert_eq!(
            store.document(&id).unwrap(),
            serde_json::json!({"id": "A", "value": "B"})
        );
    }
}
