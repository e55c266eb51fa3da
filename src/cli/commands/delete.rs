//! Delete operation

use crate::adapters::store::RecordStore;
use crate::domain::{RecordId, Result};

/// Remove the record with the given id
pub async fn execute(store: &dyn RecordStore, id: &RecordId) -> Result<String> {
    let response = store.delete(id).await?;

    tracing::debug!(id = %id, status = response.status, "Item deleted");

    Ok(format!("successfully deleted item: {response}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryRecordStore;
    use crate::domain::Record;

    #[tokio::test]
    async fn test_delete_then_read_not_found() {
        let store = MemoryRecordStore::new("test");
        let id = RecordId::new("A").unwrap();
        store.create(&Record::new(id.clone(), "B")).await.unwrap();

        let output = execute(&store, &id).await.unwrap();
        assert!(output.starts_with("successfully deleted item: {status:204"));

        let err = store.read(&id).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let store = MemoryRecordStore::new("test");
        let err = execute(&store, &RecordId::new("A").unwrap())
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
