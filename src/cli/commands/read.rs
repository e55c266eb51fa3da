//! Read operation

use crate::adapters::store::RecordStore;
use crate::domain::{RecordId, Result};

/// Fetch the record with the given id
pub async fn execute(store: &dyn RecordStore, id: &RecordId) -> Result<String> {
    let record = store.read(id).await?;
    Ok(format!("successfully read item: {record}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryRecordStore;
    use crate::domain::Record;

    #[tokio::test]
    async fn test_read_existing() {
        let store = MemoryRecordStore::new("test");
        let id = RecordId::new("A").unwrap();
        store.create(&Record::new(id.clone(), "B")).await.unwrap();

        let output = execute(&store, &id).await.unwrap();
        assert_eq!(output, "successfully read item: {id:A value:B}");
    }

    #[tokio::test]
    async fn test_read_missing_is_not_found() {
        let store = MemoryRecordStore::new("test");
        let err = execute(&store, &RecordId::new("nope").unwrap())
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
