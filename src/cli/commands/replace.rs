//! Replace operation

use crate::adapters::store::RecordStore;
use crate::domain::{Record, RecordId, Result};

/// Overwrite the record with the given id
///
/// Full replacement: the new record carries only `id` and `value`. A missing
/// record is a not-found error and is not created.
pub async fn execute(store: &dyn RecordStore, id: &RecordId, value: &str) -> Result<String> {
    let record = Record::new(id.clone(), value);
    let response = store.replace(&record).await?;

    tracing::debug!(id = %id, status = response.status, "Item replaced");

    Ok(format!("successfully replaced item: {response}"))
}
