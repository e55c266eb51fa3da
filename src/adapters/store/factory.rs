//! Record store factory

use crate::adapters::cosmosdb::CosmosRecordStore;
use crate::adapters::store::traits::RecordStore;
use crate::config::DocumentDbConfig;
use crate::domain::Result;

/// Build the record store for a validated configuration
///
/// One store is built per process and used for exactly one operation.
///
/// # Errors
///
/// Returns a connection error if the client cannot be constructed.
pub fn create_record_store(config: &DocumentDbConfig) -> Result<Box<dyn RecordStore>> {
    tracing::info!(
        endpoint = %config.endpoint,
        database = %config.database_name,
        container = %config.container_name,
        "Creating Cosmos DB client"
    );

    let store = CosmosRecordStore::new(config)?;
    Ok(Box::new(store))
}
