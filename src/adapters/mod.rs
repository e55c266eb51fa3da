//! External system integrations.
//!
//! - [`store`] - the [`store::RecordStore`] trait and its factory
//! - [`cosmosdb`] - Azure Cosmos DB implementation
//! - [`memory`] - in-process implementation
//!
//! ```rust,no_run
//! use cosmos_crud::adapters::store::create_record_store;
//! use cosmos_crud::config::load_config;
//! use cosmos_crud::domain::RecordId;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config(None::<&str>)?;
//! let store = create_record_store(&config.documentdb)?;
//! let record = store.read(&RecordId::new("item-1")?).await?;
//! println!("{record}");
//! # Ok(())
//! # }
//! ```

pub mod cosmosdb;
pub mod memory;
pub mod store;
