//! Azure Cosmos DB integration

pub mod client;

pub use client::CosmosRecordStore;
