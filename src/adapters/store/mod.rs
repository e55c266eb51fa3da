//! Record store abstraction layer
//!
//! Operations are written against the [`RecordStore`] trait so they can run
//! against Cosmos DB in production and an in-process store in tests.

pub mod factory;
pub mod traits;

pub use factory::create_record_store;
pub use traits::{RecordStore, StoreResponse};
