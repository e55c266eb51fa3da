//! Domain types for cosmos-crud.
//!
//! # Overview
//!
//! - [`RecordId`] - non-empty identifier, also the partition key value
//! - [`Record`] - the two-field document sent to and read from the container
//! - [`CrudError`] / [`CosmosDbError`] - error hierarchy
//! - [`Result`] - result alias
//!
//! ```rust
//! use cosmos_crud::domain::{Record, RecordId};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let record = Record::new(RecordId::new("A")?, "B");
//! assert_eq!(record.to_json()?, serde_json::json!({"id": "A", "value": "B"}));
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod ids;
pub mod record;
pub mod result;

pub use errors::{CosmosDbError, CrudError};
pub use ids::RecordId;
pub use record::Record;
pub use result::Result;
