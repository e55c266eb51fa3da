//! Configuration management for cosmos-crud.
//!
//! Configuration is an explicit [`CrudConfig`] built once at startup and
//! passed by reference to the store builder. Nothing reads credentials
//! ad hoc from the environment after that point.
//!
//! # Sources
//!
//! 1. An optional TOML file (`--config`), with `${VAR_NAME}` substitution
//! 2. Environment variables, which always win:
//!    - `DOCUMENT_DB_URI` - account endpoint (required)
//!    - `DOCUMENT_DB_PRIMARY_KEY` - account primary key (required)
//!    - `DOCUMENT_DB_DATABASE` - database name (default `test-db`)
//!    - `DOCUMENT_DB_CONTAINER` - container name (default `test`)
//!
//! # Example Configuration
//!
//! ```toml
//! [documentdb]
//! endpoint = "https://your-account.documents.azure.com:443/"
//! key = "${DOCUMENT_DB_PRIMARY_KEY}"
//! database_name = "test-db"
//! container_name = "test"
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

pub use loader::load_config;
pub use schema::{CrudConfig, DocumentDbConfig, LogFormat, LoggingConfig};
pub use secret::{secret_string, SecretString, SecretValue};
