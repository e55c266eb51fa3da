// cosmos-crud - Single-record CRUD CLI for Azure Cosmos DB
// Copyright (c) 2025 cosmos-crud Contributors
// Licensed under the MIT License

//! # cosmos-crud
//!
//! Create, read, replace, or delete one record in an Azure Cosmos DB
//! container per invocation.
//!
//! ## Architecture
//!
//! - [`cli`] - flag parsing and operation dispatch
//! - [`adapters`] - the [`adapters::store::RecordStore`] trait, the Cosmos DB
//!   implementation, and an in-process implementation
//! - [`domain`] - [`domain::Record`], [`domain::RecordId`], errors
//! - [`config`] - credentials and container selection
//! - [`logging`] - structured logging to stderr
//!
//! ## Records
//!
//! A record is `{"id": string, "value": string}`. The id is both the document
//! key and the partition key value.
//!
//! ```rust
//! use cosmos_crud::adapters::memory::MemoryRecordStore;
//! use cosmos_crud::cli::commands::Operation;
//! use cosmos_crud::domain::RecordId;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = MemoryRecordStore::new("test");
//! let create = Operation::Create { id: RecordId::new("A")?, value: "B".to_string() };
//! let read = Operation::Read { id: RecordId::new("A")? };
//!
//! create.execute(&store).await?;
//! assert_eq!(read.execute(&store).await?, "successfully read item: {id:A value:B}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Operations return [`domain::Result`]. Only the binary turns an error into
//! a process exit, using [`domain::CrudError::exit_code`].

pub mod adapters;
pub mod cli;
pub mod config;
pub mod domain;
pub mod logging;
