//! Operation dispatch
//!
//! Exactly one operation runs per invocation. [`select_operation`] picks it
//! from the flags in fixed priority order: create, read, replace, delete.
//! Extra action flags are ignored. When nothing matches, the process exits
//! successfully without touching configuration or the network.

pub mod create;
pub mod delete;
pub mod read;
pub mod replace;

use crate::adapters::store::{create_record_store, RecordStore};
use crate::cli::Cli;
use crate::config::load_config;
use crate::domain::{RecordId, Result};

/// The operation selected by the command-line flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Insert a new record
    Create { id: RecordId, value: String },

    /// Fetch a record
    Read { id: RecordId },

    /// Overwrite an existing record
    Replace { id: RecordId, value: String },

    /// Remove a record
    Delete { id: RecordId },
}

impl Operation {
    /// Short name used in log fields
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Create { .. } => "create",
            Operation::Read { .. } => "read",
            Operation::Replace { .. } => "replace",
            Operation::Delete { .. } => "delete",
        }
    }

    /// Record id the operation targets
    pub fn id(&self) -> &RecordId {
        match self {
            Operation::Create { id, .. }
            | Operation::Read { id }
            | Operation::Replace { id, .. }
            | Operation::Delete { id } => id,
        }
    }

    /// Run the operation against a store and return the line to print
    pub async fn execute(&self, store: &dyn RecordStore) -> Result<String> {
        match self {
            Operation::Create { id, value } => create::execute(store, id, value).await,
            Operation::Read { id } => read::execute(store, id).await,
            Operation::Replace { id, value } => replace::execute(store, id, value).await,
            Operation::Delete { id } => delete::execute(store, id).await,
        }
    }
}

/// Select the operation for a set of flags
///
/// Returns `None` when no combination matches, including whenever `id` is
/// empty.
pub fn select_operation(cli: &Cli) -> Option<Operation> {
    let id = RecordId::new(cli.id.as_str()).ok()?;

    if !cli.create.is_empty() {
        return Some(Operation::Create {
            id,
            value: cli.create.clone(),
        });
    }

    if cli.read {
        return Some(Operation::Read { id });
    }

    if !cli.replace.is_empty() {
        return Some(Operation::Replace {
            id,
            value: cli.replace.clone(),
        });
    }

    if cli.delete {
        return Some(Operation::Delete { id });
    }

    None
}

/// Run the command described by the flags
///
/// Returns the output line of the operation, or `None` when no operation was
/// selected.
///
/// # Errors
///
/// Returns the first error hit: configuration, client construction,
/// serialization, or the remote call itself.
pub async fn run(cli: &Cli) -> Result<Option<String>> {
    let Some(operation) = select_operation(cli) else {
        tracing::debug!("No operation selected");
        return Ok(None);
    };

    let config = load_config(cli.config.as_deref())?;
    let store = create_record_store(&config.documentdb)?;

    run_with_store(&operation, store.as_ref()).await.map(Some)
}

/// Run a selected operation against an existing store
pub async fn run_with_store(operation: &Operation, store: &dyn RecordStore) -> Result<String> {
    tracing::info!(
        operation = operation.name(),
        id = %operation.id(),
        container = %store.container_name(),
        "Running operation"
    );

    let output = operation.execute(store).await?;

    tracing::info!(operation = operation.name(), "Operation succeeded");

    Ok(output)
}
