//! Domain error types
//!
//! This module defines the error hierarchy for cosmos-crud. Every failure an
//! operation can hit is returned as a [`CrudError`]; only the binary's
//! top-level handler turns one into a process exit.

use thiserror::Error;

/// Main error type
///
/// Each variant corresponds to one failure category and maps to a distinct
/// process exit code through [`CrudError::exit_code`].
#[derive(Debug, Error)]
pub enum CrudError {
    /// Missing or invalid configuration (credentials, config file, log level)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Client or container handle could not be constructed
    #[error("Connection error: {0}")]
    Connection(String),

    /// Record could not be encoded to or decoded from JSON
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The database service rejected the request
    #[error("Cosmos DB error: {0}")]
    CosmosDb(#[from] CosmosDbError),
}

impl CrudError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CrudError::Configuration(_) => 2,
            CrudError::Serialization(_) => 3,
            CrudError::Connection(_) => 4,
            CrudError::CosmosDb(_) => 5,
        }
    }

    /// Returns true if this is a remote "not found" failure
    pub fn is_not_found(&self) -> bool {
        matches!(self, CrudError::CosmosDb(CosmosDbError::DocumentNotFound(_)))
    }

    /// Returns true if this is a remote "already exists" failure
    pub fn is_conflict(&self) -> bool {
        matches!(self, CrudError::CosmosDb(CosmosDbError::Conflict(_)))
    }
}

/// Cosmos DB-specific errors
///
/// Remote failures are classified for the message only. Callers treat all of
/// them the same way: no retry, no fallback.
#[derive(Debug, Error)]
pub enum CosmosDbError {
    /// Document not found (404)
    #[error("Document not found: {0}")]
    DocumentNotFound(String),

    /// Document already exists (409)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Request rate too large (429)
    #[error("Request rate too large (429): {0}")]
    Throttled(String),

    /// Key rejected by the service (401/403)
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Any other non-success response or transport failure
    #[error("Request failed: {0}")]
    RequestFailed(String),
}

impl CosmosDbError {
    /// Classify a service error by its HTTP status code
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            404 => CosmosDbError::DocumentNotFound(message),
            409 => CosmosDbError::Conflict(message),
            429 => CosmosDbError::Throttled(message),
            401 | 403 => CosmosDbError::AuthenticationFailed(message),
            _ => CosmosDbError::RequestFailed(message),
        }
    }

    /// Classify a service error message that carries no status code
    ///
    /// Only whole tokens count, so digits inside an activity id or other
    /// identifier never match a status.
    pub fn classify(message: impl Into<String>) -> Self {
        let message = message.into();
        let has = |names: &[&str]| {
            message
                .split(|c: char| !c.is_ascii_alphanumeric())
                .any(|token| names.contains(&token))
        };

        if has(&["404", "NotFound"]) {
            CosmosDbError::DocumentNotFound(message)
        } else if has(&["409", "Conflict"]) {
            CosmosDbError::Conflict(message)
        } else if has(&["429", "TooManyRequests"]) || message.contains("Request rate is large") {
            CosmosDbError::Throttled(message)
        } else if has(&["401", "403", "Unauthorized", "Forbidden"]) {
            CosmosDbError::AuthenticationFailed(message)
        } else {
            CosmosDbError::RequestFailed(message)
        }
    }
}

impl From<std::io::Error> for CrudError {
    fn from(err: std::io::Error) -> Self {
        CrudError::Configuration(err.to_string())
    }
}

impl From<serde_json::Error> for CrudError {
    fn from(err: serde_json::Error) -> Self {
        CrudError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for CrudError {
    fn from(err: toml::de::Error) -> Self {
        CrudError::Configuration(format!("TOML parse error: {err}"))
    }
}
