//! Configuration schema definitions
//!
//! Every field has a default so a config file may set any subset of them.
//! Credentials default to empty and are filled from the environment.

use super::secret::{secret_string, SecretString};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Environment variable holding the account endpoint URI
pub const ENDPOINT_ENV_VAR: &str = "DOCUMENT_DB_URI";

/// Environment variable holding the account primary key
pub const PRIMARY_KEY_ENV_VAR: &str = "DOCUMENT_DB_PRIMARY_KEY";

/// Environment variable overriding the database name
pub const DATABASE_ENV_VAR: &str = "DOCUMENT_DB_DATABASE";

/// Environment variable overriding the container name
pub const CONTAINER_ENV_VAR: &str = "DOCUMENT_DB_CONTAINER";

/// Default database name
pub const DEFAULT_DATABASE_NAME: &str = "test-db";

/// Default container name
pub const DEFAULT_CONTAINER_NAME: &str = "test";

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CrudConfig {
    /// Document database connection settings
    #[serde(default)]
    pub documentdb: DocumentDbConfig,
}

impl CrudConfig {
    /// Validates the configuration
    pub fn validate(&self) -> Result<(), String> {
        self.documentdb.validate()
    }
}

/// Azure Cosmos DB connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentDbConfig {
    /// Account endpoint URL
    #[serde(default)]
    pub endpoint: String,

    /// Account primary key
    /// Stored securely in memory and automatically zeroized on drop
    #[serde(default = "empty_secret")]
    pub key: SecretString,

    /// Database name
    #[serde(default = "default_database_name")]
    pub database_name: String,

    /// Container name
    #[serde(default = "default_container_name")]
    pub container_name: String,
}

impl DocumentDbConfig {
    /// Validates the connection settings
    ///
    /// The key is checked before the endpoint.
    pub fn validate(&self) -> Result<(), String> {
        use secrecy::ExposeSecret;

        if self.key.expose_secret().is_empty() {
            return Err(format!("missing environment variable: {PRIMARY_KEY_ENV_VAR}"));
        }

        if self.endpoint.is_empty() {
            return Err(format!("missing environment variable: {ENDPOINT_ENV_VAR}"));
        }

        if self.database_name.is_empty() {
            return Err("documentdb.database_name cannot be empty".to_string());
        }

        if self.container_name.is_empty() {
            return Err("documentdb.container_name cannot be empty".to_string());
        }

        Ok(())
    }
}

impl Default for DocumentDbConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            key: empty_secret(),
            database_name: default_database_name(),
            container_name: default_container_name(),
        }
    }
}

/// Log line format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Text => write!(f, "text"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("Invalid log format '{s}'. Must be one of: text, json")),
        }
    }
}

/// Logging configuration
///
/// Built from command-line flags before anything else runs, so that
/// configuration errors can themselves be logged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

fn empty_secret() -> SecretString {
    secret_string(String::new())
}

fn default_database_name() -> String {
    DEFAULT_DATABASE_NAME.to_string()
}

fn default_container_name() -> String {
    DEFAULT_CONTAINER_NAME.to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> DocumentDbConfig {
        DocumentDbConfig {
            endpoint: "https://test.documents.azure.com:443/".to_string(),
            key: secret_string("test-key".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults() {
        let config = DocumentDbConfig::default();
        assert_eq!(config.database_name, "test-db");
        assert_eq!(config.container_name, "test");
        assert!(config.endpoint.is_empty());
    }

    #[test]
    fn test_valid_config() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_missing_key_reported_first() {
        let config = DocumentDbConfig::default();
        let err = config.validate().unwrap_err();
        assert_eq!(err, "missing environment variable: DOCUMENT_DB_PRIMARY_KEY");
    }

    #[test]
    fn test_missing_endpoint() {
        let config = DocumentDbConfig {
            endpoint: String::new(),
            ..valid_config()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err, "missing environment variable: DOCUMENT_DB_URI");
    }

    #[test]
    fn test_empty_container_name() {
        let config = DocumentDbConfig {
            container_name: String::new(),
            ..valid_config()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_debug_output_redacts_key() {
        let config = DocumentDbConfig {
            key: secret_string("very-secret-key".to_string()),
            ..valid_config()
        };
        let debug_output = format!("{config:?}");
        assert!(!debug_output.contains("very-secret-key"));
        assert!(debug_output.contains("test.documents.azure.com"));
    }

    #[test]
    fn test_log_format_from_str() {
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("TEXT".parse::<LogFormat>().unwrap(), LogFormat::Text);
        assert!("yaml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn test_logging_config_default() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "warn");
        assert_eq!(config.format, LogFormat::Text);
    }
}
