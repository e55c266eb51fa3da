//! Configuration loader
//!
//! Builds a [`CrudConfig`] once at startup: an optional TOML file with
//! `${VAR}` substitution, then environment overrides, then validation.

use super::schema::{
    CrudConfig, CONTAINER_ENV_VAR, DATABASE_ENV_VAR, ENDPOINT_ENV_VAR, PRIMARY_KEY_ENV_VAR,
};
use super::secret::secret_string;
use crate::domain::errors::CrudError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads and validates configuration
///
/// With no path, configuration comes from the environment alone. Environment
/// variables always take precedence over values from the file. Empty
/// environment variables count as unset.
///
/// # Errors
///
/// Returns [`CrudError::Configuration`] if:
/// - The given file cannot be read or parsed
/// - The file references an unset `${VAR}`
/// - The endpoint or primary key is missing after overrides
///
/// # Examples
///
/// ```no_run
/// use cosmos_crud::config::load_config;
///
/// let config = load_config(None::<&str>).expect("missing credentials");
/// println!("{}", config.documentdb.endpoint);
/// ```
pub fn load_config<P: AsRef<Path>>(path: Option<P>) -> Result<CrudConfig> {
    let mut config = match path {
        Some(path) => load_file(path.as_ref())?,
        None => CrudConfig::default(),
    };

    apply_env_overrides(&mut config);

    config.validate().map_err(CrudError::Configuration)?;

    tracing::debug!(
        endpoint = %config.documentdb.endpoint,
        database = %config.documentdb.database_name,
        container = %config.documentdb.container_name,
        "Configuration loaded"
    );

    Ok(config)
}

fn load_file(path: &Path) -> Result<CrudConfig> {
    if !path.exists() {
        return Err(CrudError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        CrudError::Configuration(format!(
            "Failed to read configuration file {}: {e}",
            path.display()
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let config: CrudConfig = toml::from_str(&contents)?;
    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched. All unset variables are reported at once.
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| CrudError::Configuration(format!("Invalid substitution pattern: {e}")))?;
    let mut lines = Vec::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            lines.push(line.to_string());
            continue;
        }

        let processed = re.replace_all(line, |cap: &regex::Captures<'_>| {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => value,
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                    String::new()
                }
            }
        });
        lines.push(processed.into_owned());
    }

    if !missing_vars.is_empty() {
        return Err(CrudError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(lines.join("\n"))
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

fn apply_env_overrides(config: &mut CrudConfig) {
    let db = &mut config.documentdb;

    if let Some(val) = non_empty_env(PRIMARY_KEY_ENV_VAR) {
        db.key = secret_string(val);
    }
    if let Some(val) = non_empty_env(ENDPOINT_ENV_VAR) {
        db.endpoint = val;
    }
    if let Some(val) = non_empty_env(DATABASE_ENV_VAR) {
        db.database_name = val;
    }
    if let Some(val) = non_empty_env(CONTAINER_ENV_VAR) {
        db.container_name = val;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("COSMOS_CRUD_LOADER_TEST_VAR", "test_value");
        let input = "key = \"${COSMOS_CRUD_LOADER_TEST_VAR}\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, "key = \"test_value\"");
        std::env::remove_var("COSMOS_CRUD_LOADER_TEST_VAR");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        std::env::remove_var("COSMOS_CRUD_LOADER_MISSING");
        let input = "key = \"${COSMOS_CRUD_LOADER_MISSING}\"";
        let err = substitute_env_vars(input).unwrap_err();
        assert!(err.to_string().contains("COSMOS_CRUD_LOADER_MISSING"));
    }

    #[test]
    fn test_substitute_skips_comments() {
        std::env::remove_var("COSMOS_CRUD_LOADER_IN_COMMENT");
        let input = "# key = \"${COSMOS_CRUD_LOADER_IN_COMMENT}\"\nendpoint = \"x\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, input);
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_config(Some("nonexistent-cosmos-crud.toml"));
        assert!(matches!(result, Err(CrudError::Configuration(_))));
    }
}
