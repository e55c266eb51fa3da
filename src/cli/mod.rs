//! CLI interface and argument parsing
//!
//! Flags follow the single-dash convention (`-id A -create B`); the
//! double-dash spelling clap generates is accepted too. See
//! [`normalize_args`].

pub mod commands;

use crate::config::{LogFormat, LoggingConfig};
use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};
use std::ffi::OsString;

/// Flags that take a string value
const VALUE_FLAGS: &[&str] = &["id", "create", "replace", "config", "log-level", "log-format"];

/// Flags that are boolean switches
const SWITCH_FLAGS: &[&str] = &["read", "delete", "help", "version"];

/// Single-record CRUD against an Azure Cosmos DB container
#[derive(Parser, Debug)]
#[command(name = "cosmos-crud")]
#[command(version, about, long_about = None)]
#[command(args_override_self = true)]
pub struct Cli {
    /// item id
    #[arg(long, default_value = "")]
    pub id: String,

    /// create item with this value
    #[arg(long, default_value = "")]
    pub create: String,

    /// read item
    #[arg(
        long,
        num_args = 0..=1,
        require_equals = true,
        default_value = "false",
        default_missing_value = "true",
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new()
    )]
    pub read: bool,

    /// replace item with this value
    #[arg(long, default_value = "")]
    pub replace: String,

    /// delete item
    #[arg(
        long,
        num_args = 0..=1,
        require_equals = true,
        default_value = "false",
        default_missing_value = "true",
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new()
    )]
    pub delete: bool,

    /// Path to an optional TOML configuration file
    #[arg(long, env = "DOCUMENT_DB_CONFIG")]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "DOCUMENT_DB_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,

    /// Log line format (text, json)
    #[arg(long, env = "DOCUMENT_DB_LOG_FORMAT", default_value = "text")]
    pub log_format: LogFormat,

    /// Arguments after the first positional, ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub rest: Vec<String>,
}

impl Cli {
    /// Parse from raw process arguments, accepting single-dash long flags
    pub fn parse_normalized<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::parse_from(normalize_args(args))
    }

    /// Logging settings selected on the command line
    pub fn logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.log_level.clone(),
            format: self.log_format,
        }
    }
}

/// Rewrite single-dash long flags into the double-dash form clap expects
///
/// `-id A`, `-id=A`, `--id A` and `--id=A` are equivalent. A string flag
/// given without `=` is joined with the following argument, so values that
/// begin with `-` are taken literally. Rewriting stops at the first
/// positional argument or at `--`. The first argument is the program name
/// and is passed through.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut iter = args.into_iter().map(Into::into);
    let mut out: Vec<OsString> = iter.next().into_iter().collect();

    while let Some(arg) = iter.next() {
        let Some(text) = arg.to_str() else {
            out.push(arg);
            out.extend(iter.by_ref());
            break;
        };

        if text == "--" || !text.starts_with('-') || text == "-" {
            out.push(arg);
            out.extend(iter.by_ref());
            break;
        }

        let body = text.trim_start_matches('-');
        let (name, inline_value) = match body.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (body, None),
        };

        if VALUE_FLAGS.contains(&name) {
            match inline_value {
                Some(value) => out.push(format!("--{name}={value}").into()),
                None => match iter.next() {
                    Some(value) => {
                        let mut joined = OsString::from(format!("--{name}="));
                        joined.push(value);
                        out.push(joined);
                    }
                    None => out.push(format!("--{name}").into()),
                },
            }
        } else if SWITCH_FLAGS.contains(&name) {
            match inline_value {
                Some(value) => out.push(format!("--{name}={value}").into()),
                None => out.push(format!("--{name}").into()),
            }
        } else {
            out.push(arg);
        }
    }

    out
}
