//! Command-line configuration.
//!
//! Settings come from environment variables prefixed with `HOSTLIMIT_` and may
//! be overridden by command-line flags.

use std::env;
use std::str::FromStr;

use crate::error::LimitError;

const LOG_LEVEL_VAR: &str = "HOSTLIMIT_LOG_LEVEL";
const PRETTY_VAR: &str = "HOSTLIMIT_PRETTY";

/// Log level matching the `tracing` levels. Defaults to `Warn` so reports on
/// stdout are not mixed with informational output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = LimitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(LimitError::InvalidConfig(format!(
                "unknown log level '{s}', expected one of: trace, debug, info, warn, error"
            ))),
        }
    }
}

impl LogLevel {
    /// Convert to a tracing filter directive string.
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Configuration for the `hostlimit` command.
///
/// # Environment Variables
///
/// - `HOSTLIMIT_LOG_LEVEL`: trace, debug, info, warn or error
/// - `HOSTLIMIT_PRETTY`: true/false (also 1/0, yes/no) for indented JSON output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub log_level: LogLevel,
    pub pretty: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            pretty: true,
        }
    }
}

impl CliConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, LimitError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, LimitError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(val) = lookup(LOG_LEVEL_VAR) {
            config.log_level = val.parse()?;
        }
        if let Some(val) = lookup(PRETTY_VAR) {
            config.pretty = parse_bool(PRETTY_VAR, &val)?;
        }
        Ok(config)
    }

    /// Apply command-line overrides, which win over the environment.
    pub fn apply_overrides(mut self, log_level: Option<LogLevel>, pretty: Option<bool>) -> Self {
        if let Some(level) = log_level {
            self.log_level = level;
        }
        if let Some(pretty) = pretty {
            self.pretty = pretty;
        }
        self
    }

    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }
}

fn parse_bool(var: &str, val: &str) -> Result<bool, LimitError> {
    match val.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(LimitError::InvalidConfig(format!(
            "invalid value '{val}' for {var}, expected true or false"
        ))),
    }
}
