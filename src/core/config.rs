//! Declarative logger configuration
//!
//! A [`LoggerConfig`] is a plain record of the settings that can be changed
//! at runtime. It can be built in code, loaded from JSON, or read from the
//! `LOGF_LEVEL`, `LOGF_FLAGS` and `LOGF_PREFIX` environment variables, and is
//! applied through [`LoggerBuilder::config`](crate::LoggerBuilder::config) or
//! [`Logger::apply_config`](crate::Logger::apply_config).

use super::{
    error::{LoggerError, Result},
    flags::Flags,
    log_level::Level,
};
use serde::{Deserialize, Serialize};

pub const ENV_LEVEL: &str = "LOGF_LEVEL";
pub const ENV_FLAGS: &str = "LOGF_FLAGS";
pub const ENV_PREFIX: &str = "LOGF_PREFIX";

/// # Examples
///
/// ```
/// use logf::{Flags, Level, LoggerConfig};
///
/// let config = LoggerConfig::from_json(r#"{"min_level": "WARN", "flags": "date|level"}"#).unwrap();
/// assert_eq!(config.min_level, Level::Warn);
/// assert_eq!(config.flags, Flags::DATE | Flags::LEVEL);
/// assert_eq!(config.prefix, "");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    /// Inclusive lower bound for emission
    pub min_level: Level,
    /// Full flag set, including `LEVEL`
    pub flags: Flags,
    /// Written at the very start of each line
    pub prefix: String,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: Level::Trace,
            flags: Flags::STD,
            prefix: String::new(),
        }
    }
}

impl LoggerConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_min_level(mut self, level: Level) -> Self {
        self.min_level = level;
        self
    }

    #[must_use]
    pub fn with_flags(mut self, flags: Flags) -> Self {
        self.flags = flags;
        self
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Parse a JSON object. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Defaults overridden by `LOGF_LEVEL`, `LOGF_FLAGS` and `LOGF_PREFIX`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(level) = lookup(ENV_LEVEL) {
            config.min_level = level
                .parse()
                .map_err(|msg: String| LoggerError::config(ENV_LEVEL, msg))?;
        }

        if let Some(flags) = lookup(ENV_FLAGS) {
            config.flags = flags
                .parse()
                .map_err(|msg: String| LoggerError::config(ENV_FLAGS, msg))?;
        }

        if let Some(prefix) = lookup(ENV_PREFIX) {
            config.prefix = prefix;
        }

        Ok(config)
    }
}
