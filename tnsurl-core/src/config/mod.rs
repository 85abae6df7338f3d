//! Configuration file parsing for `tnsurl.toml`.
//!
//! ```toml
//! [jdbc.tibero]
//! enable = true
//! trace_sql_bind_value = "${TRACE_BINDS:-false}"
//! max_sql_bind_value_size = 2048
//!
//! [resolver]
//! max_depth = 32
//! ```
//!
//! `${VAR}`, `${VAR:-default}`, `${VAR:?message}` and `$VAR` references are
//! expanded before the TOML is parsed. Values placed in quotes stay strings,
//! so substitute into bare positions (`enable = ${ENABLE:-false}`) for
//! booleans and numbers.

mod env;

pub use env::{EnvExpander, EnvSource, MapEnvSource, StdEnvSource};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

use crate::descriptor::{MAX_DEPTH, MAX_DEPTH_LIMIT};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "tnsurl.toml";

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML or has unknown keys.
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),

    /// A referenced environment variable is not set.
    #[error("environment variable not found: {0}")]
    EnvNotFound(String),

    /// An environment variable holds an unusable value.
    #[error("invalid value for environment variable '{name}': {message}")]
    InvalidEnvValue { name: String, message: String },

    /// A setting in the file is out of range.
    #[error("invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Override for [`TiberoConfig::enable`].
pub const ENV_TIBERO_ENABLE: &str = "TNSURL_TIBERO_ENABLE";
/// Override for [`TiberoConfig::trace_sql_bind_value`].
pub const ENV_TIBERO_TRACE_SQL_BIND_VALUE: &str = "TNSURL_TIBERO_TRACE_SQL_BIND_VALUE";
/// Override for [`TiberoConfig::max_sql_bind_value_size`].
pub const ENV_TIBERO_MAX_SQL_BIND_VALUE_SIZE: &str = "TNSURL_TIBERO_MAX_SQL_BIND_VALUE_SIZE";
/// Override for [`ResolverConfig::max_depth`].
pub const ENV_RESOLVER_MAX_DEPTH: &str = "TNSURL_RESOLVER_MAX_DEPTH";

/// Main configuration structure for `tnsurl.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// JDBC plugin settings.
    #[serde(default)]
    pub jdbc: JdbcConfig,

    /// Resolver limits.
    #[serde(default)]
    pub resolver: ResolverConfig,
}

impl Config {
    /// Load configuration from a file path.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            source: e,
        })?;

        debug!(path = %path.display(), "loading config");
        content.parse()
    }

    /// Load a file if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            debug!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Parse TOML, expanding variables from the given source.
    pub fn parse_with_env(content: &str, source: &dyn EnvSource) -> ConfigResult<Self> {
        let expanded = EnvExpander::new(source).expand(content)?;
        let config: Self = toml::from_str(&expanded)?;
        if let Some(message) = config.resolver.depth_error() {
            return Err(ConfigError::InvalidValue {
                key: "resolver.max_depth".to_string(),
                message,
            });
        }
        Ok(config)
    }

    /// Apply `TNSURL_*` overrides from an environment source.
    pub fn with_overrides(mut self, source: &dyn EnvSource) -> ConfigResult<Self> {
        let tibero = &mut self.jdbc.tibero;
        if let Some(enable) = env::read_bool(source, ENV_TIBERO_ENABLE)? {
            tibero.enable = enable;
        }
        if let Some(trace) = env::read_bool(source, ENV_TIBERO_TRACE_SQL_BIND_VALUE)? {
            tibero.trace_sql_bind_value = trace;
        }
        if let Some(size) = env::read_usize(source, ENV_TIBERO_MAX_SQL_BIND_VALUE_SIZE)? {
            tibero.max_sql_bind_value_size = size;
        }
        if let Some(depth) = env::read_usize(source, ENV_RESOLVER_MAX_DEPTH)? {
            self.resolver.max_depth = depth;
            if let Some(message) = self.resolver.depth_error() {
                return Err(ConfigError::InvalidEnvValue {
                    name: ENV_RESOLVER_MAX_DEPTH.to_string(),
                    message,
                });
            }
        }
        Ok(self)
    }

    /// Settings of the Tibero plugin.
    pub fn tibero(&self) -> &TiberoConfig {
        &self.jdbc.tibero
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(content: &str) -> ConfigResult<Self> {
        Self::parse_with_env(content, &StdEnvSource)
    }
}

/// The `[jdbc]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct JdbcConfig {
    /// `[jdbc.tibero]`
    #[serde(default)]
    pub tibero: TiberoConfig,
}

/// Tibero JDBC plugin settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TiberoConfig {
    /// Whether the plugin registers its URL parser.
    #[serde(default)]
    pub enable: bool,

    /// Record bind values of traced statements.
    #[serde(default)]
    pub trace_sql_bind_value: bool,

    /// Longest bind value recorded, in bytes.
    #[serde(default = "default_max_sql_bind_value_size")]
    pub max_sql_bind_value_size: usize,

    /// Profile `setAutoCommit` calls.
    #[serde(default)]
    pub profile_set_auto_commit: bool,

    /// Profile `commit` calls.
    #[serde(default)]
    pub profile_commit: bool,

    /// Profile `rollback` calls.
    #[serde(default)]
    pub profile_rollback: bool,

    /// Skip profiling of the three transaction methods above.
    #[serde(default)]
    pub profile_disallow_3_methods: bool,
}

impl Default for TiberoConfig {
    fn default() -> Self {
        Self {
            enable: false,
            trace_sql_bind_value: false,
            max_sql_bind_value_size: default_max_sql_bind_value_size(),
            profile_set_auto_commit: false,
            profile_commit: false,
            profile_rollback: false,
            profile_disallow_3_methods: false,
        }
    }
}

fn default_max_sql_bind_value_size() -> usize {
    1024
}

impl fmt::Display for TiberoConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TiberoConfig [enable={}, trace_sql_bind_value={}, max_sql_bind_value_size={}, \
             profile_set_auto_commit={}, profile_commit={}, profile_rollback={}, \
             profile_disallow_3_methods={}]",
            self.enable,
            self.trace_sql_bind_value,
            self.max_sql_bind_value_size,
            self.profile_set_auto_commit,
            self.profile_commit,
            self.profile_rollback,
            self.profile_disallow_3_methods,
        )
    }
}

/// The `[resolver]` table.
///
/// `max_depth` must not exceed [`MAX_DEPTH_LIMIT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ResolverConfig {
    /// Deepest descriptor nesting accepted.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
        }
    }
}

impl ResolverConfig {
    fn depth_error(&self) -> Option<String> {
        (self.max_depth > MAX_DEPTH_LIMIT).then(|| {
            format!(
                "max_depth {} exceeds the limit of {}",
                self.max_depth, MAX_DEPTH_LIMIT
            )
        })
    }
}

fn default_max_depth() -> usize {
    MAX_DEPTH
}
