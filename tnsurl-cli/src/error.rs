//! CLI error types and result alias.

use miette::Diagnostic;
use thiserror::Error;
use tnsurl_core::ConfigError;

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types
#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    /// IO error
    #[error("IO error: {0}")]
    #[diagnostic(code(tnsurl::io))]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    #[diagnostic(code(tnsurl::config))]
    Config(String),

    /// Nothing to resolve
    #[error("Input error: {0}")]
    #[diagnostic(
        code(tnsurl::input),
        help("pass URLs as arguments or use --file")
    )]
    Input(String),

    /// Some URLs could not be resolved under `--strict`
    #[error("{count} of {total} URL(s) could not be resolved")]
    #[diagnostic(code(tnsurl::unresolved))]
    Unresolved { count: usize, total: usize },

    /// Output serialization error
    #[error("Output error: {0}")]
    #[diagnostic(code(tnsurl::output))]
    Output(String),
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for CliError {
    fn from(err: toml::ser::Error) -> Self {
        CliError::Output(format!("Failed to serialize TOML: {}", err))
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Output(format!("Failed to serialize JSON: {}", err))
    }
}
