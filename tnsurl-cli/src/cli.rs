//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// tnsurl - Tibero JDBC URL resolver
#[derive(Parser, Debug)]
#[command(name = "tnsurl")]
#[command(version)]
#[command(about = "tnsurl - Resolve Tibero JDBC URLs into endpoints and a database id", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve one or more JDBC URLs
    Resolve(ResolveArgs),

    /// Show the effective Tibero settings
    Config(ConfigArgs),

    /// Display version information
    Version,
}

// =============================================================================
// Resolve Command
// =============================================================================

/// Arguments for the `resolve` command
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// JDBC URLs to resolve
    pub urls: Vec<String>,

    /// Read URLs from a file, one per line (blank lines and `#` comments are skipped)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// Exit with an error if any URL is unresolved
    #[arg(long)]
    pub strict: bool,

    /// Path to the config file (defaults to ./tnsurl.toml)
    #[arg(short, long, env = "TNSURL_CONFIG")]
    pub config: Option<PathBuf>,
}

// =============================================================================
// Config Command
// =============================================================================

/// Arguments for the `config` command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Path to the config file (defaults to ./tnsurl.toml)
    #[arg(short, long, env = "TNSURL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print the effective settings as TOML
    #[arg(long)]
    pub toml: bool,
}
