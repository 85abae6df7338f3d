//! tnsurl CLI - Command-line interface for the Tibero JDBC URL resolver.

use clap::Parser;

use tnsurl_cli::cli::{Cli, Command};
use tnsurl_cli::commands;
use tnsurl_cli::error::CliResult;
use tnsurl_cli::output;

#[tokio::main]
async fn main() {
    tnsurl_core::logging::init();

    if let Err(e) = run().await {
        output::failure(&e.to_string());
        std::process::exit(1);
    }
}

async fn run() -> CliResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Resolve(args) => commands::resolve::run(args).await,
        Command::Config(args) => commands::config::run(args).await,
        Command::Version => commands::version::run().await,
    }
}
