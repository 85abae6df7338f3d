//! `tnsurl config` command - Show the effective configuration.

use crate::cli::ConfigArgs;
use crate::config;
use crate::error::CliResult;
use crate::output;

/// Run the config command
pub async fn run(args: ConfigArgs) -> CliResult<()> {
    let path = config::config_path(args.config.as_deref());
    let config = config::load(args.config.as_deref())?;

    if args.toml {
        print!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    output::title("Configuration");
    output::field("File", path.display());
    if !path.exists() {
        output::note("(not found, using defaults)");
    }

    let tibero = config.tibero();
    output::table("jdbc.tibero");
    output::field("enable", tibero.enable);
    output::field("trace_sql_bind_value", tibero.trace_sql_bind_value);
    output::field("max_sql_bind_value_size", tibero.max_sql_bind_value_size);
    output::field("profile_set_auto_commit", tibero.profile_set_auto_commit);
    output::field("profile_commit", tibero.profile_commit);
    output::field("profile_rollback", tibero.profile_rollback);
    output::field("profile_disallow_3_methods", tibero.profile_disallow_3_methods);

    output::table("resolver");
    output::field("max_depth", config.resolver.max_depth);

    if !tibero.enable {
        println!();
        output::note("Tibero plugin is disabled; set jdbc.tibero.enable = true to register it");
    }

    Ok(())
}
