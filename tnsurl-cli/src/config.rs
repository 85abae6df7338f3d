//! CLI configuration handling.

use std::path::{Path, PathBuf};

use tnsurl_core::config::{CONFIG_FILE_NAME, Config, EnvSource, StdEnvSource};
use tracing::debug;

use crate::error::CliResult;

/// Path of the config file: the given one, or `tnsurl.toml` in the working directory.
pub fn config_path(explicit: Option<&Path>) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
}

/// Load the effective configuration.
///
/// An explicit path must exist; the default `tnsurl.toml` may be missing.
/// `TNSURL_*` overrides from the process environment are applied last.
pub fn load(explicit: Option<&Path>) -> CliResult<Config> {
    load_with_env(explicit, &StdEnvSource)
}

/// Load the effective configuration with overrides from `source`.
pub fn load_with_env(explicit: Option<&Path>, source: &dyn EnvSource) -> CliResult<Config> {
    let path = config_path(explicit);
    debug!(path = %path.display(), "loading configuration");

    let config = match explicit {
        Some(_) => Config::from_file(&path)?,
        None => Config::load_or_default(&path)?,
    };
    Ok(config.with_overrides(source)?)
}
