//! `tnsurl version` command - Display version information.

use crate::error::CliResult;
use crate::output;

/// Package version
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package name
const NAME: &str = env!("CARGO_PKG_NAME");

/// Run the version command
pub async fn run() -> CliResult<()> {
    output::title("tnsurl");

    #[cfg(debug_assertions)]
    let build_mode = "debug";
    #[cfg(not(debug_assertions))]
    let build_mode = "release";

    output::field("Version", VERSION);
    output::field("Package", NAME);
    output::field("Build", build_mode);
    output::field("URL prefix", tnsurl_core::URL_PREFIX);
    output::field("Max descriptor depth", tnsurl_core::descriptor::MAX_DEPTH);
    output::field("Depth ceiling", tnsurl_core::descriptor::MAX_DEPTH_LIMIT);
    output::note("Logging: TNSURL_DEBUG, TNSURL_LOG_LEVEL, TNSURL_LOG_FORMAT");

    Ok(())
}
