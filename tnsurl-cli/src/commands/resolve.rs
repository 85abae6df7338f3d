//! `tnsurl resolve` command - Resolve JDBC URLs.

use tnsurl_core::{ResolvedDescriptor, Resolver};

use crate::cli::ResolveArgs;
use crate::config;
use crate::error::{CliError, CliResult};
use crate::output;

/// Run the resolve command
pub async fn run(args: ResolveArgs) -> CliResult<()> {
    let config = config::load(args.config.as_deref())?;
    let resolver = Resolver::from_config(&config.resolver);

    let file_content = match &args.file {
        Some(path) => Some(tokio::fs::read_to_string(path).await?),
        None => None,
    };
    let urls = collect_urls(&args.urls, file_content.as_deref());
    if urls.is_empty() {
        return Err(CliError::Input("no URLs to resolve".to_string()));
    }

    let results: Vec<ResolvedDescriptor> = urls
        .iter()
        .map(|url| resolver.resolve(Some(url.as_str())))
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print_results(&results);
    }

    let unresolved = results.iter().filter(|info| !info.is_complete()).count();
    if args.strict && unresolved > 0 {
        return Err(CliError::Unresolved {
            count: unresolved,
            total: results.len(),
        });
    }

    Ok(())
}

/// URLs from the command line followed by those in the file.
///
/// File lines are trimmed; blank lines and lines starting with `#` are skipped.
pub fn collect_urls(args: &[String], file_content: Option<&str>) -> Vec<String> {
    let from_file = file_content
        .into_iter()
        .flat_map(str::lines)
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string);

    args.iter().cloned().chain(from_file).collect()
}

fn print_results(results: &[ResolvedDescriptor]) {
    output::title("Resolve");
    for info in results {
        output::report(info);
    }

    let resolved = results.iter().filter(|info| info.is_complete()).count();
    output::totals(resolved, results.len() - resolved);
}
