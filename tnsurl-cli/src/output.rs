//! Terminal rendering for resolve reports and settings listings.

use std::fmt::Display;

use owo_colors::OwoColorize;
use tnsurl_core::ResolvedDescriptor;

/// Labels are padded to this width so values line up.
const LABEL_WIDTH: usize = 28;

/// Title of a command's output, underlined.
pub fn title(text: &str) {
    println!("{}", text.bold().cyan());
    println!("{}", "=".repeat(text.chars().count()).dimmed());
}

/// Name of a settings table, e.g. `[jdbc.tibero]`.
pub fn table(name: &str) {
    println!();
    println!("[{}]", name.bold());
}

/// One aligned `label value` row.
pub fn field(label: &str, value: impl Display) {
    let label = format!("{:<width$}", label, width = LABEL_WIDTH);
    println!("  {} {}", label.dimmed(), value);
}

/// Secondary text such as hints and defaults notices.
pub fn note(text: &str) {
    println!("  {}", text.dimmed().italic());
}

/// Outcome of resolving one URL.
pub fn report(info: &ResolvedDescriptor) {
    println!();
    if info.is_complete() {
        println!("{} {}", "ok".green().bold(), info.source_text());
        for endpoint in info.endpoints() {
            field("Endpoint", endpoint);
        }
        field("Database", info.database_id());
    } else {
        println!("{} {}", "??".yellow().bold(), info.source_text().yellow());
        if let Some(failure) = info.failure() {
            field("Error", failure);
        }
    }
    field("Service type", info.service_type());
}

/// Resolved and unresolved counts after a batch.
pub fn totals(resolved: usize, unresolved: usize) {
    println!();
    println!(
        "{} resolved, {} unresolved",
        resolved.green().bold(),
        unresolved.red().bold()
    );
}

/// Failure of the whole command, on stderr.
pub fn failure(text: &str) {
    eprintln!("{} {}", "error:".red().bold(), text);
}
