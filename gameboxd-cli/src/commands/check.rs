use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

use super::CommandContext;

/// Report stored genre/platform lists that no longer decode.
///
/// Normal listing shows such values as empty; this is where they surface.
pub(crate) fn run_check(ctx: &CommandContext) -> Result<(), CliError> {
    let engine = ctx.open_engine()?;
    let issues = engine
        .store()
        .find_corrupt_blobs()
        .map_err(|e| CliError::database(format!("Failed to scan library: {}", e)))?;

    if issues.is_empty() {
        log::info!(
            "{}",
            "No corrupted records found.".if_supports_color(Stdout, |t| t.green()),
        );
        return Ok(());
    }

    for issue in &issues {
        log::warn!(
            "{} row {}: {} is corrupted ({})",
            issue.table,
            issue.row_id,
            issue.column,
            issue.message,
        );
    }
    Err(CliError::database(format!(
        "{} corrupted value(s) found",
        issues.len()
    )))
}
