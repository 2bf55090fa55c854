use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

use super::CommandContext;

/// Delete every favorite and logged entry.
pub(crate) fn run_reset(ctx: &CommandContext, confirm: bool) -> Result<(), CliError> {
    let engine = ctx.open_engine()?;

    if !confirm {
        let stats = engine.stats()?;
        log::warn!(
            "This will permanently delete {} favorites and {} logged entries from:\n  {}",
            stats.favorites,
            stats.logged_entries,
            ctx.app.database_path.display(),
        );
        log::info!("Re-run with --confirm to proceed:");
        log::info!("  gameboxd reset --confirm");
        return Ok(());
    }

    let cleared = engine.reset_all()?;
    log::info!(
        "{}",
        "Library reset.".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Favorites removed:       {}", cleared.favorites);
    log::info!("  Logged entries removed:  {}", cleared.logged_entries);

    Ok(())
}
