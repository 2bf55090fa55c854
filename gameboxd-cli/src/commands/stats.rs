use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gameboxd_lib::display::average_label;

use crate::CliError;

use super::CommandContext;

pub(crate) fn run_stats(ctx: &CommandContext) -> Result<(), CliError> {
    let engine = ctx.open_engine()?;
    let stats = engine.stats()?;

    log::info!(
        "{}",
        "Library Statistics".if_supports_color(Stdout, |t| t.bold()),
    );
    if let Some(name) = ctx.app.signed_in_name() {
        log::info!("  Signed in as {}", name.if_supports_color(Stdout, |t| t.cyan()));
    }
    log::info!("  Database: {}", ctx.app.database_path.display());
    crate::log_blank();
    log::info!("  Favorites:       {:>8}", stats.favorites);
    log::info!("  Logged entries:  {:>8}", stats.logged_entries);
    log::info!("  Games logged:    {:>8}", stats.logged_games);
    log::info!("  Average rating:  {:>8}", average_label(stats.average_rating));

    Ok(())
}
