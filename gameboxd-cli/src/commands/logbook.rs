use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gameboxd_catalog::types::{LoggedEntry, Rating};
use gameboxd_lib::display::{genres_label, rating_stars};

use crate::CliError;
use crate::cli_types::GameQuery;

use super::{CommandContext, report_bulk_delete};

/// Log the matching game with a rating and feedback.
pub(crate) fn run_log_add(
    ctx: &CommandContext,
    query: &GameQuery,
    rating: i64,
    feedback: &str,
) -> Result<(), CliError> {
    // Reject a bad rating before going to the network
    Rating::new(rating).map_err(|e| CliError::invalid_input(e.to_string()))?;

    let engine = ctx.open_engine()?;
    let client = ctx.client()?;
    let game = ctx.block_on(
        &format!("Looking up '{}'...", query.query),
        client.find_game(&query.query, query.id),
    )??;

    let entry = engine.log_entry(&game, rating, feedback)?;
    log::info!(
        "{} {} {} (entry #{})",
        "Logged".if_supports_color(Stdout, |t| t.green()),
        entry.name.if_supports_color(Stdout, |t| t.bold()),
        rating_stars(entry.rating).if_supports_color(Stdout, |t| t.yellow()),
        entry.id,
    );
    Ok(())
}

pub(crate) fn run_log_list(ctx: &CommandContext, game_id: Option<i64>) -> Result<(), CliError> {
    let engine = ctx.open_engine()?;
    let entries = match game_id {
        Some(id) => engine.logged_entries_for_game(id)?,
        None => engine.list_logged_entries()?,
    };

    if entries.is_empty() {
        match game_id {
            Some(id) => log::info!("No logged entries for game {}.", id),
            None => log::info!("No logged entries yet."),
        }
        return Ok(());
    }

    log::info!(
        "{} ({})",
        "Logged Games".if_supports_color(Stdout, |t| t.bold()),
        entries.len(),
    );
    for entry in &entries {
        print_entry(entry);
    }
    Ok(())
}

pub(crate) fn run_log_delete(ctx: &CommandContext, ids: &[i64]) -> Result<(), CliError> {
    let engine = ctx.open_engine()?;
    let report = engine.delete_logged_entries(ids);
    report_bulk_delete(&report, "logged entr(ies)")
}

fn print_entry(entry: &LoggedEntry) {
    let game = match entry.game_id {
        Some(id) => format!("game {}", id),
        None => "no catalog id".to_string(),
    };
    log::info!(
        "  #{:<5} {}  {}  {}",
        entry.id,
        entry.name.if_supports_color(Stdout, |t| t.bold()),
        rating_stars(entry.rating).if_supports_color(Stdout, |t| t.yellow()),
        game.if_supports_color(Stdout, |t| t.dimmed()),
    );
    if !entry.feedback.is_empty() {
        log::info!("         \"{}\"", entry.feedback);
    }
    if let Some(genres) = genres_label(&entry.genres) {
        log::info!("         {}", genres.if_supports_color(Stdout, |t| t.dimmed()));
    }
    log::debug!("         logged at {}", entry.logged_at);
}
