use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gameboxd_catalog::types::Game;
use gameboxd_client::{Feed, fetch_or_empty};
use gameboxd_lib::LibraryView;

use crate::CliError;

use super::{CommandContext, print_game};

/// Show one of the home-page feeds.
pub(crate) fn run_feed(ctx: &CommandContext, kind: Feed, limit: Option<usize>) -> Result<(), CliError> {
    let client = ctx.client()?;
    let games = ctx.block_on(
        &format!("Loading {}...", kind.title()),
        fetch_or_empty(kind.title(), client.feed(kind)),
    )?;

    log::info!("{}", kind.title().if_supports_color(Stdout, |t| t.bold()));
    print_games(ctx, &games, limit)
}

/// Search the catalog by name.
pub(crate) fn run_search(ctx: &CommandContext, query: &str, limit: Option<usize>) -> Result<(), CliError> {
    let client = ctx.client()?;
    let games = ctx.block_on(
        &format!("Searching for '{}'...", query),
        fetch_or_empty("search results", client.search(query)),
    )?;

    log::info!(
        "{} {}",
        "Results for".if_supports_color(Stdout, |t| t.bold()),
        query.if_supports_color(Stdout, |t| t.cyan()),
    );
    print_games(ctx, &games, limit)
}

fn print_games(ctx: &CommandContext, games: &[Game], limit: Option<usize>) -> Result<(), CliError> {
    if games.is_empty() {
        log::info!("  No games found.");
        return Ok(());
    }

    let engine = ctx.open_engine()?;
    let view = LibraryView::load(&engine)?;

    let shown = limit.unwrap_or(games.len()).min(games.len());
    for game in &games[..shown] {
        print_game(game, view.is_favorite(game.id));
    }
    if shown < games.len() {
        log::info!(
            "  {}",
            format!("... and {} more", games.len() - shown).if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    Ok(())
}
