use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gameboxd_catalog::types::FavoriteState;
use gameboxd_lib::LibraryView;
use gameboxd_lib::display::{average_label, genres_label, platforms_label, release_date_label};

use crate::CliError;
use crate::cli_types::GameQuery;

use super::{CommandContext, report_bulk_delete};

/// Favorite the matching game, or unfavorite it if it already is one.
pub(crate) fn run_favorite_toggle(ctx: &CommandContext, query: &GameQuery) -> Result<(), CliError> {
    let engine = ctx.open_engine()?;
    let client = ctx.client()?;
    let game = ctx.block_on(
        &format!("Looking up '{}'...", query.query),
        client.find_game(&query.query, query.id),
    )??;

    match engine.toggle_favorite(&game)? {
        FavoriteState::Favorited => log::info!(
            "{} {} ({})",
            "Favorited".if_supports_color(Stdout, |t| t.green()),
            game.name.if_supports_color(Stdout, |t| t.bold()),
            game.id,
        ),
        FavoriteState::NotFavorited => log::info!(
            "{} {} ({})",
            "Unfavorited".if_supports_color(Stdout, |t| t.yellow()),
            game.name.if_supports_color(Stdout, |t| t.bold()),
            game.id,
        ),
    }
    Ok(())
}

pub(crate) fn run_favorite_list(ctx: &CommandContext) -> Result<(), CliError> {
    let engine = ctx.open_engine()?;
    let view = LibraryView::load(&engine)?;

    if view.favorites().is_empty() {
        log::info!("No favorite games yet.");
        log::info!("Add one with: gameboxd favorite toggle <name>");
        return Ok(());
    }

    log::info!(
        "{} ({})",
        "Favorite Games".if_supports_color(Stdout, |t| t.bold()),
        view.favorites().len(),
    );
    for fav in view.favorites() {
        crate::log_blank();
        log::info!(
            "  {:>7}  {}",
            fav.game_id.if_supports_color(Stdout, |t| t.dimmed()),
            fav.name.if_supports_color(Stdout, |t| t.bold()),
        );
        log::info!(
            "           {}",
            release_date_label(fav.release_date.as_deref()).if_supports_color(Stdout, |t| t.cyan()),
        );
        if let Some(genres) = genres_label(&fav.genres) {
            log::info!("           {}", genres);
        }
        if let Some(platforms) = platforms_label(&fav.platforms) {
            log::info!("           {}", platforms);
        }
        let history = view.history_for(fav.game_id);
        if !history.is_empty() {
            log::info!(
                "           Logged {} time(s), average {}",
                history.len(),
                average_label(view.average_rating_for(fav.game_id)),
            );
        }
    }
    Ok(())
}

pub(crate) fn run_favorite_delete(ctx: &CommandContext, ids: &[i64]) -> Result<(), CliError> {
    let engine = ctx.open_engine()?;
    let report = engine.delete_favorites(ids);
    report_bulk_delete(&report, "favorite(s)")
}
