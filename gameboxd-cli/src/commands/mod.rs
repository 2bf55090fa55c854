pub(crate) mod check;
pub(crate) mod config;
pub(crate) mod favorite;
pub(crate) mod feed;
pub(crate) mod logbook;
pub(crate) mod reset;
pub(crate) mod stats;

use std::future::Future;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gameboxd_catalog::types::Game;
use gameboxd_client::CatalogClient;
use gameboxd_db::SqliteStore;
use gameboxd_lib::display::{genres_label, release_date_label, truncate};
use gameboxd_lib::{AppContext, BulkDeleteReport, ReconciliationEngine};

use crate::CliError;
use crate::spinner::fetch_spinner;

pub(crate) type Engine = ReconciliationEngine<SqliteStore>;

/// Resolved configuration plus the global output flags.
pub(crate) struct CommandContext {
    pub app: AppContext,
    pub quiet: bool,
}

impl CommandContext {
    /// Open the library database and wrap it in an engine.
    pub(crate) fn open_engine(&self) -> Result<Engine, CliError> {
        let path = &self.app.database_path;
        let store = SqliteStore::open(path).map_err(|e| {
            CliError::database(format!(
                "Failed to open library database {}: {}",
                path.display(),
                e
            ))
        })?;
        Ok(ReconciliationEngine::new(store))
    }

    pub(crate) fn client(&self) -> Result<CatalogClient, CliError> {
        let client = match &self.app.catalog_url {
            Some(url) => CatalogClient::with_base_url(url.as_str())?,
            None => CatalogClient::new()?,
        };
        Ok(client)
    }

    /// Drive `fut` to completion on a fresh runtime while a spinner shows `msg`.
    pub(crate) fn block_on<F: Future>(&self, msg: &str, fut: F) -> Result<F::Output, CliError> {
        let rt = tokio::runtime::Runtime::new()
            .map_err(|e| CliError::runtime(format!("Failed to create tokio runtime: {}", e)))?;
        let pb = fetch_spinner(self.quiet, msg);
        let output = rt.block_on(fut);
        pb.finish_and_clear();
        Ok(output)
    }
}

/// One catalog game as a list line plus an optional details line.
pub(crate) fn print_game(game: &Game, favorited: bool) {
    let marker = if favorited { "♥" } else { " " };
    log::info!(
        "  {} {:>7}  {}  {}",
        marker.if_supports_color(Stdout, |t| t.red()),
        game.id.if_supports_color(Stdout, |t| t.dimmed()),
        game.name.if_supports_color(Stdout, |t| t.bold()),
        release_date_label(game.release_date.as_deref()).if_supports_color(Stdout, |t| t.cyan()),
    );
    if let Some(genres) = game.genres.as_deref().and_then(genres_label) {
        log::info!("             {}", genres.if_supports_color(Stdout, |t| t.dimmed()));
    }
    if let Some(summary) = &game.summary {
        log::debug!("             {}", truncate(summary, 100));
    }
}

/// Summarize a bulk delete. Fails if any individual deletion failed.
pub(crate) fn report_bulk_delete(report: &BulkDeleteReport, noun: &str) -> Result<(), CliError> {
    if !report.deleted.is_empty() {
        log::info!(
            "{} {} {}",
            "Deleted".if_supports_color(Stdout, |t| t.green()),
            report.deleted.len(),
            noun,
        );
    }
    for id in &report.missing {
        log::warn!("No {} with id {}", noun, id);
    }
    for (id, message) in &report.failed {
        log::error!("Failed to delete {} {}: {}", noun, id, message);
    }

    if report.is_success() {
        Ok(())
    } else {
        Err(CliError::database(format!(
            "{} of {} deletions failed",
            report.failed.len(),
            report.attempted()
        )))
    }
}
