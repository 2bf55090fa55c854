//! The reconciliation engine: how a fetched [`Game`] becomes local records.
//!
//! Every mutation of the library goes through here. The engine is generic
//! over the [`RecordStore`] so tests can substitute their own stores.

use gameboxd_catalog::types::*;
use gameboxd_db::{ClearStats, LibraryStats, RecordStore, StoreError};

use crate::error::EngineError;

/// Outcome of deleting a batch of records by id.
///
/// Every id lands in exactly one of the three lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkDeleteReport {
    pub deleted: Vec<i64>,
    /// Ids that had no record to delete.
    pub missing: Vec<i64>,
    /// Ids whose deletion failed, with the error message.
    pub failed: Vec<(i64, String)>,
}

impl BulkDeleteReport {
    /// True when no deletion failed. Missing ids do not count as failures.
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn attempted(&self) -> usize {
        self.deleted.len() + self.missing.len() + self.failed.len()
    }
}

pub struct ReconciliationEngine<S> {
    store: S,
}

impl<S: RecordStore> ReconciliationEngine<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // ── Favorites ───────────────────────────────────────────────────────────

    /// Flip the favorite state of `game` and return the new state.
    ///
    /// A `DuplicateKey` on insert means another toggle favorited the game
    /// after our lookup. That toggle's record counts as the current state, so
    /// this toggle removes it.
    pub fn toggle_favorite(&self, game: &Game) -> Result<FavoriteState, EngineError> {
        if self.store.is_favorite(game.id)? {
            self.store.delete_favorite(game.id)?;
            log::debug!("Unfavorited game {} ({})", game.id, game.name);
            return Ok(FavoriteState::NotFavorited);
        }

        let record = FavoriteRecord::from_game(game, timestamp());
        match self.store.insert_favorite(&record) {
            Ok(()) => {
                log::debug!("Favorited game {} ({})", game.id, game.name);
                Ok(FavoriteState::Favorited)
            }
            Err(StoreError::DuplicateKey { game_id }) => {
                log::warn!(
                    "Game {} was favorited concurrently; treating this toggle as unfavorite",
                    game_id
                );
                self.store.delete_favorite(game_id)?;
                Ok(FavoriteState::NotFavorited)
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn is_favorite(&self, game_id: i64) -> Result<bool, EngineError> {
        Ok(self.store.is_favorite(game_id)?)
    }

    pub fn list_favorites(&self) -> Result<Vec<FavoriteRecord>, EngineError> {
        Ok(self.store.list_favorites()?)
    }

    /// Delete favorites by catalog id, attempting each id independently.
    pub fn delete_favorites(&self, game_ids: &[i64]) -> BulkDeleteReport {
        bulk_delete(game_ids, |id| self.store.delete_favorite(id))
    }

    // ── Logged Entries ──────────────────────────────────────────────────────

    /// Record a rating and feedback for `game`.
    ///
    /// The rating is checked before anything is written. Logging the same game
    /// again creates another entry.
    pub fn log_entry(
        &self,
        game: &Game,
        rating: i64,
        feedback: &str,
    ) -> Result<LoggedEntry, EngineError> {
        let rating = Rating::new(rating)?;
        let entry = NewLoggedEntry::from_game(game, rating, feedback, timestamp());
        let entry = self.store.insert_logged_entry(&entry)?;
        log::debug!(
            "Logged game {} ({}) as entry {} rated {}",
            game.id,
            game.name,
            entry.id,
            entry.rating
        );
        Ok(entry)
    }

    pub fn list_logged_entries(&self) -> Result<Vec<LoggedEntry>, EngineError> {
        Ok(self.store.list_logged_entries()?)
    }

    pub fn logged_entries_for_game(&self, game_id: i64) -> Result<Vec<LoggedEntry>, EngineError> {
        Ok(self.store.logged_entries_for_game(game_id)?)
    }

    /// Delete logged entries by local id, attempting each id independently.
    pub fn delete_logged_entries(&self, ids: &[i64]) -> BulkDeleteReport {
        bulk_delete(ids, |id| self.store.delete_logged_entry(id))
    }

    // ── Library ─────────────────────────────────────────────────────────────

    /// Remove every favorite and logged entry. On error nothing is removed.
    pub fn reset_all(&self) -> Result<ClearStats, EngineError> {
        let stats = self.store.clear_all()?;
        log::debug!(
            "Cleared {} favorites and {} logged entries",
            stats.favorites,
            stats.logged_entries
        );
        Ok(stats)
    }

    pub fn stats(&self) -> Result<LibraryStats, EngineError> {
        Ok(self.store.stats()?)
    }
}

fn bulk_delete(
    ids: &[i64],
    mut delete: impl FnMut(i64) -> Result<bool, StoreError>,
) -> BulkDeleteReport {
    let mut report = BulkDeleteReport::default();
    for &id in ids {
        match delete(id) {
            Ok(true) => report.deleted.push(id),
            Ok(false) => report.missing.push(id),
            Err(e) => {
                log::warn!("Failed to delete record {}: {}", id, e);
                report.failed.push((id, e.to_string()));
            }
        }
    }
    report
}

fn timestamp() -> String {
    chrono::Utc::now().to_rfc3339()
}

#[cfg(test)]
#[path = "tests/engine_tests.rs"]
mod tests;
