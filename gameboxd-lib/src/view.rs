//! Read-only projection of the library for display.

use std::collections::HashSet;

use gameboxd_catalog::types::*;
use gameboxd_db::RecordStore;

use crate::engine::ReconciliationEngine;
use crate::error::EngineError;

/// Both collections captured at one point in time.
///
/// Later writes through the engine are not reflected; load a new view to
/// see them.
#[derive(Debug, Clone, Default)]
pub struct LibraryView {
    favorites: Vec<FavoriteRecord>,
    logged_entries: Vec<LoggedEntry>,
    favorite_ids: HashSet<i64>,
}

impl LibraryView {
    pub fn load<S: RecordStore>(engine: &ReconciliationEngine<S>) -> Result<Self, EngineError> {
        let snapshot = engine.store().snapshot()?;
        let favorite_ids = snapshot.favorites.iter().map(|f| f.game_id).collect();
        Ok(Self {
            favorites: snapshot.favorites,
            logged_entries: snapshot.logged_entries,
            favorite_ids,
        })
    }

    /// Favorites, oldest first.
    pub fn favorites(&self) -> &[FavoriteRecord] {
        &self.favorites
    }

    /// Logged entries, oldest first.
    pub fn logged_entries(&self) -> &[LoggedEntry] {
        &self.logged_entries
    }

    pub fn is_favorite(&self, game_id: i64) -> bool {
        self.favorite_ids.contains(&game_id)
    }

    pub fn favorite(&self, game_id: i64) -> Option<&FavoriteRecord> {
        self.favorites.iter().find(|f| f.game_id == game_id)
    }

    /// Every logged entry referencing `game_id`, oldest first.
    pub fn history_for(&self, game_id: i64) -> Vec<&LoggedEntry> {
        self.logged_entries
            .iter()
            .filter(|e| e.game_id == Some(game_id))
            .collect()
    }

    /// Mean rating across the history of `game_id`, or `None` if it was never logged.
    pub fn average_rating_for(&self, game_id: i64) -> Option<f64> {
        let history = self.history_for(game_id);
        if history.is_empty() {
            return None;
        }
        let total: u32 = history.iter().map(|e| u32::from(e.rating.value())).sum();
        Some(f64::from(total) / history.len() as f64)
    }

    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty() && self.logged_entries.is_empty()
    }
}
