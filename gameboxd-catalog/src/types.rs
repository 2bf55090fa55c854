//! Data model types for the personal game library.
//!
//! `Game` and `Platform` mirror what the remote catalog returns. `FavoriteRecord`
//! and `LoggedEntry` are the two persisted record kinds.

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Cover shown by the catalog when a game has no artwork of its own.
pub const DEFAULT_COVER_URL: &str = "https://gameboxd-kappa.vercel.app/images/no_cover.png";

// ── Catalog Entities ────────────────────────────────────────────────────────

/// A platform a game was released on, as described by the remote catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Platform {
    pub name: String,
    #[serde(default)]
    pub logo_url: Option<String>,
}

/// A game as fetched from the remote catalog. Never persisted directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// Canonical identifier assigned by the catalog service.
    pub id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub cover: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub release_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub summary: Option<String>,
    #[serde(default)]
    pub genres: Option<Vec<String>>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub platforms: Vec<Platform>,
}

impl Game {
    /// Minimal game with only the required fields set.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            cover: None,
            release_date: None,
            summary: None,
            genres: None,
            platforms: Vec::new(),
        }
    }

    /// Cover URL, falling back to the catalog placeholder.
    pub fn cover_or_default(&self) -> &str {
        self.cover.as_deref().unwrap_or(DEFAULT_COVER_URL)
    }
}

/// Optional string fields tolerate values of the wrong type: a number or object
/// where a string was expected decodes as `None` instead of rejecting the game.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        _ => None,
    })
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

// ── Rating ──────────────────────────────────────────────────────────────────

/// Raised when a rating falls outside `0..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Invalid rating {0}: must be between 0 and {max}", max = Rating::MAX)]
pub struct InvalidRating(pub i64);

/// A user rating between 0 and 5 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MAX: u8 = 5;

    pub fn new(value: i64) -> Result<Self, InvalidRating> {
        if (0..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(InvalidRating(value))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Rating {
    type Error = InvalidRating;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

// ── Favorites ───────────────────────────────────────────────────────────────

/// Persisted marker that a game is favorited. At most one per `game_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteRecord {
    pub game_id: i64,
    pub name: String,
    pub cover: String,
    pub release_date: Option<String>,
    pub summary: Option<String>,
    pub genres: Vec<String>,
    pub platforms: Vec<Platform>,
    pub favorited_at: String,
}

impl FavoriteRecord {
    /// Snapshot a fetched game into a favorite record.
    pub fn from_game(game: &Game, favorited_at: impl Into<String>) -> Self {
        Self {
            game_id: game.id,
            name: game.name.clone(),
            cover: game.cover_or_default().to_string(),
            release_date: game.release_date.clone(),
            summary: game.summary.clone(),
            genres: game.genres.clone().unwrap_or_default(),
            platforms: game.platforms.clone(),
            favorited_at: favorited_at.into(),
        }
    }
}

/// Outcome of toggling a favorite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FavoriteState {
    Favorited,
    NotFavorited,
}

impl FavoriteState {
    pub fn is_favorited(self) -> bool {
        matches!(self, Self::Favorited)
    }
}

// ── Logged Entries ──────────────────────────────────────────────────────────

/// A rating/feedback event the user recorded for a game.
///
/// Many entries may reference the same `game_id`; the reference is advisory and
/// is not checked against anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggedEntry {
    pub id: i64,
    pub name: String,
    pub cover: String,
    pub rating: Rating,
    pub feedback: String,
    pub genres: Vec<String>,
    pub game_id: Option<i64>,
    pub logged_at: String,
}

/// A logged entry that has not been assigned an identity by the store yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLoggedEntry {
    pub name: String,
    pub cover: String,
    pub rating: Rating,
    pub feedback: String,
    pub genres: Vec<String>,
    pub game_id: Option<i64>,
    pub logged_at: String,
}

impl NewLoggedEntry {
    pub fn from_game(
        game: &Game,
        rating: Rating,
        feedback: impl Into<String>,
        logged_at: impl Into<String>,
    ) -> Self {
        Self {
            name: game.name.clone(),
            cover: game.cover_or_default().to_string(),
            rating,
            feedback: feedback.into(),
            genres: game.genres.clone().unwrap_or_default(),
            game_id: Some(game.id),
            logged_at: logged_at.into(),
        }
    }

    /// Attach the identity assigned by the store.
    pub fn with_id(self, id: i64) -> LoggedEntry {
        LoggedEntry {
            id,
            name: self.name,
            cover: self.cover,
            rating: self.rating,
            feedback: self.feedback,
            genres: self.genres,
            game_id: self.game_id,
            logged_at: self.logged_at,
        }
    }
}
