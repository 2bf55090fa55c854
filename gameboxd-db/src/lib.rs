//! SQLite persistence layer for the game library.
//!
//! Provides schema creation, CRUD operations, read queries, and the
//! repository traits the reconciliation engine is written against.

pub mod operations;
pub mod queries;
pub mod schema;
pub mod store;

pub use operations::{
    ClearStats, StoreError, clear_all, delete_favorite, delete_logged_entry, insert_favorite,
    insert_logged_entry,
};
pub use queries::{
    BlobIssue, LibrarySnapshot, LibraryStats, find_corrupt_blobs, find_favorite, is_favorite,
    library_stats, list_favorites, list_logged_entries, load_snapshot, logged_entries_for_game,
};
pub use schema::{SchemaError, open_database, open_memory};
pub use store::{FavoriteRepository, LoggedEntryRepository, RecordStore, SqliteStore};
