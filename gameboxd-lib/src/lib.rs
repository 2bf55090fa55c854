//! Reconciliation logic between fetched catalog games and the local library.
//!
//! The CLI (and any other frontend) goes through [`ReconciliationEngine`] for
//! every write, and through [`LibraryView`] for display.

pub mod display;
pub mod engine;
pub mod error;
pub mod settings;
pub mod view;

pub use engine::{BulkDeleteReport, ReconciliationEngine};
pub use error::EngineError;
pub use settings::{AppContext, Settings, SettingsError};
pub use view::LibraryView;
