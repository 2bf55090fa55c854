//! Shared application settings (database path, catalog URL, session flags).
//!
//! The settings file is always `~/.config/gameboxd/settings.toml`. Every
//! value is optional; a missing file means all defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable that overrides the catalog base URL.
pub const CATALOG_URL_ENV: &str = "GAMEBOXD_CATALOG_URL";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub storage: StorageSettings,
    pub catalog: CatalogSettings,
    pub session: SessionSettings,
    pub display: DisplaySettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Library database file.
    pub database: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    pub base_url: Option<String>,
}

/// What the external identity provider reported about the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    pub signed_in: bool,
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    pub dark_mode: bool,
}

impl Settings {
    /// Load the shared settings file, falling back to defaults if it does not exist.
    pub fn load() -> Result<Self, SettingsError> {
        Self::load_from(&settings_path())
    }

    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No settings file at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(SettingsError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        toml::from_str(&contents).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Render as TOML for display.
    pub fn to_toml_string(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_default()
    }
}

/// Canonical path to the shared settings file: `~/.config/gameboxd/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("gameboxd").join("settings.toml")
}

/// Default library database: `<data dir>/gameboxd/library.db`.
pub fn default_database_path() -> PathBuf {
    let data = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    data.join("gameboxd").join("library.db")
}

/// Resolve the library database path using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. `storage.database` in `settings.toml`
/// 3. [`default_database_path`]
pub fn resolve_database_path(cli_override: Option<PathBuf>, settings: &Settings) -> PathBuf {
    if let Some(p) = cli_override {
        return p;
    }
    match &settings.storage.database {
        Some(p) if !p.as_os_str().is_empty() => p.clone(),
        _ => default_database_path(),
    }
}

/// Resolve the catalog base URL: environment, then settings. `None` means
/// the client's built-in default.
pub fn resolve_catalog_url(settings: &Settings) -> Option<String> {
    pick_catalog_url(std::env::var(CATALOG_URL_ENV).ok(), settings)
}

fn pick_catalog_url(env_value: Option<String>, settings: &Settings) -> Option<String> {
    env_value
        .into_iter()
        .chain(settings.catalog.base_url.clone())
        .map(|url| url.trim().trim_end_matches('/').to_string())
        .find(|url| !url.is_empty())
}

/// Everything a frontend needs from configuration, resolved once at startup
/// and passed down explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppContext {
    pub database_path: PathBuf,
    pub catalog_url: Option<String>,
    pub session: SessionSettings,
    pub dark_mode: bool,
}

impl AppContext {
    /// Load `settings.toml` and apply the CLI database override.
    pub fn resolve(db_override: Option<PathBuf>) -> Result<Self, SettingsError> {
        Ok(Self::from_settings(&Settings::load()?, db_override))
    }

    pub fn from_settings(settings: &Settings, db_override: Option<PathBuf>) -> Self {
        Self {
            database_path: resolve_database_path(db_override, settings),
            catalog_url: resolve_catalog_url(settings),
            session: settings.session.clone(),
            dark_mode: settings.display.dark_mode,
        }
    }

    /// Name to greet the user with, if they are signed in.
    pub fn signed_in_name(&self) -> Option<&str> {
        if !self.session.signed_in {
            return None;
        }
        Some(self.session.display_name.as_deref().unwrap_or("player"))
    }
}
