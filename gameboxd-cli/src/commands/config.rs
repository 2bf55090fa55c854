use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gameboxd_client::DEFAULT_BASE_URL;
use gameboxd_lib::settings::{
    CATALOG_URL_ENV, Settings, resolve_catalog_url, resolve_database_path, settings_path,
};

use crate::CliError;

/// Show resolved settings and their sources.
pub(crate) fn run_config_show(db_override: Option<&Path>) -> Result<(), CliError> {
    let path = settings_path();

    log::info!(
        "{}",
        "gameboxd Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    let settings = Settings::load().map_err(|e| CliError::config(e.to_string()))?;
    crate::log_blank();

    let db_source = if db_override.is_some() {
        "--db"
    } else if settings.storage.database.is_some() {
        "settings file"
    } else {
        "default"
    };
    let db_path = resolve_database_path(db_override.map(Path::to_path_buf), &settings);
    show_field("database", &db_path.display().to_string(), db_source);

    let (url, url_source) = match resolve_catalog_url(&settings) {
        Some(url) if std::env::var(CATALOG_URL_ENV).is_ok() => (url, CATALOG_URL_ENV),
        Some(url) => (url, "settings file"),
        None => (DEFAULT_BASE_URL.to_string(), "default"),
    };
    show_field("catalog_url", &url, url_source);

    let session = if settings.session.signed_in {
        match &settings.session.display_name {
            Some(name) => format!("signed in as {}", name),
            None => "signed in".to_string(),
        }
    } else {
        "signed out".to_string()
    };
    show_field("session", &session, "settings file");

    let theme = if settings.display.dark_mode { "dark" } else { "light" };
    show_field("theme", theme, "settings file");

    Ok(())
}

/// Print the settings file path.
pub(crate) fn run_config_path() {
    log::info!("{}", settings_path().display());
}

fn show_field(name: &str, value: &str, source: &str) {
    log::info!(
        "  {} {} {}",
        format!("{}:", name).if_supports_color(Stdout, |t| t.cyan()),
        value,
        format!("({})", source).if_supports_color(Stdout, |t| t.dimmed()),
    );
}
