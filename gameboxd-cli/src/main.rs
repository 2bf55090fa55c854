//! gameboxd CLI
//!
//! Browse the remote game catalog and keep a local library of favorite and
//! logged games.

mod cli_types;
mod commands;
mod error;
mod spinner;

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use clap::Parser;
use log::{Level, LevelFilter};

use gameboxd_lib::AppContext;

use cli_types::{Cli, Commands, ConfigAction, FavoriteAction, LogAction};
use commands::CommandContext;
pub(crate) use error::CliError;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logger(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("Failed to set up logging: {}", e);
        std::process::exit(2);
    }

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    if let Commands::Config { action } = &cli.command {
        return match action {
            ConfigAction::Show => commands::config::run_config_show(cli.db.as_deref()),
            ConfigAction::Path => {
                commands::config::run_config_path();
                Ok(())
            }
        };
    }

    let app = AppContext::resolve(cli.db.clone()).map_err(|e| CliError::config(e.to_string()))?;
    let ctx = CommandContext {
        app,
        quiet: cli.quiet,
    };

    match cli.command {
        Commands::Feed { kind, limit } => commands::feed::run_feed(&ctx, kind, limit),
        Commands::Search { query, limit } => commands::feed::run_search(&ctx, &query, limit),
        Commands::Favorite { action } => match action {
            FavoriteAction::Toggle { game } => commands::favorite::run_favorite_toggle(&ctx, &game),
            FavoriteAction::List => commands::favorite::run_favorite_list(&ctx),
            FavoriteAction::Delete { ids } => commands::favorite::run_favorite_delete(&ctx, &ids),
        },
        Commands::Log { action } => match action {
            LogAction::Add {
                game,
                rating,
                feedback,
            } => commands::logbook::run_log_add(&ctx, &game, rating, &feedback),
            LogAction::List { game } => commands::logbook::run_log_list(&ctx, game),
            LogAction::Delete { ids } => commands::logbook::run_log_delete(&ctx, &ids),
        },
        Commands::Stats => commands::stats::run_stats(&ctx),
        Commands::Check => commands::check::run_check(&ctx),
        Commands::Reset { confirm } => commands::reset::run_reset(&ctx, confirm),
        Commands::Config { .. } => Ok(()),
    }
}

/// Print an empty line through the logger so it respects `--quiet`.
pub(crate) fn log_blank() {
    log::info!("");
}

// ── Logging ─────────────────────────────────────────────────────────────────

/// Install the global logger.
///
/// Normal output is bare `info` messages on stdout. `--verbose` adds debug
/// messages with timestamps; `--quiet` keeps only warnings and errors. With
/// `--logfile`, everything is also appended to that file with colors removed.
fn init_logger(quiet: bool, verbose: bool, logfile: Option<&Path>) -> io::Result<()> {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(LevelFilter::Warn)
        .filter_module("gameboxd", level)
        .parse_default_env()
        .format(move |buf, record| {
            if verbose {
                writeln!(
                    buf,
                    "[{} {:<5} {}] {}",
                    buf.timestamp_millis(),
                    record.level(),
                    record.target(),
                    record.args()
                )
            } else if record.level() == Level::Info {
                writeln!(buf, "{}", record.args())
            } else {
                let level = record.level().to_string().to_lowercase();
                writeln!(buf, "{}: {}", level, record.args())
            }
        });

    match logfile {
        Some(path) => {
            let file = File::options().create(true).append(true).open(path)?;
            builder.target(env_logger::Target::Pipe(Box::new(TeeWriter { file })));
        }
        None => {
            builder.target(env_logger::Target::Stdout);
        }
    }

    builder.init();
    Ok(())
}

/// Writes to stdout unchanged and to a log file with ANSI escapes stripped.
struct TeeWriter {
    file: File,
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stdout().write_all(buf)?;
        self.file.write_all(&strip_ansi_escapes::strip(buf))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()?;
        self.file.flush()
    }
}
