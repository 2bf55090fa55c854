//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use gameboxd_client::Feed;

#[derive(Parser)]
#[command(name = "gameboxd")]
#[command(about = "Keep a personal library of favorite and logged games", long_about = None)]
pub(crate) struct Cli {
    /// Library database file (defaults to the settings file, then the data dir)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments that pick one game out of the remote catalog.
#[derive(Args, Clone)]
pub(crate) struct GameQuery {
    /// Search text used to find the game
    pub query: String,

    /// Pick the search result with this catalog id instead of the first one
    #[arg(long)]
    pub id: Option<i64>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Show one of the catalog's curated feeds
    Feed {
        /// top-rated, upcoming, popular, recent or shooter
        kind: Feed,

        /// Maximum number of games to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Search the catalog by name
    Search {
        query: String,

        /// Maximum number of games to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Manage favorite games
    Favorite {
        #[command(subcommand)]
        action: FavoriteAction,
    },

    /// Record ratings and feedback for games
    Log {
        #[command(subcommand)]
        action: LogAction,
    },

    /// Show library statistics
    Stats,

    /// Check stored records for corrupted list data
    Check,

    /// Delete every favorite and logged entry
    Reset {
        /// Actually delete (otherwise only describe what would happen)
        #[arg(long)]
        confirm: bool,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum FavoriteAction {
    /// Favorite a game, or unfavorite it if it already is one
    Toggle {
        #[command(flatten)]
        game: GameQuery,
    },

    /// List favorite games
    List,

    /// Remove favorites by catalog id
    Delete {
        #[arg(required = true)]
        ids: Vec<i64>,
    },
}

#[derive(Subcommand)]
pub(crate) enum LogAction {
    /// Log a game with a rating and optional feedback
    Add {
        #[command(flatten)]
        game: GameQuery,

        /// Rating from 0 to 5
        #[arg(short, long, allow_negative_numbers = true)]
        rating: i64,

        /// Free-form feedback
        #[arg(short, long, default_value = "")]
        feedback: String,
    },

    /// List logged entries
    List {
        /// Only show entries for this catalog id
        #[arg(long)]
        game: Option<i64>,
    },

    /// Remove logged entries by entry id
    Delete {
        #[arg(required = true)]
        ids: Vec<i64>,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show resolved settings and where they came from
    Show,

    /// Print the settings file path
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_feed_kind() {
        let cli = Cli::try_parse_from(["gameboxd", "feed", "top-rated", "--limit", "5"]).unwrap();
        match cli.command {
            Commands::Feed { kind, limit } => {
                assert_eq!(kind, Feed::TopRated);
                assert_eq!(limit, Some(5));
            }
            _ => panic!("expected feed command"),
        }
        assert!(Cli::try_parse_from(["gameboxd", "feed", "indie"]).is_err());
    }

    #[test]
    fn test_parse_log_add_negative_rating() {
        let cli = Cli::try_parse_from([
            "gameboxd", "log", "add", "celeste", "--id", "26226", "--rating", "-1",
        ])
        .unwrap();
        match cli.command {
            Commands::Log {
                action:
                    LogAction::Add {
                        game,
                        rating,
                        feedback,
                    },
            } => {
                assert_eq!(game.query, "celeste");
                assert_eq!(game.id, Some(26226));
                assert_eq!(rating, -1);
                assert_eq!(feedback, "");
            }
            _ => panic!("expected log add command"),
        }
    }

    #[test]
    fn test_delete_requires_ids() {
        assert!(Cli::try_parse_from(["gameboxd", "favorite", "delete"]).is_err());
        let cli = Cli::try_parse_from(["gameboxd", "--db", "/tmp/x.db", "log", "delete", "3", "4"])
            .unwrap();
        assert_eq!(cli.db.as_deref(), Some(std::path::Path::new("/tmp/x.db")));
        assert!(matches!(
            cli.command,
            Commands::Log {
                action: LogAction::Delete { ref ids }
            } if ids == &[3, 4]
        ));
    }
}
