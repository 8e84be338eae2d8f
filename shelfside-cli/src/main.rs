//! Shelfside CLI - command-line frontend for the Shelfside catalog
//!
//! This binary is the rendering layer: it resolves the acting session,
//! hands it into the core as an explicit parameter, and prints the result
//! sequences. All catalog semantics live in shelfside-core.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "shelfside")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Data directory for collections and the session file
    /// (default: $SHELFSIDE_DATA_DIR or ./shelfside_data)
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Act as this role (user, admin) instead of the stored session
    #[arg(long, global = true, value_name = "ROLE")]
    role: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in with one of the fixed credential pairs
    Login {
        username: String,
        password: String,
    },

    /// Drop the stored session
    Logout,

    /// Search the shared catalog and the remote source
    Search {
        /// Free-text title or author query
        query: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the recommendation panel
    Recommend {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the collection for the acting role
    List {
        /// Only show entries matching this title/author substring
        #[arg(short, long)]
        filter: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a book to the acting role's collection
    Add {
        /// Book title
        name: String,

        /// Author
        author: String,
    },

    /// Add a previously searched title to the personal collection
    Import {
        /// Book title
        name: String,

        /// Author
        author: String,

        /// Cover thumbnail URL
        #[arg(long, value_name = "URL")]
        cover: Option<String>,
    },

    /// Remove a book by id from the acting role's collection
    Remove {
        id: u64,
    },

    /// Mark a personal-collection book as borrowed
    Borrow {
        id: u64,
    },

    /// Mark a borrowed book as available again
    Return {
        id: u64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "shelfside_cli=debug,shelfside_core=debug"
    } else {
        "shelfside_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let data_dir = commands::resolve_data_dir(cli.data_dir);

    match cli.command {
        Commands::Login { username, password } => commands::login(&data_dir, &username, &password),

        Commands::Logout => commands::logout(&data_dir),

        command => {
            let session = commands::resolve_session(&data_dir, cli.role.as_deref())?;
            let catalog = commands::open_catalog(&data_dir)?;

            match command {
                Commands::Search { query, json } => {
                    commands::search(&catalog, &session, &query, json).await
                }

                Commands::Recommend { json } => {
                    commands::recommend(&catalog, &session, json).await
                }

                Commands::List { filter, json } => {
                    commands::list(&catalog, &session, filter.as_deref(), json)
                }

                Commands::Add { name, author } => commands::add(&catalog, &session, &name, &author),

                Commands::Import {
                    name,
                    author,
                    cover,
                } => commands::import(&catalog, &session, &name, &author, cover),

                Commands::Remove { id } => commands::remove(&catalog, &session, id),

                Commands::Borrow { id } => commands::borrow(&catalog, &session, id),

                Commands::Return { id } => commands::give_back(&catalog, &session, id),

                Commands::Login { .. } | Commands::Logout => unreachable!(),
            }
        }
    }
}
