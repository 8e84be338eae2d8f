//! CLI command implementations

mod add;
mod lend;
mod list;
mod login;
mod recommend;
mod remove;
mod search;

pub use add::{add, import};
pub use lend::{borrow, give_back};
pub use list::list;
pub use login::{login, logout};
pub use recommend::recommend;
pub use remove::remove;
pub use search::search;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use shelfside_core::{Book, Catalog, JsonFileStore, OpenLibraryClient, Role, Session};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Session file kept next to the collection files. This is the gate's own
/// state; the core only ever sees the resolved Session.
const SESSION_FILE: &str = "session.json";

#[derive(Serialize, Deserialize)]
pub(crate) struct StoredSession {
    pub role: String,
}

/// Resolve the data directory: flag, then environment, then default.
pub fn resolve_data_dir(flag: Option<PathBuf>) -> PathBuf {
    flag.or_else(|| std::env::var("SHELFSIDE_DATA_DIR").ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("./shelfside_data"))
}

/// Build the catalog over the file-backed store and the Open Library
/// client.
pub fn open_catalog(data_dir: &Path) -> Result<Catalog> {
    tracing::debug!("using data directory {}", data_dir.display());
    let store = JsonFileStore::new(data_dir)
        .with_context(|| format!("Failed to open data directory: {}", data_dir.display()))?;
    let remote = OpenLibraryClient::new().context("Failed to build the remote catalog client")?;
    Ok(Catalog::new(Arc::new(store), Arc::new(remote)))
}

/// Resolve the acting session: an explicit --role flag wins, else the
/// stored session from a previous login.
pub fn resolve_session(data_dir: &Path, role_flag: Option<&str>) -> Result<Session> {
    if let Some(role) = role_flag {
        let role: Role = role.parse().map_err(|e: String| anyhow!(e))?;
        return Ok(Session::new(role));
    }

    let data = std::fs::read_to_string(session_path(data_dir))
        .map_err(|_| anyhow!("Not logged in. Run the login command or pass --role."))?;
    let stored: StoredSession =
        serde_json::from_str(&data).context("Corrupt session file; log in again")?;
    let role: Role = stored.role.parse().map_err(|e: String| anyhow!(e))?;
    Ok(Session::new(role))
}

pub(crate) fn session_path(data_dir: &Path) -> PathBuf {
    data_dir.join(SESSION_FILE)
}

/// Render a book sequence as an aligned table.
pub(crate) fn print_books(books: &[Book]) {
    if books.is_empty() {
        println!("No books found.");
        return;
    }

    println!("{:<6} {:<42} {:<30} {}", "ID", "Title", "Author", "Status");
    for book in books {
        println!(
            "{:<6} {:<42} {:<30} {}",
            book.id,
            clip(&book.name, 40),
            clip(&book.author, 28),
            book.status
        );
    }
}

/// Render a book sequence as pretty JSON.
pub(crate) fn print_json(books: &[Book]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(books)?);
    Ok(())
}

fn clip(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut clipped: String = text.chars().take(max - 3).collect();
    clipped.push_str("...");
    clipped
}
