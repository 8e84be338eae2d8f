//! Search command implementation

use anyhow::Result;
use shelfside_core::{Catalog, Session};

/// Run an aggregated search and render the merged result sequence.
pub async fn search(catalog: &Catalog, session: &Session, query: &str, json: bool) -> Result<()> {
    let results = catalog.search(query, session).await;

    if results.remote_failed {
        eprintln!("Warning: the remote catalog is unavailable; showing local matches only.");
    }

    if json {
        super::print_json(&results.books)
    } else {
        super::print_books(&results.books);
        Ok(())
    }
}
