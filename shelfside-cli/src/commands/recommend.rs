//! Recommend command implementation

use anyhow::Result;
use shelfside_core::{Catalog, Session};

/// Render the recommendation panel. The core guarantees this is never
/// empty, so there is no failure path to report.
pub async fn recommend(catalog: &Catalog, session: &Session, json: bool) -> Result<()> {
    let picks = catalog.recommendations(session).await;

    if json {
        super::print_json(&picks)
    } else {
        println!("Top picks:");
        super::print_books(&picks);
        Ok(())
    }
}
