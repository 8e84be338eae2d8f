//! List command implementation

use anyhow::Result;
use shelfside_core::{Catalog, Session};

/// Render the role-scoped library view, optionally filtered by a
/// title/author substring.
pub fn list(catalog: &Catalog, session: &Session, filter: Option<&str>, json: bool) -> Result<()> {
    let mut books = catalog.library_view(session, &[]);
    if let Some(term) = filter {
        books.retain(|book| book.matches(term));
    }

    if json {
        super::print_json(&books)
    } else {
        super::print_books(&books);
        Ok(())
    }
}
