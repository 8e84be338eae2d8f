//! Remove command implementation

use anyhow::Result;
use shelfside_core::{Catalog, Session};

/// Remove a book by id from the acting role's collection.
pub fn remove(catalog: &Catalog, session: &Session, id: u64) -> Result<()> {
    if catalog.remove(session, id)? {
        println!("Removed book {}.", id);
    } else {
        println!("No book with id {} in the collection.", id);
    }
    Ok(())
}
