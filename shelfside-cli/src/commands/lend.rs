//! Borrow and return command implementations

use anyhow::Result;
use shelfside_core::{Catalog, Session};

/// Mark a personal-collection book as borrowed.
pub fn borrow(catalog: &Catalog, session: &Session, id: u64) -> Result<()> {
    if catalog.borrow(session, id)? {
        println!("Book {} marked as borrowed.", id);
    } else {
        println!("No book with id {} in your library.", id);
    }
    Ok(())
}

/// Mark a borrowed book as available again.
pub fn give_back(catalog: &Catalog, session: &Session, id: u64) -> Result<()> {
    if catalog.return_book(session, id)? {
        println!("Book {} marked as available.", id);
    } else {
        println!("No book with id {} in your library.", id);
    }
    Ok(())
}
