//! Add and import command implementations

use anyhow::Result;
use shelfside_core::{AddOutcome, Book, Catalog, Session};

/// Manually add a book to the acting role's collection.
pub fn add(catalog: &Catalog, session: &Session, name: &str, author: &str) -> Result<()> {
    match catalog.add(session, name, author)? {
        AddOutcome::Added(book) => {
            println!("Added \"{}\" by {} (id {}).", book.name, book.author, book.id);
        }
        AddOutcome::Duplicate => {
            println!("\"{}\" is already in the collection; nothing added.", name.trim());
        }
        AddOutcome::EmptyField => {
            println!("A title and an author are both required; nothing added.");
        }
    }
    Ok(())
}

/// Add a previously searched title to the personal collection.
pub fn import(
    catalog: &Catalog,
    session: &Session,
    name: &str,
    author: &str,
    cover: Option<String>,
) -> Result<()> {
    let name = name.trim();
    let author = author.trim();
    if name.is_empty() || author.is_empty() {
        println!("A title and an author are both required; nothing imported.");
        return Ok(());
    }

    let mut book = Book::new(0, name, author);
    book.cover_image = cover;

    match catalog.add_from_remote(session, &book)? {
        AddOutcome::Added(book) => {
            println!("Imported \"{}\" by {} (id {}).", book.name, book.author, book.id);
        }
        AddOutcome::Duplicate => {
            println!("\"{}\" is already in your library; nothing imported.", name);
        }
        AddOutcome::EmptyField => unreachable!("fields validated above"),
    }
    Ok(())
}
