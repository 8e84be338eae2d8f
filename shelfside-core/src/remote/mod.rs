//! Remote bibliographic catalog
//!
//! A stateless adapter over one external search API, translating free-text
//! queries into normalized [`Book`] records. Implementations stay honest
//! about failures; the aggregator above decides how to degrade.

mod open_library;

pub use open_library::OpenLibraryClient;

use crate::error::RemoteError;
use crate::types::Book;
use async_trait::async_trait;

/// Result type for remote catalog calls
pub type RemoteResult<T> = std::result::Result<T, RemoteError>;

/// Abstract remote catalog
#[async_trait]
pub trait RemoteCatalog: Send + Sync {
    /// Free-text title search. An empty or whitespace-only query resolves
    /// to the empty sequence without a network call.
    async fn search(&self, query: &str) -> RemoteResult<Vec<Book>>;

    /// The popular-titles feed backing the recommendation panel.
    async fn recommendations(&self) -> RemoteResult<Vec<Book>>;
}

/// The fixed five-title sequence shown when recommendations cannot be
/// computed from the shared collection or the remote catalog.
pub fn fallback_recommendations() -> Vec<Book> {
    vec![
        Book::new(1, "To Kill a Mockingbird", "Harper Lee"),
        Book::new(2, "1984", "George Orwell"),
        Book::new(3, "Pride and Prejudice", "Jane Austen"),
        Book::new(4, "The Great Gatsby", "F. Scott Fitzgerald"),
        Book::new(5, "Moby-Dick", "Herman Melville"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_has_five_distinct_titles() {
        let books = fallback_recommendations();
        assert_eq!(books.len(), 5);

        let keys: std::collections::HashSet<_> = books.iter().map(Book::key).collect();
        assert_eq!(keys.len(), 5);
    }
}
