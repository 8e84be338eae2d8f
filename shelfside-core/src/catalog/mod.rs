//! Aggregator / search engine
//!
//! Merges the local collection store with the remote catalog into one
//! deduplicated result sequence, and produces the recommendation panel
//! with graceful degradation: shared collection first, then remote, then
//! the fixed fallback sequence.

use crate::remote::{fallback_recommendations, RemoteCatalog};
use crate::session::{Role, Session};
use crate::store::{CollectionStore, Scope, StoreResult};
use crate::types::{Book, BookStatus};
use rand::seq::SliceRandom;
use std::collections::HashSet;
use std::sync::Arc;

/// Sample recommendations from the shared collection once it holds at
/// least this many entries.
const SHARED_SAMPLE_THRESHOLD: usize = 5;

/// Upper bound on the recommendation panel.
const RECOMMENDATION_CAP: usize = 10;

/// Outcome of an insert into a persisted collection. Duplicate and
/// empty-field rejections are informational no-ops, not errors.
#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    Added(Book),
    /// An entry with the same (name, author) key already exists.
    Duplicate,
    /// Name or author was empty after trimming.
    EmptyField,
}

/// A search result sequence plus the out-of-band remote failure signal.
/// The rendering layer owns the user-visible notification.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResults {
    pub books: Vec<Book>,
    pub remote_failed: bool,
}

/// The unified catalog over local collections and the remote source.
pub struct Catalog {
    store: Arc<dyn CollectionStore>,
    remote: Arc<dyn RemoteCatalog>,
}

impl Catalog {
    pub fn new(store: Arc<dyn CollectionStore>, remote: Arc<dyn RemoteCatalog>) -> Self {
        Self { store, remote }
    }

    /// Search the shared collection and the remote catalog.
    ///
    /// Local matches supplement the remote search, never replace it: the
    /// remote call is made unconditionally, local matches come first, and
    /// on a (name, author) tie the local entry is the one retained.
    /// First-seen order is preserved.
    pub async fn search(&self, query: &str, session: &Session) -> SearchResults {
        let query = query.trim();
        if query.is_empty() {
            return SearchResults::default();
        }
        tracing::debug!(role = %session.role, query, "searching catalog");

        let mut books: Vec<Book> = self
            .store
            .read(Scope::Shared)
            .into_iter()
            .filter(|book| book.matches(query))
            .collect();

        let remote_failed = match self.remote.search(query).await {
            Ok(remote) => {
                books.extend(remote);
                false
            }
            Err(e) => {
                tracing::warn!("Remote search failed: {}", e);
                true
            }
        };

        SearchResults {
            books: dedup_by_key(books),
            remote_failed,
        }
    }

    /// Produce the recommendation panel. Never empty and never a visible
    /// failure: shared collection sample, else remote feed, else the
    /// fixed fallback sequence.
    pub async fn recommendations(&self, session: &Session) -> Vec<Book> {
        tracing::debug!(role = %session.role, "building recommendations");

        let shared = self.store.read(Scope::Shared);
        if shared.len() >= SHARED_SAMPLE_THRESHOLD {
            let mut sample = shared;
            sample.shuffle(&mut rand::thread_rng());
            sample.truncate(RECOMMENDATION_CAP);
            return sample;
        }

        match self.remote.recommendations().await {
            Ok(books) if !books.is_empty() => books,
            Ok(_) => fallback_recommendations(),
            Err(e) => {
                tracing::warn!("Remote recommendations failed, using fallback: {}", e);
                fallback_recommendations()
            }
        }
    }

    /// The role-scoped library view. Admins see the shared collection;
    /// users see their personal collection followed by any prior search
    /// results they do not already own, so search hits remain visible
    /// until explicitly added.
    pub fn library_view(&self, session: &Session, prior_search: &[Book]) -> Vec<Book> {
        match session.role {
            Role::Admin => self.store.read(Scope::Shared),
            Role::User => {
                let mut books = self.store.read(Scope::Personal);
                let owned: HashSet<_> = books.iter().map(Book::key).collect();
                books.extend(
                    prior_search
                        .iter()
                        .filter(|book| !owned.contains(&book.key()))
                        .cloned(),
                );
                books
            }
        }
    }

    /// Manually add a book to the role's collection. Empty fields and
    /// duplicate keys are reported as no-op outcomes.
    pub fn add(&self, session: &Session, name: &str, author: &str) -> StoreResult<AddOutcome> {
        let name = name.trim();
        let author = author.trim();
        if name.is_empty() || author.is_empty() {
            return Ok(AddOutcome::EmptyField);
        }

        let scope = session.role.scope();
        let mut books = self.store.read(scope);
        let key = Book::key_of(name, author);
        if books.iter().any(|book| book.key() == key) {
            return Ok(AddOutcome::Duplicate);
        }

        let mut book = Book::new(next_id(&books), name, author);
        book.added_at = Some(chrono::Utc::now());
        books.push(book.clone());
        self.store.write(scope, &books)?;
        tracing::debug!(role = %session.role, id = book.id, "added {:?}", book.name);
        Ok(AddOutcome::Added(book))
    }

    /// Add a remote search or recommendation hit to the personal
    /// collection. Status is forced to Available regardless of the
    /// incoming record; the provisional id is replaced.
    pub fn add_from_remote(&self, session: &Session, book: &Book) -> StoreResult<AddOutcome> {
        let mut books = self.store.read(Scope::Personal);
        if books.iter().any(|owned| owned.key() == book.key()) {
            return Ok(AddOutcome::Duplicate);
        }

        let stored = Book {
            id: next_id(&books),
            status: BookStatus::Available,
            added_at: Some(chrono::Utc::now()),
            ..book.clone()
        };
        books.push(stored.clone());
        self.store.write(Scope::Personal, &books)?;
        tracing::debug!(role = %session.role, id = stored.id, "imported {:?}", stored.name);
        Ok(AddOutcome::Added(stored))
    }

    /// Remove a book by id from the role's collection. Returns whether an
    /// entry was removed; an absent id is a no-op.
    pub fn remove(&self, session: &Session, id: u64) -> StoreResult<bool> {
        let scope = session.role.scope();
        let mut books = self.store.read(scope);
        let before = books.len();
        books.retain(|book| book.id != id);
        if books.len() == before {
            return Ok(false);
        }
        self.store.write(scope, &books)?;
        Ok(true)
    }

    /// Mark a personal-collection book as borrowed. Idempotent; an absent
    /// id is a no-op.
    pub fn borrow(&self, session: &Session, id: u64) -> StoreResult<bool> {
        self.set_status(session, id, BookStatus::Borrowed)
    }

    /// Mark a personal-collection book as available again. Idempotent; an
    /// absent id is a no-op.
    pub fn return_book(&self, session: &Session, id: u64) -> StoreResult<bool> {
        self.set_status(session, id, BookStatus::Available)
    }

    fn set_status(&self, session: &Session, id: u64, status: BookStatus) -> StoreResult<bool> {
        let mut books = self.store.read(Scope::Personal);
        let Some(book) = books.iter_mut().find(|book| book.id == id) else {
            return Ok(false);
        };
        if book.status == status {
            // Already in the requested state; nothing to rewrite.
            return Ok(true);
        }
        book.status = status;
        self.store.write(Scope::Personal, &books)?;
        tracing::debug!(role = %session.role, id, "status set to {}", status);
        Ok(true)
    }
}

/// Next id for an insert: one past the collection's maximum. Ids are
/// scoped to a single collection and never derived from the clock.
fn next_id(books: &[Book]) -> u64 {
    books.iter().map(|book| book.id).max().unwrap_or(0) + 1
}

/// Keep the first occurrence of each (name, author) key, preserving
/// first-seen order.
fn dedup_by_key(books: Vec<Book>) -> Vec<Book> {
    let mut seen = HashSet::new();
    books
        .into_iter()
        .filter(|book| seen.insert(book.key()))
        .collect()
}
