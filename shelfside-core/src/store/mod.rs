//! Local collection store
//!
//! A durable mapping from a scope key to an ordered sequence of books.
//! Reads are total: a missing or corrupt persisted value yields the empty
//! sequence. Writes replace the whole stored sequence for that scope;
//! callers compute the new full sequence first.

use crate::error::StoreError;
use crate::types::Book;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;

/// Result type for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// The logical partition a collection belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Owned by a user-role session.
    Personal,
    /// Owned by an admin-role session, visible to all roles as a search
    /// and recommendation source.
    Shared,
}

impl Scope {
    /// The persisted key (and file stem) for this scope.
    pub fn key(&self) -> &'static str {
        match self {
            Scope::Personal => "personal",
            Scope::Shared => "shared",
        }
    }
}

/// Abstract collection store
pub trait CollectionStore: Send + Sync {
    /// Read the full sequence for a scope. Total: never fails.
    fn read(&self, scope: Scope) -> Vec<Book>;

    /// Replace the full sequence for a scope.
    fn write(&self, scope: Scope, books: &[Book]) -> StoreResult<()>;
}

/// JSON-file-backed store: one file per scope under a data directory.
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at the given data directory, creating it if
    /// needed.
    pub fn new(root: impl Into<PathBuf>) -> StoreResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn path(&self, scope: Scope) -> PathBuf {
        self.root.join(format!("{}.json", scope.key()))
    }
}

impl CollectionStore for JsonFileStore {
    fn read(&self, scope: Scope) -> Vec<Book> {
        let path = self.path(scope);
        let data = match fs::read_to_string(&path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                tracing::warn!("Failed to read {} collection, treating as empty: {}", scope.key(), e);
                return Vec::new();
            }
        };
        match serde_json::from_str(&data) {
            Ok(books) => books,
            Err(e) => {
                tracing::warn!("Corrupt {} collection, treating as empty: {}", scope.key(), e);
                Vec::new()
            }
        }
    }

    fn write(&self, scope: Scope, books: &[Book]) -> StoreResult<()> {
        let path = self.path(scope);
        let data = serde_json::to_string_pretty(books)?;

        // Write to a temp file in the same directory then rename, so a
        // reader never observes a partial sequence.
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, data)?;
        fs::rename(&temp_path, &path)?;
        Ok(())
    }
}

/// In-memory collection store (for testing)
#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<Scope, Vec<Book>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CollectionStore for MemoryStore {
    fn read(&self, scope: Scope) -> Vec<Book> {
        self.collections
            .read()
            .unwrap()
            .get(&scope)
            .cloned()
            .unwrap_or_default()
    }

    fn write(&self, scope: Scope, books: &[Book]) -> StoreResult<()> {
        self.collections
            .write()
            .unwrap()
            .insert(scope, books.to_vec());
        Ok(())
    }
}
