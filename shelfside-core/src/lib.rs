//! Shelfside Core Library
//!
//! This crate provides the book aggregation and search service for the
//! Shelfside catalog manager: a local collection store partitioned into
//! personal and shared scopes, a client for the Open Library search API,
//! and the aggregator that merges the two into deduplicated search and
//! recommendation sequences.

pub mod catalog;
pub mod error;
pub mod remote;
pub mod session;
pub mod store;
pub mod types;

pub use catalog::{AddOutcome, Catalog, SearchResults};
pub use error::{RemoteError, Result, ShelfsideError, StoreError};
pub use remote::{fallback_recommendations, OpenLibraryClient, RemoteCatalog};
pub use session::{authenticate, Role, Session};
pub use store::{CollectionStore, JsonFileStore, MemoryStore, Scope};
pub use types::{Book, BookStatus};
