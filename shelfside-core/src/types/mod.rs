//! Core data types for the Shelfside catalog

mod book;

pub use book::{Book, BookStatus};
