//! Repository layer for data access operations.
//!
//! Translates domain operations into parameterized SQL against the books
//! table and maps rows to and from the Book model.

mod book_repo;

pub use book_repo::BookRepository;

use crate::db::AsyncDbPool;

/// Aggregates all repositories for convenient access.
///
/// Since `AsyncDbPool` uses `Arc` internally, cloning is cheap.
#[derive(Clone)]
pub struct Repositories {
    pub books: BookRepository,
}

impl Repositories {
    /// Creates a new Repositories instance with all repositories initialized.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self {
            books: BookRepository::new(pool),
        }
    }
}
