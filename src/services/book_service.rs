//! Book service for business logic operations.
//!
//! Provides a higher-level API over the repository layer. The only real
//! business rule lives in `get_book`: an absent row becomes a structured
//! NotFound error so the handler path stays uniform. Update and delete
//! keep the original contract of silently succeeding when the id does not
//! exist.

use crate::error::{AppError, AppResult};
use crate::models::{Book, BookChangeset, NewBook};
use crate::repositories::BookRepository;

/// Book service for handling book-related business logic.
#[derive(Clone)]
pub struct BookService {
    repo: BookRepository,
}

impl BookService {
    /// Creates a new BookService with the given repository.
    pub fn new(repo: BookRepository) -> Self {
        Self { repo }
    }

    /// Lists all books.
    pub async fn list_books(&self) -> AppResult<Vec<Book>> {
        self.repo.list_all().await
    }

    /// Gets a book by its ID.
    ///
    /// # Returns
    /// The book if found, or a `NotFound` error.
    pub async fn get_book(&self, id: i32) -> AppResult<Book> {
        self.repo.find_by_id(id).await?.ok_or(AppError::NotFound {
            entity: "book".to_string(),
            field: "id".to_string(),
            value: id.to_string(),
        })
    }

    /// Creates a new book and returns the store-generated id.
    pub async fn create_book(&self, new_book: NewBook) -> AppResult<i32> {
        self.repo.create(new_book).await
    }

    /// Overwrites a book's fields.
    ///
    /// A missing id is a silent no-op: no row is created and no error is
    /// raised.
    pub async fn update_book(&self, id: i32, changes: BookChangeset) -> AppResult<()> {
        let affected = self.repo.update(id, changes).await?;
        if affected == 0 {
            tracing::debug!(book_id = id, "update matched no rows");
        }
        Ok(())
    }

    /// Deletes a book.
    ///
    /// A missing id is a silent no-op, mirroring `update_book`.
    pub async fn delete_book(&self, id: i32) -> AppResult<()> {
        let affected = self.repo.delete(id).await?;
        if affected == 0 {
            tracing::debug!(book_id = id, "delete matched no rows");
        }
        Ok(())
    }
}
