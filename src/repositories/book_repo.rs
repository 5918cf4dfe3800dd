//! Book repository for async database operations.
//!
//! Provides CRUD operations for the books table using diesel_async. All
//! user-supplied values travel through the query builder as bound
//! parameters; nothing is ever spliced into SQL text.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{Book, BookChangeset, NewBook};

/// Book repository holding an async connection pool.
///
/// Since `AsyncDbPool` (bb8::Pool) internally uses `Arc`, cloning is cheap
/// (just reference count increment). No need for `Arc<BookRepository>`.
#[derive(Clone)]
pub struct BookRepository {
    pool: AsyncDbPool,
}

impl BookRepository {
    /// Creates a new BookRepository with the given connection pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Lists every book in the table, in storage order.
    ///
    /// An empty table yields an empty vector, never an error.
    pub async fn list_all(&self) -> Result<Vec<Book>, AppError> {
        use crate::schema::books::dsl::*;
        let mut conn = self.pool.get().await?;

        books
            .select(Book::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Finds a book by its ID.
    ///
    /// # Returns
    /// `Some(Book)` if a row matches, `None` otherwise. The absent case is
    /// an explicit signal, never a partially populated record.
    pub async fn find_by_id(&self, book_id: i32) -> Result<Option<Book>, AppError> {
        use crate::schema::books::dsl::*;
        let mut conn = self.pool.get().await?;

        books
            .filter(id.eq(book_id))
            .select(Book::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Inserts a new book and returns the store-generated id.
    pub async fn create(&self, new_book: NewBook) -> Result<i32, AppError> {
        use crate::schema::books::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(books)
            .values(&new_book)
            .returning(id)
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Overwrites title, author, and published_date for the matching row.
    ///
    /// # Returns
    /// The number of affected rows. 0 means no row matched; that is not an
    /// error here.
    pub async fn update(&self, book_id: i32, changes: BookChangeset) -> Result<usize, AppError> {
        use crate::schema::books::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(books.filter(id.eq(book_id)))
            .set(&changes)
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Deletes the book with the given id.
    ///
    /// # Returns
    /// The number of affected rows (0 or 1).
    pub async fn delete(&self, book_id: i32) -> Result<usize, AppError> {
        use crate::schema::books::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::delete(books.filter(id.eq(book_id)))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
