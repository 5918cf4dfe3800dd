//! Book CRUD request handlers.
//!
//! Each handler delegates one-to-one to the book service and translates
//! the outcome into an HTTP status code. Every success on this surface is
//! a plain 200; the only non-success a client can observe is 404 on a
//! read of a missing id (update and delete of a missing id succeed
//! silently, preserving the original contract).

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};

use crate::api::dto::{BookResponse, CreateBookRequest, CreateBookResponse, UpdateBookRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Creates book-related routes.
///
/// Routes:
/// - GET /        - List all books
/// - POST /       - Create a new book, returns the generated id
/// - PUT /        - Overwrite the book named by the body's id
/// - GET /:id     - Get book by ID (404 when absent)
/// - DELETE /:id  - Delete book by ID
pub fn book_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_books).post(create_book).put(update_book))
        .route("/{id}", get(get_book).delete(delete_book))
}

/// GET /book - List all books
///
/// Returns a JSON array of all books. An empty table is a 200 with an
/// empty array, never a 404.
async fn list_books(State(state): State<AppState>) -> Result<Json<Vec<BookResponse>>, AppError> {
    let books = state.services.books.list_books().await?;
    let responses: Vec<BookResponse> = books.into_iter().map(BookResponse::from).collect();
    Ok(Json(responses))
}

/// GET /book/:id - Get book by ID
///
/// Returns the book with the specified ID or 404 if not found.
async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<BookResponse>, AppError> {
    let book = state.services.books.get_book(id).await?;
    Ok(Json(BookResponse::from(book)))
}

/// POST /book - Create new book
///
/// Creates a new book from the JSON request body and returns the
/// store-generated id. A caller-supplied id field is ignored.
async fn create_book(
    State(state): State<AppState>,
    Json(payload): Json<CreateBookRequest>,
) -> Result<Json<CreateBookResponse>, AppError> {
    let new_book = payload.into_new_book();
    let id = state.services.books.create_book(new_book).await?;
    Ok(Json(CreateBookResponse { id }))
}

/// PUT /book - Update book
///
/// Overwrites title, author, and published_date for the row named by the
/// body's id. Responds 200 with an empty body whether or not the id
/// existed; an update of a missing id is a silent no-op.
async fn update_book(
    State(state): State<AppState>,
    Json(payload): Json<UpdateBookRequest>,
) -> Result<StatusCode, AppError> {
    let id = payload.id;
    let changes = payload.into_changeset();
    state.services.books.update_book(id, changes).await?;
    Ok(StatusCode::OK)
}

/// DELETE /book/:id - Delete book
///
/// Responds 200 with an empty body whether or not the id existed.
async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    state.services.books.delete_book(id).await?;
    Ok(StatusCode::OK)
}
