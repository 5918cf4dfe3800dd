//! Book-related DTOs for API requests and responses.
//!
//! Dates cross the wire as ISO-8601 strings ("1965-08-01"); serde does the
//! type coercion and a malformed date is rejected at the framework
//! boundary before any handler runs.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::models::{Book, BookChangeset, NewBook};

// ============================================================================
// Request DTOs
// ============================================================================

/// Request body for creating a new book.
///
/// Any `id` field a caller sends is simply ignored; the store assigns one.
#[derive(Debug, Deserialize)]
pub struct CreateBookRequest {
    pub title: String,
    pub author: String,
    pub published_date: Date,
}

impl CreateBookRequest {
    /// Converts the request DTO into a NewBook model for insertion.
    pub fn into_new_book(self) -> NewBook {
        NewBook {
            title: self.title,
            author: self.author,
            published_date: self.published_date.into(),
        }
    }
}

/// Request body for updating a book. The id names the row to overwrite.
#[derive(Debug, Deserialize)]
pub struct UpdateBookRequest {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub published_date: Date,
}

impl UpdateBookRequest {
    /// Converts the request DTO into a full-overwrite changeset.
    pub fn into_changeset(self) -> BookChangeset {
        BookChangeset {
            title: self.title,
            author: self.author,
            published_date: self.published_date.into(),
        }
    }
}

// ============================================================================
// Response DTOs
// ============================================================================

/// Response body for book data.
#[derive(Debug, Serialize)]
pub struct BookResponse {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub published_date: Date,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            id: book.id,
            title: book.title,
            author: book.author,
            published_date: book.published_date.into(),
        }
    }
}

/// Response body for a successful create: just the generated id.
#[derive(Debug, Serialize)]
pub struct CreateBookResponse {
    pub id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    #[test]
    fn create_request_parses_iso_date() {
        let json = r#"{"title":"Dune","author":"Herbert","published_date":"1965-08-01"}"#;
        let request: CreateBookRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.published_date, date(1965, 8, 1));

        let new_book = request.into_new_book();
        assert_eq!(new_book.author, "Herbert");
        assert_eq!(Date::from(new_book.published_date), date(1965, 8, 1));
    }

    #[test]
    fn create_request_ignores_caller_supplied_id() {
        let json = r#"{"id":42,"title":"Dune","author":"Herbert","published_date":"1965-08-01"}"#;
        let request: CreateBookRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.title, "Dune");
    }

    #[test]
    fn create_request_rejects_malformed_date() {
        let json = r#"{"title":"Dune","author":"Herbert","published_date":"not-a-date"}"#;
        let result = serde_json::from_str::<CreateBookRequest>(json);
        assert!(result.is_err());
    }

    #[test]
    fn update_request_requires_id() {
        let json = r#"{"title":"Dune","author":"Herbert","published_date":"1965-08-01"}"#;
        let result = serde_json::from_str::<UpdateBookRequest>(json);
        assert!(result.is_err());
    }

    #[test]
    fn book_response_serializes_date_as_iso_string() {
        let response = BookResponse {
            id: 7,
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
            published_date: date(1965, 8, 1),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["published_date"], "1965-08-01");
    }
}
