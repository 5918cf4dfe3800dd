use diesel::prelude::*;
use jiff_diesel::Date;

/// Book model for reading from the database.
///
/// Derives Queryable for SELECT operations and Selectable for type-safe
/// column selection. Deserialization fails loudly on a column type
/// mismatch rather than producing a default-valued record.
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::books)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub published_date: Date,
}

/// NewBook model for inserting new records. The id is assigned by the
/// store, so there is no id field here at all.
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::books)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub published_date: Date,
}

/// BookChangeset for updates.
///
/// All fields are mandatory: an update overwrites the whole record
/// (except the immutable id), it is not a partial patch.
#[derive(Debug, AsChangeset, Clone)]
#[diesel(table_name = crate::schema::books)]
pub struct BookChangeset {
    pub title: String,
    pub author: String,
    pub published_date: Date,
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    #[test]
    fn new_book_carries_no_id() {
        let new_book = NewBook {
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
            published_date: date(1965, 8, 1).into(),
        };
        assert_eq!(new_book.title, "Dune");
        assert_eq!(jiff::civil::Date::from(new_book.published_date), date(1965, 8, 1));
    }
}
