mod book;

pub use book::{Book, BookChangeset, NewBook};
