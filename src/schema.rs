diesel::table! {
    books (id) {
        id -> Int4,
        title -> Text,
        author -> Text,
        published_date -> Date,
    }
}
