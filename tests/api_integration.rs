//! API integration tests for bookshelf-rs.
//!
//! These tests exercise the full HTTP surface against a real PostgreSQL
//! database and are ignored by default. Point BOOKSHELF_TEST_DATABASE_URL
//! at a scratch database and run:
//!
//! ```text
//! BOOKSHELF_TEST_DATABASE_URL=postgres://localhost/bookshelf_test \
//!     cargo test -- --ignored
//! ```

use bookshelf_rs::AppState;
use bookshelf_rs::api::routes::create_router;
use bookshelf_rs::config::DatabaseConfig;
use bookshelf_rs::db::establish_async_connection_pool;
use diesel_async::RunQueryDsl;
use serde_json::{Value, json};
use tokio::net::TcpListener;

const TEST_DB_ENV: &str = "BOOKSHELF_TEST_DATABASE_URL";

/// Build app state against the test database, creating the books table
/// when it does not exist yet.
async fn create_test_state() -> AppState {
    let url = std::env::var(TEST_DB_ENV)
        .unwrap_or_else(|_| panic!("{} must point at a scratch database", TEST_DB_ENV));

    let config = DatabaseConfig {
        url,
        ..Default::default()
    };
    let pool = establish_async_connection_pool(&config)
        .await
        .expect("Failed to build pool");

    let mut conn = pool.get().await.expect("Failed to get connection");
    diesel::sql_query(
        "CREATE TABLE IF NOT EXISTS books (
            id SERIAL PRIMARY KEY,
            title TEXT NOT NULL,
            author TEXT NOT NULL,
            published_date DATE NOT NULL
        )",
    )
    .execute(&mut conn)
    .await
    .expect("Failed to create books table");
    drop(conn);

    AppState::new(pool)
}

/// Start a test server on a random port and return its base URL.
async fn start_test_server() -> String {
    let state = create_test_state().await;
    let router = create_router(state);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let addr = listener.local_addr().expect("Failed to get local addr");

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{}", addr)
}

fn dune_payload() -> Value {
    json!({
        "title": "Dune",
        "author": "Herbert",
        "published_date": "1965-08-01"
    })
}

#[tokio::test]
#[ignore = "requires a PostgreSQL database (BOOKSHELF_TEST_DATABASE_URL)"]
async fn test_create_get_delete_round_trip() {
    let base_url = start_test_server().await;
    let client = reqwest::Client::new();

    // Create: expect a positive integer id
    let resp = client
        .post(format!("{}/book", base_url))
        .json(&dune_payload())
        .send()
        .await
        .expect("Failed to create book");
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.expect("Failed to parse create response");
    let id = body["id"].as_i64().expect("id should be an integer");
    assert!(id > 0);

    // Read back: same three fields plus the assigned id
    let resp = client
        .get(format!("{}/book/{}", base_url, id))
        .send()
        .await
        .expect("Failed to get book");
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.expect("Failed to parse get response");
    assert_eq!(body["id"], id);
    assert_eq!(body["title"], "Dune");
    assert_eq!(body["author"], "Herbert");
    assert_eq!(body["published_date"], "1965-08-01");

    // Delete, then the read must report not-found
    let resp = client
        .delete(format!("{}/book/{}", base_url, id))
        .send()
        .await
        .expect("Failed to delete book");
    assert_eq!(resp.status(), 200);

    let resp = client
        .get(format!("{}/book/{}", base_url, id))
        .send()
        .await
        .expect("Failed to get deleted book");
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL database (BOOKSHELF_TEST_DATABASE_URL)"]
async fn test_get_missing_id_returns_structured_404() {
    let base_url = start_test_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{}/book/999999", base_url))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.expect("Failed to parse error body");
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
#[ignore = "requires a PostgreSQL database (BOOKSHELF_TEST_DATABASE_URL)"]
async fn test_update_missing_id_is_silent_noop() {
    let base_url = start_test_server().await;
    let client = reqwest::Client::new();

    let count_books = || async {
        let resp = client
            .get(format!("{}/book", base_url))
            .send()
            .await
            .expect("Failed to list books");
        assert_eq!(resp.status(), 200);
        let body: Value = resp.json().await.expect("Failed to parse list");
        body.as_array().expect("list should be an array").len()
    };

    let before = count_books().await;

    // Update of an id that was never created: no row appears, no error
    let resp = client
        .put(format!("{}/book", base_url))
        .json(&json!({
            "id": 999999,
            "title": "Ghost",
            "author": "Nobody",
            "published_date": "2000-01-01"
        }))
        .send()
        .await
        .expect("Failed to send update");
    assert_eq!(resp.status(), 200);

    let after = count_books().await;
    assert_eq!(before, after);

    let resp = client
        .get(format!("{}/book/999999", base_url))
        .send()
        .await
        .expect("Failed to get ghost book");
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL database (BOOKSHELF_TEST_DATABASE_URL)"]
async fn test_update_existing_overwrites_all_fields() {
    let base_url = start_test_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/book", base_url))
        .json(&dune_payload())
        .send()
        .await
        .expect("Failed to create book");
    let body: Value = resp.json().await.expect("Failed to parse create response");
    let id = body["id"].as_i64().expect("id should be an integer");

    let resp = client
        .put(format!("{}/book", base_url))
        .json(&json!({
            "id": id,
            "title": "Dune Messiah",
            "author": "Frank Herbert",
            "published_date": "1969-07-15"
        }))
        .send()
        .await
        .expect("Failed to update book");
    assert_eq!(resp.status(), 200);

    let resp = client
        .get(format!("{}/book/{}", base_url, id))
        .send()
        .await
        .expect("Failed to get updated book");
    let body: Value = resp.json().await.expect("Failed to parse get response");
    assert_eq!(body["title"], "Dune Messiah");
    assert_eq!(body["author"], "Frank Herbert");
    assert_eq!(body["published_date"], "1969-07-15");

    // cleanup
    let _ = client
        .delete(format!("{}/book/{}", base_url, id))
        .send()
        .await;
}

#[tokio::test]
#[ignore = "requires a PostgreSQL database (BOOKSHELF_TEST_DATABASE_URL)"]
async fn test_create_ignores_caller_supplied_id() {
    let base_url = start_test_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/book", base_url))
        .json(&json!({
            "id": 424242,
            "title": "Dune",
            "author": "Herbert",
            "published_date": "1965-08-01"
        }))
        .send()
        .await
        .expect("Failed to create book");
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.expect("Failed to parse create response");
    let id = body["id"].as_i64().expect("id should be an integer");
    assert_ne!(id, 424242);

    // cleanup
    let _ = client
        .delete(format!("{}/book/{}", base_url, id))
        .send()
        .await;
}

#[tokio::test]
#[ignore = "requires a PostgreSQL database (BOOKSHELF_TEST_DATABASE_URL)"]
async fn test_health_probes() {
    let base_url = start_test_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{}/health/live", base_url))
        .send()
        .await
        .expect("Failed to send liveness request");
    assert_eq!(resp.status(), 200);

    let resp = client
        .get(format!("{}/health", base_url))
        .send()
        .await
        .expect("Failed to send health request");
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.expect("Failed to parse health response");
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["database"]["status"], "healthy");
}
