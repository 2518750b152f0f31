use crate::database::connect_read_only;
use crate::database::sqlite::SqliteRepository;
use crate::features::export::export_pages;
use crate::io::read_pages_json;
use crate::tests::unit_sqlite_pages_database::{create_mock_page, insert_page};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::path::Path;
use tempfile::TempDir;

fn sqlite_url(path: &Path) -> String {
    format!("sqlite://{}", path.display())
}

// builds an on-disk store holding `count` pages, the way the legacy app left it
async fn create_store_on_disk(path: &Path, count: usize) {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create database file");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    for i in 0..count {
        let mut page = create_mock_page(&format!("Page {}", i), &format!("/wiki/{}", i));
        if i % 2 == 1 {
            page.language = "da".to_string();
            page.content = format!("Side nummer {} på dansk: æ ø å", i);
        }
        insert_page(&pool, &page).await;
    }

    pool.close().await;
}

// N rows in, N objects out, each with the five keys as strings
#[tokio::test]
async fn test_export_writes_every_row() {
    for count in [0, 1, 7] {
        let dir = TempDir::new().unwrap();
        let db_path = dir.path().join("whoknows.db");
        let json_path = dir.path().join("pages_data.json");
        create_store_on_disk(&db_path, count).await;

        let pool = connect_read_only(&sqlite_url(&db_path)).await.unwrap();
        let repo = SqliteRepository::new(pool);
        let exported = export_pages(&repo, &json_path).await.unwrap();
        repo.close().await;

        assert_eq!(exported, count);

        let raw = std::fs::read_to_string(&json_path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let array = value.as_array().expect("Export should be a json array");
        assert_eq!(array.len(), count);

        for object in array {
            let object = object.as_object().unwrap();
            assert_eq!(object.len(), 5);
            for key in ["title", "url", "language", "last_updated", "content"] {
                assert!(object[key].is_string(), "{} should be a string", key);
            }
        }
    }
}

// the file is pretty printed, keeps non-ASCII literally and reads back identically
#[tokio::test]
async fn test_export_round_trip() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("whoknows.db");
    let json_path = dir.path().join("pages_data.json");
    create_store_on_disk(&db_path, 3).await;

    let pool = connect_read_only(&sqlite_url(&db_path)).await.unwrap();
    let repo = SqliteRepository::new(pool);
    export_pages(&repo, &json_path).await.unwrap();

    let raw = std::fs::read_to_string(&json_path).unwrap();
    assert!(raw.starts_with("[\n  {\n    \"title\""));
    assert!(raw.contains("æ ø å"));
    assert!(!raw.contains("\\u00e6"));

    let from_json = read_pages_json(&json_path).unwrap();
    let from_db = crate::database::PageRepository::get_all_pages(&repo)
        .await
        .unwrap();
    assert_eq!(from_json, from_db);
}

// a missing store is a connection error and no empty database is left behind
#[tokio::test]
async fn test_export_missing_database_fails() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("does-not-exist.db");

    let result = connect_read_only(&sqlite_url(&db_path)).await;

    assert!(result.is_err());
    assert!(!db_path.exists());
}

// the exporter's connection cannot write to the store
#[tokio::test]
async fn test_export_connection_is_read_only() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("whoknows.db");
    create_store_on_disk(&db_path, 1).await;

    let pool = connect_read_only(&sqlite_url(&db_path)).await.unwrap();
    let result = sqlx::query("DELETE FROM pages").execute(&pool).await;

    assert!(result.is_err());
}
