//! Tests for the SQLite content repository.

use crate::db::{ContentRepository, Database, NewContent, SqliteDatabase};

async fn setup() -> SqliteDatabase {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");
    db.migrate().await.expect("Migration should succeed");
    db
}

#[tokio::test(flavor = "multi_thread")]
async fn create_assigns_sequential_ids() {
    let db = setup().await;

    let first = db
        .contents()
        .create(&NewContent::new("First", "one"))
        .await
        .unwrap();
    let second = db
        .contents()
        .create(&NewContent::new("Second", "two"))
        .await
        .unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(second.title, "Second");
    assert_eq!(second.body, "two");
}

#[tokio::test(flavor = "multi_thread")]
async fn find_by_id_returns_stored_row() {
    let db = setup().await;
    let created = db
        .contents()
        .create(&NewContent::new("Title", "Body with\nnewlines"))
        .await
        .unwrap();

    let found = db.contents().find_by_id(created.id).await.unwrap();

    assert_eq!(found, Some(created));
}

#[tokio::test(flavor = "multi_thread")]
async fn find_by_id_missing_is_none() {
    let db = setup().await;

    let found = db.contents().find_by_id(9999).await.unwrap();

    assert_eq!(found, None);
}

#[tokio::test(flavor = "multi_thread")]
async fn list_returns_all_in_id_order() {
    let db = setup().await;
    for title in ["a", "b", "c"] {
        db.contents()
            .create(&NewContent::new(title, ""))
            .await
            .unwrap();
    }

    let all = db.contents().list().await.unwrap();

    let titles: Vec<_> = all.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["a", "b", "c"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn queries_before_migration_fail() {
    let db = SqliteDatabase::in_memory().await.unwrap();

    let result = db.contents().find_by_id(1).await;

    assert!(result.is_err());
}
