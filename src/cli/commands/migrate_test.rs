use crate::cli::commands::migrate;
use crate::db::DbConfig;

#[tokio::test(flavor = "multi_thread")]
async fn test_migrate_sqlite_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("content.db");
    let config = DbConfig::default().with_url(format!("sqlite://{}", path.display()));

    let output = migrate::run(&config).await.unwrap();

    assert!(output.starts_with("Migrations applied to sqlite://"));
    assert!(path.exists());
}
