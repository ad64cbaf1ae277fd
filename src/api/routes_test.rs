//! Tests for HTTP routes

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tempfile::TempDir;
use tokio_util::sync::CancellationToken;
use tower::ServiceExt;

use super::{Config, create_router};
use crate::db::SqliteDatabase;

#[tokio::test(flavor = "multi_thread")]
async fn health_returns_ok() {
    let tmp = TempDir::new().unwrap();
    let db = SqliteDatabase::in_memory().await.unwrap();
    let config = Config::default().with_docs_dir(tmp.path().to_path_buf());
    let app = create_router(Arc::new(db), &config, CancellationToken::new());

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "ok");
}

#[tokio::test(flavor = "multi_thread")]
async fn unknown_route_is_404() {
    let db = SqliteDatabase::in_memory().await.unwrap();
    let app = create_router(Arc::new(db), &Config::default(), CancellationToken::new());

    let response = app
        .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
