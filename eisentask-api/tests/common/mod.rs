/// Common test utilities for integration tests
///
/// This module provides shared infrastructure for integration tests:
/// - Temporary data directory per test context
/// - Manual clock so time-dependent behavior is deterministic
/// - Router construction over the real file-backed store
/// - Request and response helpers
use axum::body::Body;
use axum::extract::Request;
use axum::http::StatusCode;
use chrono::{TimeZone, Utc};
use eisentask_api::app::{build_router, AppState};
use eisentask_api::config::{ApiConfig, Config, StorageConfig, TimeConfig};
use eisentask_shared::clock::ManualClock;
use eisentask_shared::store::task_store::{StoreConfig, TaskStore};
use std::sync::Arc;
use tempfile::TempDir;
use tower::Service as _;

/// Test context containing all necessary resources
pub struct TestContext {
    pub app: axum::Router,
    pub clock: Arc<ManualClock>,
    _dir: TempDir,
}

impl TestContext {
    /// Creates a new test context over a fresh data directory
    ///
    /// The clock starts pinned at 2024-03-15T10:00:00Z and the archive
    /// boundary uses UTC, so tests control every time-dependent outcome.
    pub async fn new() -> anyhow::Result<Self> {
        let dir = tempfile::tempdir()?;
        let data_dir = dir.path().join("data");

        let clock = Arc::new(ManualClock::new(
            Utc.with_ymd_and_hms(2024, 3, 15, 10, 0, 0).unwrap(),
        ));

        let store = TaskStore::open(
            StoreConfig {
                data_dir: data_dir.clone(),
                utc_offset: chrono::FixedOffset::east_opt(0).unwrap(),
            },
            clock.clone(),
        )
        .await?;

        let config = Config {
            api: ApiConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                cors_origins: vec!["*".to_string()],
            },
            storage: StorageConfig { data_dir },
            time: TimeConfig {
                utc_offset_minutes: 0,
            },
        };

        let state = AppState::new(store, config);
        let app = build_router(state);

        Ok(TestContext {
            app,
            clock,
            _dir: dir,
        })
    }
}

/// Builds a JSON request with the identity header set
pub fn json_request(
    method: &str,
    uri: &str,
    user_id: &str,
    body: serde_json::Value,
) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("x-user-id", user_id)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Builds a bodyless request with the identity header set
pub fn bare_request(method: &str, uri: &str, user_id: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("x-user-id", user_id)
        .body(Body::empty())
        .unwrap()
}

/// Reads a response body as JSON
pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// Creates a task through the API and returns the response body
pub async fn create_task(
    ctx: &TestContext,
    user_id: &str,
    title: &str,
    priority: &str,
    importance: &str,
) -> serde_json::Value {
    let response = ctx
        .app
        .clone()
        .call(json_request(
            "POST",
            "/api/tasks",
            user_id,
            serde_json::json!({
                "title": title,
                "priority": priority,
                "importance": importance,
            }),
        ))
        .await
        .unwrap();

    let status = response.status();
    if status != StatusCode::CREATED {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        panic!(
            "Expected 201 Created, got {}: {}",
            status,
            String::from_utf8_lossy(&body)
        );
    }

    body_json(response).await
}
