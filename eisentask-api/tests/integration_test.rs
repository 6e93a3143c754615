/// Integration tests for the EisenTask API
///
/// These tests verify the full HTTP surface end-to-end over a real
/// file-backed store:
/// - Identity enforcement on task routes
/// - Task lifecycle (create → update → soft-delete)
/// - Validation and duplicate rejection
/// - Archived view against a controlled clock
/// - Per-user isolation
/// - Suggestion and health endpoints
mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{TimeZone, Utc};
use common::TestContext;
use serde_json::json;
use tower::Service as _;

/// Test that task routes reject requests without an identity header
#[tokio::test]
async fn test_identity_required() {
    let ctx = TestContext::new().await.unwrap();

    let request = Request::builder()
        .method("GET")
        .uri("/api/tasks")
        .body(Body::empty())
        .unwrap();

    let response = ctx.app.clone().call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = common::body_json(response).await;
    assert_eq!(body["error"], "unauthorized");
    assert_eq!(body["message"], "Missing x-user-id header");
}

/// Test that identifiers unsafe as file names are rejected
#[tokio::test]
async fn test_malformed_identity_rejected() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx
        .app
        .clone()
        .call(common::bare_request("GET", "/api/tasks", "../escape"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = common::body_json(response).await;
    assert_eq!(body["message"], "Invalid x-user-id header");
}

/// Test task creation and the response shape
#[tokio::test]
async fn test_create_task() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx
        .app
        .clone()
        .call(common::json_request(
            "POST",
            "/api/tasks",
            "alice",
            json!({
                "title": "Finish report",
                "description": "Quarterly numbers",
                "priority": "urgent",
                "importance": "important",
                "deadline": "2024-03-20"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = common::body_json(response).await;
    assert!(body["id"].is_string());
    assert_eq!(body["title"], "Finish report");
    assert_eq!(body["description"], "Quarterly numbers");
    assert_eq!(body["priority"], "urgent");
    assert_eq!(body["importance"], "important");
    assert_eq!(body["createdAt"], "2024-03-15T10:00:00Z");
    assert_eq!(body["deadline"], "2024-03-20");
    assert_eq!(body["done"], false);
    assert!(body["deletedAt"].is_null());

    // The owner id is implied by the header, never echoed back
    assert!(body.get("userId").is_none());
}

/// Test that optional fields stay absent when not submitted
#[tokio::test]
async fn test_create_task_minimal_body() {
    let ctx = TestContext::new().await.unwrap();

    let body = common::create_task(&ctx, "alice", "Water plants", "not urgent", "not important").await;

    assert!(body.get("description").is_none());
    assert!(body.get("deadline").is_none());
    assert!(body.as_object().unwrap().contains_key("deletedAt"));
}

/// Test that all validation violations are reported together
#[tokio::test]
async fn test_create_task_validation() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx
        .app
        .clone()
        .call(common::json_request("POST", "/api/tasks", "alice", json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = common::body_json(response).await;
    assert_eq!(body["error"], "validation_error");
    assert_eq!(body["message"], "Request validation failed");

    let details = body["details"].as_array().unwrap();
    assert_eq!(details.len(), 3);
    assert_eq!(details[0]["message"], "Title is required");
    assert_eq!(details[1]["message"], "Priority must be \"urgent\" or \"not urgent\"");
    assert_eq!(
        details[2]["message"],
        "Importance must be \"important\" or \"not important\""
    );
}

/// Test that a whitespace-only title is treated as missing
#[tokio::test]
async fn test_blank_title_rejected() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx
        .app
        .clone()
        .call(common::json_request(
            "POST",
            "/api/tasks",
            "alice",
            json!({
                "title": "   ",
                "priority": "urgent",
                "importance": "important"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = common::body_json(response).await;
    let details = body["details"].as_array().unwrap();
    assert_eq!(details.len(), 1);
    assert_eq!(details[0]["field"], "title");
    assert_eq!(details[0]["message"], "Title is required");
}

/// Test duplicate rejection within a quadrant and acceptance across quadrants
#[tokio::test]
async fn test_duplicate_task_in_quadrant() {
    let ctx = TestContext::new().await.unwrap();

    common::create_task(&ctx, "alice", "Finish report", "urgent", "important").await;

    // Same quadrant, same title up to case
    let response = ctx
        .app
        .clone()
        .call(common::json_request(
            "POST",
            "/api/tasks",
            "alice",
            json!({
                "title": "FINISH REPORT",
                "priority": "urgent",
                "importance": "important"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body = common::body_json(response).await;
    assert_eq!(body["error"], "conflict");
    assert_eq!(
        body["message"],
        "A task with title \"FINISH REPORT\" already exists in the same quadrant."
    );

    // Same title in another quadrant is allowed
    common::create_task(&ctx, "alice", "Finish report", "not urgent", "important").await;
}

/// Test listing order: newest creation first
#[tokio::test]
async fn test_list_tasks_newest_first() {
    let ctx = TestContext::new().await.unwrap();

    common::create_task(&ctx, "alice", "First", "urgent", "important").await;
    ctx.clock.advance(chrono::Duration::minutes(5));
    common::create_task(&ctx, "alice", "Second", "urgent", "important").await;
    ctx.clock.advance(chrono::Duration::minutes(5));
    common::create_task(&ctx, "alice", "Third", "not urgent", "not important").await;

    let response = ctx
        .app
        .clone()
        .call(common::bare_request("GET", "/api/tasks", "alice"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_json(response).await;
    let titles: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|task| task["title"].as_str().unwrap())
        .collect();

    assert_eq!(titles, vec!["Third", "Second", "First"]);
}

/// Test partial update: only submitted fields change
#[tokio::test]
async fn test_update_task() {
    let ctx = TestContext::new().await.unwrap();

    let created = common::create_task(&ctx, "alice", "Finish report", "urgent", "important").await;
    let id = created["id"].as_str().unwrap();

    let response = ctx
        .app
        .clone()
        .call(common::json_request(
            "PATCH",
            &format!("/api/tasks/{}", id),
            "alice",
            json!({ "done": true }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_json(response).await;
    assert_eq!(body["done"], true);
    assert_eq!(body["title"], "Finish report");
    assert_eq!(body["priority"], "urgent");
    assert_eq!(body["importance"], "important");
    assert_eq!(body["createdAt"], created["createdAt"]);
}

/// Test moving a task to another quadrant via update
#[tokio::test]
async fn test_update_moves_quadrant() {
    let ctx = TestContext::new().await.unwrap();

    let created = common::create_task(&ctx, "alice", "Plan offsite", "urgent", "not important").await;
    let id = created["id"].as_str().unwrap();

    let response = ctx
        .app
        .clone()
        .call(common::json_request(
            "PATCH",
            &format!("/api/tasks/{}", id),
            "alice",
            json!({ "priority": "not urgent", "importance": "important" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_json(response).await;
    assert_eq!(body["priority"], "not urgent");
    assert_eq!(body["importance"], "important");
}

/// Test that updating an unknown id fails with 404
#[tokio::test]
async fn test_update_unknown_task() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx
        .app
        .clone()
        .call(common::json_request(
            "PATCH",
            "/api/tasks/550e8400-e29b-41d4-a716-446655440000",
            "alice",
            json!({ "done": true }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = common::body_json(response).await;
    assert_eq!(body["error"], "not_found");
    assert_eq!(body["message"], "Task not found");
}

/// Test that one user cannot touch another user's task
#[tokio::test]
async fn test_update_foreign_task_not_found() {
    let ctx = TestContext::new().await.unwrap();

    let created = common::create_task(&ctx, "alice", "Private task", "urgent", "important").await;
    let id = created["id"].as_str().unwrap();

    let response = ctx
        .app
        .clone()
        .call(common::json_request(
            "PATCH",
            &format!("/api/tasks/{}", id),
            "bob",
            json!({ "done": true }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Test soft deletion end to end
#[tokio::test]
async fn test_delete_task() {
    let ctx = TestContext::new().await.unwrap();

    let created = common::create_task(&ctx, "alice", "Old errand", "not urgent", "not important").await;
    let id = created["id"].as_str().unwrap();

    let response = ctx
        .app
        .clone()
        .call(common::bare_request(
            "DELETE",
            &format!("/api/tasks/{}", id),
            "alice",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Gone from the listing
    let response = ctx
        .app
        .clone()
        .call(common::bare_request("GET", "/api/tasks", "alice"))
        .await
        .unwrap();
    let body = common::body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 0);

    // A second delete no longer finds it
    let response = ctx
        .app
        .clone()
        .call(common::bare_request(
            "DELETE",
            &format!("/api/tasks/{}", id),
            "alice",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Neither does an update
    let response = ctx
        .app
        .clone()
        .call(common::json_request(
            "PATCH",
            &format!("/api/tasks/{}", id),
            "alice",
            json!({ "done": true }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Test the archived view against a controlled clock
#[tokio::test]
async fn test_archived_view_day_boundary() {
    let ctx = TestContext::new().await.unwrap();

    // Created at 2024-03-15T10:00:00Z
    common::create_task(&ctx, "alice", "Old task", "not urgent", "not important").await;

    // Two days later the boundary is 2024-03-16T00:00:00Z, so the old
    // task is archived and a fresh one is not
    ctx.clock
        .set(Utc.with_ymd_and_hms(2024, 3, 17, 10, 0, 0).unwrap());
    let fresh = common::create_task(&ctx, "alice", "Fresh task", "urgent", "important").await;

    let response = ctx
        .app
        .clone()
        .call(common::bare_request("GET", "/api/tasks/archived", "alice"))
        .await
        .unwrap();
    let body = common::body_json(response).await;
    let titles: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|task| task["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Old task"]);

    // Completing the fresh task archives it regardless of age
    let id = fresh["id"].as_str().unwrap();
    ctx.app
        .clone()
        .call(common::json_request(
            "PATCH",
            &format!("/api/tasks/{}", id),
            "alice",
            json!({ "done": true }),
        ))
        .await
        .unwrap();

    let response = ctx
        .app
        .clone()
        .call(common::bare_request("GET", "/api/tasks/archived", "alice"))
        .await
        .unwrap();
    let body = common::body_json(response).await;
    let titles: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|task| task["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Fresh task", "Old task"]);
}

/// Test that users see only their own tasks
#[tokio::test]
async fn test_user_isolation() {
    let ctx = TestContext::new().await.unwrap();

    common::create_task(&ctx, "alice", "Alice one", "urgent", "important").await;
    common::create_task(&ctx, "alice", "Alice two", "not urgent", "important").await;

    // Bob can reuse Alice's title and quadrant without a conflict
    common::create_task(&ctx, "bob", "Alice one", "urgent", "important").await;

    let response = ctx
        .app
        .clone()
        .call(common::bare_request("GET", "/api/tasks", "alice"))
        .await
        .unwrap();
    let body = common::body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 2);

    let response = ctx
        .app
        .clone()
        .call(common::bare_request("GET", "/api/tasks", "bob"))
        .await
        .unwrap();
    let body = common::body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

/// Test that a syntactically invalid JSON body is rejected
#[tokio::test]
async fn test_malformed_json_body() {
    let ctx = TestContext::new().await.unwrap();

    let request = Request::builder()
        .method("POST")
        .uri("/api/tasks")
        .header("x-user-id", "alice")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = ctx.app.clone().call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Test the suggestion endpoint (no identity required)
#[tokio::test]
async fn test_suggest_endpoint() {
    let ctx = TestContext::new().await.unwrap();

    let request = Request::builder()
        .method("POST")
        .uri("/api/ai/suggest")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({ "text": "  Call the bank today, it is important  " }).to_string(),
        ))
        .unwrap();

    let response = ctx.app.clone().call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_json(response).await;
    let suggestion = &body["suggestion"];
    assert_eq!(suggestion["title"], "Call the bank today, it is important");
    assert_eq!(suggestion["priority"], "urgent");
    assert_eq!(suggestion["importance"], "important");
    assert_eq!(suggestion["confidence"], 0.75);
    assert_eq!(
        suggestion["reasoning"],
        "Based on keyword analysis: priority=urgent, importance=important"
    );
}

/// Test that the suggestion endpoint requires text
#[tokio::test]
async fn test_suggest_requires_text() {
    let ctx = TestContext::new().await.unwrap();

    let request = Request::builder()
        .method("POST")
        .uri("/api/ai/suggest")
        .header("content-type", "application/json")
        .body(Body::from(json!({}).to_string()))
        .unwrap();

    let response = ctx.app.clone().call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = common::body_json(response).await;
    assert_eq!(body["error"], "bad_request");
    assert_eq!(body["message"], "Text input is required");
}

/// Test the health endpoint
#[tokio::test]
async fn test_health_check() {
    let ctx = TestContext::new().await.unwrap();

    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = ctx.app.clone().call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["storage"], "available");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert!(body["timestamp"].is_string());
}
