/// List tasks endpoint
///
/// Returns every task the caller has not deleted, newest first. Done
/// tasks are included; clients split the list into matrix and completed
/// views themselves.
///
/// # Endpoint
///
/// `GET /api/tasks`
///
/// # Example Response
///
/// ```json
/// [
///   {
///     "id": "550e8400-e29b-41d4-a716-446655440000",
///     "title": "Finish report",
///     "priority": "urgent",
///     "importance": "important",
///     "createdAt": "2024-03-15T10:00:00Z",
///     "done": false,
///     "deletedAt": null
///   }
/// ]
/// ```
use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::identity::UserContext;
use crate::routes::tasks::TaskResponse;
use axum::{extract::State, Extension, Json};

/// List tasks endpoint handler
///
/// # Errors
///
/// - 401 Unauthorized: Missing or malformed identity header
/// - 500 Internal Server Error: Storage failure
pub async fn list_tasks(
    State(state): State<AppState>,
    Extension(ctx): Extension<UserContext>,
) -> Result<Json<Vec<TaskResponse>>, ApiError> {
    let tasks = state.store.list_active(&ctx.user_id).await?;

    Ok(Json(tasks.into_iter().map(TaskResponse::from).collect()))
}
