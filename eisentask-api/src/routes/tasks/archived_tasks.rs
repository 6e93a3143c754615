/// Archived tasks endpoint
///
/// Returns the caller's archived view: tasks that are done, plus tasks
/// created strictly before yesterday at local midnight. This is a
/// read-only projection over the same records `GET /api/tasks` serves;
/// nothing is moved or mutated by viewing it.
///
/// # Endpoint
///
/// `GET /api/tasks/archived`
use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::identity::UserContext;
use crate::routes::tasks::TaskResponse;
use axum::{extract::State, Extension, Json};

/// Archived tasks endpoint handler
///
/// # Errors
///
/// - 401 Unauthorized: Missing or malformed identity header
/// - 500 Internal Server Error: Storage failure
pub async fn archived_tasks(
    State(state): State<AppState>,
    Extension(ctx): Extension<UserContext>,
) -> Result<Json<Vec<TaskResponse>>, ApiError> {
    let tasks = state.store.list_archived(&ctx.user_id).await?;

    Ok(Json(tasks.into_iter().map(TaskResponse::from).collect()))
}
