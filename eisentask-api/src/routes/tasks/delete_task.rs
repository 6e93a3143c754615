/// Delete task endpoint
///
/// Soft-deletes one of the caller's tasks by stamping `deletedAt`. The
/// record stays in the caller's file for auditability but disappears
/// from every listing, and its id can no longer be updated or deleted
/// again.
///
/// # Endpoint
///
/// `DELETE /api/tasks/:id`
///
/// Responds `204 No Content` on success.
use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::identity::UserContext;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension,
};
use uuid::Uuid;

/// Delete task endpoint handler
///
/// # Errors
///
/// - 401 Unauthorized: Missing or malformed identity header
/// - 404 Not Found: No live task with this id belongs to the caller
/// - 500 Internal Server Error: Storage failure
pub async fn delete_task(
    State(state): State<AppState>,
    Extension(ctx): Extension<UserContext>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.store.soft_delete(&ctx.user_id, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
