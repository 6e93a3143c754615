/// Update task endpoint
///
/// Applies a partial update to one of the caller's tasks. Only the
/// fields present in the body are touched; everything else keeps its
/// stored value. There is no duplicate check on update, so a task can
/// be retitled or moved into a quadrant that already holds a task with
/// the same title.
///
/// # Endpoint
///
/// `PATCH /api/tasks/:id`
///
/// # Example Request
///
/// ```json
/// {
///   "done": true
/// }
/// ```
use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::identity::UserContext;
use crate::routes::tasks::TaskResponse;
use axum::{
    extract::{Path, State},
    Extension, Json,
};
use eisentask_shared::models::task::{Importance, Priority, UpdateTask};
use serde::Deserialize;
use uuid::Uuid;

/// Update task request
///
/// Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateTaskRequest {
    /// Replace the title
    pub title: Option<String>,

    /// Replace the description
    pub description: Option<String>,

    /// Move along the urgency axis
    pub priority: Option<Priority>,

    /// Move along the importance axis
    pub importance: Option<Importance>,

    /// Replace the deadline
    pub deadline: Option<String>,

    /// Mark done or not done
    pub done: Option<bool>,
}

impl From<UpdateTaskRequest> for UpdateTask {
    fn from(request: UpdateTaskRequest) -> Self {
        Self {
            title: request.title,
            description: request.description,
            priority: request.priority,
            importance: request.importance,
            deadline: request.deadline,
            done: request.done,
        }
    }
}

/// Update task endpoint handler
///
/// # Errors
///
/// - 401 Unauthorized: Missing or malformed identity header
/// - 404 Not Found: No live task with this id belongs to the caller
/// - 500 Internal Server Error: Storage failure
pub async fn update_task(
    State(state): State<AppState>,
    Extension(ctx): Extension<UserContext>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateTaskRequest>,
) -> Result<Json<TaskResponse>, ApiError> {
    let task = state
        .store
        .update(&ctx.user_id, id, request.into())
        .await?;

    Ok(Json(TaskResponse::from(task)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body_means_no_changes() {
        let request: UpdateTaskRequest = serde_json::from_str("{}").unwrap();
        let fields = UpdateTask::from(request);

        assert!(fields.title.is_none());
        assert!(fields.done.is_none());
    }

    #[test]
    fn test_done_flag_parses() {
        let request: UpdateTaskRequest = serde_json::from_str(r#"{"done": true}"#).unwrap();
        assert_eq!(request.done, Some(true));
    }

    #[test]
    fn test_quadrant_move_parses() {
        let request: UpdateTaskRequest =
            serde_json::from_str(r#"{"priority": "not urgent", "importance": "important"}"#)
                .unwrap();

        assert_eq!(request.priority, Some(Priority::NotUrgent));
        assert_eq!(request.importance, Some(Importance::Important));
    }

    #[test]
    fn test_unknown_priority_value_rejected() {
        let result = serde_json::from_str::<UpdateTaskRequest>(r#"{"priority": "soon"}"#);
        assert!(result.is_err());
    }
}
