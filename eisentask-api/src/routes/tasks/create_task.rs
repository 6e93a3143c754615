/// Create task endpoint
///
/// Validates the submitted fields, rejects duplicates within the same
/// quadrant, and stores the new task.
///
/// # Endpoint
///
/// `POST /api/tasks`
///
/// # Example Request
///
/// ```json
/// {
///   "title": "Finish report",
///   "description": "Quarterly numbers for the board",
///   "priority": "urgent",
///   "importance": "important",
///   "deadline": "2024-03-20"
/// }
/// ```
///
/// # Example Response
///
/// `201 Created` with the stored task:
///
/// ```json
/// {
///   "id": "550e8400-e29b-41d4-a716-446655440000",
///   "title": "Finish report",
///   "description": "Quarterly numbers for the board",
///   "priority": "urgent",
///   "importance": "important",
///   "createdAt": "2024-03-15T10:00:00Z",
///   "deadline": "2024-03-20",
///   "done": false,
///   "deletedAt": null
/// }
/// ```
use crate::app::AppState;
use crate::error::{ApiError, ValidationErrorDetail};
use crate::middleware::identity::UserContext;
use crate::routes::tasks::TaskResponse;
use axum::{extract::State, http::StatusCode, Extension, Json};
use eisentask_shared::models::task::{CreateTask, Importance, Priority};
use serde::Deserialize;

/// Create task request
///
/// All fields are optional at the wire level so that a missing field
/// produces a validation message instead of a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateTaskRequest {
    /// Task title
    pub title: Option<String>,

    /// Optional description
    pub description: Option<String>,

    /// "urgent" or "not urgent"
    pub priority: Option<String>,

    /// "important" or "not important"
    pub importance: Option<String>,

    /// Optional date string (YYYY-MM-DD)
    pub deadline: Option<String>,
}

impl CreateTaskRequest {
    /// Validates the request and converts it into store input
    ///
    /// Collects every violated constraint so the client sees all of
    /// them in a single response. The title is checked against its
    /// trimmed form but stored as submitted.
    fn into_fields(self) -> Result<CreateTask, ApiError> {
        let mut errors = Vec::new();

        let title = match self.title {
            Some(title) if !title.trim().is_empty() => Some(title),
            _ => {
                errors.push(ValidationErrorDetail {
                    field: "title".to_string(),
                    message: "Title is required".to_string(),
                });
                None
            }
        };

        let priority = self.priority.as_deref().and_then(Priority::parse);
        if priority.is_none() {
            errors.push(ValidationErrorDetail {
                field: "priority".to_string(),
                message: "Priority must be \"urgent\" or \"not urgent\"".to_string(),
            });
        }

        let importance = self.importance.as_deref().and_then(Importance::parse);
        if importance.is_none() {
            errors.push(ValidationErrorDetail {
                field: "importance".to_string(),
                message: "Importance must be \"important\" or \"not important\"".to_string(),
            });
        }

        match (title, priority, importance) {
            (Some(title), Some(priority), Some(importance)) => Ok(CreateTask {
                title,
                description: self.description,
                priority,
                importance,
                deadline: self.deadline,
            }),
            _ => Err(ApiError::ValidationError(errors)),
        }
    }
}

/// Create task endpoint handler
///
/// # Errors
///
/// - 401 Unauthorized: Missing or malformed identity header
/// - 409 Conflict: An active, not-done task with the same title
///   (case-insensitive) already exists in the same quadrant
/// - 422 Unprocessable Entity: Validation errors
/// - 500 Internal Server Error: Storage failure
pub async fn create_task(
    State(state): State<AppState>,
    Extension(ctx): Extension<UserContext>,
    Json(request): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<TaskResponse>), ApiError> {
    let fields = request.into_fields()?;

    tracing::info!(
        user_id = %ctx.user_id,
        title = %fields.title,
        priority = fields.priority.as_str(),
        importance = fields.importance.as_str(),
        "Creating task"
    );

    let task = state.store.create(&ctx.user_id, fields).await?;

    Ok((StatusCode::CREATED, Json(TaskResponse::from(task))))
}
