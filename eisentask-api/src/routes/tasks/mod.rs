/// Task endpoints
///
/// This module provides the CRUD surface for a caller's task list. Every
/// endpoint is scoped to the identity supplied in the `x-user-id` header
/// and operates only on that caller's records.
///
/// # Endpoints
///
/// - `GET /api/tasks` - List active tasks, newest first
/// - `GET /api/tasks/archived` - List done or stale tasks
/// - `POST /api/tasks` - Create a task
/// - `PATCH /api/tasks/:id` - Partially update a task
/// - `DELETE /api/tasks/:id` - Soft-delete a task
///
/// # Authentication
///
/// All endpoints require the `x-user-id` header (enforced by the identity
/// middleware, see `crate::middleware::identity`).
use chrono::{DateTime, Utc};
use eisentask_shared::models::task::{Importance, Priority, Task};
use serde::Serialize;
use uuid::Uuid;

pub mod archived_tasks;
pub mod create_task;
pub mod delete_task;
pub mod list_tasks;
pub mod update_task;

// Re-export handlers for convenience
pub use archived_tasks::archived_tasks;
pub use create_task::{create_task, CreateTaskRequest};
pub use delete_task::delete_task;
pub use list_tasks::list_tasks;
pub use update_task::{update_task, UpdateTaskRequest};

/// Task as returned by the API
///
/// Matches the stored record minus the owner id, which callers already
/// know because they supplied it. `description` and `deadline` are
/// omitted when unset; `deletedAt` is always present so clients can
/// distinguish "active" explicitly.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    /// Task id
    pub id: Uuid,

    /// Task title
    pub title: String,

    /// Optional description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Urgency axis
    pub priority: Priority,

    /// Importance axis
    pub importance: Importance,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Optional date string (YYYY-MM-DD)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,

    /// Completion flag
    pub done: bool,

    /// Soft-deletion timestamp, null while the task is live
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            title: task.title,
            description: task.description,
            priority: task.priority,
            importance: task.importance,
            created_at: task.created_at,
            deadline: task.deadline,
            done: task.done,
            deleted_at: task.deleted_at,
        }
    }
}
