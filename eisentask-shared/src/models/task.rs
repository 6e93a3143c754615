/// Task model for the Eisenhower matrix
///
/// This module provides the Task record and the two classification axes
/// (priority and importance) that place every task in one of four quadrants.
/// Tasks are the sole entity of the system.
///
/// # Classification
///
/// ```text
///                  important        not important
/// urgent           Do First         Delegate
/// not urgent       Schedule         Eliminate
/// ```
///
/// # Wire format
///
/// Tasks serialize with camelCase field names, both in API payloads and in
/// the per-user JSON files on disk:
///
/// ```json
/// {
///   "id": "6c1a...{uuid}",
///   "userId": "web-7f3b",
///   "title": "Finish report",
///   "description": null,
///   "priority": "urgent",
///   "importance": "important",
///   "createdAt": "2024-03-01T09:30:00Z",
///   "deadline": "2024-03-05",
///   "done": false,
///   "deletedAt": null
/// }
/// ```
///
/// # Example
///
/// ```no_run
/// use eisentask_shared::models::task::{CreateTask, Priority, Importance};
///
/// let fields = CreateTask {
///     title: "Finish report".to_string(),
///     description: None,
///     priority: Priority::Urgent,
///     importance: Importance::Important,
///     deadline: Some("2024-03-05".to_string()),
/// };
/// ```
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Task urgency axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    /// Needs attention right away
    #[serde(rename = "urgent")]
    Urgent,

    /// Can wait for a planned slot
    #[serde(rename = "not urgent")]
    NotUrgent,
}

impl Priority {
    /// Converts priority to its wire string
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Urgent => "urgent",
            Priority::NotUrgent => "not urgent",
        }
    }

    /// Parses the exact wire string, rejecting anything else
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "urgent" => Some(Priority::Urgent),
            "not urgent" => Some(Priority::NotUrgent),
            _ => None,
        }
    }
}

/// Task importance axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Importance {
    /// Contributes to long-term goals
    #[serde(rename = "important")]
    Important,

    /// Busywork; a candidate for delegation or elimination
    #[serde(rename = "not important")]
    NotImportant,
}

impl Importance {
    /// Converts importance to its wire string
    pub fn as_str(&self) -> &'static str {
        match self {
            Importance::Important => "important",
            Importance::NotImportant => "not important",
        }
    }

    /// Parses the exact wire string, rejecting anything else
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "important" => Some(Importance::Important),
            "not important" => Some(Importance::NotImportant),
            _ => None,
        }
    }
}

/// Task record as stored on disk
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique task ID, assigned at creation, immutable
    pub id: Uuid,

    /// Owner key; every operation is scoped to it
    pub user_id: String,

    /// Task title, non-empty, stored exactly as received
    pub title: String,

    /// Optional free-text description
    pub description: Option<String>,

    /// Urgency axis
    pub priority: Priority,

    /// Importance axis
    pub importance: Importance,

    /// Creation timestamp from the store's clock, immutable
    pub created_at: DateTime<Utc>,

    /// Optional date string; not validated beyond presence
    pub deadline: Option<String>,

    /// Completion flag, false at creation
    pub done: bool,

    /// Soft-delete timestamp; None means the task is active.
    /// Once set it is never cleared (there is no undelete).
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Checks whether the task has been soft-deleted
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Comparator for the standard list order: newest creation first, with the
/// id as a tiebreaker so equal timestamps still sort deterministically.
pub fn newest_first(a: &Task, b: &Task) -> std::cmp::Ordering {
    b.created_at
        .cmp(&a.created_at)
        .then_with(|| b.id.cmp(&a.id))
}

/// Input for creating a new task
///
/// Callers supply already-validated fields; the store assigns the id and the
/// creation timestamp and initializes `done` and `deleted_at`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTask {
    /// Task title (non-blank, enforced upstream)
    pub title: String,

    /// Optional description
    pub description: Option<String>,

    /// Urgency axis
    pub priority: Priority,

    /// Importance axis
    pub importance: Importance,

    /// Optional date string
    pub deadline: Option<String>,
}

/// Input for a partial task update
///
/// `None` fields are left unchanged; set fields overwrite the stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTask {
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
