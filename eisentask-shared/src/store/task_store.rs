/// File-backed task repository
///
/// Persists each user's tasks as one pretty-printed JSON file under a fixed
/// data directory (`<data_dir>/<user_id>.json`). Every mutation rewrites the
/// owning user's file through a temp-file-and-rename step before returning,
/// so acknowledged writes are on disk.
///
/// # Caching and serialization
///
/// The store keeps a per-user cell holding the parsed task list. A cell is
/// loaded lazily on first access, so repeated reads never re-parse the file.
/// Mutations stage a new list and install it in the cell only after the file
/// write succeeds; a rejected operation leaves both the file and the cache on
/// the last durable state. All operations for one user run under that user's
/// cell mutex, which makes the duplicate check-then-insert sequence atomic
/// per user. Operations for different users do not contend.
///
/// User ids are used as file names; callers must only pass ids that have
/// cleared the transport layer's charset check.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use eisentask_shared::clock::SystemClock;
/// use eisentask_shared::models::task::{CreateTask, Priority, Importance};
/// use eisentask_shared::store::task_store::{StoreConfig, TaskStore};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let store = TaskStore::open(StoreConfig::default(), Arc::new(SystemClock)).await?;
///
/// let task = store
///     .create(
///         "web-7f3b",
///         CreateTask {
///             title: "Finish report".to_string(),
///             description: None,
///             priority: Priority::Urgent,
///             importance: Importance::Important,
///             deadline: None,
///         },
///     )
///     .await?;
///
/// let active = store.list_active("web-7f3b").await?;
/// assert_eq!(active[0].id, task.id);
/// # Ok(())
/// # }
/// ```
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::{FixedOffset, Offset, Utc};
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use crate::archive::{archive_cutoff, is_archived};
use crate::clock::Clock;
use crate::models::task::{newest_first, CreateTask, Task, UpdateTask};

/// Errors from task store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// An active, not-done task already occupies the same (title, quadrant)
    #[error("A task with title \"{title}\" already exists in the same quadrant.")]
    DuplicateTask {
        /// Title of the rejected task
        title: String,
    },

    /// No active task with the requested id exists for this user
    #[error("Task not found")]
    NotFound,

    /// Filesystem failure under the data directory
    #[error("task storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A user file exists but does not parse as a task list
    #[error("task file {path} is corrupt: {source}")]
    Corrupt {
        /// Path of the unreadable file
        path: PathBuf,
        /// Underlying parse error
        #[source]
        source: serde_json::Error,
    },

    /// A task list could not be encoded for persistence
    #[error("failed to encode task data: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Result alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Task store configuration
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory holding one JSON file per user
    pub data_dir: PathBuf,

    /// Timezone used for the archive day boundary
    pub utc_offset: FixedOffset,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            utc_offset: Utc.fix(),
        }
    }
}

/// Cached state for one user
#[derive(Debug, Default)]
struct UserCell {
    /// Parsed task list; None until the file has been read once
    tasks: Option<Vec<Task>>,
}

/// File-backed task store with a per-user cache
pub struct TaskStore {
    data_dir: PathBuf,
    utc_offset: FixedOffset,
    clock: Arc<dyn Clock>,
    cells: RwLock<HashMap<String, Arc<Mutex<UserCell>>>>,
}

impl TaskStore {
    /// Opens the store, creating the data directory if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the directory cannot be created.
    pub async fn open(config: StoreConfig, clock: Arc<dyn Clock>) -> StoreResult<Self> {
        tokio::fs::create_dir_all(&config.data_dir).await?;
        tracing::info!(data_dir = %config.data_dir.display(), "task store opened");

        Ok(Self {
            data_dir: config.data_dir,
            utc_offset: config.utc_offset,
            clock,
            cells: RwLock::new(HashMap::new()),
        })
    }

    /// Lists a user's active tasks (not soft-deleted), newest first.
    pub async fn list_active(&self, user_id: &str) -> StoreResult<Vec<Task>> {
        let cell = self.cell(user_id).await;
        let mut guard = cell.lock().await;
        let tasks = self.load(&mut guard, user_id).await?;

        let mut active: Vec<Task> = tasks.iter().filter(|t| !t.is_deleted()).cloned().collect();
        active.sort_by(newest_first);

        tracing::debug!(user_id = %user_id, count = active.len(), "listed active tasks");
        Ok(active)
    }

    /// Lists a user's archived view, newest first: active tasks that are
    /// done, or that were created strictly before yesterday's local
    /// midnight. Read-only; membership changes as the clock moves.
    pub async fn list_archived(&self, user_id: &str) -> StoreResult<Vec<Task>> {
        let cutoff = archive_cutoff(self.clock.now_utc(), self.utc_offset);

        let cell = self.cell(user_id).await;
        let mut guard = cell.lock().await;
        let tasks = self.load(&mut guard, user_id).await?;

        let mut archived: Vec<Task> = tasks
            .iter()
            .filter(|t| !t.is_deleted() && is_archived(t, cutoff))
            .cloned()
            .collect();
        archived.sort_by(newest_first);

        tracing::debug!(user_id = %user_id, count = archived.len(), "listed archived tasks");
        Ok(archived)
    }

    /// Creates a task for a user.
    ///
    /// Rejects the creation with `StoreError::DuplicateTask` when an active,
    /// not-done task already has the same title (case-insensitive), priority,
    /// and importance. Assigns the id and creation timestamp, persists, and
    /// returns the stored record.
    ///
    /// # Errors
    ///
    /// - `StoreError::DuplicateTask` on a quadrant-scoped title collision
    /// - `StoreError::Io` / `StoreError::Encode` on persistence failures
    pub async fn create(&self, user_id: &str, fields: CreateTask) -> StoreResult<Task> {
        let cell = self.cell(user_id).await;
        let mut guard = cell.lock().await;
        let tasks = self.load(&mut guard, user_id).await?;

        let title_lower = fields.title.to_lowercase();
        let duplicate = tasks.iter().any(|t| {
            !t.is_deleted()
                && !t.done
                && t.priority == fields.priority
                && t.importance == fields.importance
                && t.title.to_lowercase() == title_lower
        });
        if duplicate {
            tracing::warn!(user_id = %user_id, title = %fields.title, "duplicate task rejected");
            return Err(StoreError::DuplicateTask {
                title: fields.title,
            });
        }

        let task = Task {
            id: Uuid::new_v4(),
            user_id: user_id.to_string(),
            title: fields.title,
            description: fields.description,
            priority: fields.priority,
            importance: fields.importance,
            created_at: self.clock.now_utc(),
            deadline: fields.deadline,
            done: false,
            deleted_at: None,
        };

        let mut staged = tasks.to_vec();
        staged.push(task.clone());
        self.commit(&mut guard, user_id, staged).await?;

        tracing::info!(user_id = %user_id, task_id = %task.id, "task created");
        Ok(task)
    }

    /// Applies a partial update to one of a user's active tasks.
    ///
    /// `None` fields are left unchanged. The duplicate check does not run
    /// again here; only creation enforces it.
    ///
    /// # Errors
    ///
    /// - `StoreError::NotFound` if the id does not name an active task owned
    ///   by this user (soft-deleted tasks are not updatable)
    /// - `StoreError::Io` / `StoreError::Encode` on persistence failures
    pub async fn update(&self, user_id: &str, id: Uuid, fields: UpdateTask) -> StoreResult<Task> {
        let cell = self.cell(user_id).await;
        let mut guard = cell.lock().await;
        let mut staged = self.load(&mut guard, user_id).await?.to_vec();

        let task = staged
            .iter_mut()
            .find(|t| t.id == id && !t.is_deleted())
            .ok_or(StoreError::NotFound)?;

        if let Some(title) = fields.title {
            task.title = title;
        }
        if let Some(description) = fields.description {
            task.description = Some(description);
        }
        if let Some(priority) = fields.priority {
            task.priority = priority;
        }
        if let Some(importance) = fields.importance {
            task.importance = importance;
        }
        if let Some(deadline) = fields.deadline {
            task.deadline = Some(deadline);
        }
        if let Some(done) = fields.done {
            task.done = done;
        }

        let updated = task.clone();
        self.commit(&mut guard, user_id, staged).await?;

        tracing::info!(user_id = %user_id, task_id = %id, "task updated");
        Ok(updated)
    }

    /// Soft-deletes one of a user's active tasks by stamping `deleted_at`.
    /// The record stays in the file but disappears from every view. There is
    /// no undelete.
    ///
    /// # Errors
    ///
    /// - `StoreError::NotFound` if the id does not name an active task owned
    ///   by this user (a second delete of the same id also lands here)
    /// - `StoreError::Io` / `StoreError::Encode` on persistence failures
    pub async fn soft_delete(&self, user_id: &str, id: Uuid) -> StoreResult<()> {
        let cell = self.cell(user_id).await;
        let mut guard = cell.lock().await;
        let mut staged = self.load(&mut guard, user_id).await?.to_vec();

        let task = staged
            .iter_mut()
            .find(|t| t.id == id && !t.is_deleted())
            .ok_or(StoreError::NotFound)?;
        task.deleted_at = Some(self.clock.now_utc());

        self.commit(&mut guard, user_id, staged).await?;

        tracing::info!(user_id = %user_id, task_id = %id, "task soft-deleted");
        Ok(())
    }

    /// Fetches the cell for a user, creating it on first sight.
    async fn cell(&self, user_id: &str) -> Arc<Mutex<UserCell>> {
        {
            let cells = self.cells.read().await;
            if let Some(cell) = cells.get(user_id) {
                return cell.clone();
            }
        }

        let mut cells = self.cells.write().await;
        cells.entry(user_id.to_string()).or_default().clone()
    }

    /// Returns the cached task list, reading the user's file on first
    /// access. A missing file means the user has no tasks yet.
    async fn load<'a>(&self, cell: &'a mut UserCell, user_id: &str) -> StoreResult<&'a [Task]> {
        if cell.tasks.is_none() {
            let path = self.user_file(user_id);
            let tasks = match tokio::fs::read(&path).await {
                Ok(bytes) => serde_json::from_slice(&bytes)
                    .map_err(|source| StoreError::Corrupt { path, source })?,
                Err(e) if e.kind() == ErrorKind::NotFound => Vec::new(),
                Err(e) => return Err(StoreError::Io(e)),
            };
            tracing::debug!(user_id = %user_id, count = tasks.len(), "task file loaded");
            cell.tasks = Some(tasks);
        }

        Ok(cell.tasks.get_or_insert_with(Vec::new).as_slice())
    }

    /// Persists a staged task list and only then installs it as the cached
    /// state. After a failed write the cell still holds the last durable
    /// list.
    async fn commit(
        &self,
        cell: &mut UserCell,
        user_id: &str,
        staged: Vec<Task>,
    ) -> StoreResult<()> {
        self.persist(user_id, &staged).await?;
        cell.tasks = Some(staged);
        Ok(())
    }

    /// Rewrites the user's file from a staged list, via temp file and
    /// rename so a crash mid-write cannot truncate existing data. A temp
    /// file whose rename failed is removed rather than left behind.
    async fn persist(&self, user_id: &str, tasks: &[Task]) -> StoreResult<()> {
        let body = serde_json::to_vec_pretty(tasks).map_err(StoreError::Encode)?;
        let tmp = self.data_dir.join(format!("{user_id}.json.tmp"));

        tokio::fs::write(&tmp, &body).await?;
        if let Err(err) = tokio::fs::rename(&tmp, self.user_file(user_id)).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(StoreError::Io(err));
        }
        Ok(())
    }

    fn user_file(&self, user_id: &str) -> PathBuf {
        self.data_dir.join(format!("{user_id}.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_config_default() {
        let config = StoreConfig::default();
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.utc_offset.local_minus_utc(), 0);
    }

    #[test]
    fn test_duplicate_error_message_names_title() {
        let err = StoreError::DuplicateTask {
            title: "Finish report".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "A task with title \"Finish report\" already exists in the same quadrant."
        );
    }

    #[test]
    fn test_not_found_error_message() {
        assert_eq!(StoreError::NotFound.to_string(), "Task not found");
    }
}
