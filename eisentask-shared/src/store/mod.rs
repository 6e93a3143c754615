/// Persistence layer for eisentask
///
/// # Modules
///
/// - `task_store`: file-backed per-user task repository with an in-memory
///   cache and per-user write serialization
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use eisentask_shared::clock::SystemClock;
/// use eisentask_shared::store::task_store::{StoreConfig, TaskStore};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let store = TaskStore::open(StoreConfig::default(), Arc::new(SystemClock)).await?;
/// let tasks = store.list_active("web-7f3b").await?;
/// # Ok(())
/// # }
/// ```

pub mod task_store;
