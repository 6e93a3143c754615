/// Data models for eisentask
///
/// # Models
///
/// - `task`: the Task record plus its classification enums (priority,
///   importance) and the create/update input structs
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
///     deadline: None,
/// };
/// ```

pub mod task;
