/// Eisenhower matrix views
///
/// Derives the four-quadrant layout from a user's active task list. Done
/// tasks never appear in the matrix; they live in the separate completed
/// view.
///
/// # Example
///
/// ```no_run
/// use eisentask_shared::matrix::{quadrant_tasks, Quadrant};
/// # let tasks = Vec::new();
///
/// let view = quadrant_tasks(&tasks);
/// for quadrant in Quadrant::ALL {
///     println!("{}: {} task(s)", quadrant.label(), view.get(quadrant).len());
/// }
/// ```
use serde::Serialize;

use crate::models::task::{newest_first, Importance, Priority, Task};

/// One cell of the Eisenhower matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// Urgent and important
    DoFirst,

    /// Important but not urgent
    Schedule,

    /// Urgent but not important
    Delegate,

    /// Neither urgent nor important
    Eliminate,
}

impl Quadrant {
    /// All quadrants in display order
    pub const ALL: [Quadrant; 4] = [
        Quadrant::DoFirst,
        Quadrant::Schedule,
        Quadrant::Delegate,
        Quadrant::Eliminate,
    ];

    /// The quadrant a (priority, importance) pair falls into
    pub fn from_parts(priority: Priority, importance: Importance) -> Self {
        match (priority, importance) {
            (Priority::Urgent, Importance::Important) => Quadrant::DoFirst,
            (Priority::NotUrgent, Importance::Important) => Quadrant::Schedule,
            (Priority::Urgent, Importance::NotImportant) => Quadrant::Delegate,
            (Priority::NotUrgent, Importance::NotImportant) => Quadrant::Eliminate,
        }
    }

    /// Stable key used in serialized views
    pub fn key(&self) -> &'static str {
        match self {
            Quadrant::DoFirst => "urgent-important",
            Quadrant::Schedule => "not-urgent-important",
            Quadrant::Delegate => "urgent-not-important",
            Quadrant::Eliminate => "not-urgent-not-important",
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Quadrant::DoFirst => "Do First",
            Quadrant::Schedule => "Schedule",
            Quadrant::Delegate => "Delegate",
            Quadrant::Eliminate => "Eliminate",
        }
    }
}

/// Active tasks partitioned by quadrant, each bucket newest first
#[derive(Debug, Clone, Default, Serialize)]
pub struct MatrixView {
    /// Urgent and important
    #[serde(rename = "urgent-important")]
    pub do_first: Vec<Task>,

    /// Important but not urgent
    #[serde(rename = "not-urgent-important")]
    pub schedule: Vec<Task>,

    /// Urgent but not important
    #[serde(rename = "urgent-not-important")]
    pub delegate: Vec<Task>,

    /// Neither urgent nor important
    #[serde(rename = "not-urgent-not-important")]
    pub eliminate: Vec<Task>,
}

impl MatrixView {
    /// Tasks in one quadrant
    pub fn get(&self, quadrant: Quadrant) -> &[Task] {
        match quadrant {
            Quadrant::DoFirst => &self.do_first,
            Quadrant::Schedule => &self.schedule,
            Quadrant::Delegate => &self.delegate,
            Quadrant::Eliminate => &self.eliminate,
        }
    }

    fn bucket_mut(&mut self, quadrant: Quadrant) -> &mut Vec<Task> {
        match quadrant {
            Quadrant::DoFirst => &mut self.do_first,
            Quadrant::Schedule => &mut self.schedule,
            Quadrant::Delegate => &mut self.delegate,
            Quadrant::Eliminate => &mut self.eliminate,
        }
    }
}

/// Partitions an active task list into the four quadrants.
///
/// Done tasks are skipped entirely. Each bucket is sorted by creation time,
/// newest first. Expects an already-active list (no soft-deleted entries),
/// such as the output of `TaskStore::list_active`.
pub fn quadrant_tasks(tasks: &[Task]) -> MatrixView {
    let mut view = MatrixView::default();

    for task in tasks.iter().filter(|t| !t.done) {
        let quadrant = Quadrant::from_parts(task.priority, task.importance);
        view.bucket_mut(quadrant).push(task.clone());
    }

    for quadrant in Quadrant::ALL {
        view.bucket_mut(quadrant).sort_by(newest_first);
    }

    view
}

/// The completed view: done tasks only, input order preserved
pub fn completed_tasks(tasks: &[Task]) -> Vec<Task> {
    tasks.iter().filter(|t| t.done).cloned().collect()
}
