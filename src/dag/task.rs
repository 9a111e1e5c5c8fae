// src/dag/task.rs

//! Input records consumed by the scheduler.

use serde::{Deserialize, Serialize};

use crate::dag::TaskId;

/// One task as delivered by the extraction front end.
///
/// ```json
/// { "id": "TASK-FE-002", "assignee": "A", "dependencies": ["TASK-FE-001"] }
/// ```
///
/// Older task lists name the assignee field `developer`; both are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: TaskId,

    #[serde(alias = "developer")]
    pub assignee: String,

    /// Ids that must finish before this task may start. May name ids that
    /// are not in the task list; the resolver reports those.
    #[serde(default)]
    pub dependencies: Vec<TaskId>,
}

impl TaskRecord {
    pub fn new(id: impl Into<TaskId>, assignee: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            assignee: assignee.into(),
            dependencies: Vec::new(),
        }
    }

    pub fn after(mut self, dep: impl Into<TaskId>) -> Self {
        self.dependencies.push(dep.into());
        self
    }
}
