#![allow(dead_code)]

use ganttdag::config::{ConfigFile, RawConfigFile};
use ganttdag::dag::{TaskGraph, TaskRecord};

/// Builder for an ordered task list.
///
/// ```ignore
/// let tasks = TaskListBuilder::new()
///     .task("A", "A", &[])
///     .task("B", "B", &["A"])
///     .build();
/// ```
#[derive(Debug, Default)]
pub struct TaskListBuilder {
    tasks: Vec<TaskRecord>,
}

impl TaskListBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn task(mut self, id: &str, assignee: &str, deps: &[&str]) -> Self {
        let record = deps
            .iter()
            .fold(TaskRecord::new(id, assignee), |record, dep| record.after(*dep));
        self.tasks.push(record);
        self
    }

    pub fn build(self) -> Vec<TaskRecord> {
        self.tasks
    }

    pub fn graph(self) -> TaskGraph {
        TaskGraph::new(self.tasks).expect("Failed to build task graph from builder")
    }
}

/// Builder for `ConfigFile` to simplify test setup.
#[derive(Debug, Default)]
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.config.chart.title = title.to_string();
        self
    }

    pub fn with_task_id_pattern(mut self, pattern: &str) -> Self {
        self.config.backlog.task_id_pattern = pattern.to_string();
        self
    }

    pub fn with_assignee_pattern(mut self, pattern: &str) -> Self {
        self.config.backlog.assignee_pattern = pattern.to_string();
        self
    }

    pub fn raw(self) -> RawConfigFile {
        self.config
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}
