// src/errors.rs

//! Crate-wide error types.
//!
//! Two kinds of failure belong to the scheduling core:
//! - [`StructuralError`]: the task list cannot form a graph (duplicate ids).
//! - [`UnresolvableError`]: resolution stalled; carries the stuck-task
//!   diagnostic.
//!
//! Everything else (config, IO, parsing) is wrapped by [`GanttdagError`].

use std::fmt;

use thiserror::Error;

use crate::dag::TaskId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructuralError {
    #[error("duplicate task id '{id}' (first at position {first}, again at position {duplicate})")]
    DuplicateTaskId {
        id: TaskId,
        first: usize,
        duplicate: usize,
    },

    #[error("task at position {position} has an empty id")]
    EmptyTaskId { position: usize },
}

/// Why a dependency of a stuck task never resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockReason {
    /// The id is not defined anywhere in the task list.
    Undefined,
    /// The dependency sits on a dependency cycle.
    Cyclic,
    /// The dependency is itself stuck behind an undefined id or a cycle.
    Blocked,
}

impl fmt::Display for BlockReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BlockReason::Undefined => "undefined",
            BlockReason::Cyclic => "cycle",
            BlockReason::Blocked => "blocked",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockedDependency {
    pub id: TaskId,
    pub reason: BlockReason,
}

/// One task that could not be scheduled, with the dependencies that held it back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StuckTask {
    pub id: TaskId,
    pub blocked_on: Vec<BlockedDependency>,
}

impl StuckTask {
    /// Ids of the unresolved dependencies, in declaration order.
    pub fn unresolved_ids(&self) -> impl Iterator<Item = &str> {
        self.blocked_on.iter().map(|b| b.id.as_str())
    }
}

/// Resolution stalled before every task received a date.
///
/// `stuck` is in original input order. `cycles` lists the members of every
/// dependency cycle found among the stuck tasks.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub struct UnresolvableError {
    pub stuck: Vec<StuckTask>,
    pub cycles: Vec<Vec<TaskId>>,
}

impl UnresolvableError {
    pub fn stuck_ids(&self) -> impl Iterator<Item = &str> {
        self.stuck.iter().map(|t| t.id.as_str())
    }

    pub fn find(&self, id: &str) -> Option<&StuckTask> {
        self.stuck.iter().find(|t| t.id == id)
    }
}

impl fmt::Display for UnresolvableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "could not resolve {} task(s):", self.stuck.len())?;
        for task in &self.stuck {
            write!(f, "\n  {} waiting on", task.id)?;
            for (i, dep) in task.blocked_on.iter().enumerate() {
                let sep = if i == 0 { " " } else { ", " };
                write!(f, "{sep}{} ({})", dep.id, dep.reason)?;
            }
        }
        for cycle in &self.cycles {
            write!(f, "\n  cycle among: {}", cycle.join(", "))?;
        }
        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum GanttdagError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid pattern: {0}")]
    PatternError(#[from] regex::Error),

    #[error("Invalid task list: {0}")]
    Structural(#[from] StructuralError),

    #[error("Unresolvable schedule: {0}")]
    Unresolvable(#[from] UnresolvableError),

    #[error("Date for task '{task_id}' falls outside the supported calendar")]
    DateOutOfRange { task_id: TaskId },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, GanttdagError>;
