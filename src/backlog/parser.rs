// src/backlog/parser.rs

use regex::Regex;
use tracing::{debug, trace, warn};

use crate::config::BacklogSection;
use crate::dag::TaskRecord;
use crate::errors::Result;

/// Extracts task records from a Markdown backlog.
///
/// A task starts at a header bullet and owns the lines below it until the
/// next header:
///
/// ```markdown
/// *   **TASK-FE-002 (B):** Set up routing
///     *   **Depends on:** TASK-FE-001
/// ```
///
/// Every id found on a "Depends on" line becomes a dependency. A second
/// "Depends on" line for the same task replaces the first.
#[derive(Debug, Clone)]
pub struct BacklogParser {
    header: Regex,
    depends_on: Regex,
    task_id: Regex,
}

impl BacklogParser {
    pub fn new(patterns: &BacklogSection) -> Result<Self> {
        let header = Regex::new(&format!(
            r"^\*\s+\*\*(?P<id>{})\s+\((?P<assignee>{})\):\*\*\s*(?P<title>.*)",
            patterns.task_id_pattern, patterns.assignee_pattern
        ))?;
        let depends_on = Regex::new(r"^\s+\*\s+\*\*Depends on:\*\*\s*(?P<rest>.*)")?;
        let task_id = Regex::new(&format!("(?:{})", patterns.task_id_pattern))?;

        Ok(Self {
            header,
            depends_on,
            task_id,
        })
    }

    pub fn parse(&self, text: &str) -> Vec<TaskRecord> {
        let mut tasks = Vec::new();
        let mut current: Option<TaskRecord> = None;

        for (line_no, line) in text.lines().enumerate() {
            if let Some(caps) = self.header.captures(line) {
                if let Some(done) = current.take() {
                    tasks.push(done);
                }
                trace!(
                    line = line_no + 1,
                    id = &caps["id"],
                    title = caps["title"].trim(),
                    "task header"
                );
                current = Some(TaskRecord::new(&caps["id"], &caps["assignee"]));
            } else if let Some(task) = current.as_mut() {
                if let Some(caps) = self.depends_on.captures(line) {
                    task.dependencies = self
                        .task_id
                        .find_iter(&caps["rest"])
                        .map(|m| m.as_str().to_string())
                        .collect();
                }
            }
        }

        if let Some(done) = current.take() {
            tasks.push(done);
        }

        if tasks.is_empty() {
            warn!("no tasks were extracted from the backlog; review the patterns and file content");
        } else {
            debug!(tasks = tasks.len(), "extracted tasks from backlog");
        }

        tasks
    }
}
