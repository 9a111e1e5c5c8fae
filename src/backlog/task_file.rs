// src/backlog/task_file.rs

//! JSON task-list files passed between `parse` and `chart`.

use std::path::Path;

use crate::dag::TaskRecord;
use crate::errors::Result;
use crate::fs::FileSystem;

pub fn load_tasks(fs: &dyn FileSystem, path: &Path) -> Result<Vec<TaskRecord>> {
    let contents = fs.read_to_string(path)?;
    let tasks = serde_json::from_str(&contents)?;
    Ok(tasks)
}

/// Write tasks as a pretty-printed JSON array.
pub fn save_tasks(fs: &dyn FileSystem, path: &Path, tasks: &[TaskRecord]) -> Result<()> {
    let json = serde_json::to_string_pretty(tasks)?;
    fs.write(path, json.as_bytes())?;
    Ok(())
}
