// src/backlog/mod.rs

//! Task extraction front end.
//!
//! [`parser`] reads a Markdown backlog; [`task_file`] stores the extracted
//! task list as JSON so the two halves of the pipeline can run separately.

pub mod parser;
pub mod task_file;

pub use parser::BacklogParser;
pub use task_file::{load_tasks, save_tasks};
