// src/chart/mod.rs

//! Timeline chart output.
//!
//! The only format is Mermaid's `gantt` syntax, see [`mermaid`].

pub mod mermaid;

pub use mermaid::render;

use crate::config::ChartSection;

/// Presentation settings for a rendered chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartOptions {
    pub title: String,
    /// Mermaid axis tick format, e.g. `%Y-%m-%d`.
    pub axis_format: String,
}

impl From<&ChartSection> for ChartOptions {
    fn from(section: &ChartSection) -> Self {
        Self {
            title: section.title.clone(),
            axis_format: section.axis_format.clone(),
        }
    }
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self::from(&ChartSection::default())
    }
}
