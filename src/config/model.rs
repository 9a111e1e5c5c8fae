// src/config/model.rs

use std::path::PathBuf;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::types::ResolveStrategy;

/// Configuration as read from `Ganttdag.toml`, before validation.
///
/// ```toml
/// [schedule]
/// epoch = "2024-01-01"
/// strategy = "fixed-point"
///
/// [chart]
/// title = "Frontend Development Gantt Chart"
/// axis_format = "%Y-%m-%d"
///
/// [backlog]
/// task_id_pattern = 'TASK-FE-\d{3}'
/// assignee_pattern = '[A-C]|All'
///
/// [paths]
/// backlog = "frontend/FRONTEND_BACKLOG.md"
/// tasks = "parsed_tasks.json"
/// chart = "gantt_chart.mmd"
/// ```
///
/// All sections are optional and have reasonable defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfigFile {
    #[serde(default)]
    pub schedule: ScheduleSection,

    #[serde(default)]
    pub chart: ChartSection,

    #[serde(default)]
    pub backlog: BacklogSection,

    #[serde(default)]
    pub paths: PathsSection,
}

/// Validated configuration. Build it through `TryFrom<RawConfigFile>`.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub schedule: ScheduleSection,
    pub chart: ChartSection,
    pub backlog: BacklogSection,
    pub paths: PathsSection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(raw: RawConfigFile) -> Self {
        Self {
            schedule: raw.schedule,
            chart: raw.chart,
            backlog: raw.backlog,
            paths: raw.paths,
        }
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self::new_unchecked(RawConfigFile::default())
    }
}

/// `[schedule]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleSection {
    /// Start date of every task without dependencies.
    #[serde(default = "default_epoch")]
    pub epoch: NaiveDate,

    #[serde(default)]
    pub strategy: ResolveStrategy,
}

pub fn default_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default()
}

impl Default for ScheduleSection {
    fn default() -> Self {
        Self {
            epoch: default_epoch(),
            strategy: ResolveStrategy::default(),
        }
    }
}

/// `[chart]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartSection {
    #[serde(default = "default_title")]
    pub title: String,

    /// Mermaid `axisFormat` value.
    #[serde(default = "default_axis_format")]
    pub axis_format: String,
}

fn default_title() -> String {
    "Frontend Development Gantt Chart".to_string()
}

fn default_axis_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for ChartSection {
    fn default() -> Self {
        Self {
            title: default_title(),
            axis_format: default_axis_format(),
        }
    }
}

/// `[backlog]` section: regexes used to pick tasks out of a Markdown backlog.
#[derive(Debug, Clone, Deserialize)]
pub struct BacklogSection {
    /// Matches one task id, both in headers and in "Depends on" lines.
    #[serde(default = "default_task_id_pattern")]
    pub task_id_pattern: String,

    /// Matches the assignee inside the parentheses of a task header.
    #[serde(default = "default_assignee_pattern")]
    pub assignee_pattern: String,
}

fn default_task_id_pattern() -> String {
    r"TASK-FE-\d{3}".to_string()
}

fn default_assignee_pattern() -> String {
    "[A-C]|All".to_string()
}

impl Default for BacklogSection {
    fn default() -> Self {
        Self {
            task_id_pattern: default_task_id_pattern(),
            assignee_pattern: default_assignee_pattern(),
        }
    }
}

/// `[paths]` section. CLI flags take precedence.
#[derive(Debug, Clone, Deserialize)]
pub struct PathsSection {
    #[serde(default = "default_backlog_path")]
    pub backlog: PathBuf,

    #[serde(default = "default_tasks_path")]
    pub tasks: PathBuf,

    #[serde(default = "default_chart_path")]
    pub chart: PathBuf,
}

fn default_backlog_path() -> PathBuf {
    PathBuf::from("frontend/FRONTEND_BACKLOG.md")
}

fn default_tasks_path() -> PathBuf {
    PathBuf::from("parsed_tasks.json")
}

fn default_chart_path() -> PathBuf {
    PathBuf::from("gantt_chart.mmd")
}

impl Default for PathsSection {
    fn default() -> Self {
        Self {
            backlog: default_backlog_path(),
            tasks: default_tasks_path(),
            chart: default_chart_path(),
        }
    }
}
