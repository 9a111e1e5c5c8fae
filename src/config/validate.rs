// src/config/validate.rs

use regex::Regex;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::dag::is_renderable;
use crate::errors::{GanttdagError, Result};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::GanttdagError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_schedule(cfg)?;
    validate_chart(cfg)?;
    validate_backlog_patterns(cfg)?;
    Ok(())
}

fn validate_schedule(cfg: &RawConfigFile) -> Result<()> {
    if !is_renderable(cfg.schedule.epoch) {
        return Err(GanttdagError::ConfigError(format!(
            "[schedule].epoch must have a four-digit year (got {})",
            cfg.schedule.epoch
        )));
    }
    Ok(())
}

fn validate_chart(cfg: &RawConfigFile) -> Result<()> {
    if cfg.chart.title.trim().is_empty() {
        return Err(GanttdagError::ConfigError(
            "[chart].title must not be empty".to_string(),
        ));
    }
    if cfg.chart.title.contains(['\n', '\r']) {
        return Err(GanttdagError::ConfigError(
            "[chart].title must be a single line".to_string(),
        ));
    }
    if cfg.chart.axis_format.trim().is_empty() {
        return Err(GanttdagError::ConfigError(
            "[chart].axis_format must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_backlog_patterns(cfg: &RawConfigFile) -> Result<()> {
    for (key, pattern) in [
        ("task_id_pattern", &cfg.backlog.task_id_pattern),
        ("assignee_pattern", &cfg.backlog.assignee_pattern),
    ] {
        if pattern.trim().is_empty() {
            return Err(GanttdagError::ConfigError(format!(
                "[backlog].{key} must not be empty"
            )));
        }
        Regex::new(pattern)?;
    }
    Ok(())
}
