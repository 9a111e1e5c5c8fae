// src/config/mod.rs

//! Configuration loading and validation for ganttdag.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file, falling back to defaults (`loader.rs`).
//! - Validate settings that serde cannot check (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path, load_or_default};
pub use model::{
    BacklogSection, ChartSection, ConfigFile, PathsSection, RawConfigFile, ScheduleSection,
};
