// src/config/loader.rs

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{GanttdagError, Result};
use crate::fs::FileSystem;

/// Load a configuration file and return the raw `RawConfigFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation. Use [`load_and_validate`] for that.
pub fn load_from_path(fs: &dyn FileSystem, path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let contents = fs.read_to_string(path.as_ref())?;
    let config: RawConfigFile = toml::from_str(&contents)?;
    Ok(config)
}

/// Load a configuration file from path and validate it.
///
/// - Reads TOML.
/// - Applies defaults (handled by `serde` + `Default` impls).
/// - Checks the epoch, chart settings and backlog patterns.
pub fn load_and_validate(fs: &dyn FileSystem, path: impl AsRef<Path>) -> Result<ConfigFile> {
    let raw_config = load_from_path(fs, &path)?;
    ConfigFile::try_from(raw_config)
}

/// Resolve the configuration for a run.
///
/// An explicitly requested file must exist. Without one, `Ganttdag.toml` is
/// used when present and built-in defaults otherwise.
pub fn load_or_default(fs: &dyn FileSystem, explicit: Option<&Path>) -> Result<ConfigFile> {
    if let Some(path) = explicit {
        if !fs.exists(path) {
            return Err(GanttdagError::ConfigError(format!(
                "config file {:?} does not exist",
                path
            )));
        }
        return load_and_validate(fs, path);
    }

    let path = default_config_path();
    if fs.exists(&path) {
        debug!(?path, "loading default config file");
        load_and_validate(fs, &path)
    } else {
        debug!("no config file found; using defaults");
        Ok(ConfigFile::default())
    }
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("Ganttdag.toml")
}
