// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::types::ResolveStrategy;

/// Command-line arguments for `ganttdag`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "ganttdag",
    version,
    about = "Schedule dependent one-day tasks and render them as a Gantt chart.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// If omitted, `Ganttdag.toml` is used when present, defaults otherwise.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `GANTTDAG_LOG` or a default level will be used.
    #[arg(long, global = true, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Extract tasks from a Markdown backlog into a JSON task list.
    Parse {
        /// Markdown backlog to read.
        #[arg(long, value_name = "PATH")]
        backlog: Option<PathBuf>,

        /// Where to write the JSON task list.
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Schedule a JSON task list and write a Mermaid Gantt chart.
    Chart {
        /// JSON task list to read.
        #[arg(long, value_name = "PATH")]
        tasks: Option<PathBuf>,

        /// Where to write the chart.
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,

        #[command(flatten)]
        schedule: ScheduleArgs,
    },

    /// Go straight from a Markdown backlog to a chart.
    Build {
        /// Markdown backlog to read.
        #[arg(long, value_name = "PATH")]
        backlog: Option<PathBuf>,

        /// Where to write the chart.
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,

        #[command(flatten)]
        schedule: ScheduleArgs,
    },

    /// Resolve a JSON task list and print the schedule, writing nothing.
    Check {
        /// JSON task list to read.
        #[arg(long, value_name = "PATH")]
        tasks: Option<PathBuf>,

        /// Print the lane-grouped schedule as JSON.
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        schedule: ScheduleArgs,
    },
}

/// Overrides for the `[schedule]` config section.
#[derive(Debug, Clone, Default, Args)]
pub struct ScheduleArgs {
    /// Project start date (YYYY-MM-DD).
    #[arg(long, value_name = "DATE")]
    pub epoch: Option<NaiveDate>,

    /// Resolution strategy.
    #[arg(long, value_enum, value_name = "STRATEGY")]
    pub strategy: Option<ResolveStrategy>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
