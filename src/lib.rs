// src/lib.rs

pub mod backlog;
pub mod chart;
pub mod cli;
pub mod config;
pub mod dag;
pub mod errors;
pub mod fs;
pub mod lanes;
pub mod logging;
pub mod types;

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::{debug, info};

use crate::backlog::{BacklogParser, load_tasks, save_tasks};
use crate::chart::ChartOptions;
use crate::cli::{CliArgs, Command, ScheduleArgs};
use crate::config::{ConfigFile, load_or_default};
use crate::dag::{TaskGraph, TaskRecord, is_renderable, resolve_with};
use crate::errors::GanttdagError;
use crate::fs::{FileSystem, RealFileSystem};
use crate::lanes::{LaneGroup, sequence};
use crate::types::ResolveStrategy;

/// High-level entry point used by `main.rs`.
pub fn run(args: CliArgs) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_with_fs(args, &RealFileSystem, &mut out)
}

/// Run a command against the given filesystem, printing reports to `out`.
///
/// This wires together:
/// - config loading
/// - backlog extraction / task-list files
/// - resolution, lane grouping and chart output
pub fn run_with_fs(args: CliArgs, fs: &dyn FileSystem, out: &mut dyn Write) -> Result<()> {
    let cfg = load_or_default(fs, args.config.as_deref())?;

    match args.command {
        Command::Parse { backlog, output } => {
            let backlog = backlog.unwrap_or_else(|| cfg.paths.backlog.clone());
            let output = output.unwrap_or_else(|| cfg.paths.tasks.clone());

            let tasks = read_backlog(fs, &cfg, &backlog)?;
            save_tasks(fs, &output, &tasks)?;
            info!(tasks = tasks.len(), ?output, "task list written");
        }
        Command::Chart {
            tasks,
            output,
            schedule,
        } => {
            let tasks_path = tasks.unwrap_or_else(|| cfg.paths.tasks.clone());
            let output = output.unwrap_or_else(|| cfg.paths.chart.clone());
            let (epoch, strategy) = schedule_settings(&cfg, &schedule)?;

            let tasks = load_tasks(fs, &tasks_path)
                .with_context(|| format!("loading task list {:?}", tasks_path))?;
            let chart = render_chart(tasks, epoch, strategy, &ChartOptions::from(&cfg.chart))?;
            fs.write(&output, chart.as_bytes())?;
            info!(?output, "chart written");
        }
        Command::Build {
            backlog,
            output,
            schedule,
        } => {
            let backlog = backlog.unwrap_or_else(|| cfg.paths.backlog.clone());
            let output = output.unwrap_or_else(|| cfg.paths.chart.clone());
            let (epoch, strategy) = schedule_settings(&cfg, &schedule)?;

            let tasks = read_backlog(fs, &cfg, &backlog)?;
            let chart = render_chart(tasks, epoch, strategy, &ChartOptions::from(&cfg.chart))?;
            fs.write(&output, chart.as_bytes())?;
            info!(?output, "chart written");
        }
        Command::Check {
            tasks,
            json,
            schedule,
        } => {
            let tasks_path = tasks.unwrap_or_else(|| cfg.paths.tasks.clone());
            let (epoch, strategy) = schedule_settings(&cfg, &schedule)?;

            let tasks = load_tasks(fs, &tasks_path)
                .with_context(|| format!("loading task list {:?}", tasks_path))?;
            let lanes = schedule_tasks(tasks, epoch, strategy)?;

            if json {
                serde_json::to_writer_pretty(&mut *out, &lanes)?;
                writeln!(out)?;
            } else {
                print_schedule(out, epoch, &lanes)?;
            }
        }
    }

    Ok(())
}

/// Build the graph, resolve it and group the result into lanes.
///
/// Fails without a partial result on a structural or resolution error.
pub fn schedule_tasks(
    tasks: Vec<TaskRecord>,
    epoch: NaiveDate,
    strategy: ResolveStrategy,
) -> errors::Result<Vec<LaneGroup>> {
    let graph = TaskGraph::new(tasks)?;
    let schedule = resolve_with(&graph, epoch, strategy)?;
    let lanes = sequence(&schedule, &graph);
    debug!(lanes = lanes.len(), "schedule grouped into lanes");
    Ok(lanes)
}

/// [`schedule_tasks`] followed by Mermaid rendering.
pub fn render_chart(
    tasks: Vec<TaskRecord>,
    epoch: NaiveDate,
    strategy: ResolveStrategy,
    options: &ChartOptions,
) -> errors::Result<String> {
    let lanes = schedule_tasks(tasks, epoch, strategy)?;
    Ok(chart::render(&lanes, options))
}

fn read_backlog(fs: &dyn FileSystem, cfg: &ConfigFile, path: &Path) -> Result<Vec<TaskRecord>> {
    let text = fs
        .read_to_string(path)
        .with_context(|| format!("reading backlog {:?}", path))?;
    let parser = BacklogParser::new(&cfg.backlog)?;
    Ok(parser.parse(&text))
}

/// Epoch and strategy with CLI overrides applied.
fn schedule_settings(
    cfg: &ConfigFile,
    args: &ScheduleArgs,
) -> errors::Result<(NaiveDate, ResolveStrategy)> {
    let epoch = args.epoch.unwrap_or(cfg.schedule.epoch);
    if !is_renderable(epoch) {
        return Err(GanttdagError::ConfigError(format!(
            "--epoch must have a four-digit year (got {epoch})"
        )));
    }
    Ok((epoch, args.strategy.unwrap_or(cfg.schedule.strategy)))
}

/// Plain-text schedule report for `check`.
fn print_schedule(out: &mut dyn Write, epoch: NaiveDate, lanes: &[LaneGroup]) -> Result<()> {
    let total: usize = lanes.iter().map(|l| l.entries.len()).sum();
    writeln!(out, "schedule (epoch {epoch}, {total} tasks)")?;

    for group in lanes {
        writeln!(out)?;
        writeln!(out, "{}:", group.lane)?;
        for entry in &group.entries {
            writeln!(
                out,
                "  {}  {} ({})",
                entry.start_date, entry.task_id, entry.assignee
            )?;
        }
    }

    Ok(())
}
