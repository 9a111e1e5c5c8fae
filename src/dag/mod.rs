// src/dag/mod.rs

//! Task graph and date resolution.
//!
//! - [`graph`] holds the immutable task graph built from the input list.
//! - [`schedule`] holds the resolved dates, separate from the graph.
//! - [`resolver`] is the fixed-point resolver; [`ready_queue`] and
//!   [`parallel`] are faster strategies with identical results.

pub mod graph;
pub mod parallel;
pub mod ready_queue;
pub mod resolver;
pub mod schedule;
pub mod task;

mod diagnose;

use chrono::NaiveDate;
use tracing::info;

use crate::errors::Result;
use crate::types::ResolveStrategy;

pub use graph::TaskGraph;
pub use parallel::resolve_parallel;
pub use ready_queue::resolve_ready_queue;
pub use resolver::resolve;
pub use schedule::{
    MAX_RENDERABLE_YEAR, Schedule, ScheduleEntry, TASK_DURATION_DAYS, is_renderable,
};
pub use task::TaskRecord;

/// Canonical task id type.
pub type TaskId = String;

/// Resolve `graph` with the given strategy.
pub fn resolve_with(
    graph: &TaskGraph,
    epoch: NaiveDate,
    strategy: ResolveStrategy,
) -> Result<Schedule> {
    info!(tasks = graph.len(), %epoch, ?strategy, "resolving schedule");
    match strategy {
        ResolveStrategy::FixedPoint => resolve(graph, epoch),
        ResolveStrategy::ReadyQueue => resolve_ready_queue(graph, epoch),
        ResolveStrategy::Parallel => resolve_parallel(graph, epoch),
    }
}
