// src/dag/parallel.rs

//! Component-parallel resolution.
//!
//! Weakly connected components share no edges, so each one resolves on its
//! own thread into a private schedule. The private schedules have disjoint
//! keys and are folded together afterwards; stuck diagnostics are merged
//! back into input order so the result matches the sequential resolvers.

use chrono::NaiveDate;
use rayon::prelude::*;
use tracing::debug;

use crate::dag::graph::TaskGraph;
use crate::dag::ready_queue::resolve_ready_queue;
use crate::dag::schedule::Schedule;
use crate::errors::{GanttdagError, Result, UnresolvableError};

pub fn resolve_parallel(graph: &TaskGraph, epoch: NaiveDate) -> Result<Schedule> {
    let components = graph.components();
    debug!(components = components.len(), "resolving components in parallel");

    let results: Vec<Result<Schedule>> = components
        .par_iter()
        .map(|ids| resolve_ready_queue(&graph.subgraph(ids), epoch))
        .collect();

    let mut schedule = Schedule::new(epoch);
    let mut stuck = Vec::new();
    let mut cycles = Vec::new();

    for result in results {
        match result {
            Ok(part) => schedule.absorb(part),
            Err(GanttdagError::Unresolvable(err)) => {
                stuck.extend(err.stuck);
                cycles.extend(err.cycles);
            }
            Err(other) => return Err(other),
        }
    }

    if stuck.is_empty() {
        return Ok(schedule);
    }

    stuck.sort_by_key(|t| graph.position_of(&t.id));
    cycles.sort_by_key(|c: &Vec<String>| c.first().and_then(|id| graph.position_of(id)));
    Err(UnresolvableError { stuck, cycles }.into())
}
