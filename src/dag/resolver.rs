// src/dag/resolver.rs

//! Fixed-point date resolver.
//!
//! Passes over the unresolved tasks in input order. A task resolves once
//! every dependency has a date; it starts on the epoch when it has no
//! dependencies, otherwise the day after its latest dependency ends. A pass
//! that resolves nothing is the fixed point: whatever is left is reported
//! as stuck.

use chrono::NaiveDate;
use tracing::{debug, trace};

use crate::dag::diagnose::diagnose;
use crate::dag::graph::TaskGraph;
use crate::dag::schedule::{Schedule, ScheduleEntry, day_after};
use crate::errors::Result;

/// Resolve every task of `graph`, or fail with the stuck-task diagnostic.
pub fn resolve(graph: &TaskGraph, epoch: NaiveDate) -> Result<Schedule> {
    let mut schedule = Schedule::new(epoch);
    let mut unresolved: Vec<&str> = graph.all_task_ids().collect();
    let mut pass = 0usize;

    while !unresolved.is_empty() {
        pass += 1;
        let resolved_before = schedule.len();
        let mut remaining = Vec::with_capacity(unresolved.len());

        for id in unresolved {
            match try_resolve(graph, &schedule, id)? {
                Some(entry) => {
                    trace!(task = %id, start = %entry.start_date, pass, "resolved task");
                    schedule.record(entry);
                }
                None => remaining.push(id),
            }
        }

        debug!(
            pass,
            resolved = schedule.len() - resolved_before,
            remaining = remaining.len(),
            "resolver pass complete"
        );

        if schedule.len() == resolved_before {
            let err = diagnose(graph, &schedule);
            debug!(stuck = err.stuck.len(), "resolver reached a fixed point with stuck tasks");
            return Err(err.into());
        }

        unresolved = remaining;
    }

    Ok(schedule)
}

/// Entry for `id` if all of its dependencies already have dates.
pub(crate) fn try_resolve(
    graph: &TaskGraph,
    schedule: &Schedule,
    id: &str,
) -> Result<Option<ScheduleEntry>> {
    let mut latest_end: Option<NaiveDate> = None;

    for dep in graph.dependencies_of(id) {
        match schedule.end_date_of(dep) {
            Some(end) => latest_end = latest_end.max(Some(end)),
            None => return Ok(None),
        }
    }

    let start = match latest_end {
        Some(end) => day_after(end, id)?,
        None => schedule.epoch(),
    };

    ScheduleEntry::starting(id, start).map(Some)
}
