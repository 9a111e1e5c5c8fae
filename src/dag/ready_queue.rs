// src/dag/ready_queue.rs

//! Dependency-count resolver.
//!
//! Each task tracks how many of its dependencies are still open; it enters
//! the ready queue when that count reaches zero. Tasks with an undefined
//! dependency never reach zero. Dates match [`resolve`](super::resolve)
//! exactly, in time linear in the number of edges.

use std::collections::{HashMap, VecDeque};

use chrono::NaiveDate;
use tracing::{debug, trace};

use crate::dag::diagnose::diagnose;
use crate::dag::graph::TaskGraph;
use crate::dag::resolver::try_resolve;
use crate::dag::schedule::Schedule;
use crate::errors::Result;

pub fn resolve_ready_queue(graph: &TaskGraph, epoch: NaiveDate) -> Result<Schedule> {
    let mut schedule = Schedule::new(epoch);
    let mut open_deps: HashMap<&str, usize> = HashMap::with_capacity(graph.len());
    let mut ready: VecDeque<&str> = VecDeque::new();

    for id in graph.all_task_ids() {
        let count = graph.dependencies_of(id).len();
        if count == 0 {
            ready.push_back(id);
        }
        open_deps.insert(id, count);
    }

    while let Some(id) = ready.pop_front() {
        let Some(entry) = try_resolve(graph, &schedule, id)? else {
            continue;
        };
        trace!(task = %id, start = %entry.start_date, "resolved task");
        schedule.record(entry);

        for dependent in graph.dependents_of(id) {
            if let Some(count) = open_deps.get_mut(dependent.as_str()) {
                *count -= 1;
                if *count == 0 {
                    ready.push_back(dependent.as_str());
                }
            }
        }
    }

    if schedule.len() < graph.len() {
        let err = diagnose(graph, &schedule);
        debug!(stuck = err.stuck.len(), "ready queue drained with stuck tasks");
        return Err(err.into());
    }

    Ok(schedule)
}
