// src/dag/diagnose.rs

//! Stuck-set diagnostics shared by every resolution strategy.

use std::collections::HashSet;

use petgraph::algo::tarjan_scc;
use petgraph::graphmap::DiGraphMap;

use crate::dag::TaskId;
use crate::dag::graph::TaskGraph;
use crate::dag::schedule::Schedule;
use crate::errors::{BlockReason, BlockedDependency, StuckTask, UnresolvableError};

/// Describe every task of `graph` that `schedule` left unresolved.
///
/// The result depends only on which tasks are unresolved, never on how the
/// resolver got there.
pub(crate) fn diagnose(graph: &TaskGraph, schedule: &Schedule) -> UnresolvableError {
    let stuck_ids: Vec<&str> = graph
        .all_task_ids()
        .filter(|id| !schedule.contains(id))
        .collect();

    let cycles = find_cycles(graph, &stuck_ids);
    let cyclic: HashSet<&str> = cycles.iter().flatten().map(|s| s.as_str()).collect();

    let stuck = stuck_ids
        .iter()
        .map(|id| {
            let blocked_on = graph
                .dependencies_of(id)
                .iter()
                .filter(|dep| !schedule.contains(dep))
                .map(|dep| BlockedDependency {
                    id: dep.clone(),
                    reason: if !graph.contains(dep) {
                        BlockReason::Undefined
                    } else if cyclic.contains(dep.as_str()) {
                        BlockReason::Cyclic
                    } else {
                        BlockReason::Blocked
                    },
                })
                .collect();
            StuckTask {
                id: id.to_string(),
                blocked_on,
            }
        })
        .collect();

    UnresolvableError { stuck, cycles }
}

/// Strongly connected components among the stuck tasks that form a cycle.
fn find_cycles(graph: &TaskGraph, stuck_ids: &[&str]) -> Vec<Vec<TaskId>> {
    // Edge direction: task -> dependency.
    let mut stuck_graph: DiGraphMap<&str, ()> = DiGraphMap::new();
    for id in stuck_ids {
        stuck_graph.add_node(*id);
    }
    for id in stuck_ids {
        for dep in graph.dependencies_of(id) {
            if stuck_graph.contains_node(dep.as_str()) {
                stuck_graph.add_edge(*id, dep.as_str(), ());
            }
        }
    }

    let mut cycles: Vec<Vec<TaskId>> = tarjan_scc(&stuck_graph)
        .into_iter()
        .filter(|scc| scc.len() > 1 || stuck_graph.contains_edge(scc[0], scc[0]))
        .map(|mut scc| {
            scc.sort_by_key(|id| graph.position_of(id));
            scc.into_iter().map(str::to_string).collect()
        })
        .collect();

    cycles.sort_by_key(|cycle| cycle.first().and_then(|id| graph.position_of(id)));
    cycles
}
