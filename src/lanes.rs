// src/lanes.rs

//! Lane grouping and presentation order.
//!
//! A pure view over a [`Schedule`]: entries are sorted by start date, ties
//! broken by input position, then partitioned into lanes. No dates are
//! computed here.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::warn;

use crate::dag::{Schedule, TaskGraph, TaskId};
use crate::types::Lane;

/// A schedule entry joined with the task's assignee, ready for output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SequencedEntry {
    pub task_id: TaskId,
    pub assignee: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// All entries of one lane, in presentation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaneGroup {
    pub lane: Lane,
    pub entries: Vec<SequencedEntry>,
}

/// Group `schedule` into lanes.
///
/// Lanes come out in [`Lane::PRESENTATION_ORDER`]; empty lanes are left out.
pub fn sequence(schedule: &Schedule, graph: &TaskGraph) -> Vec<LaneGroup> {
    let mut ordered: Vec<(usize, SequencedEntry)> = Vec::with_capacity(schedule.len());

    for entry in schedule.iter() {
        let (Some(position), Some(assignee)) = (
            graph.position_of(&entry.task_id),
            graph.assignee_of(&entry.task_id),
        ) else {
            warn!(task = %entry.task_id, "scheduled task missing from graph; skipping");
            continue;
        };

        ordered.push((
            position,
            SequencedEntry {
                task_id: entry.task_id.clone(),
                assignee: assignee.to_string(),
                start_date: entry.start_date,
                end_date: entry.end_date,
            },
        ));
    }

    ordered.sort_by_key(|(position, entry)| (entry.start_date, *position));

    let mut lanes: BTreeMap<Lane, Vec<SequencedEntry>> = BTreeMap::new();
    for (_, entry) in ordered {
        lanes
            .entry(Lane::of(&entry.assignee))
            .or_default()
            .push(entry);
    }

    lanes
        .into_iter()
        .map(|(lane, entries)| LaneGroup { lane, entries })
        .collect()
}
