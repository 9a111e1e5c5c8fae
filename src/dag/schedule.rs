// src/dag/schedule.rs

//! Resolved dates, kept apart from the graph they were derived from.

use std::collections::BTreeMap;

use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;

use crate::dag::TaskId;
use crate::errors::{GanttdagError, Result};

/// Every task occupies exactly this many calendar days.
pub const TASK_DURATION_DAYS: u64 = 1;

/// Last year whose dates still format as `YYYY-MM-DD`.
pub const MAX_RENDERABLE_YEAR: i32 = 9999;

/// Whether `date` formats as a plain `YYYY-MM-DD` string.
pub fn is_renderable(date: NaiveDate) -> bool {
    (0..=MAX_RENDERABLE_YEAR).contains(&date.year())
}

/// Resolved dates for one task.
///
/// With a one-day duration a task finishes on the day it starts, so
/// `end_date == start_date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleEntry {
    pub task_id: TaskId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl ScheduleEntry {
    /// Entry for a task that starts on `start_date`.
    pub fn starting(task_id: impl Into<TaskId>, start_date: NaiveDate) -> Result<Self> {
        let task_id = task_id.into();
        let end_date = add_days(start_date, TASK_DURATION_DAYS - 1, &task_id)?;
        Ok(Self {
            task_id,
            start_date,
            end_date,
        })
    }
}

/// The first day `task_id` may start once something ending on `end` is done.
pub(crate) fn day_after(end: NaiveDate, task_id: &str) -> Result<NaiveDate> {
    add_days(end, 1, task_id)
}

fn add_days(date: NaiveDate, days: u64, task_id: &str) -> Result<NaiveDate> {
    date.checked_add_days(Days::new(days))
        .filter(|d| is_renderable(*d))
        .ok_or_else(|| GanttdagError::DateOutOfRange {
            task_id: task_id.to_string(),
        })
}

/// Append-only map from task id to its resolved dates.
///
/// Each id is written at most once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schedule {
    epoch: NaiveDate,
    entries: BTreeMap<TaskId, ScheduleEntry>,
}

impl Schedule {
    pub fn new(epoch: NaiveDate) -> Self {
        Self {
            epoch,
            entries: BTreeMap::new(),
        }
    }

    pub fn epoch(&self) -> NaiveDate {
        self.epoch
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&ScheduleEntry> {
        self.entries.get(id)
    }

    pub fn end_date_of(&self, id: &str) -> Option<NaiveDate> {
        self.entries.get(id).map(|e| e.end_date)
    }

    /// Entries keyed by task id.
    pub fn iter(&self) -> impl Iterator<Item = &ScheduleEntry> {
        self.entries.values()
    }

    /// Record an entry. Returns `false` (and leaves the map untouched) if the
    /// task already has one.
    pub(crate) fn record(&mut self, entry: ScheduleEntry) -> bool {
        if self.entries.contains_key(&entry.task_id) {
            debug_assert!(false, "task '{}' resolved twice", entry.task_id);
            return false;
        }
        self.entries.insert(entry.task_id.clone(), entry);
        true
    }

    /// Fold another schedule with the same epoch and disjoint keys into this one.
    pub(crate) fn absorb(&mut self, other: Schedule) {
        debug_assert_eq!(self.epoch, other.epoch);
        for entry in other.entries.into_values() {
            self.record(entry);
        }
    }
}
