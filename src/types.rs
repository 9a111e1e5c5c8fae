use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize, Serializer};

/// Named developer lanes.
///
/// The set is closed: any assignee outside it lands in [`Lane::Shared`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Developer {
    A,
    B,
    C,
}

impl Developer {
    pub const ALL: [Developer; 3] = [Developer::A, Developer::B, Developer::C];

    pub fn key(self) -> &'static str {
        match self {
            Developer::A => "A",
            Developer::B => "B",
            Developer::C => "C",
        }
    }
}

/// Presentation lane for a task.
///
/// The derived `Ord` is the presentation order: named lanes in
/// [`Developer`] order, then the shared lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Lane {
    Named(Developer),
    Shared,
}

impl Lane {
    pub const PRESENTATION_ORDER: [Lane; 4] = [
        Lane::Named(Developer::A),
        Lane::Named(Developer::B),
        Lane::Named(Developer::C),
        Lane::Shared,
    ];

    /// Map a raw assignee value onto its lane.
    pub fn of(assignee: &str) -> Lane {
        Developer::ALL
            .into_iter()
            .find(|d| d.key() == assignee)
            .map(Lane::Named)
            .unwrap_or(Lane::Shared)
    }

    /// Section label used in the rendered chart.
    pub fn label(self) -> &'static str {
        match self {
            Lane::Named(Developer::A) => "Developer A",
            Lane::Named(Developer::B) => "Developer B",
            Lane::Named(Developer::C) => "Developer C",
            Lane::Shared => "General/Shared Tasks",
        }
    }
}

impl fmt::Display for Lane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Lane {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// How the resolver walks the task graph.
///
/// All strategies produce identical schedules and identical diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ResolveStrategy {
    /// Repeated passes over the unresolved tasks until a fixed point.
    FixedPoint,
    /// Dependency-count traversal with a ready queue.
    ReadyQueue,
    /// Resolve disjoint components concurrently.
    Parallel,
}

impl Default for ResolveStrategy {
    fn default() -> Self {
        ResolveStrategy::FixedPoint
    }
}
