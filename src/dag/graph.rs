// src/dag/graph.rs

use std::collections::{HashMap, HashSet};

use petgraph::unionfind::UnionFind;

use crate::dag::TaskId;
use crate::dag::task::TaskRecord;
use crate::errors::StructuralError;

/// Internal node structure: stores immediate deps and dependents.
#[derive(Debug, Clone)]
struct TaskNode {
    /// Position in the original input; the tie-break for presentation order.
    position: usize,
    assignee: String,
    /// Declared dependencies, de-duplicated, first occurrence order. May
    /// contain ids that are not in the graph.
    deps: Vec<TaskId>,
    /// Tasks in this graph that list this one as a dependency, in input order.
    dependents: Vec<TaskId>,
}

/// Immutable task graph built once from the input task list.
///
/// Edges point from a task to the tasks it depends on. Dependency ids are
/// not checked for existence here; an id that never appears simply never
/// resolves, and the resolver reports it.
#[derive(Debug, Clone)]
pub struct TaskGraph {
    order: Vec<TaskId>,
    nodes: HashMap<TaskId, TaskNode>,
}

impl TaskGraph {
    /// Build a graph from tasks in input order.
    ///
    /// Fails on an empty or duplicated task id.
    pub fn new(tasks: impl IntoIterator<Item = TaskRecord>) -> Result<Self, StructuralError> {
        let mut order: Vec<TaskId> = Vec::new();
        let mut nodes: HashMap<TaskId, TaskNode> = HashMap::new();

        // First pass: create nodes with their dependency lists.
        for (position, task) in tasks.into_iter().enumerate() {
            if task.id.is_empty() {
                return Err(StructuralError::EmptyTaskId { position });
            }
            if let Some(existing) = nodes.get(&task.id) {
                return Err(StructuralError::DuplicateTaskId {
                    id: task.id,
                    first: existing.position,
                    duplicate: position,
                });
            }

            let mut seen = HashSet::new();
            let deps = task
                .dependencies
                .into_iter()
                .filter(|d| seen.insert(d.clone()))
                .collect();

            order.push(task.id.clone());
            nodes.insert(
                task.id,
                TaskNode {
                    position,
                    assignee: task.assignee,
                    deps,
                    dependents: Vec::new(),
                },
            );
        }

        // Second pass: populate dependents in input order.
        for name in order.iter() {
            let deps = nodes
                .get(name)
                .map(|n| n.deps.clone())
                .unwrap_or_default();

            for dep in deps {
                if let Some(dep_node) = nodes.get_mut(&dep) {
                    dep_node.dependents.push(name.clone());
                }
            }
        }

        Ok(Self { order, nodes })
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// All task ids in original input order.
    pub fn all_task_ids(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(|s| s.as_str())
    }

    /// Declared dependencies of a task; empty for an unknown id.
    pub fn dependencies_of(&self, id: &str) -> &[TaskId] {
        self.nodes
            .get(id)
            .map(|n| n.deps.as_slice())
            .unwrap_or(&[])
    }

    /// Tasks that list `id` as a dependency.
    pub fn dependents_of(&self, id: &str) -> &[TaskId] {
        self.nodes
            .get(id)
            .map(|n| n.dependents.as_slice())
            .unwrap_or(&[])
    }

    pub fn assignee_of(&self, id: &str) -> Option<&str> {
        self.nodes.get(id).map(|n| n.assignee.as_str())
    }

    /// Position of the task in the original input.
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.nodes.get(id).map(|n| n.position)
    }

    /// Weakly connected components over the defined tasks.
    ///
    /// Each component lists its members in input order; components are
    /// ordered by their first member. References to undefined ids do not
    /// join components.
    pub fn components(&self) -> Vec<Vec<TaskId>> {
        let index: HashMap<&str, usize> = self
            .order
            .iter()
            .enumerate()
            .map(|(idx, name)| (name.as_str(), idx))
            .collect();
        let mut sets = UnionFind::<usize>::new(self.order.len());

        for (idx, name) in self.order.iter().enumerate() {
            for dep in self.dependencies_of(name) {
                if let Some(&dep_idx) = index.get(dep.as_str()) {
                    sets.union(idx, dep_idx);
                }
            }
        }

        let labels = sets.into_labeling();
        let mut by_label: HashMap<usize, usize> = HashMap::new();
        let mut components: Vec<Vec<TaskId>> = Vec::new();

        for (idx, name) in self.order.iter().enumerate() {
            let slot = *by_label.entry(labels[idx]).or_insert_with(|| {
                components.push(Vec::new());
                components.len() - 1
            });
            components[slot].push(name.clone());
        }

        components
    }

    /// Graph restricted to `ids`, keeping their relative input order.
    ///
    /// Dependencies pointing outside the selection are kept as declared, so
    /// a sub-graph of a whole component behaves exactly like the original.
    pub fn subgraph(&self, ids: &[TaskId]) -> TaskGraph {
        let mut selected: Vec<&TaskId> = ids.iter().filter(|id| self.contains(id)).collect();
        selected.sort_by_key(|id| self.position_of(id));
        selected.dedup();

        let keep: HashSet<&str> = selected.iter().map(|s| s.as_str()).collect();

        let mut order = Vec::with_capacity(selected.len());
        let mut nodes = HashMap::with_capacity(selected.len());

        for id in selected {
            let Some(node) = self.nodes.get(id) else {
                continue;
            };
            let dependents = node
                .dependents
                .iter()
                .filter(|d| keep.contains(d.as_str()))
                .cloned()
                .collect();
            order.push(id.clone());
            nodes.insert(
                id.clone(),
                TaskNode {
                    dependents,
                    ..node.clone()
                },
            );
        }

        TaskGraph { order, nodes }
    }
}
