//! Set of task names already assigned in the current pass.

use std::collections::HashSet;

use crate::core::Task;
use crate::util::serde::TaskName;

/// Task names that dependency checks resolve against.
///
/// Owned by one allocation call; threaded into and back out of the pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletedSet {
    names: HashSet<TaskName>,
}

impl CompletedSet {
    /// Empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `name` has been completed.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Record a completed task name. Returns false if it was already present.
    pub fn insert(&mut self, name: impl Into<TaskName>) -> bool {
        self.names.insert(name.into())
    }

    /// Dependencies of `task` not yet completed, in declared order.
    pub fn missing_dependencies(&self, task: &Task) -> Vec<TaskName> {
        task.dependencies
            .iter()
            .filter(|dep| !self.contains(dep))
            .cloned()
            .collect()
    }

    /// Whether every dependency of `task` is completed.
    pub fn dependencies_met(&self, task: &Task) -> bool {
        task.dependencies.iter().all(|dep| self.contains(dep))
    }

    /// Number of completed names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether nothing has completed.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate completed names in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &TaskName> {
        self.names.iter()
    }
}

impl<S: Into<TaskName>> FromIterator<S> for CompletedSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}
