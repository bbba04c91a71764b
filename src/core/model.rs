//! Input and output records of an allocation run.

use serde::{Deserialize, Serialize};

use crate::util::serde::{Hours, Priority, SkillLevel, TaskName};

/// A worker that tasks can be assigned to. Immutable input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Developer {
    /// Unique name within a run.
    pub name: String,
    /// Higher is more capable.
    pub skill_level: SkillLevel,
    /// Maximum hours this developer can take on.
    pub max_hours: Hours,
    /// Category label the developer prefers.
    pub preferred_task_type: String,
}

impl Developer {
    /// Create a developer record.
    pub fn new(
        name: impl Into<String>,
        skill_level: SkillLevel,
        max_hours: Hours,
        preferred_task_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            skill_level,
            max_hours,
            preferred_task_type: preferred_task_type.into(),
        }
    }
}

/// A unit of work to place. Immutable input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique name within a run; dependencies refer to tasks by this name.
    pub task_name: TaskName,
    /// Minimum skill level required.
    pub difficulty: SkillLevel,
    /// Hours the task consumes from the assignee's capacity.
    pub hours_required: Hours,
    /// Category label.
    pub task_type: String,
    /// Higher is more urgent.
    pub priority: Priority,
    /// Names of tasks that must be assigned earlier in the same pass.
    #[serde(default)]
    pub dependencies: Vec<TaskName>,
}

impl Task {
    /// Create a task with no dependencies.
    pub fn new(
        task_name: impl Into<TaskName>,
        difficulty: SkillLevel,
        hours_required: Hours,
        task_type: impl Into<String>,
        priority: Priority,
    ) -> Self {
        Self {
            task_name: task_name.into(),
            difficulty,
            hours_required,
            task_type: task_type.into(),
            priority,
            dependencies: Vec::new(),
        }
    }

    /// Replace the dependency list.
    #[must_use]
    pub fn with_dependencies<I, S>(mut self, dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<TaskName>,
    {
        self.dependencies = dependencies.into_iter().map(Into::into).collect();
        self
    }
}

/// Per-developer outcome, created empty at run start and only appended to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeveloperAssignment {
    /// Developer name.
    pub name: String,
    /// Assigned task names in assignment order.
    pub assigned_tasks: Vec<TaskName>,
    /// Sum of assigned task hours.
    pub total_hours: Hours,
}

impl DeveloperAssignment {
    /// Empty record for a developer.
    pub fn empty(developer: &Developer) -> Self {
        Self {
            name: developer.name.clone(),
            assigned_tasks: Vec::new(),
            total_hours: 0,
        }
    }

    /// Hours the developer can still take on.
    pub const fn remaining_hours(&self, developer: &Developer) -> Hours {
        developer.max_hours.saturating_sub(self.total_hours)
    }

    pub(crate) fn push(&mut self, task: &Task) {
        self.assigned_tasks.push(task.task_name.clone());
        self.total_hours = self.total_hours.saturating_add(task.hours_required);
    }
}

/// Result of one allocation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationPlan {
    /// One record per input developer, in input order.
    pub developer_assignments: Vec<DeveloperAssignment>,
    /// Rejected task names in the order they were rejected.
    pub unassigned_tasks: Vec<TaskName>,
}

impl AllocationPlan {
    /// Look up the record for a developer by name.
    pub fn assignment_for(&self, name: &str) -> Option<&DeveloperAssignment> {
        self.developer_assignments.iter().find(|a| a.name == name)
    }

    /// Number of tasks placed on some developer.
    pub fn assigned_count(&self) -> usize {
        self.developer_assignments
            .iter()
            .map(|a| a.assigned_tasks.len())
            .sum()
    }

    /// Whether the named task was placed on some developer.
    pub fn is_assigned(&self, task_name: &str) -> bool {
        self.developer_assignments
            .iter()
            .any(|a| a.assigned_tasks.iter().any(|t| t == task_name))
    }
}
