//! Caller-side input checks.
//!
//! The allocator accepts anything well-typed and absorbs anomalies into the
//! unassigned list. Hosts that want to reject malformed input up front call
//! [`validate_input`] before allocating.

use std::collections::HashSet;

use crate::core::{AllocationError, Developer, Task};

/// Reject duplicate names, negative capacities, and non-positive task hours.
pub fn validate_input(developers: &[Developer], tasks: &[Task]) -> Result<(), AllocationError> {
    let mut seen = HashSet::with_capacity(developers.len());
    for developer in developers {
        if !seen.insert(developer.name.as_str()) {
            return Err(AllocationError::DuplicateDeveloper(developer.name.clone()));
        }
        if developer.max_hours < 0 {
            return Err(AllocationError::NegativeCapacity {
                developer: developer.name.clone(),
                max_hours: developer.max_hours,
            });
        }
    }

    let mut seen = HashSet::with_capacity(tasks.len());
    for task in tasks {
        if !seen.insert(task.task_name.as_str()) {
            return Err(AllocationError::DuplicateTask(task.task_name.clone()));
        }
        if task.hours_required <= 0 {
            return Err(AllocationError::InvalidHours {
                task: task.task_name.clone(),
                hours: task.hours_required,
            });
        }
    }

    tracing::debug!(
        developers = developers.len(),
        tasks = tasks.len(),
        "allocation input validated"
    );
    Ok(())
}
