//! Single-pass greedy allocator.
//!
//! Tasks are visited once in descending priority. Each task either passes the
//! dependency gate and lands on the best-ranked eligible developer, or is appended
//! to the unassigned list. Nothing is retried within a pass.

use crate::core::{
    build_audit_event, check_eligibility, preference_matches, rank_candidates, AllocationPlan,
    AuditAction, Candidate, CompletedSet, Developer, DeveloperAssignment, SharedAuditSink, Task,
};

/// Plan plus the completed set as it stood at the end of the pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassOutcome {
    /// Assignment records and unassigned tasks.
    pub plan: AllocationPlan,
    /// Completed names: the seed set plus every task assigned in this pass.
    pub completed: CompletedSet,
}

/// Borrowed working copy of `tasks`, sorted by descending priority.
///
/// The sort is stable: equal priorities keep their input order. The caller's slice
/// is left untouched.
pub fn priority_order(tasks: &[Task]) -> Vec<&Task> {
    let mut ordered: Vec<&Task> = tasks.iter().collect();
    ordered.sort_by(|a, b| b.priority.cmp(&a.priority));
    ordered
}

/// Allocate `tasks` across `developers` with no audit trail.
pub fn allocate(developers: &[Developer], tasks: &[Task]) -> AllocationPlan {
    Allocator::new().allocate(developers, tasks)
}

/// Greedy allocator. Holds no per-run state; every call starts fresh.
#[derive(Clone, Default)]
pub struct Allocator {
    audit: Option<SharedAuditSink>,
}

impl Allocator {
    /// Allocator without an audit sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an audit sink that receives one event per visited task.
    #[must_use]
    pub fn with_audit(mut self, audit: SharedAuditSink) -> Self {
        self.audit = Some(audit);
        self
    }

    /// Whether an audit sink is attached.
    pub const fn has_audit(&self) -> bool {
        self.audit.is_some()
    }

    /// Run one pass starting from an empty completed set.
    pub fn allocate(&self, developers: &[Developer], tasks: &[Task]) -> AllocationPlan {
        self.allocate_with_completed(developers, tasks, CompletedSet::new())
            .plan
    }

    /// Run one pass with dependency checks resolving against `completed` plus
    /// whatever this pass assigns.
    pub fn allocate_with_completed(
        &self,
        developers: &[Developer],
        tasks: &[Task],
        mut completed: CompletedSet,
    ) -> PassOutcome {
        let mut assignments: Vec<DeveloperAssignment> =
            developers.iter().map(DeveloperAssignment::empty).collect();
        let mut unassigned = Vec::new();

        tracing::debug!(
            developers = developers.len(),
            tasks = tasks.len(),
            seeded = completed.len(),
            "starting allocation pass"
        );

        for (sequence, task) in priority_order(tasks).into_iter().enumerate() {
            let action = Self::place(task, developers, &mut assignments, &mut completed);
            if !matches!(action, AuditAction::Assigned { .. }) {
                unassigned.push(task.task_name.clone());
            }
            self.record_audit(sequence, task, action);
        }

        tracing::info!(
            assigned = tasks.len() - unassigned.len(),
            unassigned = unassigned.len(),
            "allocation pass finished"
        );

        PassOutcome {
            plan: AllocationPlan {
                developer_assignments: assignments,
                unassigned_tasks: unassigned,
            },
            completed,
        }
    }

    /// Decide one task: dependency gate, eligibility filter, ranking, assignment.
    fn place(
        task: &Task,
        developers: &[Developer],
        assignments: &mut [DeveloperAssignment],
        completed: &mut CompletedSet,
    ) -> AuditAction {
        let missing = completed.missing_dependencies(task);
        if !missing.is_empty() {
            tracing::info!(
                task = %task.task_name,
                missing = ?missing,
                "task blocked on unmet dependencies"
            );
            return AuditAction::BlockedOnDependency { missing };
        }

        let mut candidates: Vec<Candidate> = developers
            .iter()
            .zip(assignments.iter())
            .enumerate()
            .filter_map(|(index, (developer, record))| {
                match check_eligibility(developer, record, task) {
                    Ok(()) => Some(Candidate {
                        index,
                        preference_match: preference_matches(developer, task),
                        current_hours: record.total_hours,
                    }),
                    Err(reason) => {
                        tracing::trace!(
                            task = %task.task_name,
                            developer = %developer.name,
                            %reason,
                            "developer ineligible"
                        );
                        None
                    }
                }
            })
            .collect();
        rank_candidates(&mut candidates);

        let Some(best) = candidates.first() else {
            tracing::info!(task = %task.task_name, "no eligible developer");
            return AuditAction::NoEligibleDeveloper;
        };

        let record = &mut assignments[best.index];
        record.push(task);
        completed.insert(task.task_name.clone());

        tracing::debug!(
            task = %task.task_name,
            developer = %record.name,
            total_hours = record.total_hours,
            "task assigned"
        );
        AuditAction::Assigned {
            developer: record.name.clone(),
            hours: task.hours_required,
        }
    }

    fn record_audit(&self, sequence: usize, task: &Task, action: AuditAction) {
        if let Some(audit) = &self.audit {
            audit
                .lock()
                .record(build_audit_event(sequence, task.task_name.clone(), action));
        }
    }
}
