//! Audit trail of allocation decisions.
//!
//! Every task visited by a pass yields one event: assigned, blocked on a dependency,
//! or left without an eligible developer.

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;
use uuid::Uuid;

use crate::util::clock::now_ms;
use crate::util::serde::{Hours, TaskName};

/// Outcome recorded for one task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditAction {
    /// Placed on a developer.
    Assigned {
        /// Developer name.
        developer: String,
        /// Hours added to the developer's total.
        hours: Hours,
    },
    /// Dependency gate failed.
    BlockedOnDependency {
        /// Dependencies not completed at evaluation time.
        missing: Vec<TaskName>,
    },
    /// Dependencies met, but nobody passed the eligibility filter.
    NoEligibleDeveloper,
}

impl AuditAction {
    /// Short label for logs and sinks.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Assigned { .. } => "assigned",
            Self::BlockedOnDependency { .. } => "blocked",
            Self::NoEligibleDeveloper => "no_eligible_developer",
        }
    }
}

/// Audit event structure.
#[derive(Debug, Clone)]
pub struct AuditEvent {
    /// Event identifier.
    pub event_id: String,
    /// Position of the task in the pass (0-based).
    pub sequence: usize,
    /// Task the decision concerns.
    pub task_name: TaskName,
    /// Decision taken.
    pub action: AuditAction,
    /// Timestamp milliseconds.
    pub created_at_ms: u128,
}

/// Audit sink abstraction.
pub trait AuditSink: Send {
    /// Record an audit event.
    fn record(&mut self, event: AuditEvent);
}

/// Audit sink shared between an allocator and the caller reading it.
pub type SharedAuditSink = Arc<Mutex<dyn AuditSink>>;

/// In-memory audit sink with a bounded buffer; oldest events are dropped first.
pub struct InMemoryAuditSink {
    events: VecDeque<AuditEvent>,
    max_events: usize,
}

impl InMemoryAuditSink {
    /// Create a new in-memory sink with a bounded buffer.
    pub fn new(max_events: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(max_events.min(1024)),
            max_events,
        }
    }

    /// Retrieve a snapshot of stored events.
    pub fn events(&self) -> Vec<AuditEvent> {
        self.events.iter().cloned().collect()
    }

    /// Number of stored events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether no events are stored.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl AuditSink for InMemoryAuditSink {
    fn record(&mut self, event: AuditEvent) {
        if self.max_events == 0 {
            return;
        }
        if self.events.len() >= self.max_events {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }
}

/// Helper to build an audit event with a fresh id and timestamp.
pub fn build_audit_event(
    sequence: usize,
    task_name: impl Into<TaskName>,
    action: AuditAction,
) -> AuditEvent {
    AuditEvent {
        event_id: Uuid::new_v4().to_string(),
        sequence,
        task_name: task_name.into(),
        action,
        created_at_ms: now_ms(),
    }
}
