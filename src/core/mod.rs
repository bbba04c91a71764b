//! Core allocation model, eligibility rules, ranking, and the allocation pass.

pub mod error;
pub mod model;
pub mod eligibility;
pub mod ranking;
pub mod completed;
pub mod allocator;
pub mod audit;
pub mod validation;

pub use error::{AllocationError, AppResult};
pub use model::{AllocationPlan, Developer, DeveloperAssignment, Task};
pub use eligibility::{check_eligibility, is_eligible, preference_matches, Ineligibility};
pub use ranking::{best_candidate, compare_candidates, rank_candidates, Candidate};
pub use completed::CompletedSet;
pub use allocator::{allocate, priority_order, Allocator, PassOutcome};
pub use audit::{
    build_audit_event, AuditAction, AuditEvent, AuditSink, InMemoryAuditSink, SharedAuditSink,
};
pub use validation::validate_input;
