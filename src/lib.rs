//! # Workload Allocator
//!
//! A deterministic, single-pass greedy allocator that places tasks on developers under
//! skill, capacity, preference, priority, and dependency constraints.
//!
//! The allocator produces one plan per invocation. It does not backtrack, rebalance,
//! or retry: a task that cannot be placed when it is reached is reported as unassigned.
//!
//! ## Algorithm
//!
//! - **Priority ordering**: tasks are visited by descending priority; equal priorities keep
//!   their input order (stable sort).
//! - **Dependency gate**: a task whose dependencies are not all in the completed set at the
//!   moment it is visited goes straight to the unassigned list.
//! - **Eligibility**: skill must cover difficulty, remaining hours must cover the task, and
//!   an off-preference task needs a strictly overqualified developer.
//! - **Ranking**: preference match first, then lowest current load, then input order.
//!
//! ## Example
//!
//! ```rust
//! use workload_allocator::core::{allocate, Developer, Task};
//!
//! let developers = vec![
//!     Developer::new("Alice", 7, 40, "feature"),
//!     Developer::new("Bob", 9, 30, "bug"),
//! ];
//! let tasks = vec![
//!     Task::new("Feature A", 7, 15, "feature", 4),
//!     Task::new("Bug Fix B", 5, 10, "bug", 5),
//! ];
//!
//! let plan = allocate(&developers, &tasks);
//! assert_eq!(plan.developer_assignments[0].assigned_tasks, vec!["Feature A"]);
//! assert_eq!(plan.developer_assignments[1].assigned_tasks, vec!["Bug Fix B"]);
//! assert!(plan.unassigned_tasks.is_empty());
//! ```
//!
//! For complete scenarios, see `tests/allocation_test.rs`.

#![deny(warnings)]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Core allocation model, eligibility rules, ranking, and the allocation pass.
pub mod core;
/// Configuration models for the allocator.
pub mod config;
/// Builders to construct allocators from configuration.
pub mod builders;
/// Request/response surface for hosts embedding the allocator.
pub mod runtime;
/// Shared utilities.
pub mod util;
