//! Error types for allocator components.
//!
//! The allocation pass itself never fails; these errors come from caller-side
//! validation, configuration, and request parsing.

use thiserror::Error;

use crate::util::serde::Hours;

/// Errors produced around the allocator.
#[derive(Debug, Error)]
pub enum AllocationError {
    /// Two developers share the same name.
    #[error("duplicate developer: {0}")]
    DuplicateDeveloper(String),
    /// Two tasks share the same name.
    #[error("duplicate task: {0}")]
    DuplicateTask(String),
    /// A task requires zero or negative hours.
    #[error("task `{task}` requires non-positive hours: {hours}")]
    InvalidHours {
        /// Offending task name.
        task: String,
        /// Declared hours.
        hours: Hours,
    },
    /// A developer declares a negative capacity.
    #[error("developer `{developer}` has negative capacity: {max_hours}")]
    NegativeCapacity {
        /// Offending developer name.
        developer: String,
        /// Declared capacity.
        max_hours: Hours,
    },
    /// Configuration values are out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    /// Request or response (de)serialisation failed.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
