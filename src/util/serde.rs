//! Shared scalar aliases used across the allocation model.

/// Hours of work; signed so malformed negative inputs pass through unchanged.
pub type Hours = i64;

/// Developer skill level or task difficulty. Higher means more capable / harder.
pub type SkillLevel = i64;

/// Task priority. Higher means more urgent.
pub type Priority = i64;

/// Task identifier; also the key dependencies refer to.
pub type TaskName = String;
