//! Eligibility predicate: can a developer take a task right now?

use std::fmt;

use crate::core::{Developer, DeveloperAssignment, Task};
use crate::util::serde::{Hours, SkillLevel};

/// First clause a developer fails for a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ineligibility {
    /// Skill level below the task difficulty.
    Underskilled {
        /// Developer skill.
        skill: SkillLevel,
        /// Task difficulty.
        difficulty: SkillLevel,
    },
    /// Not enough hours left.
    InsufficientCapacity {
        /// Hours the developer has left.
        remaining: Hours,
        /// Hours the task needs.
        required: Hours,
    },
    /// Off-preference task and the developer's skill only just meets the difficulty.
    PreferenceMismatch,
}

impl fmt::Display for Ineligibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Underskilled { skill, difficulty } => {
                write!(f, "skill {skill} below difficulty {difficulty}")
            }
            Self::InsufficientCapacity {
                remaining,
                required,
            } => write!(f, "{remaining}h remaining, {required}h required"),
            Self::PreferenceMismatch => write!(f, "off-preference without overqualification"),
        }
    }
}

/// Whether the developer's preferred category equals the task's category.
pub fn preference_matches(developer: &Developer, task: &Task) -> bool {
    developer.preferred_task_type == task.task_type
}

/// Check the three eligibility clauses in order: skill, capacity, then
/// preference-or-overqualification.
///
/// `assignment` is the developer's running record for the current pass.
pub fn check_eligibility(
    developer: &Developer,
    assignment: &DeveloperAssignment,
    task: &Task,
) -> Result<(), Ineligibility> {
    if developer.skill_level < task.difficulty {
        return Err(Ineligibility::Underskilled {
            skill: developer.skill_level,
            difficulty: task.difficulty,
        });
    }

    let remaining = assignment.remaining_hours(developer);
    if remaining < task.hours_required {
        return Err(Ineligibility::InsufficientCapacity {
            remaining,
            required: task.hours_required,
        });
    }

    if !preference_matches(developer, task) && developer.skill_level <= task.difficulty {
        return Err(Ineligibility::PreferenceMismatch);
    }

    Ok(())
}

/// Boolean form of [`check_eligibility`].
pub fn is_eligible(developer: &Developer, assignment: &DeveloperAssignment, task: &Task) -> bool {
    check_eligibility(developer, assignment, task).is_ok()
}
