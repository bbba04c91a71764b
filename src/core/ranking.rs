//! Ranking of eligible developers for a single task.

use std::cmp::Ordering;

use crate::util::serde::Hours;

/// An eligible developer, reduced to the keys ranking looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    /// Position of the developer in the input list.
    pub index: usize,
    /// Developer prefers the task's category.
    pub preference_match: bool,
    /// Developer's running hour total before this task.
    pub current_hours: Hours,
}

/// Order two candidates: preference match first, then lower load.
///
/// Candidates equal on both keys compare `Equal`; input order is left to the
/// stable sort in [`rank_candidates`].
pub fn compare_candidates(a: &Candidate, b: &Candidate) -> Ordering {
    b.preference_match
        .cmp(&a.preference_match)
        .then_with(|| a.current_hours.cmp(&b.current_hours))
}

/// Sort candidates best-first. `sort_by` is stable, so ties keep input order.
pub fn rank_candidates(candidates: &mut [Candidate]) {
    candidates.sort_by(compare_candidates);
}

/// Best candidate of an unsorted list, ties resolved to the earliest entry.
pub fn best_candidate(candidates: &[Candidate]) -> Option<Candidate> {
    let mut ranked = candidates.to_vec();
    rank_candidates(&mut ranked);
    ranked.first().copied()
}
