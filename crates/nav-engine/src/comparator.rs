//! Choosing the reroute candidate that best continues the current trip.
//!
//! Leg summaries are stable human-readable road-name descriptions, so the
//! candidate whose concatenated summaries sit closest to the driven route's
//! (by Damerau-Levenshtein distance: unit-cost insertions, deletions,
//! substitutions, and adjacent transpositions) is the one that most likely
//! keeps the agent on the same road plan.

use nav_route::Route;

/// Index of the candidate that best continues `current`.
///
/// A single candidate is chosen outright; among several, the smallest edit
/// distance wins and ties keep the earliest candidate in response order.
/// Returns `None` only for an empty candidate list.
pub fn best_continuation(current: &Route, candidates: &[Route]) -> Option<usize> {
    match candidates {
        [] => None,
        [_] => Some(0),
        _ => {
            let target = current.leg_summary();
            let mut best = 0;
            let mut best_distance = usize::MAX;
            for (i, candidate) in candidates.iter().enumerate() {
                let distance = strsim::damerau_levenshtein(&candidate.leg_summary(), &target);
                if distance < best_distance {
                    best = i;
                    best_distance = distance;
                }
            }
            log::debug!(
                "picked reroute candidate {best} of {} (edit distance {best_distance})",
                candidates.len()
            );
            Some(best)
        }
    }
}
