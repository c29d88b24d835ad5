use chrono::NaiveDate;

use crate::calsat_assert_moderate;
use crate::constraints::DateConstraint;
use crate::engine::domain::MeetingDomain;

/// Depth-first backtracking search over the (already filtered) domains.
///
/// Meetings are assigned in increasing index order; the next meeting to assign is always
/// `assignment.len()`. Candidate dates are tried in the domain's iteration order, and every push
/// is followed by a consistency check of the whole prefix, so inconsistent branches are cut off
/// at the earliest point. The first complete assignment is propagated upward unchanged.
///
/// Returns whether a complete assignment was found; on success `assignment` holds it, on failure
/// the buffer is restored to its state at entry. Domains are never mutated by the search.
pub(crate) fn backtrack(
    domains: &[MeetingDomain],
    constraints: &[DateConstraint],
    assignment: &mut Vec<NaiveDate>,
) -> bool {
    calsat_assert_moderate!(
        assignment.len() <= domains.len(),
        "the assignment cannot be longer than the number of meetings"
    );

    if assignment.len() == domains.len() {
        // Every constraint over assigned meetings was validated when its last meeting was pushed.
        return true;
    }

    let meeting = assignment.len();
    for date in domains[meeting].iter() {
        assignment.push(date);

        if is_consistent(constraints, assignment) && backtrack(domains, constraints, assignment) {
            return true;
        }

        let _ = assignment.pop();
    }

    false
}

/// Whether every constraint that can already be evaluated on the prefix holds. Constraints
/// referencing a meeting beyond the prefix are skipped; they are checked once that meeting is
/// assigned.
fn is_consistent(constraints: &[DateConstraint], assignment: &[NaiveDate]) -> bool {
    constraints
        .iter()
        .all(|constraint| constraint.holds_on_prefix(assignment))
}
