//! Houses the entry point which attempts to find a satisfying schedule for a calendar
//! constraint-satisfaction instance.

use chrono::NaiveDate;
use log::debug;

use crate::basic_types::SatisfactionResult;
use crate::basic_types::Solution;
use crate::calsat_assert_extreme;
use crate::constraints::DateConstraint;
use crate::engine::domain::MeetingDomain;
use crate::engine::propagation::enforce_arc_consistency;
use crate::engine::propagation::enforce_node_consistency;
use crate::engine::search::backtrack;

/// Options influencing the solve pipeline.
///
/// Both filtering passes are pruning aids: the search is complete on its own, and disabling a
/// pass never changes whether an instance is satisfiable, only how much of the search tree gets
/// explored.
#[derive(Debug, Clone, Copy)]
pub struct SolverOptions {
    /// Whether to filter the domains with the node-consistency pass before searching.
    pub node_consistency: bool,
    /// Whether to filter the domains with the arc-consistency (AC-3) pass before searching.
    pub arc_consistency: bool,
}

impl Default for SolverOptions {
    fn default() -> SolverOptions {
        SolverOptions {
            node_consistency: true,
            arc_consistency: true,
        }
    }
}

/// Finds a schedule assigning one date out of `[range_start, range_end]` (inclusive) to each of
/// the `n_meetings` meetings, such that all of the given constraints hold, with both filtering
/// passes enabled.
///
/// Meetings are identified by their index in `0..n_meetings`. Constraints referencing a meeting
/// outside that range cannot be evaluated and are ignored. An inverted range (`range_end <
/// range_start`) is not rejected; it produces empty domains, and the result is therefore
/// [`SatisfactionResult::Unsatisfiable`] whenever `n_meetings >= 1`. With `n_meetings == 0` the
/// empty schedule is trivially satisfying.
///
/// Duplicate constraints are harmless: satisfaction is conjunctive, and the arc-consistency
/// worklist collapses duplicates.
pub fn solve(
    n_meetings: usize,
    range_start: NaiveDate,
    range_end: NaiveDate,
    constraints: &[DateConstraint],
) -> SatisfactionResult {
    solve_with_options(
        n_meetings,
        range_start,
        range_end,
        constraints,
        SolverOptions::default(),
    )
}

/// Like [`solve`], with explicit [`SolverOptions`].
pub fn solve_with_options(
    n_meetings: usize,
    range_start: NaiveDate,
    range_end: NaiveDate,
    constraints: &[DateConstraint],
    options: SolverOptions,
) -> SatisfactionResult {
    let mut domains = MeetingDomain::generate(n_meetings, range_start, range_end);

    if options.node_consistency {
        if let Err(empty_domain) = enforce_node_consistency(&mut domains, constraints) {
            debug!("unsatisfiable during node consistency: {empty_domain}");
            return SatisfactionResult::Unsatisfiable;
        }
    }

    if options.arc_consistency {
        if let Err(empty_domain) = enforce_arc_consistency(&mut domains, constraints) {
            debug!("unsatisfiable during arc consistency: {empty_domain}");
            return SatisfactionResult::Unsatisfiable;
        }
    }

    let mut assignment = Vec::with_capacity(n_meetings);
    if backtrack(&domains, constraints, &mut assignment) {
        calsat_assert_extreme!(
            constraints
                .iter()
                .all(|constraint| constraint.holds_on_prefix(&assignment)),
            "the search must only produce assignments satisfying every evaluable constraint"
        );
        calsat_assert_extreme!(
            assignment
                .iter()
                .enumerate()
                .all(|(meeting, date)| domains[meeting].contains(*date)),
            "the search must only pick dates from the filtered domains"
        );

        debug!("found a schedule for {n_meetings} meetings");
        SatisfactionResult::Satisfiable(Solution::new(assignment))
    } else {
        debug!("search exhausted all assignments for {n_meetings} meetings");
        SatisfactionResult::Unsatisfiable
    }
}
