use chrono::NaiveDate;

use crate::constraints::DateComparison;
use crate::constraints::DateConstraint;
use crate::solve;
use crate::solve_with_options;
use crate::tests::day;
use crate::tests::init_logger;
use crate::SatisfactionResult;
use crate::Solution;
use crate::SolverOptions;

/// Every returned date lies in the range, and every constraint over in-range meetings holds.
fn assert_sound(
    solution: &Solution,
    constraints: &[DateConstraint],
    range_start: NaiveDate,
    range_end: NaiveDate,
) {
    for date in solution.dates() {
        assert!(
            range_start <= *date && *date <= range_end,
            "{date} lies outside [{range_start}, {range_end}]"
        );
    }

    for constraint in constraints {
        assert!(
            constraint.holds_on_prefix(solution.dates()),
            "{constraint:?} is violated by {:?}",
            solution.dates()
        );
    }
}

#[test]
fn pinned_single_meeting_gets_its_day() {
    init_logger();

    let constraints = [DateConstraint::unary(0, DateComparison::Equal, day(2))];
    let result = solve(1, day(1), day(3), &constraints);

    let solution = result.solution().expect("day 2 is available");
    assert_eq!(solution.dates(), [day(2)]);
}

#[test]
fn strict_ordering_over_two_days_has_one_schedule() {
    let constraints = [DateConstraint::binary(0, 1, DateComparison::Before)];
    let result = solve(2, day(1), day(2), &constraints);

    let solution = result.solution().expect("the ordering 1 < 2 exists");
    assert_eq!(solution.dates(), [day(1), day(2)]);
}

#[test]
fn strict_ordering_over_a_single_day_is_unsatisfiable() {
    let constraints = [DateConstraint::binary(0, 1, DateComparison::Before)];

    assert_eq!(
        solve(2, day(1), day(1), &constraints),
        SatisfactionResult::Unsatisfiable
    );
}

#[test]
fn unconstrained_meetings_always_schedule() {
    let result = solve(3, day(1), day(5), &[]);

    let solution = result.solution().expect("no constraints to violate");
    assert_eq!(solution.num_meetings(), 3);
    assert_sound(solution, &[], day(1), day(5));
}

#[test]
fn contradictory_ordering_cycle_is_unsatisfiable() {
    init_logger();

    let constraints = [
        DateConstraint::binary(0, 1, DateComparison::Before),
        DateConstraint::binary(1, 0, DateComparison::Before),
    ];

    assert_eq!(
        solve(2, day(1), day(2), &constraints),
        SatisfactionResult::Unsatisfiable
    );
}

#[test]
fn zero_meetings_yield_the_empty_schedule() {
    let result = solve(0, day(1), day(5), &[]);

    assert!(result.solution().expect("trivially satisfiable").dates().is_empty());
}

#[test]
fn zero_meetings_ignore_an_inverted_range() {
    // With no domains to construct, the range never comes into play.
    let result = solve(0, day(5), day(1), &[]);

    assert!(result.is_satisfiable());
}

#[test]
fn inverted_range_with_meetings_is_unsatisfiable() {
    assert_eq!(
        solve(1, day(5), day(1), &[]),
        SatisfactionResult::Unsatisfiable
    );
}

#[test]
fn constraints_on_unknown_meetings_are_ignored() {
    let constraints = [
        DateConstraint::unary(5, DateComparison::Equal, day(1)),
        DateConstraint::binary(0, 9, DateComparison::Before),
    ];
    let result = solve(1, day(1), day(3), &constraints);

    assert_eq!(result.solution().expect("no evaluable constraint").num_meetings(), 1);
}

#[test]
fn duplicate_constraints_are_harmless() {
    let constraint = DateConstraint::binary(0, 1, DateComparison::Before);
    let constraints = [constraint, constraint, constraint];
    let result = solve(2, day(1), day(2), &constraints);

    assert_eq!(result.solution().expect("duplicates do not over-prune").dates(), [day(1), day(2)]);
}

#[test]
fn mixed_constraints_produce_a_sound_schedule() {
    let constraints = [
        DateConstraint::unary(0, DateComparison::Equal, day(3)),
        DateConstraint::binary(1, 0, DateComparison::After),
        DateConstraint::binary(2, 1, DateComparison::After),
        DateConstraint::unary(2, DateComparison::OnOrBefore, day(8)),
    ];
    let result = solve(3, day(1), day(10), &constraints);

    let solution = result.solution().expect("3 < m1 < m2 <= 8 fits in ten days");
    assert_sound(solution, &constraints, day(1), day(10));
}

#[test]
fn solving_twice_returns_the_same_schedule() {
    let constraints = [
        DateConstraint::binary(0, 1, DateComparison::Before),
        DateConstraint::unary(1, DateComparison::OnOrBefore, day(4)),
    ];

    let first = solve(2, day(1), day(6), &constraints);
    let second = solve(2, day(1), day(6), &constraints);

    assert_eq!(first, second);
}

#[test]
fn search_alone_agrees_on_satisfiability() {
    init_logger();

    let search_only = SolverOptions {
        node_consistency: false,
        arc_consistency: false,
    };

    let instances: [(usize, NaiveDate, NaiveDate, Vec<DateConstraint>); 4] = [
        (2, day(1), day(2), vec![DateConstraint::binary(0, 1, DateComparison::Before)]),
        (2, day(1), day(1), vec![DateConstraint::binary(0, 1, DateComparison::Before)]),
        (1, day(1), day(3), vec![DateConstraint::unary(0, DateComparison::Equal, day(2))]),
        (
            3,
            day(1), day(4),
            vec![
                DateConstraint::binary(0, 1, DateComparison::Before),
                DateConstraint::binary(1, 2, DateComparison::Before),
                DateConstraint::unary(0, DateComparison::After, day(1)),
            ],
        ),
    ];

    for (n_meetings, range_start, range_end, constraints) in instances {
        let filtered = solve(n_meetings, range_start, range_end, &constraints);
        let unfiltered =
            solve_with_options(n_meetings, range_start, range_end, &constraints, search_only);

        assert_eq!(
            filtered.is_satisfiable(),
            unfiltered.is_satisfiable(),
            "filtering changed satisfiability for {constraints:?}"
        );

        if let Some(solution) = unfiltered.solution() {
            assert_sound(solution, &constraints, range_start, range_end);
        }
    }
}
