use chrono::NaiveDate;

use crate::calsat_assert_simple;
use crate::constraints::DateComparison;

/// Restricts the date of a single meeting by comparing it against a fixed bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnaryConstraint {
    /// The index of the constrained meeting.
    pub meeting: usize,
    /// The comparison, applied with the meeting's date on the left-hand side.
    pub comparison: DateComparison,
    /// The fixed right-hand side of the comparison.
    pub bound: NaiveDate,
}

impl UnaryConstraint {
    pub fn new(meeting: usize, comparison: DateComparison, bound: NaiveDate) -> UnaryConstraint {
        UnaryConstraint {
            meeting,
            comparison,
            bound,
        }
    }

    /// Whether assigning `date` to the constrained meeting satisfies this constraint.
    pub fn is_satisfied_by(&self, date: NaiveDate) -> bool {
        self.comparison.holds_between(date, self.bound)
    }
}

/// Relates the dates of two distinct meetings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BinaryConstraint {
    /// The index of the left-hand meeting.
    pub left: usize,
    /// The index of the right-hand meeting.
    pub right: usize,
    /// The comparison, applied with the left meeting's date on the left-hand side.
    pub comparison: DateComparison,
}

impl BinaryConstraint {
    /// # Panics
    /// If `left == right`; a meeting cannot be binary-constrained against itself.
    pub fn new(left: usize, right: usize, comparison: DateComparison) -> BinaryConstraint {
        calsat_assert_simple!(
            left != right,
            "a binary constraint must reference two distinct meetings (got {left} twice)"
        );

        BinaryConstraint {
            left,
            right,
            comparison,
        }
    }

    /// Whether the pair of assigned dates satisfies this constraint.
    pub fn is_satisfied_by(&self, left_date: NaiveDate, right_date: NaiveDate) -> bool {
        self.comparison.holds_between(left_date, right_date)
    }

    /// The equivalent constraint with the operands swapped and the comparison dualized.
    ///
    /// The arc-consistency engine enforces every binary constraint in both directions; the
    /// reversed form is what it enforces from right to left.
    pub fn reversed(&self) -> BinaryConstraint {
        BinaryConstraint {
            left: self.right,
            right: self.left,
            comparison: self.comparison.dual(),
        }
    }
}

/// A date constraint of either arity.
///
/// The two variants expose a uniform view to the engine through [`DateConstraint::holds_on_prefix`],
/// which evaluates a constraint against a partial assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateConstraint {
    Unary(UnaryConstraint),
    Binary(BinaryConstraint),
}

impl DateConstraint {
    /// Shorthand for a [`UnaryConstraint`] wrapped in the enum.
    pub fn unary(meeting: usize, comparison: DateComparison, bound: NaiveDate) -> DateConstraint {
        DateConstraint::Unary(UnaryConstraint::new(meeting, comparison, bound))
    }

    /// Shorthand for a [`BinaryConstraint`] wrapped in the enum.
    ///
    /// # Panics
    /// If `left == right`, as for [`BinaryConstraint::new`].
    pub fn binary(left: usize, right: usize, comparison: DateComparison) -> DateConstraint {
        DateConstraint::Binary(BinaryConstraint::new(left, right, comparison))
    }

    /// Whether the partial assignment satisfies this constraint.
    ///
    /// `assignment[i]` is the date committed to meeting `i`. A constraint whose referenced
    /// meetings are not all within the assigned prefix cannot be evaluated yet and counts as
    /// satisfied; this is also what makes constraints referencing meetings outside the instance
    /// ineffective rather than erroneous.
    pub fn holds_on_prefix(&self, assignment: &[NaiveDate]) -> bool {
        match self {
            DateConstraint::Unary(unary) => {
                unary.meeting >= assignment.len() || unary.is_satisfied_by(assignment[unary.meeting])
            }
            DateConstraint::Binary(binary) => {
                binary.left >= assignment.len()
                    || binary.right >= assignment.len()
                    || binary.is_satisfied_by(assignment[binary.left], assignment[binary.right])
            }
        }
    }
}

impl From<UnaryConstraint> for DateConstraint {
    fn from(constraint: UnaryConstraint) -> DateConstraint {
        DateConstraint::Unary(constraint)
    }
}

impl From<BinaryConstraint> for DateConstraint {
    fn from(constraint: BinaryConstraint) -> DateConstraint {
        DateConstraint::Binary(constraint)
    }
}
