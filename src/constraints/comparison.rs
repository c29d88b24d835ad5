use chrono::NaiveDate;

/// The relational operator of a date constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateComparison {
    Equal,
    NotEqual,
    Before,
    OnOrBefore,
    After,
    OnOrAfter,
}

impl DateComparison {
    /// Evaluates the comparison with `lhs` on the left-hand side and `rhs` on the right.
    pub fn holds_between(self, lhs: NaiveDate, rhs: NaiveDate) -> bool {
        match self {
            DateComparison::Equal => lhs == rhs,
            DateComparison::NotEqual => lhs != rhs,
            DateComparison::Before => lhs < rhs,
            DateComparison::OnOrBefore => lhs <= rhs,
            DateComparison::After => lhs > rhs,
            DateComparison::OnOrAfter => lhs >= rhs,
        }
    }

    /// The comparison obtained when the operands swap sides: `a Before b` holds exactly when
    /// `b After a` does. The (in)equality comparisons are their own duals.
    pub fn dual(self) -> DateComparison {
        match self {
            DateComparison::Equal => DateComparison::Equal,
            DateComparison::NotEqual => DateComparison::NotEqual,
            DateComparison::Before => DateComparison::After,
            DateComparison::OnOrBefore => DateComparison::OnOrAfter,
            DateComparison::After => DateComparison::Before,
            DateComparison::OnOrAfter => DateComparison::OnOrBefore,
        }
    }
}
