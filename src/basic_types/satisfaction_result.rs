use crate::basic_types::Solution;

/// The outcome of a solve call.
///
/// `Unsatisfiable` is an expected, data-dependent outcome ("no schedule exists for this
/// instance") and is never reported through a panic or an error type. The solver is complete, so
/// there is no unknown variant: every call terminates in one of these two states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SatisfactionResult {
    /// A satisfying schedule was found.
    Satisfiable(Solution),
    /// No assignment of dates satisfies the constraints.
    Unsatisfiable,
}

impl SatisfactionResult {
    /// Whether a satisfying schedule was found.
    pub fn is_satisfiable(&self) -> bool {
        matches!(self, SatisfactionResult::Satisfiable(_))
    }

    /// The found schedule, if there is one.
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            SatisfactionResult::Satisfiable(solution) => Some(solution),
            SatisfactionResult::Unsatisfiable => None,
        }
    }
}
