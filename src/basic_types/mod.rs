//! Small value types shared across the solver.

mod propagation_status;
mod satisfaction_result;
mod solution;

pub(crate) use propagation_status::EmptyDomain;
pub(crate) use propagation_status::PropagationStatus;
pub use satisfaction_result::SatisfactionResult;
pub use solution::Solution;
