//! The constraint language of the solver: relational restrictions on the dates of one or two
//! meetings. Constraints are immutable once constructed and are evaluated by the engine both
//! against candidate values (during filtering) and against partial assignments (during search).

mod comparison;
mod date_constraint;

pub use comparison::DateComparison;
pub use date_constraint::BinaryConstraint;
pub use date_constraint::DateConstraint;
pub use date_constraint::UnaryConstraint;
