//! `calsat` is a calendar satisfaction solver: it assigns one date to each of `n` meetings,
//! drawn from a shared inclusive date range, such that a set of unary and binary date
//! constraints all hold.
//!
//! The engine first builds one candidate-date domain per meeting, filters the domains with node
//! consistency (unary constraints) and arc consistency (AC-3 over binary constraints), and then
//! runs a depth-first backtracking search with incremental consistency checking. The solver is
//! complete: every call terminates with either a satisfying [`Solution`] or the certainty that
//! none exists, reported as [`SatisfactionResult::Unsatisfiable`].
//!
//! Instances are either assembled through [`model::Model`] or handed to [`solve`] directly.
//!
//! ```
//! use calsat::constraints::BinaryConstraint;
//! use calsat::constraints::DateComparison;
//! use calsat::model::Model;
//! use chrono::NaiveDate;
//!
//! let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
//! let end = NaiveDate::from_ymd_opt(2024, 3, 3).unwrap();
//!
//! let mut model = Model::new(start, end);
//! let kickoff = model.new_meeting();
//! let retro = model.new_meeting();
//! model.add_constraint(BinaryConstraint::new(
//!     kickoff.index(),
//!     retro.index(),
//!     DateComparison::Before,
//! ));
//!
//! let result = model.solve();
//! let solution = result.solution().expect("a three-day range fits two ordered meetings");
//! assert!(solution.date_of(kickoff) < solution.date_of(retro));
//! ```

pub mod asserts;
mod basic_types;
pub mod constraints;
mod engine;
pub mod model;
mod tests;

pub use basic_types::SatisfactionResult;
pub use basic_types::Solution;
pub use engine::solver::solve;
pub use engine::solver::solve_with_options;
pub use engine::solver::SolverOptions;
