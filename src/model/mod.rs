//! Builds up a scheduling instance, from which a solve can be launched.

use chrono::NaiveDate;

use crate::constraints::DateConstraint;
use crate::engine::solver;
use crate::engine::solver::SolverOptions;
use crate::SatisfactionResult;

/// A handle to a meeting registered with a [`Model`].
///
/// It is important to only use handles with the instance of [`Model`] that created them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Meeting {
    id: usize,
}

impl Meeting {
    /// The index identifying this meeting, as referenced by constraints and by
    /// [`Solution::date_of`](crate::Solution::date_of).
    pub fn index(self) -> usize {
        self.id
    }
}

impl From<Meeting> for usize {
    fn from(meeting: Meeting) -> usize {
        meeting.id
    }
}

/// An instance under construction: a shared date range, a number of meetings, and the
/// constraints between them.
#[derive(Debug, Clone)]
pub struct Model {
    range_start: NaiveDate,
    range_end: NaiveDate,
    num_meetings: usize,
    constraints: Vec<DateConstraint>,
}

impl Model {
    /// A model whose meetings may fall on any date in `[range_start, range_end]` inclusive.
    ///
    /// An inverted range is accepted; it leaves every meeting without candidate dates, so any
    /// model with at least one meeting then solves to unsatisfiable.
    pub fn new(range_start: NaiveDate, range_end: NaiveDate) -> Model {
        Model {
            range_start,
            range_end,
            num_meetings: 0,
            constraints: Vec::new(),
        }
    }

    /// Registers a new meeting and returns its handle. Meetings are indexed in registration
    /// order, starting at 0.
    pub fn new_meeting(&mut self) -> Meeting {
        let id = self.num_meetings;
        self.num_meetings += 1;

        Meeting { id }
    }

    /// The number of meetings registered so far.
    pub fn num_meetings(&self) -> usize {
        self.num_meetings
    }

    /// Adds a constraint to the model.
    ///
    /// It is important to only use constraints referencing meetings created on the same instance
    /// of [`Model`]; constraints referencing unknown meetings are ignored by the solver.
    pub fn add_constraint(&mut self, constraint: impl Into<DateConstraint>) {
        self.constraints.push(constraint.into());
    }

    /// Solves this model with the default [`SolverOptions`].
    pub fn solve(&self) -> SatisfactionResult {
        self.solve_with_options(SolverOptions::default())
    }

    /// Solves this model with the given [`SolverOptions`].
    pub fn solve_with_options(&self, options: SolverOptions) -> SatisfactionResult {
        solver::solve_with_options(
            self.num_meetings,
            self.range_start,
            self.range_end,
            &self.constraints,
            options,
        )
    }
}
