use chrono::NaiveDate;

/// A satisfying assignment produced by the solver: one date per meeting, where index `i` holds
/// the date assigned to meeting `i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    dates: Vec<NaiveDate>,
}

impl Solution {
    pub(crate) fn new(dates: Vec<NaiveDate>) -> Self {
        Solution { dates }
    }

    /// The date assigned to the given meeting.
    ///
    /// # Panics
    /// If `meeting` is not an index of a meeting in the solved instance.
    pub fn date_of(&self, meeting: impl Into<usize>) -> NaiveDate {
        self.dates[meeting.into()]
    }

    /// All assigned dates, indexed by meeting.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// The number of meetings that were scheduled.
    pub fn num_meetings(&self) -> usize {
        self.dates.len()
    }
}
