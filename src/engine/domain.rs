use chrono::NaiveDate;
use fnv::FnvHashSet;

use crate::calsat_assert_moderate;

/// The set of candidate dates remaining for one meeting.
///
/// Domains only ever shrink. The filtering passes compute the retained values against immutable
/// borrows and commit them through [`MeetingDomain::replace`]; the search reads domains but never
/// mutates them. Every value a domain ever holds lies within the original range it was
/// constructed over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MeetingDomain {
    values: FnvHashSet<NaiveDate>,
}

impl MeetingDomain {
    /// A domain holding every date in `[range_start, range_end]` inclusive. An inverted range
    /// yields an empty domain.
    pub(crate) fn over_range(range_start: NaiveDate, range_end: NaiveDate) -> MeetingDomain {
        let mut values = FnvHashSet::default();
        values.extend(range_start.iter_days().take_while(|date| *date <= range_end));

        MeetingDomain { values }
    }

    /// `n_meetings` independent domains, each initialized to the full range.
    pub(crate) fn generate(
        n_meetings: usize,
        range_start: NaiveDate,
        range_end: NaiveDate,
    ) -> Vec<MeetingDomain> {
        (0..n_meetings)
            .map(|_| MeetingDomain::over_range(range_start, range_end))
            .collect()
    }

    pub(crate) fn contains(&self, date: NaiveDate) -> bool {
        self.values.contains(&date)
    }

    pub(crate) fn len(&self) -> usize {
        self.values.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The candidate dates, in an unspecified but construction-deterministic order. This is also
    /// the value ordering the search tries.
    pub(crate) fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.values.iter().copied()
    }

    /// Commits a filtering step by swapping in the set of retained values.
    pub(crate) fn replace(&mut self, retained: FnvHashSet<NaiveDate>) {
        calsat_assert_moderate!(
            retained.is_subset(&self.values),
            "a domain must never grow during filtering"
        );

        self.values = retained;
    }
}
