use fnv::FnvHashSet;
use log::trace;
use log::warn;

use crate::basic_types::EmptyDomain;
use crate::basic_types::PropagationStatus;
use crate::calsat_assert_moderate;
use crate::constraints::BinaryConstraint;
use crate::constraints::DateConstraint;
use crate::engine::domain::MeetingDomain;

/// A directed view of a binary constraint: "every date remaining in the tail's domain must have
/// at least one supporting date in the head's domain".
///
/// Arcs are value objects; two arcs are equal iff tail, head, and constraint are equal, which is
/// what lets the worklist collapse duplicates. Every binary constraint contributes two arcs, one
/// per direction, the reverse one carrying the operand-swapped constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Arc {
    /// The meeting whose domain this arc prunes.
    pub(crate) tail: usize,
    /// The meeting whose domain provides support.
    pub(crate) head: usize,
    /// The constraint enforced along this arc, oriented tail-to-head.
    pub(crate) constraint: BinaryConstraint,
}

impl Arc {
    fn new(constraint: BinaryConstraint) -> Arc {
        Arc {
            tail: constraint.left,
            head: constraint.right,
            constraint,
        }
    }
}

/// Enforces arc consistency over all binary constraints with AC-3.
///
/// The worklist starts out holding every arc and an arc is re-enqueued whenever the domain of
/// its head shrinks, since a tail value may have lost its only support. Revisions are monotone
/// and the value space is finite, so the worklist always drains. The removal order is
/// unspecified; AC-3 is confluent, so the resulting domains do not depend on it. Short-circuits
/// as soon as some domain is emptied.
pub(crate) fn enforce_arc_consistency(
    domains: &mut [MeetingDomain],
    constraints: &[DateConstraint],
) -> PropagationStatus {
    let all_arcs = build_arcs(domains.len(), constraints);
    let mut worklist = all_arcs.clone();

    while let Some(arc) = pop(&mut worklist) {
        if revise(arc, domains) {
            if domains[arc.tail].is_empty() {
                return Err(EmptyDomain { meeting: arc.tail });
            }

            for candidate in &all_arcs {
                if candidate.head == arc.tail {
                    let _ = worklist.insert(*candidate);
                }
            }
        }
    }

    Ok(())
}

/// Both directed arcs for every binary constraint whose meetings are part of the instance.
fn build_arcs(n_meetings: usize, constraints: &[DateConstraint]) -> FnvHashSet<Arc> {
    let mut arcs = FnvHashSet::default();

    for constraint in constraints {
        if let DateConstraint::Binary(binary) = constraint {
            if binary.left >= n_meetings || binary.right >= n_meetings {
                warn!(
                    "ignoring binary constraint between meetings {} and {}, which are not both \
                     part of the instance",
                    binary.left, binary.right
                );
                continue;
            }

            let _ = arcs.insert(Arc::new(*binary));
            let _ = arcs.insert(Arc::new(binary.reversed()));
        }
    }

    arcs
}

fn pop(worklist: &mut FnvHashSet<Arc>) -> Option<Arc> {
    let arc = worklist.iter().next().copied()?;
    let _ = worklist.remove(&arc);

    Some(arc)
}

/// Removes from the tail's domain every date without a supporting date in the head's domain.
/// Returns whether anything was removed.
///
/// The retained set is computed against immutable borrows of both domains and swapped in
/// afterwards; the traversed container is never mutated mid-iteration.
fn revise(arc: Arc, domains: &mut [MeetingDomain]) -> bool {
    calsat_assert_moderate!(
        arc.constraint.left == arc.tail && arc.constraint.right == arc.head,
        "an arc must be oriented the same way as the constraint it carries"
    );

    let tail_domain = &domains[arc.tail];
    let head_domain = &domains[arc.head];

    let retained: FnvHashSet<_> = tail_domain
        .iter()
        .filter(|tail_date| {
            head_domain
                .iter()
                .any(|head_date| arc.constraint.is_satisfied_by(*tail_date, head_date))
        })
        .collect();

    let removed = retained.len() < tail_domain.len();
    if removed {
        trace!(
            "arc ({} -> {}) narrowed meeting {} from {} to {} candidates",
            arc.tail,
            arc.head,
            arc.tail,
            tail_domain.len(),
            retained.len()
        );

        domains[arc.tail].replace(retained);
    }

    removed
}
