use fnv::FnvHashSet;
use log::trace;
use log::warn;

use crate::basic_types::EmptyDomain;
use crate::basic_types::PropagationStatus;
use crate::constraints::DateConstraint;
use crate::engine::domain::MeetingDomain;

/// Enforces node consistency: afterwards, every date remaining in a meeting's domain
/// individually satisfies all unary constraints on that meeting.
///
/// Binary constraints are not inspected here. Constraints on the same meeting compose as a
/// conjunction, so the processing order is irrelevant and re-running after convergence removes
/// nothing. Short-circuits as soon as some domain is emptied, since the instance is then known
/// to be unsatisfiable.
pub(crate) fn enforce_node_consistency(
    domains: &mut [MeetingDomain],
    constraints: &[DateConstraint],
) -> PropagationStatus {
    for constraint in constraints {
        if let DateConstraint::Unary(unary) = constraint {
            if unary.meeting >= domains.len() {
                warn!(
                    "ignoring unary constraint on meeting {}, which is not part of the instance",
                    unary.meeting
                );
                continue;
            }

            let domain = &domains[unary.meeting];
            let retained: FnvHashSet<_> =
                domain.iter().filter(|date| unary.is_satisfied_by(*date)).collect();

            if retained.len() < domain.len() {
                trace!(
                    "node consistency narrowed meeting {} from {} to {} candidates",
                    unary.meeting,
                    domain.len(),
                    retained.len()
                );

                let domain = &mut domains[unary.meeting];
                domain.replace(retained);

                if domain.is_empty() {
                    return Err(EmptyDomain {
                        meeting: unary.meeting,
                    });
                }
            }
        }
    }

    Ok(())
}
