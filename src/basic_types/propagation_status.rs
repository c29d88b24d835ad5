use thiserror::Error;

/// The result of running one of the domain-filtering passes. A pass either reaches its fixpoint,
/// or it wipes out some meeting's domain, at which point the instance is known to be
/// unsatisfiable and further filtering is pointless.
pub(crate) type PropagationStatus = Result<(), EmptyDomain>;

/// Signals that filtering removed every candidate date from a meeting's domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no candidate dates remain for meeting {meeting}")]
pub(crate) struct EmptyDomain {
    /// The index of the meeting whose domain was emptied.
    pub(crate) meeting: usize,
}
