//! The domain-filtering passes run before the search: node consistency for unary constraints
//! and arc consistency (AC-3) for binary constraints. Both are pruning aids, not certificates of
//! solvability; they never remove a value that participates in a satisfying assignment.

pub(crate) mod arc_consistency;
pub(crate) mod node_consistency;

pub(crate) use arc_consistency::enforce_arc_consistency;
pub(crate) use node_consistency::enforce_node_consistency;
