//! The constraint-propagation and search pipeline: domain construction, the two filtering
//! passes, and the backtracking search, orchestrated by [`solver::solve`].

pub(crate) mod domain;
pub(crate) mod propagation;
pub(crate) mod search;
pub(crate) mod solver;
