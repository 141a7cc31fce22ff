//! A CDCL-based SAT solver: decision branching, unit propagation, 1UIP
//! conflict analysis and non-chronological backtracking over CNF formulas.
//!
//! The naive, whole-clause-set propagator in [`propagator`] is intentional:
//! watched literals, VSIDS, restarts, clause-database reduction and proof
//! emission are explicit non-goals of this solver (see `SPEC_FULL.md`).

pub mod analyzer;
pub mod clause;
pub mod decider;
pub mod dimacs;
pub mod error;
pub mod formula;
pub mod literal;
pub mod propagator;
pub mod solver;
pub mod trail;

pub use clause::Clause;
pub use error::InputError;
pub use formula::Formula;
pub use literal::{Literal, Variable};
pub use solver::{SolveResult, Solver};
