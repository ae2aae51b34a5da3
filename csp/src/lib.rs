//! Cairn CSP: binary constraint satisfaction.
//!
//! A [`Csp`] holds variables with finite original domains and binary
//! constraints given as predicates. Solvers never mutate the model; current
//! domains live in a separate [`Domains`] value with an undo trail.
//!
//! # Solvers
//!
//! - [`backtracking_search`]: MRV/degree variable ordering, least-constraining
//!   value ordering, forward checking or maintained arc consistency
//! - [`ac3`]: arc-consistency propagation on its own
//! - [`min_conflicts`]: randomized local repair

#![forbid(unsafe_code)]

pub mod backtracking;
pub mod domains;
pub mod error;
pub mod inference;
pub mod min_conflicts;
pub mod model;
pub mod outcome;

pub use backtracking::{
    backtracking_search, BacktrackingConfig, Inference, ValueOrder, VariableOrder,
};
pub use domains::{Checkpoint, Domains};
pub use error::CspError;
pub use inference::{ac3, ac3_with_queue, forward_check, is_arc_consistent, Ac3Outcome};
pub use min_conflicts::{min_conflicts, MinConflictsConfig};
pub use model::{Assignment, Csp, VarId};
pub use outcome::{CspOutcome, CspStats, CspTermination};
