//! Solver outcomes shared by backtracking and min-conflicts.

use crate::model::Assignment;

/// Why a CSP solver stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CspTermination<V> {
    /// A complete assignment satisfying every constraint.
    Solved(Assignment<V>),
    /// The search space was exhausted: no solution exists.
    Unsatisfiable,
    /// `max_assignments` or `max_steps` ran out first.
    BudgetExceeded,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CspStats {
    /// Values assigned (backtracking) or reassigned (min-conflicts).
    pub assignments: u64,
    /// Decision points whose every value failed.
    pub backtracks: u64,
    /// Values removed from current domains by assignment and inference.
    pub prunings: u64,
    /// Fresh starts taken by min-conflicts.
    pub restarts: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CspOutcome<V> {
    pub termination: CspTermination<V>,
    pub stats: CspStats,
}

impl<V> CspOutcome<V> {
    /// The solution, if one was found.
    #[must_use]
    pub fn solution(&self) -> Option<&Assignment<V>> {
        match &self.termination {
            CspTermination::Solved(assignment) => Some(assignment),
            _ => None,
        }
    }
}
