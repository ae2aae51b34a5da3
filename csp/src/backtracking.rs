//! Depth-first backtracking search with pluggable heuristics.

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::domains::Domains;
use crate::inference::{ac3_with_queue, forward_check};
use crate::model::{Csp, VarId};
use crate::outcome::{CspOutcome, CspStats, CspTermination};

/// Which unassigned variable to branch on next.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VariableOrder {
    /// Lowest-numbered unassigned variable.
    #[default]
    FirstUnassigned,
    /// Fewest legal values left (minimum remaining values).
    Mrv,
    /// MRV, ties broken by most constraints on unassigned variables.
    MrvDegree,
}

/// Order in which a variable's values are tried.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueOrder {
    /// Original domain order.
    #[default]
    DomainOrder,
    /// Values that rule out the fewest neighbor values first.
    LeastConstraining,
}

/// Propagation run after each assignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Inference {
    #[default]
    None,
    ForwardChecking,
    /// Maintain arc consistency: AC-3 seeded with the arcs into the
    /// assigned variable.
    Mac,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BacktrackingConfig {
    pub variable_order: VariableOrder,
    pub value_order: ValueOrder,
    pub inference: Inference,
    /// Stop with `BudgetExceeded` after this many assignments.
    pub max_assignments: Option<u64>,
}

/// Backtracking search.
///
/// Assigning a value reduces the variable's current domain to that value,
/// then runs the configured inference. All domain changes below a decision
/// point are undone from the trail before the next value is tried.
pub fn backtracking_search<V: Clone>(csp: &Csp<V>, config: &BacktrackingConfig) -> CspOutcome<V> {
    let mut solver = Solver {
        csp,
        config,
        domains: Domains::full(csp),
        assigned: vec![None; csp.len()],
        assignments: 0,
        backtracks: 0,
    };
    let termination = match solver.backtrack() {
        Step::Solved => CspTermination::Solved(csp.materialize(&solver.assigned)),
        Step::Failed => CspTermination::Unsatisfiable,
        Step::OutOfBudget => CspTermination::BudgetExceeded,
    };
    let stats = CspStats {
        assignments: solver.assignments,
        backtracks: solver.backtracks,
        prunings: solver.domains.prunings(),
        ..CspStats::default()
    };
    debug!(
        solved = matches!(termination, CspTermination::Solved(_)),
        assignments = stats.assignments,
        backtracks = stats.backtracks,
        "backtracking finished"
    );
    CspOutcome { termination, stats }
}

enum Step {
    Solved,
    Failed,
    OutOfBudget,
}

struct Solver<'c, V> {
    csp: &'c Csp<V>,
    config: &'c BacktrackingConfig,
    domains: Domains,
    /// Original-domain index per variable.
    assigned: Vec<Option<usize>>,
    assignments: u64,
    backtracks: u64,
}

impl<V> Solver<'_, V> {
    fn backtrack(&mut self) -> Step {
        let Some(var) = self.select_unassigned() else {
            return Step::Solved;
        };
        for idx in self.order_values(var) {
            if self.csp.conflicts_idx(var, idx, &self.assigned) > 0 {
                continue;
            }
            if self
                .config
                .max_assignments
                .is_some_and(|max| self.assignments >= max)
            {
                return Step::OutOfBudget;
            }
            self.assignments += 1;
            self.assigned[var.index()] = Some(idx);
            trace!(var = self.csp.name(var), value = idx, "assign");

            let mark = self.domains.checkpoint();
            self.domains.restrict_to(var, idx);
            if self.infer(var, idx) {
                match self.backtrack() {
                    Step::Failed => {}
                    done => return done,
                }
            }
            self.domains.undo_to(mark);
            self.assigned[var.index()] = None;
        }
        self.backtracks += 1;
        trace!(var = self.csp.name(var), "backtrack");
        Step::Failed
    }

    fn select_unassigned(&self) -> Option<VarId> {
        let mut unassigned = self
            .csp
            .variables()
            .filter(|var| self.assigned[var.index()].is_none());
        match self.config.variable_order {
            VariableOrder::FirstUnassigned => unassigned.next(),
            VariableOrder::Mrv => unassigned.min_by_key(|&var| self.legal_values(var)),
            VariableOrder::MrvDegree => {
                unassigned.min_by_key(|&var| (self.legal_values(var), Reverse(self.degree(var))))
            }
        }
    }

    /// Current-domain values of `var` consistent with the assignment.
    fn legal_values(&self, var: VarId) -> usize {
        self.domains
            .indices(var)
            .filter(|&idx| self.csp.conflicts_idx(var, idx, &self.assigned) == 0)
            .count()
    }

    fn degree(&self, var: VarId) -> usize {
        self.csp
            .neighbors(var)
            .iter()
            .filter(|n| self.assigned[n.index()].is_none())
            .count()
    }

    fn order_values(&self, var: VarId) -> Vec<usize> {
        let values = self.domains.indices(var);
        match self.config.value_order {
            ValueOrder::DomainOrder => values.collect(),
            ValueOrder::LeastConstraining => {
                let mut keyed: Vec<(usize, usize)> =
                    values.map(|idx| (self.ruled_out(var, idx), idx)).collect();
                keyed.sort_unstable();
                keyed.into_iter().map(|(_, idx)| idx).collect()
            }
        }
    }

    /// Values that `var = domain[idx]` would remove from unassigned
    /// neighbors.
    fn ruled_out(&self, var: VarId, idx: usize) -> usize {
        self.csp
            .neighbors(var)
            .iter()
            .filter(|n| self.assigned[n.index()].is_none())
            .map(|&other| {
                self.domains
                    .indices(other)
                    .filter(|&o| !self.csp.compatible(var, idx, other, o))
                    .count()
            })
            .sum()
    }

    fn infer(&mut self, var: VarId, idx: usize) -> bool {
        match self.config.inference {
            Inference::None => true,
            Inference::ForwardChecking => {
                forward_check(self.csp, &mut self.domains, var, idx, &self.assigned)
            }
            Inference::Mac => {
                let queue = self.csp.neighbors(var).iter().map(|&n| (n, var)).collect();
                ac3_with_queue(self.csp, &mut self.domains, queue)
            }
        }
    }
}
