//! Min-conflicts local search over complete assignments.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::model::{Csp, VarId};
use crate::outcome::{CspOutcome, CspStats, CspTermination};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinConflictsConfig {
    /// Reassignments before giving up.
    pub max_steps: u64,
    /// Start over from a fresh greedy assignment once this many
    /// reassignments pass without lowering the number of conflicted
    /// variables. `None` never restarts.
    pub restart_after: Option<u64>,
}

impl Default for MinConflictsConfig {
    fn default() -> Self {
        Self {
            max_steps: 100_000,
            restart_after: Some(100),
        }
    }
}

/// Min-conflicts.
///
/// Starts from a greedy complete assignment: variables in order each take a
/// value with the fewest conflicts against those already placed, ties broken
/// at random. Each step picks a conflicted variable at random and moves it
/// to a value with the fewest conflicts, again breaking ties at random.
///
/// A run can settle where every conflicted variable already holds its only
/// best value. With `restart_after` set, a run that has not reduced the
/// number of conflicted variables for that many steps starts over from a
/// new greedy assignment; restarts do not count as steps.
///
/// Never reports `Unsatisfiable`: a failed run ends with `BudgetExceeded`,
/// except that a variable with an empty domain makes the model trivially
/// unsatisfiable.
pub fn min_conflicts<V, R>(csp: &Csp<V>, config: &MinConflictsConfig, rng: &mut R) -> CspOutcome<V>
where
    V: Clone,
    R: Rng + ?Sized,
{
    let mut stats = CspStats::default();
    if csp.variables().any(|var| csp.domain(var).is_empty()) {
        return CspOutcome {
            termination: CspTermination::Unsatisfiable,
            stats,
        };
    }

    let mut current = greedy_start(csp, rng);
    let mut fewest_conflicted = usize::MAX;
    let mut stalled: u64 = 0;
    let mut step = 0;
    let termination = loop {
        let conflicted: Vec<VarId> = csp
            .variables()
            .filter(|&var| {
                current[var.index()].is_some_and(|idx| csp.conflicts_idx(var, idx, &current) > 0)
            })
            .collect();
        let Some(&var) = conflicted.choose(rng) else {
            break CspTermination::Solved(csp.materialize(&current));
        };
        if step >= config.max_steps {
            break CspTermination::BudgetExceeded;
        }
        if conflicted.len() < fewest_conflicted {
            fewest_conflicted = conflicted.len();
            stalled = 0;
        } else if config.restart_after.is_some_and(|limit| stalled >= limit) {
            debug!(step, conflicted = conflicted.len(), "restart");
            current = greedy_start(csp, rng);
            fewest_conflicted = usize::MAX;
            stalled = 0;
            stats.restarts += 1;
            continue;
        }

        let idx = min_conflict_value(csp, var, &current, rng);
        trace!(step, var = csp.name(var), value = idx, conflicted = conflicted.len(), "reassign");
        current[var.index()] = Some(idx);
        stats.assignments += 1;
        step += 1;
        stalled += 1;
    };

    debug!(
        steps = step,
        restarts = stats.restarts,
        solved = matches!(termination, CspTermination::Solved(_)),
        "min-conflicts finished"
    );
    CspOutcome { termination, stats }
}

/// Place variables in order, each on a value with the fewest conflicts
/// against the variables placed before it.
fn greedy_start<V, R: Rng + ?Sized>(csp: &Csp<V>, rng: &mut R) -> Vec<Option<usize>> {
    let mut current = vec![None; csp.len()];
    for var in csp.variables() {
        current[var.index()] = Some(min_conflict_value(csp, var, &current, rng));
    }
    current
}

/// A value of `var` with the fewest conflicts, chosen uniformly among ties.
fn min_conflict_value<V, R: Rng + ?Sized>(
    csp: &Csp<V>,
    var: VarId,
    current: &[Option<usize>],
    rng: &mut R,
) -> usize {
    let counts: Vec<usize> = (0..csp.domain(var).len())
        .map(|idx| csp.conflicts_idx(var, idx, current))
        .collect();
    let fewest = counts.iter().copied().min().unwrap_or(0);
    let best: Vec<usize> = counts
        .iter()
        .enumerate()
        .filter_map(|(idx, &c)| (c == fewest).then_some(idx))
        .collect();
    best.choose(rng).copied().unwrap_or(0)
}
