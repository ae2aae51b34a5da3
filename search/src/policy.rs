//! Search budgets.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::search::Termination;

/// Budget and diagnostics configuration shared by every tree/graph search.
///
/// Budgets are checked once per expansion. Exceeding one ends the search
/// with a budget termination, which callers can tell apart from a proven
/// absence of solutions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchPolicy {
    /// Hard cap on node expansions.
    pub max_expansions: u64,
    /// Depth cutoff. Children deeper than this are not generated; for
    /// iterative deepening it is the last limit tried.
    pub max_depth: u32,
    /// Wall-clock budget. `None` disables the check.
    pub time_limit: Option<Duration>,
    /// Record a [`crate::trace::SearchTrace`] of every expansion.
    pub record_trace: bool,
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            max_expansions: 1_000_000,
            max_depth: 1_000,
            time_limit: None,
            record_trace: false,
        }
    }
}

/// Running budget state for one solve call.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BudgetClock {
    max_expansions: u64,
    deadline: Option<Instant>,
}

impl BudgetClock {
    pub(crate) fn start(policy: &SearchPolicy) -> Self {
        Self {
            max_expansions: policy.max_expansions,
            deadline: policy.time_limit.map(|limit| Instant::now() + limit),
        }
    }

    /// The budget termination to report, if any budget is spent.
    pub(crate) fn check(&self, expansions: u64) -> Option<Termination> {
        if expansions >= self.max_expansions {
            return Some(Termination::ExpansionBudgetExceeded);
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Some(Termination::TimeBudgetExceeded),
            _ => None,
        }
    }
}
