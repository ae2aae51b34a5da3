//! Local search over complete states: hill-climbing and simulated
//! annealing.
//!
//! Both keep a single current state and never build a search tree. The
//! problem's `value` is maximized.

use std::time::{Duration, Instant};

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::SearchError;
use crate::problem::OptimizationProblem;

/// Why a local search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocalTermination {
    /// No neighbor is strictly better than the current state.
    LocalMaximum,
    /// The current state has no neighbors.
    NoNeighbors,
    /// `max_steps` moves were made.
    StepBudgetExceeded,
    /// The annealing temperature reached zero.
    ScheduleExhausted,
    /// The annealing `time_limit` elapsed.
    TimeBudgetExceeded,
}

/// Final state of a local search.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalSearchOutcome<S> {
    pub state: S,
    pub value: f64,
    /// Moves accepted (hill-climbing) or schedule ticks used (annealing).
    pub steps: u64,
    pub termination: LocalTermination,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HillClimbingConfig {
    /// Maximum uphill moves before giving up.
    pub max_steps: u64,
}

impl Default for HillClimbingConfig {
    fn default() -> Self {
        Self { max_steps: 10_000 }
    }
}

/// Steepest-ascent hill-climbing.
///
/// Each step evaluates every neighbor and moves to the highest-valued one.
/// Ties go to the neighbor whose action comes first in `actions` order,
/// which makes the result deterministic. The search stops as soon as the
/// best neighbor is not strictly better than the current state, so it halts
/// on plateaus as well as on peaks.
pub fn hill_climbing<P: OptimizationProblem + ?Sized>(
    problem: &P,
    config: &HillClimbingConfig,
) -> LocalSearchOutcome<P::State> {
    let mut current = problem.initial_state();
    let mut current_value = problem.value(&current);
    let mut steps = 0;

    let termination = loop {
        if steps >= config.max_steps {
            break LocalTermination::StepBudgetExceeded;
        }
        let mut best: Option<(P::State, f64)> = None;
        for action in problem.actions(&current) {
            let next = problem.result(&current, &action);
            let value = problem.value(&next);
            let better = match &best {
                Some((_, best_value)) => value > *best_value,
                None => true,
            };
            if better {
                best = Some((next, value));
            }
        }
        let Some((next, value)) = best else {
            break LocalTermination::NoNeighbors;
        };
        if value <= current_value {
            break LocalTermination::LocalMaximum;
        }
        trace!(step = steps, from = current_value, to = value, "uphill move");
        current = next;
        current_value = value;
        steps += 1;
    };

    debug!(steps, value = current_value, ?termination, "hill-climbing finished");
    LocalSearchOutcome {
        state: current,
        value: current_value,
        steps,
        termination,
    }
}

/// Exponential cooling: `T(t) = k · e^(−λt)` for `t < limit`, else `0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpSchedule {
    pub k: f64,
    pub lambda: f64,
    pub limit: u64,
}

impl Default for ExpSchedule {
    fn default() -> Self {
        Self {
            k: 20.0,
            lambda: 0.005,
            limit: 100,
        }
    }
}

impl ExpSchedule {
    /// Temperature at tick `t`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn temperature(&self, t: u64) -> f64 {
        if t < self.limit {
            self.k * (-self.lambda * t as f64).exp()
        } else {
            0.0
        }
    }

    /// Check that the schedule produces a finite, non-increasing
    /// temperature.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidSchedule`] if `k` is not positive and
    /// finite or `lambda` is negative or not finite.
    pub fn validate(&self) -> Result<(), SearchError> {
        if !(self.k.is_finite() && self.k > 0.0) {
            return Err(SearchError::InvalidSchedule {
                detail: format!("k must be positive and finite, got {}", self.k),
            });
        }
        if !(self.lambda.is_finite() && self.lambda >= 0.0) {
            return Err(SearchError::InvalidSchedule {
                detail: format!("lambda must be non-negative and finite, got {}", self.lambda),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnealingConfig {
    pub schedule: ExpSchedule,
    /// Wall-clock budget. `None` disables the check.
    pub time_limit: Option<Duration>,
}

/// Simulated annealing.
///
/// At tick `t` a random neighbor is drawn; it replaces the current state if
/// it is better, or otherwise with probability `exp(Δ / T(t))`. Returns the
/// current state when the temperature reaches zero. Runs are reproducible
/// for a seeded `rng`.
///
/// # Errors
///
/// Returns [`SearchError::InvalidSchedule`] if the schedule fails
/// validation.
pub fn simulated_annealing<P, R>(
    problem: &P,
    config: &AnnealingConfig,
    rng: &mut R,
) -> Result<LocalSearchOutcome<P::State>, SearchError>
where
    P: OptimizationProblem + ?Sized,
    R: Rng + ?Sized,
{
    config.schedule.validate()?;
    let deadline = config.time_limit.map(|limit| Instant::now() + limit);

    let mut current = problem.initial_state();
    let mut current_value = problem.value(&current);
    let mut t: u64 = 0;

    let termination = loop {
        let temperature = config.schedule.temperature(t);
        if temperature <= 0.0 {
            break LocalTermination::ScheduleExhausted;
        }
        if deadline.is_some_and(|d| Instant::now() >= d) {
            break LocalTermination::TimeBudgetExceeded;
        }
        let actions = problem.actions(&current);
        let Some(action) = actions.choose(rng) else {
            break LocalTermination::NoNeighbors;
        };
        let next = problem.result(&current, action);
        let next_value = problem.value(&next);
        let delta = next_value - current_value;
        if delta > 0.0 || rng.gen::<f64>() < (delta / temperature).exp() {
            trace!(t, temperature, delta, "accept");
            current = next;
            current_value = next_value;
        }
        t += 1;
    };

    debug!(ticks = t, value = current_value, ?termination, "annealing finished");
    Ok(LocalSearchOutcome {
        state: current,
        value: current_value,
        steps: t,
        termination,
    })
}
