//! `f(x) = max/2 - |max/2 - x|`: a tent with a single peak at `max/2`.

use cairn_search::problem::OptimizationProblem;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AbsVariant {
    pub initial: f64,
    pub maximum: f64,
    /// Step size of a move in either direction.
    pub delta: f64,
}

impl AbsVariant {
    #[must_use]
    pub fn new(initial: f64, maximum: f64, delta: f64) -> Self {
        Self {
            initial,
            maximum,
            delta,
        }
    }

    /// Location of the peak.
    #[must_use]
    pub fn peak(&self) -> f64 {
        self.maximum / 2.0
    }
}

/// Starts at 0 with a peak at 15 and steps of 0.01, so the climb takes
/// 1500 moves and fits inside [`HillClimbingConfig::default`].
///
/// [`HillClimbingConfig::default`]: cairn_search::local::HillClimbingConfig
impl Default for AbsVariant {
    fn default() -> Self {
        Self::new(0.0, 30.0, 0.01)
    }
}

impl OptimizationProblem for AbsVariant {
    type State = f64;
    type Action = f64;

    fn initial_state(&self) -> f64 {
        self.initial
    }

    /// The two candidate positions, `x + delta` then `x - delta`.
    fn actions(&self, state: &f64) -> Vec<f64> {
        vec![state + self.delta, state - self.delta]
    }

    fn result(&self, _state: &f64, action: &f64) -> f64 {
        *action
    }

    fn value(&self, state: &f64) -> f64 {
        self.peak() - (self.peak() - state).abs()
    }
}
