//! Problem contracts consumed by the search algorithms.
//!
//! Each family of algorithms reads a small capability trait rather than a
//! shared base type:
//!
//! - [`Problem`]: path-finding problems for tree/graph search
//! - [`OptimizationProblem`]: complete-state problems for local search
//! - [`GeneticProblem`]: sequence genomes for genetic search

use std::fmt::Debug;
use std::hash::Hash;

use crate::node::Node;

/// A state space with an initial state and a goal test.
///
/// # Contract
///
/// - `actions` must be deterministic and finite: same state → same actions
///   in the same order.
/// - `result` must be pure and defined for every action `actions` returns.
/// - `path_cost` must never decrease the cumulative cost. The engine checks
///   this and terminates with a contract violation.
/// - `heuristic` must be non-negative. For A* optimality it must not
///   overestimate the remaining cost; that is the caller's responsibility
///   and is not checked.
pub trait Problem {
    type State: Clone + Eq + Hash + Debug;
    type Action: Clone + Debug;

    fn initial_state(&self) -> Self::State;

    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    fn result(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    fn goal_test(&self, state: &Self::State) -> bool;

    /// Cost of a path that reaches `next` by applying `action` to `state`,
    /// given the cost of reaching `state`. Defaults to one per step.
    fn path_cost(
        &self,
        cost_so_far: f64,
        _state: &Self::State,
        _action: &Self::Action,
        _next: &Self::State,
    ) -> f64 {
        cost_so_far + 1.0
    }

    /// Estimated remaining cost from `node` to a goal. Defaults to zero.
    fn heuristic(&self, _node: &Node<Self::State, Self::Action>) -> f64 {
        0.0
    }
}

/// A complete-state problem whose `value` local search maximizes.
pub trait OptimizationProblem {
    type State: Clone + Debug;
    type Action: Clone + Debug;

    fn initial_state(&self) -> Self::State;

    /// Neighbor moves from `state`.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    fn result(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    fn value(&self, state: &Self::State) -> f64;
}

/// A genome of fixed length drawn from a finite gene pool.
pub trait GeneticProblem {
    type Gene: Clone + PartialEq + Debug;

    /// Genes a mutation may introduce.
    fn gene_pool(&self) -> Vec<Self::Gene>;

    /// Fitness to maximize. Negative values are treated as zero weight
    /// during parent selection.
    fn fitness(&self, individual: &[Self::Gene]) -> f64;
}

/// Apply `actions` in order from the initial state and return the state
/// reached. Used to check that a returned solution really leads to a goal.
pub fn replay<P: Problem + ?Sized>(problem: &P, actions: &[P::Action]) -> P::State {
    actions
        .iter()
        .fold(problem.initial_state(), |state, action| problem.result(&state, action))
}
