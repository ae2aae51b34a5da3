//! Cairn Search: state-space search over user-defined problems.
//!
//! Problems describe themselves through small traits; the engine supplies
//! the strategies. Every strategy is deterministic for a given problem and
//! policy, and the randomized local searches are deterministic for a given
//! seeded RNG.
//!
//! # Crate dependency graph
//!
//! ```text
//! cairn_search  ←  cairn_worlds  →  cairn_csp, cairn_planner
//! (strategies)     (benchmark problems, runner)
//! ```
//!
//! # Key types
//!
//! - [`Problem`]: path-finding contract (actions, result, goal, cost, heuristic)
//! - [`NodeArena`] / [`NodeId`]: search-tree storage with parent back-links
//! - [`Frontier`]: FIFO, LIFO and priority orderings
//! - [`SearchPolicy`]: expansion, depth and time budgets
//! - [`SearchResult`] / [`Termination`]: outcome of a tree/graph search
//! - [`SearchTrace`]: optional expansion log with a content digest
//! - [`OptimizationProblem`] / [`GeneticProblem`]: local and genetic search

#![forbid(unsafe_code)]

pub mod error;
pub mod frontier;
pub mod genetic;
pub mod informed;
pub mod local;
pub mod node;
pub mod policy;
pub mod problem;
pub mod search;
pub mod trace;
pub mod uninformed;

pub use error::SearchError;
pub use frontier::{FifoFrontier, Frontier, LifoFrontier, PriorityFrontier};
pub use node::{Node, NodeArena, NodeId};
pub use policy::SearchPolicy;
pub use problem::{replay, GeneticProblem, OptimizationProblem, Problem};
pub use search::{
    graph_search, tree_search, ContractViolation, SearchResult, SearchStats, Termination,
};
pub use trace::SearchTrace;
