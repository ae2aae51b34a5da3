//! Cairn Worlds: benchmark problems for the Cairn engines.
//!
//! Each module builds one classic problem on top of the engine traits:
//!
//! - path finding: [`eight_puzzle`], [`missionaries`], [`romania`] over
//!   the general [`graph`] problem
//! - local and genetic search: [`queens`], [`abs_variant`]
//! - constraint satisfaction: [`queens_csp`], [`zebra`]
//! - planning: [`monkeys`]
//!
//! [`runner`] runs a set of searchers on one problem and tabulates what
//! each of them did.

#![forbid(unsafe_code)]

pub mod abs_variant;
pub mod eight_puzzle;
pub mod error;
pub mod graph;
pub mod missionaries;
pub mod monkeys;
pub mod queens;
pub mod queens_csp;
pub mod romania;
pub mod runner;
pub mod zebra;

pub use abs_variant::AbsVariant;
pub use eight_puzzle::{EightPuzzle, Move, PuzzleHeuristic};
pub use error::WorldError;
pub use graph::{GraphProblem, UndirectedGraph};
pub use missionaries::{Crossing, Missionaries, RiverState, Side};
pub use monkeys::{monkeys, PlanningProblem};
pub use queens::{NQueens, Relocate};
pub use queens_csp::queens_csp;
pub use romania::romania;
pub use runner::{
    budgeted_breadth_first_tree_search, compare_searchers, render_table, standard_searchers,
    ComparisonRow, NamedSearcher, TREE_SEARCH_MAX_EXPANSIONS,
};
pub use zebra::zebra;
