//! Shared fixtures for the lock tests and the `search_fixture` binary.
//!
//! [`fixture_lines`] runs a fixed set of searches and seeded solvers and
//! reports one `key=value` line per run. The same lines are produced
//! in-process and by the binary, so any divergence points at hidden
//! nondeterminism.

#![forbid(unsafe_code)]

use cairn_csp::{min_conflicts, CspTermination, MinConflictsConfig};
use cairn_search::genetic::{genetic_search, GeneticConfig};
use cairn_search::informed::astar_search;
use cairn_search::local::{simulated_annealing, AnnealingConfig};
use cairn_search::uninformed::breadth_first_graph_search;
use cairn_search::{SearchError, SearchPolicy, SearchResult};
use cairn_worlds::queens_csp::{queens_csp, rows};
use cairn_worlds::{romania, EightPuzzle, GraphProblem, Missionaries, NQueens, WorldError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Solved-state board for the 8-puzzle fixtures.
pub const PUZZLE_GOAL: &str = "012345678";

/// Seed used by every randomized fixture.
pub const FIXTURE_SEED: u64 = 2024;

#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("world construction failed: {0}")]
    World(#[from] WorldError),
    #[error("model construction failed: {0}")]
    Csp(#[from] cairn_csp::CspError),
    #[error("solver rejected its input: {0}")]
    Search(#[from] SearchError),
    #[error("trace serialization failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{run} did not record a trace")]
    MissingTrace { run: &'static str },
}

/// Install a `tracing` subscriber that writes through the test harness.
/// Later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// A policy that records the expansion trace.
#[must_use]
pub fn tracing_policy() -> SearchPolicy {
    SearchPolicy {
        record_trace: true,
        ..SearchPolicy::default()
    }
}

/// Digest of the trace recorded for `result`.
///
/// # Errors
///
/// Returns [`FixtureError::MissingTrace`] if the search ran without
/// `record_trace`.
pub fn trace_digest<S, A>(
    run: &'static str,
    result: &SearchResult<S, A>,
) -> Result<String, FixtureError> {
    let trace = result
        .trace
        .as_ref()
        .ok_or(FixtureError::MissingTrace { run })?;
    Ok(trace.digest()?)
}

/// Deterministic `key=value` report of every fixture run.
///
/// # Errors
///
/// Returns a [`FixtureError`] if a fixture cannot be built or a trace
/// cannot be serialized.
pub fn fixture_lines() -> Result<Vec<String>, FixtureError> {
    let mut lines = Vec::new();

    let graph = romania();
    let arad = GraphProblem::new(&graph, "arad", "bucharest")?;
    let result = astar_search(&arad, &tracing_policy());
    lines.push(format!("romania_astar_digest={}", trace_digest("romania_astar", &result)?));
    lines.push(format!("romania_astar_cost={:?}", result.path_cost()));

    let puzzle = EightPuzzle::parse("125340678", PUZZLE_GOAL)?;
    let result = astar_search(&puzzle, &tracing_policy());
    lines.push(format!("puzzle_astar_digest={}", trace_digest("puzzle_astar", &result)?));

    let result = breadth_first_graph_search(&Missionaries::default(), &tracing_policy());
    lines.push(format!(
        "missionaries_bfs_digest={}",
        trace_digest("missionaries_bfs", &result)?
    ));

    let queens = NQueens::new(8);
    let mut rng = StdRng::seed_from_u64(FIXTURE_SEED);
    let annealed = simulated_annealing(&queens, &AnnealingConfig::default(), &mut rng)?;
    lines.push(format!("queens_annealing_state={:?}", annealed.state));

    let mut rng = StdRng::seed_from_u64(FIXTURE_SEED);
    let population = random_boards(8, 20, &mut rng);
    let config = GeneticConfig {
        generations: 50,
        ..GeneticConfig::default()
    };
    let evolved = genetic_search(&queens, population, &config, &mut rng)?;
    lines.push(format!("queens_genetic_best={:?}", evolved.best.genes));

    let csp = queens_csp(8)?;
    let mut rng = StdRng::seed_from_u64(FIXTURE_SEED);
    let outcome = min_conflicts(&csp, &MinConflictsConfig::default(), &mut rng);
    let solved = match &outcome.termination {
        CspTermination::Solved(assignment) => rows(&csp, assignment),
        _ => None,
    };
    lines.push(format!("queens_min_conflicts={solved:?}"));

    Ok(lines)
}

/// `size` random boards of `n` queens.
pub fn random_boards<R: Rng + ?Sized>(n: usize, size: usize, rng: &mut R) -> Vec<Vec<usize>> {
    (0..size)
        .map(|_| (0..n).map(|_| rng.gen_range(0..n)).collect())
        .collect()
}
