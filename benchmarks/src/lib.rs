//! Shared inputs for the Cairn benchmark suites.

#![forbid(unsafe_code)]

use cairn_search::{NodeArena, NodeId};
use cairn_worlds::{EightPuzzle, PuzzleHeuristic, WorldError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const PUZZLE_GOAL: &str = "012345678";

/// Puzzle starts of increasing optimal length.
pub const PUZZLE_BOARDS: [(&str, &str); 3] = [
    ("short", "125340678"),
    ("medium", "724506831"),
    ("long", "806547231"),
];

/// # Errors
///
/// Returns [`WorldError::InvalidBoard`] for a malformed or unsolvable board.
pub fn puzzle(board: &str, heuristic: PuzzleHeuristic) -> Result<EightPuzzle, WorldError> {
    Ok(EightPuzzle::parse(board, PUZZLE_GOAL)?.with_heuristic(heuristic))
}

/// `n` node handles with pseudo-random priorities from a fixed seed.
#[must_use]
pub fn prioritized_nodes(n: u64) -> Vec<(NodeId, f64)> {
    let mut arena: NodeArena<u64, ()> = NodeArena::new();
    let mut rng = StdRng::seed_from_u64(n);
    (0..n)
        .map(|i| (arena.root(i), f64::from(rng.gen_range(0u32..64))))
        .collect()
}
