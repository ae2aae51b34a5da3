//! The 8-puzzle on a 3×3 board.
//!
//! Boards are written row by row as nine digits with `0` for the blank,
//! e.g. `"012345678"`. Moves name the direction the blank travels.

use cairn_search::node::Node;
use cairn_search::problem::Problem;
use serde::{Deserialize, Serialize};

use crate::error::WorldError;

pub type Board = [u8; 9];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

/// Heuristic used by informed search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PuzzleHeuristic {
    /// Always zero: turns A* into uniform-cost search.
    Zero,
    /// Tiles out of place, blank excluded.
    MisplacedTiles,
    /// Sum of tile distances to their goal squares, blank excluded.
    #[default]
    Manhattan,
}

#[derive(Debug, Clone)]
pub struct EightPuzzle {
    initial: Board,
    goal: Board,
    heuristic: PuzzleHeuristic,
}

impl EightPuzzle {
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidBoard`] if either board is malformed or
    /// the goal is unreachable from the initial board.
    pub fn parse(initial: &str, goal: &str) -> Result<Self, WorldError> {
        let initial = parse_board(initial)?;
        let goal = parse_board(goal)?;
        if inversion_parity(&initial) != inversion_parity(&goal) {
            return Err(WorldError::InvalidBoard {
                board: render(&initial),
                detail: "goal is unreachable (inversion parity differs)".to_string(),
            });
        }
        Ok(Self {
            initial,
            goal,
            heuristic: PuzzleHeuristic::default(),
        })
    }

    #[must_use]
    pub fn with_heuristic(mut self, heuristic: PuzzleHeuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    #[must_use]
    pub fn misplaced_tiles(&self, board: &Board) -> u32 {
        let misplaced = board
            .iter()
            .zip(&self.goal)
            .filter(|(tile, want)| **tile != 0 && tile != want)
            .count();
        u32::try_from(misplaced).unwrap_or(u32::MAX)
    }

    #[must_use]
    pub fn manhattan(&self, board: &Board) -> u32 {
        let mut distance = 0;
        for (square, &tile) in board.iter().enumerate() {
            if tile == 0 {
                continue;
            }
            let Some(target) = self.goal.iter().position(|&t| t == tile) else {
                continue;
            };
            distance += (square % 3).abs_diff(target % 3) + (square / 3).abs_diff(target / 3);
        }
        u32::try_from(distance).unwrap_or(u32::MAX)
    }
}

fn blank(board: &Board) -> usize {
    board.iter().position(|&t| t == 0).unwrap_or(0)
}

impl Problem for EightPuzzle {
    type State = Board;
    type Action = Move;

    fn initial_state(&self) -> Board {
        self.initial
    }

    fn actions(&self, state: &Board) -> Vec<Move> {
        let open = blank(state);
        let mut moves = Vec::with_capacity(4);
        if open > 2 {
            moves.push(Move::Up);
        }
        if open < 6 {
            moves.push(Move::Down);
        }
        if open % 3 > 0 {
            moves.push(Move::Left);
        }
        if open % 3 < 2 {
            moves.push(Move::Right);
        }
        moves
    }

    fn result(&self, state: &Board, action: &Move) -> Board {
        let open = blank(state);
        let target = match action {
            Move::Up => open - 3,
            Move::Down => open + 3,
            Move::Left => open - 1,
            Move::Right => open + 1,
        };
        let mut next = *state;
        next.swap(open, target);
        next
    }

    fn goal_test(&self, state: &Board) -> bool {
        *state == self.goal
    }

    fn heuristic(&self, node: &Node<Board, Move>) -> f64 {
        match self.heuristic {
            PuzzleHeuristic::Zero => 0.0,
            PuzzleHeuristic::MisplacedTiles => f64::from(self.misplaced_tiles(&node.state)),
            PuzzleHeuristic::Manhattan => f64::from(self.manhattan(&node.state)),
        }
    }
}

fn parse_board(text: &str) -> Result<Board, WorldError> {
    let invalid = |detail: &str| WorldError::InvalidBoard {
        board: text.to_string(),
        detail: detail.to_string(),
    };
    let digits: Vec<u8> = text
        .chars()
        .map(|c| c.to_digit(10).and_then(|d| u8::try_from(d).ok()))
        .collect::<Option<_>>()
        .ok_or_else(|| invalid("non-digit character"))?;
    let board: Board = digits
        .try_into()
        .map_err(|_| invalid("expected exactly nine squares"))?;
    let mut seen = [false; 9];
    for &tile in &board {
        let slot = seen
            .get_mut(usize::from(tile))
            .ok_or_else(|| invalid("tile out of range 0..=8"))?;
        if *slot {
            return Err(invalid("repeated tile"));
        }
        *slot = true;
    }
    Ok(board)
}

/// Parity of the number of inverted tile pairs, blank excluded. Boards of
/// different parity are not mutually reachable.
fn inversion_parity(board: &Board) -> bool {
    let tiles: Vec<u8> = board.iter().copied().filter(|&t| t != 0).collect();
    let mut inversions = 0;
    for (i, a) in tiles.iter().enumerate() {
        inversions += tiles[i + 1..].iter().filter(|b| *b < a).count();
    }
    inversions % 2 == 1
}

#[must_use]
pub fn render(board: &Board) -> String {
    board.iter().map(|t| char::from(b'0' + t)).collect()
}
