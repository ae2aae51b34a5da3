//! Complete-state N-Queens for local and genetic search.
//!
//! A state lists the row of the queen in each column. A move relocates
//! one queen within its column. The value to maximize is the number of
//! non-attacking pairs, `n(n-1)/2` for a solution (28 when `n = 8`).

use cairn_search::problem::{GeneticProblem, OptimizationProblem};

/// Relocate the queen in `column` to `row`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Relocate {
    pub column: usize,
    pub row: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NQueens {
    n: usize,
    initial: Vec<usize>,
}

impl NQueens {
    /// `n` queens, all starting in row 0.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            n,
            initial: vec![0; n],
        }
    }

    /// Start from `initial` instead; its length sets `n`.
    #[must_use]
    pub fn from_rows(initial: Vec<usize>) -> Self {
        Self {
            n: initial.len(),
            initial,
        }
    }

    /// Non-attacking pairs in a solution.
    #[must_use]
    pub fn max_value(&self) -> usize {
        self.n * self.n.saturating_sub(1) / 2
    }

    /// Attacking pairs.
    #[must_use]
    pub fn conflicts(&self, rows: &[usize]) -> usize {
        let mut count = 0;
        for (c1, &r1) in rows.iter().enumerate() {
            for (c2, &r2) in rows.iter().enumerate().skip(c1 + 1) {
                if attacks(r1, c1, r2, c2) {
                    count += 1;
                }
            }
        }
        count
    }

    #[must_use]
    pub fn is_solution(&self, rows: &[usize]) -> bool {
        rows.len() == self.n && self.conflicts(rows) == 0
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn non_attacking_pairs(&self, rows: &[usize]) -> f64 {
        (self.max_value() - self.conflicts(rows)) as f64
    }
}

fn attacks(r1: usize, c1: usize, r2: usize, c2: usize) -> bool {
    r1 == r2 || c1 == c2 || r1.abs_diff(r2) == c1.abs_diff(c2)
}

impl OptimizationProblem for NQueens {
    type State = Vec<usize>;
    type Action = Relocate;

    fn initial_state(&self) -> Vec<usize> {
        self.initial.clone()
    }

    fn actions(&self, state: &Vec<usize>) -> Vec<Relocate> {
        let mut moves = Vec::with_capacity(self.n * self.n.saturating_sub(1));
        for (column, &current) in state.iter().enumerate() {
            for row in (0..self.n).filter(|&r| r != current) {
                moves.push(Relocate { column, row });
            }
        }
        moves
    }

    fn result(&self, state: &Vec<usize>, action: &Relocate) -> Vec<usize> {
        let mut next = state.clone();
        next[action.column] = action.row;
        next
    }

    fn value(&self, state: &Vec<usize>) -> f64 {
        self.non_attacking_pairs(state)
    }
}

impl GeneticProblem for NQueens {
    type Gene = usize;

    fn gene_pool(&self) -> Vec<usize> {
        (0..self.n).collect()
    }

    fn fitness(&self, individual: &[usize]) -> f64 {
        self.non_attacking_pairs(individual)
    }
}
