//! Current domains with an undo trail.
//!
//! A current domain is an alive mask over the variable's original domain.
//! Every removal is pushed onto a trail of `(variable, value index)` pairs;
//! backtracking restores a [`Checkpoint`] by replaying the trail in
//! reverse. Nothing is copied on the way down the search tree.

use crate::model::{Csp, VarId};

/// Position on the trail to undo back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint(usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Domains {
    alive: Vec<Vec<bool>>,
    sizes: Vec<usize>,
    trail: Vec<(VarId, usize)>,
    pruned: u64,
}

impl Domains {
    /// Every value of every original domain alive.
    #[must_use]
    pub fn full<V>(csp: &Csp<V>) -> Self {
        let alive: Vec<Vec<bool>> = csp
            .variables()
            .map(|var| vec![true; csp.domain(var).len()])
            .collect();
        let sizes = alive.iter().map(Vec::len).collect();
        Self {
            alive,
            sizes,
            trail: Vec::new(),
            pruned: 0,
        }
    }

    #[must_use]
    pub fn is_alive(&self, var: VarId, idx: usize) -> bool {
        self.alive[var.index()][idx]
    }

    /// Number of values left for `var`.
    #[must_use]
    pub fn size(&self, var: VarId) -> usize {
        self.sizes[var.index()]
    }

    #[must_use]
    pub fn is_wiped_out(&self, var: VarId) -> bool {
        self.sizes[var.index()] == 0
    }

    /// Indices of the values left for `var`, in original-domain order.
    pub fn indices(&self, var: VarId) -> impl Iterator<Item = usize> + '_ {
        self.alive[var.index()]
            .iter()
            .enumerate()
            .filter_map(|(i, &alive)| alive.then_some(i))
    }

    /// The values left for `var`.
    #[must_use]
    pub fn values<'c, V>(&self, csp: &'c Csp<V>, var: VarId) -> Vec<&'c V> {
        let domain = csp.domain(var);
        self.indices(var).map(|i| &domain[i]).collect()
    }

    /// Total removals made through this value, including undone ones.
    #[must_use]
    pub fn prunings(&self) -> u64 {
        self.pruned
    }

    /// Remove `domain[idx]` from `var`. Returns `false` if it was already
    /// gone.
    pub(crate) fn prune(&mut self, var: VarId, idx: usize) -> bool {
        let slot = &mut self.alive[var.index()][idx];
        if !*slot {
            return false;
        }
        *slot = false;
        self.sizes[var.index()] -= 1;
        self.trail.push((var, idx));
        self.pruned += 1;
        true
    }

    /// Reduce `var` to the single value `idx`.
    pub(crate) fn restrict_to(&mut self, var: VarId, idx: usize) {
        for other in 0..self.alive[var.index()].len() {
            if other != idx {
                self.prune(var, other);
            }
        }
    }

    pub(crate) fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.trail.len())
    }

    /// Restore every value removed since `mark`.
    pub(crate) fn undo_to(&mut self, mark: Checkpoint) {
        while self.trail.len() > mark.0 {
            let Some((var, idx)) = self.trail.pop() else {
                break;
            };
            self.alive[var.index()][idx] = true;
            self.sizes[var.index()] += 1;
        }
    }
}
