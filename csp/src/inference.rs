//! Constraint propagation: forward checking and AC-3.

use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::domains::Domains;
use crate::model::{Assignment, Csp, VarId};

/// Prune the current domains of `var`'s unassigned neighbors down to the
/// values compatible with `var = domain[idx]`.
///
/// `assigned` maps each variable to an original-domain index. Returns
/// `false` when some neighbor is left with no values.
pub fn forward_check<V>(
    csp: &Csp<V>,
    domains: &mut Domains,
    var: VarId,
    idx: usize,
    assigned: &[Option<usize>],
) -> bool {
    for &other in csp.neighbors(var) {
        if assigned[other.index()].is_some() {
            continue;
        }
        let doomed: Vec<usize> = domains
            .indices(other)
            .filter(|&o| !csp.compatible(var, idx, other, o))
            .collect();
        for o in doomed {
            domains.prune(other, o);
        }
        if domains.is_wiped_out(other) {
            trace!(var = csp.name(var), wiped = csp.name(other), "forward check wipe-out");
            return false;
        }
    }
    true
}

/// Remove the values of `xi` that have no support in `xj`. Returns whether
/// anything was removed.
pub fn revise<V>(csp: &Csp<V>, domains: &mut Domains, xi: VarId, xj: VarId) -> bool {
    let unsupported: Vec<usize> = domains
        .indices(xi)
        .filter(|&x| !domains.indices(xj).any(|y| csp.compatible(xi, x, xj, y)))
        .collect();
    for &x in &unsupported {
        domains.prune(xi, x);
    }
    !unsupported.is_empty()
}

/// Run AC-3 from `queue` over the directed arcs `(xi, xj)`.
///
/// Whenever `xi` loses a value, the arcs `(xk, xi)` for every other neighbor
/// `xk` are queued again. Returns `false` on a domain wipe-out.
pub fn ac3_with_queue<V>(
    csp: &Csp<V>,
    domains: &mut Domains,
    mut queue: VecDeque<(VarId, VarId)>,
) -> bool {
    while let Some((xi, xj)) = queue.pop_front() {
        if revise(csp, domains, xi, xj) {
            if domains.is_wiped_out(xi) {
                trace!(var = csp.name(xi), "arc consistency wipe-out");
                return false;
            }
            for &xk in csp.neighbors(xi) {
                if xk != xj {
                    queue.push_back((xk, xi));
                }
            }
        }
    }
    true
}

/// Every directed arc of the constraint graph, in variable order.
#[must_use]
pub fn all_arcs<V>(csp: &Csp<V>) -> VecDeque<(VarId, VarId)> {
    csp.variables()
        .flat_map(|xi| csp.neighbors(xi).iter().map(move |&xj| (xi, xj)))
        .collect()
}

/// Result of running AC-3 on a whole model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ac3Outcome {
    /// `false` when some domain was wiped out: the model has no solution.
    pub consistent: bool,
    /// Current domains after propagation.
    pub domains: Domains,
}

impl Ac3Outcome {
    /// The solution, when propagation alone left exactly one value per
    /// variable.
    #[must_use]
    pub fn solution<V: Clone>(&self, csp: &Csp<V>) -> Option<Assignment<V>> {
        if !self.consistent {
            return None;
        }
        let mut assignment = Assignment::empty(csp.len());
        for var in csp.variables() {
            if self.domains.size(var) != 1 {
                return None;
            }
            let idx = self.domains.indices(var).next()?;
            assignment.assign(var, csp.domain(var)[idx].clone());
        }
        Some(assignment)
    }
}

/// AC-3 over every arc, starting from the original domains.
#[must_use]
pub fn ac3<V>(csp: &Csp<V>) -> Ac3Outcome {
    let mut domains = Domains::full(csp);
    let consistent = ac3_with_queue(csp, &mut domains, all_arcs(csp));
    debug!(consistent, prunings = domains.prunings(), "ac3 finished");
    Ac3Outcome {
        consistent,
        domains,
    }
}

/// Whether every arc has support in `domains`.
#[must_use]
pub fn is_arc_consistent<V>(csp: &Csp<V>, domains: &Domains) -> bool {
    all_arcs(csp).into_iter().all(|(xi, xj)| {
        domains
            .indices(xi)
            .all(|x| domains.indices(xj).any(|y| csp.compatible(xi, x, xj, y)))
    })
}
