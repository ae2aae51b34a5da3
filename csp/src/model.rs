//! The CSP model: variables, original domains, and binary constraints.

use std::collections::HashMap;
use std::fmt;

use crate::error::CspError;

/// Handle to a variable inside a [`Csp`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VarId(usize);

impl VarId {
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

type Predicate<V> = Box<dyn Fn(&V, &V) -> bool>;

/// One direction of a stored constraint. `flipped` arcs call the predicate
/// with their arguments swapped.
#[derive(Debug, Clone, Copy)]
struct ArcRef {
    constraint: usize,
    flipped: bool,
}

/// A binary constraint satisfaction problem over values of type `V`.
///
/// Variables are numbered in insertion order; that order is the default
/// variable ordering for every solver. Several constraints between the same
/// pair are conjoined.
pub struct Csp<V> {
    names: Vec<String>,
    by_name: HashMap<String, VarId>,
    domains: Vec<Vec<V>>,
    predicates: Vec<Predicate<V>>,
    arcs: HashMap<(VarId, VarId), Vec<ArcRef>>,
    neighbors: Vec<Vec<VarId>>,
}

impl<V> Csp<V> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            names: Vec::new(),
            by_name: HashMap::new(),
            domains: Vec::new(),
            predicates: Vec::new(),
            arcs: HashMap::new(),
            neighbors: Vec::new(),
        }
    }

    /// Add a variable with its original domain. Domain order is the default
    /// value ordering.
    ///
    /// # Errors
    ///
    /// Returns [`CspError::DuplicateVariable`] if `name` is taken.
    pub fn add_variable(&mut self, name: &str, domain: Vec<V>) -> Result<VarId, CspError> {
        if self.by_name.contains_key(name) {
            return Err(CspError::DuplicateVariable {
                name: name.to_string(),
            });
        }
        let id = VarId(self.names.len());
        self.names.push(name.to_string());
        self.by_name.insert(name.to_string(), id);
        self.domains.push(domain);
        self.neighbors.push(Vec::new());
        Ok(id)
    }

    /// Constrain the pair `(a, b)`: `pred(value_of_a, value_of_b)` must
    /// hold in every solution.
    ///
    /// # Errors
    ///
    /// Returns [`CspError::UnknownVariable`] for an id not issued by this
    /// model and [`CspError::SelfConstraint`] when `a == b`.
    pub fn add_constraint<F>(&mut self, a: VarId, b: VarId, pred: F) -> Result<(), CspError>
    where
        F: Fn(&V, &V) -> bool + 'static,
    {
        self.check_var(a)?;
        self.check_var(b)?;
        if a == b {
            return Err(CspError::SelfConstraint {
                name: self.names[a.0].clone(),
            });
        }
        let constraint = self.predicates.len();
        self.predicates.push(Box::new(pred));
        self.arcs.entry((a, b)).or_default().push(ArcRef {
            constraint,
            flipped: false,
        });
        self.arcs.entry((b, a)).or_default().push(ArcRef {
            constraint,
            flipped: true,
        });
        if !self.neighbors[a.0].contains(&b) {
            self.neighbors[a.0].push(b);
            self.neighbors[b.0].push(a);
        }
        Ok(())
    }

    fn check_var(&self, var: VarId) -> Result<(), CspError> {
        if var.0 < self.names.len() {
            Ok(())
        } else {
            Err(CspError::UnknownVariable { var })
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// All variable ids in insertion order.
    pub fn variables(&self) -> impl Iterator<Item = VarId> {
        (0..self.names.len()).map(VarId)
    }

    /// Look up a variable by name.
    #[must_use]
    pub fn var(&self, name: &str) -> Option<VarId> {
        self.by_name.get(name).copied()
    }

    /// Like [`Csp::var`], for callers that treat a missing name as a model
    /// error.
    ///
    /// # Errors
    ///
    /// Returns [`CspError::UnknownName`] if no variable has this name.
    pub fn require_var(&self, name: &str) -> Result<VarId, CspError> {
        self.var(name).ok_or_else(|| CspError::UnknownName {
            name: name.to_string(),
        })
    }

    #[must_use]
    pub fn name(&self, var: VarId) -> &str {
        &self.names[var.0]
    }

    /// Original domain of `var`.
    #[must_use]
    pub fn domain(&self, var: VarId) -> &[V] {
        &self.domains[var.0]
    }

    /// Variables sharing a constraint with `var`, in the order the
    /// constraints were added.
    #[must_use]
    pub fn neighbors(&self, var: VarId) -> &[VarId] {
        &self.neighbors[var.0]
    }

    /// Whether `a = va` and `b = vb` satisfy every constraint on the pair.
    /// Unconstrained pairs are always compatible.
    #[must_use]
    pub fn constraint_ok(&self, a: VarId, va: &V, b: VarId, vb: &V) -> bool {
        self.arcs.get(&(a, b)).map_or(true, |arcs| {
            arcs.iter().all(|arc| {
                let pred = &self.predicates[arc.constraint];
                if arc.flipped {
                    pred(vb, va)
                } else {
                    pred(va, vb)
                }
            })
        })
    }

    /// [`Self::constraint_ok`] on original-domain indices.
    pub(crate) fn compatible(&self, a: VarId, ia: usize, b: VarId, ib: usize) -> bool {
        self.constraint_ok(a, &self.domains[a.0][ia], b, &self.domains[b.0][ib])
    }

    /// Number of assigned neighbors of `var` that conflict with `var = value`.
    #[must_use]
    pub fn conflicts(&self, var: VarId, value: &V, assignment: &Assignment<V>) -> usize {
        self.neighbors[var.0]
            .iter()
            .filter(|&&other| {
                assignment
                    .get(other)
                    .is_some_and(|v| !self.constraint_ok(var, value, other, v))
            })
            .count()
    }

    /// Conflicts of `var = domain[idx]` against an index assignment.
    pub(crate) fn conflicts_idx(
        &self,
        var: VarId,
        idx: usize,
        assigned: &[Option<usize>],
    ) -> usize {
        self.neighbors[var.0]
            .iter()
            .filter(|&&other| {
                assigned[other.0].is_some_and(|o| !self.compatible(var, idx, other, o))
            })
            .count()
    }

    /// Whether `assignment` is complete and violates no constraint.
    #[must_use]
    pub fn is_solution(&self, assignment: &Assignment<V>) -> bool {
        self.variables().all(|var| {
            assignment
                .get(var)
                .is_some_and(|value| self.conflicts(var, value, assignment) == 0)
        })
    }
}

impl<V: PartialEq + 'static> Csp<V> {
    /// Pairwise `!=` over `vars`.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`Self::add_constraint`].
    pub fn add_all_different(&mut self, vars: &[VarId]) -> Result<(), CspError> {
        for (i, &a) in vars.iter().enumerate() {
            for &b in &vars[i + 1..] {
                self.add_constraint(a, b, |x, y| x != y)?;
            }
        }
        Ok(())
    }
}

impl<V: Clone> Csp<V> {
    /// Turn an index assignment into values.
    pub(crate) fn materialize(&self, assigned: &[Option<usize>]) -> Assignment<V> {
        Assignment {
            values: assigned
                .iter()
                .enumerate()
                .map(|(var, idx)| idx.map(|i| self.domains[var][i].clone()))
                .collect(),
        }
    }
}

impl<V> Default for Csp<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> fmt::Debug for Csp<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Csp")
            .field("variables", &self.names)
            .field("constraints", &self.predicates.len())
            .finish_non_exhaustive()
    }
}

/// A possibly partial mapping from variables to values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment<V> {
    values: Vec<Option<V>>,
}

impl<V> Assignment<V> {
    /// An empty assignment for a model with `len` variables.
    #[must_use]
    pub fn empty(len: usize) -> Self {
        Self {
            values: std::iter::repeat_with(|| None).take(len).collect(),
        }
    }

    /// # Panics
    ///
    /// Panics if `var` does not belong to the model this assignment was
    /// sized for.
    pub fn assign(&mut self, var: VarId, value: V) {
        self.values[var.0] = Some(value);
    }

    /// # Panics
    ///
    /// Panics if `var` does not belong to the model this assignment was
    /// sized for.
    pub fn unassign(&mut self, var: VarId) {
        self.values[var.0] = None;
    }

    #[must_use]
    pub fn get(&self, var: VarId) -> Option<&V> {
        self.values.get(var.0).and_then(Option::as_ref)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.values.iter().all(Option::is_some)
    }

    /// Assigned variables with their values, in variable order.
    pub fn iter(&self) -> impl Iterator<Item = (VarId, &V)> {
        self.values
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.as_ref().map(|v| (VarId(i), v)))
    }
}
