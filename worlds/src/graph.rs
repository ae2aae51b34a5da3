//! Route finding on a weighted undirected graph.

use std::collections::BTreeMap;

use cairn_search::node::Node;
use cairn_search::problem::Problem;

use crate::error::WorldError;

/// Weighted undirected graph with optional planar node locations.
///
/// Neighbors are kept sorted by name so action order is stable.
#[derive(Debug, Clone, Default)]
pub struct UndirectedGraph {
    edges: BTreeMap<String, BTreeMap<String, f64>>,
    locations: BTreeMap<String, (f64, f64)>,
}

impl UndirectedGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the edge `a`-`b` with length `distance`, replacing any previous
    /// length.
    pub fn connect(&mut self, a: &str, b: &str, distance: f64) {
        self.edges
            .entry(a.to_string())
            .or_default()
            .insert(b.to_string(), distance);
        self.edges
            .entry(b.to_string())
            .or_default()
            .insert(a.to_string(), distance);
    }

    pub fn locate(&mut self, node: &str, x: f64, y: f64) {
        self.locations.insert(node.to_string(), (x, y));
    }

    #[must_use]
    pub fn contains(&self, node: &str) -> bool {
        self.edges.contains_key(node)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.edges.keys().map(String::as_str)
    }

    pub fn neighbors(&self, node: &str) -> impl Iterator<Item = (&str, f64)> {
        self.edges
            .get(node)
            .into_iter()
            .flat_map(|links| links.iter().map(|(n, d)| (n.as_str(), *d)))
    }

    #[must_use]
    pub fn distance(&self, a: &str, b: &str) -> Option<f64> {
        self.edges.get(a)?.get(b).copied()
    }

    /// Straight-line distance between two located nodes.
    #[must_use]
    pub fn straight_line(&self, a: &str, b: &str) -> Option<f64> {
        let (ax, ay) = self.locations.get(a)?;
        let (bx, by) = self.locations.get(b)?;
        Some((ax - bx).hypot(ay - by))
    }
}

/// Travel from `initial` to `goal`. Actions are the names of neighboring
/// nodes; step cost is the edge length.
#[derive(Debug, Clone)]
pub struct GraphProblem<'g> {
    graph: &'g UndirectedGraph,
    initial: String,
    goal: String,
}

impl<'g> GraphProblem<'g> {
    /// # Errors
    ///
    /// Returns [`WorldError::UnknownNode`] if either endpoint is not in
    /// `graph`.
    pub fn new(graph: &'g UndirectedGraph, initial: &str, goal: &str) -> Result<Self, WorldError> {
        for name in [initial, goal] {
            if !graph.contains(name) {
                return Err(WorldError::UnknownNode {
                    name: name.to_string(),
                });
            }
        }
        Ok(Self {
            graph,
            initial: initial.to_string(),
            goal: goal.to_string(),
        })
    }

    #[must_use]
    pub fn goal(&self) -> &str {
        &self.goal
    }
}

impl Problem for GraphProblem<'_> {
    type State = String;
    type Action = String;

    fn initial_state(&self) -> String {
        self.initial.clone()
    }

    fn actions(&self, state: &String) -> Vec<String> {
        self.graph
            .neighbors(state)
            .map(|(n, _)| n.to_string())
            .collect()
    }

    fn result(&self, _state: &String, action: &String) -> String {
        action.clone()
    }

    fn goal_test(&self, state: &String) -> bool {
        *state == self.goal
    }

    fn path_cost(&self, cost_so_far: f64, state: &String, _action: &String, next: &String) -> f64 {
        cost_so_far + self.graph.distance(state, next).unwrap_or(f64::INFINITY)
    }

    /// Straight-line distance to the goal; zero when either end has no
    /// location.
    fn heuristic(&self, node: &Node<String, String>) -> f64 {
        self.graph
            .straight_line(&node.state, &self.goal)
            .unwrap_or(0.0)
    }
}
