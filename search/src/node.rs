//! Search nodes and the arena that owns them.
//!
//! Nodes never hold references to each other. A node's parent is a
//! [`NodeId`] into the same [`NodeArena`], so the search tree is a flat
//! `Vec` and solution reconstruction is an index walk back to the root.

use std::ops::Index;

use crate::problem::Problem;
use crate::search::ContractViolation;

/// Handle to a node inside a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in its arena.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A state together with the path that reached it.
#[derive(Debug, Clone)]
pub struct Node<S, A> {
    /// The state this node wraps.
    pub state: S,
    /// Parent node (`None` for the root).
    pub parent: Option<NodeId>,
    /// The action applied to the parent to produce this node.
    pub action: Option<A>,
    /// Cumulative path cost from the root (`g`).
    pub path_cost: f64,
    /// Tree depth (root = 0).
    pub depth: u32,
}

/// Append-only store of search nodes.
///
/// Depth-limited search is the one caller that shrinks the arena: it
/// truncates back to a mark after a subtree fails so memory stays
/// proportional to the current path.
#[derive(Debug, Clone)]
pub struct NodeArena<S, A> {
    nodes: Vec<Node<S, A>>,
}

impl<S, A> NodeArena<S, A> {
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Insert a root node for `state`.
    pub fn root(&mut self, state: S) -> NodeId {
        self.push(Node {
            state,
            parent: None,
            action: None,
            path_cost: 0.0,
            depth: 0,
        })
    }

    fn push(&mut self, node: Node<S, A>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node<S, A>> {
        self.nodes.get(id.0)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over all nodes in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node<S, A>)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Drop every node created at or after `len`.
    pub(crate) fn truncate(&mut self, len: usize) {
        self.nodes.truncate(len);
    }

    /// Node ids from the root down to `id`, inclusive.
    #[must_use]
    pub fn path(&self, id: NodeId) -> Vec<NodeId> {
        let mut path = Vec::new();
        let mut current = Some(id);
        while let Some(node_id) = current {
            path.push(node_id);
            current = self.nodes[node_id.0].parent;
        }
        path.reverse();
        path
    }

    /// Generate every successor of `id`, append them to the arena, and
    /// return their ids in `problem.actions` order.
    ///
    /// # Errors
    ///
    /// Returns [`ContractViolation::NegativeStepCost`] if the problem's
    /// `path_cost` decreases the cumulative cost along an edge. Successors
    /// produced before the offending action are kept in the arena.
    pub fn expand<P>(&mut self, problem: &P, id: NodeId) -> Result<Vec<NodeId>, ContractViolation>
    where
        P: Problem<State = S, Action = A> + ?Sized,
    {
        let parent = &self.nodes[id.0];
        let depth = parent.depth + 1;
        let parent_cost = parent.path_cost;
        let mut successors = Vec::new();
        for action in problem.actions(&parent.state) {
            let next = problem.result(&parent.state, &action);
            let cost = problem.path_cost(parent_cost, &parent.state, &action, &next);
            successors.push((next, action, cost));
        }

        let mut children = Vec::with_capacity(successors.len());
        for (state, action, path_cost) in successors {
            let step = path_cost - parent_cost;
            if step.is_nan() || step < 0.0 {
                return Err(ContractViolation::NegativeStepCost { depth, step });
            }
            children.push(self.push(Node {
                state,
                parent: Some(id),
                action: Some(action),
                path_cost,
                depth,
            }));
        }
        Ok(children)
    }
}

impl<S, A: Clone> NodeArena<S, A> {
    /// The action sequence leading from the root to `id`.
    #[must_use]
    pub fn solution(&self, id: NodeId) -> Vec<A> {
        self.path(id)
            .into_iter()
            .filter_map(|n| self.nodes[n.0].action.clone())
            .collect()
    }
}

impl<S: Clone, A> NodeArena<S, A> {
    /// The states visited from the root to `id`, inclusive.
    #[must_use]
    pub fn path_states(&self, id: NodeId) -> Vec<S> {
        self.path(id)
            .into_iter()
            .map(|n| self.nodes[n.0].state.clone())
            .collect()
    }
}

impl<S, A> Default for NodeArena<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, A> Index<NodeId> for NodeArena<S, A> {
    type Output = Node<S, A>;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.0]
    }
}
