//! Frontier policies: the single axis of variation between strategies.
//!
//! A frontier stores [`NodeId`]s; the nodes themselves live in the
//! [`crate::node::NodeArena`]. FIFO gives breadth-first order, LIFO gives
//! depth-first order, and [`PriorityFrontier`] gives best-first order.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, VecDeque};

use crate::node::NodeId;

/// An ordered collection of nodes awaiting expansion.
pub trait Frontier {
    /// Add a node. `priority` is the evaluation `f(node)`; FIFO and LIFO
    /// frontiers ignore it.
    fn push(&mut self, id: NodeId, priority: f64);

    /// Remove the next node to expand.
    fn pop(&mut self) -> Option<NodeId>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Largest size the frontier has reached.
    fn high_water(&self) -> usize;
}

/// First-in first-out queue (breadth-first).
#[derive(Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<NodeId>,
    high_water: usize,
}

impl FifoFrontier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for FifoFrontier {
    fn push(&mut self, id: NodeId, _priority: f64) {
        self.queue.push_back(id);
        self.high_water = self.high_water.max(self.queue.len());
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn high_water(&self) -> usize {
        self.high_water
    }
}

/// Last-in first-out stack (depth-first).
#[derive(Debug, Default)]
pub struct LifoFrontier {
    stack: Vec<NodeId>,
    high_water: usize,
}

impl LifoFrontier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for LifoFrontier {
    fn push(&mut self, id: NodeId, _priority: f64) {
        self.stack.push(id);
        self.high_water = self.high_water.max(self.stack.len());
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.stack.pop()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }

    fn high_water(&self) -> usize {
        self.high_water
    }
}

/// The priority ordering key: `(f, insertion_order)`.
///
/// Lower `f` first; equal `f` pops in insertion order so results are
/// reproducible. `f` is compared with `f64::total_cmp`.
#[derive(Debug, Clone, Copy)]
pub struct FrontierKey {
    pub f: f64,
    pub insertion_order: u64,
}

impl PartialEq for FrontierKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierKey {}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f
            .total_cmp(&other.f)
            .then(self.insertion_order.cmp(&other.insertion_order))
    }
}

/// A frontier entry wrapping a node id with its ordering key.
///
/// `BinaryHeap` is a max-heap, so the key is wrapped in `Reverse` to pop
/// the lowest `f` first.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct FrontierEntry {
    key: Reverse<FrontierKey>,
    id: NodeId,
}

/// Min-priority queue keyed by `f` with FIFO tie-breaking.
#[derive(Debug, Default)]
pub struct PriorityFrontier {
    heap: BinaryHeap<FrontierEntry>,
    next_insertion: u64,
    high_water: usize,
}

impl PriorityFrontier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Key of the node that would pop next.
    #[must_use]
    pub fn peek_key(&self) -> Option<FrontierKey> {
        self.heap.peek().map(|e| e.key.0)
    }
}

impl Frontier for PriorityFrontier {
    fn push(&mut self, id: NodeId, priority: f64) {
        let key = FrontierKey {
            f: priority,
            insertion_order: self.next_insertion,
        };
        self.next_insertion += 1;
        self.heap.push(FrontierEntry {
            key: Reverse(key),
            id,
        });
        self.high_water = self.high_water.max(self.heap.len());
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|e| e.id)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn high_water(&self) -> usize {
        self.high_water
    }
}
