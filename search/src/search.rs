//! Search results, termination reasons, and the generic expansion loops.
//!
//! [`tree_search`] and [`graph_search`] are parameterized by a
//! [`Frontier`]; the named strategies in [`crate::uninformed`] and
//! [`crate::informed`] are thin wrappers that pick the frontier.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::frontier::Frontier;
use crate::node::{Node, NodeArena, NodeId};
use crate::policy::{BudgetClock, SearchPolicy};
use crate::problem::Problem;
use crate::trace::SearchTrace;

/// Why a search stopped.
#[derive(Debug, Clone, PartialEq)]
pub enum Termination {
    /// A goal state was popped (or reached, for depth-limited search).
    GoalReached { node: NodeId },
    /// The frontier emptied without reaching a goal: no solution exists in
    /// the searched space.
    FrontierExhausted,
    /// Depth-limited search hit its limit on at least one branch; a
    /// solution may exist deeper.
    Cutoff,
    /// `max_expansions` was reached.
    ExpansionBudgetExceeded,
    /// Children beyond `max_depth` were skipped and nothing else remained,
    /// or iterative deepening ran past `max_depth`.
    DepthBudgetExceeded,
    /// `time_limit` elapsed.
    TimeBudgetExceeded,
    /// The problem broke its contract.
    ContractViolation(ContractViolation),
}

impl Termination {
    /// Stable snake-case label, used in traces and logs.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::GoalReached { .. } => "goal_reached",
            Self::FrontierExhausted => "frontier_exhausted",
            Self::Cutoff => "cutoff",
            Self::ExpansionBudgetExceeded => "expansion_budget_exceeded",
            Self::DepthBudgetExceeded => "depth_budget_exceeded",
            Self::TimeBudgetExceeded => "time_budget_exceeded",
            Self::ContractViolation(_) => "contract_violation",
        }
    }

    /// True when the search stopped because a budget was spent rather than
    /// because the space was searched to completion.
    #[must_use]
    pub fn is_budget_limited(&self) -> bool {
        matches!(
            self,
            Self::Cutoff
                | Self::ExpansionBudgetExceeded
                | Self::DepthBudgetExceeded
                | Self::TimeBudgetExceeded
        )
    }
}

/// A problem callback returned a value the engine cannot use.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ContractViolation {
    /// `heuristic` returned a negative or NaN estimate.
    #[error("heuristic returned {value} at depth {depth}")]
    NegativeHeuristic { depth: u32, value: f64 },
    /// `path_cost` decreased the cumulative cost along an edge.
    #[error("step cost {step} reaching depth {depth}")]
    NegativeStepCost { depth: u32, step: f64 },
}

/// Counters accumulated over one solve call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes whose successors were generated.
    pub expansions: u64,
    /// Successor nodes created.
    pub generated: u64,
    /// Successors discarded because their state was already explored or on
    /// the frontier with an equal or better evaluation.
    pub duplicates_suppressed: u64,
    /// Explored states re-opened because a strictly cheaper path was found.
    pub reopened: u64,
    /// Successors skipped because they would exceed `max_depth`.
    pub depth_skipped: u64,
    /// Largest frontier (or, for depth-limited search, arena) size reached.
    pub frontier_high_water: u64,
}

/// Result of a tree/graph search.
///
/// Always carries the node arena so callers can inspect the explored tree,
/// whatever the termination reason.
#[derive(Debug, Clone)]
pub struct SearchResult<S, A> {
    pub termination: Termination,
    pub arena: NodeArena<S, A>,
    pub stats: SearchStats,
    /// Expansion trace, when `SearchPolicy::record_trace` is set.
    pub trace: Option<SearchTrace>,
}

impl<S, A> SearchResult<S, A> {
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        matches!(self.termination, Termination::GoalReached { .. })
    }

    /// The goal node, if the search reached one.
    #[must_use]
    pub fn goal(&self) -> Option<&Node<S, A>> {
        match self.termination {
            Termination::GoalReached { node } => self.arena.get(node),
            _ => None,
        }
    }

    /// Cumulative cost of the solution path.
    #[must_use]
    pub fn path_cost(&self) -> Option<f64> {
        self.goal().map(|n| n.path_cost)
    }
}

impl<S, A: Clone> SearchResult<S, A> {
    /// Actions from the initial state to the goal.
    #[must_use]
    pub fn solution(&self) -> Option<Vec<A>> {
        match self.termination {
            Termination::GoalReached { node } => Some(self.arena.solution(node)),
            _ => None,
        }
    }
}

impl<S: Clone, A> SearchResult<S, A> {
    /// States from the initial state to the goal, inclusive.
    #[must_use]
    pub fn path_states(&self) -> Option<Vec<S>> {
        match self.termination {
            Termination::GoalReached { node } => Some(self.arena.path_states(node)),
            _ => None,
        }
    }
}

/// Per-call search state shared by every strategy.
pub(crate) struct SearchRun<'p, P: Problem + ?Sized> {
    pub(crate) problem: &'p P,
    pub(crate) arena: NodeArena<P::State, P::Action>,
    pub(crate) stats: SearchStats,
    pub(crate) max_depth: u32,
    trace: Option<SearchTrace>,
    clock: BudgetClock,
    algorithm: &'static str,
}

impl<'p, P: Problem + ?Sized> SearchRun<'p, P> {
    pub(crate) fn new(problem: &'p P, policy: &SearchPolicy, algorithm: &'static str) -> Self {
        Self {
            problem,
            arena: NodeArena::new(),
            stats: SearchStats::default(),
            max_depth: policy.max_depth,
            trace: policy.record_trace.then(|| SearchTrace::new(algorithm)),
            clock: BudgetClock::start(policy),
            algorithm,
        }
    }

    pub(crate) fn root(&mut self) -> NodeId {
        self.arena.root(self.problem.initial_state())
    }

    pub(crate) fn is_goal(&self, id: NodeId) -> bool {
        self.problem.goal_test(&self.arena[id].state)
    }

    pub(crate) fn budget_exceeded(&self) -> Option<Termination> {
        self.clock.check(self.stats.expansions)
    }

    /// Expand `id`, whose evaluation is `f`, and record the event.
    pub(crate) fn expand(&mut self, id: NodeId, f: f64) -> Result<Vec<NodeId>, Termination> {
        let children = self
            .arena
            .expand(self.problem, id)
            .map_err(Termination::ContractViolation)?;
        self.stats.expansions += 1;
        self.stats.generated += children.len() as u64;
        trace!(
            algorithm = self.algorithm,
            node = id.index(),
            depth = self.arena[id].depth,
            f,
            children = children.len(),
            "expand"
        );
        if let Some(t) = self.trace.as_mut() {
            t.record(id, self.arena[id].depth, f, &children);
        }
        Ok(children)
    }

    /// Whether a child at `depth` falls within `max_depth`; counts skips.
    pub(crate) fn within_depth(&mut self, id: NodeId) -> bool {
        if self.arena[id].depth > self.max_depth {
            self.stats.depth_skipped += 1;
            false
        } else {
            true
        }
    }

    pub(crate) fn note_high_water(&mut self, size: usize) {
        self.stats.frontier_high_water = self.stats.frontier_high_water.max(size as u64);
    }

    /// The termination for an empty frontier: exhaustion, unless depth
    /// skipping may have hidden a solution.
    pub(crate) fn exhausted(&self) -> Termination {
        if self.stats.depth_skipped > 0 {
            Termination::DepthBudgetExceeded
        } else {
            Termination::FrontierExhausted
        }
    }

    pub(crate) fn finish(mut self, termination: Termination) -> SearchResult<P::State, P::Action> {
        if let Some(t) = self.trace.as_mut() {
            t.finish(&termination);
        }
        debug!(
            algorithm = self.algorithm,
            termination = termination.label(),
            expansions = self.stats.expansions,
            generated = self.stats.generated,
            "search finished"
        );
        SearchResult {
            termination,
            arena: self.arena,
            stats: self.stats,
            trace: self.trace,
        }
    }
}

/// Generic tree search: never consults an explored set.
///
/// On state graphs with cycles this may revisit states indefinitely; the
/// expansion, depth, and time budgets in `policy` are the only bound.
pub fn tree_search<P, F>(
    problem: &P,
    frontier: F,
    policy: &SearchPolicy,
) -> SearchResult<P::State, P::Action>
where
    P: Problem + ?Sized,
    F: Frontier,
{
    run_tree_search(problem, frontier, policy, "tree_search")
}

pub(crate) fn run_tree_search<P, F>(
    problem: &P,
    mut frontier: F,
    policy: &SearchPolicy,
    algorithm: &'static str,
) -> SearchResult<P::State, P::Action>
where
    P: Problem + ?Sized,
    F: Frontier,
{
    let mut run = SearchRun::new(problem, policy, algorithm);
    let root = run.root();
    frontier.push(root, 0.0);

    let termination = loop {
        run.note_high_water(frontier.high_water());
        if frontier.is_empty() {
            break run.exhausted();
        }
        if let Some(stop) = run.budget_exceeded() {
            break stop;
        }
        let Some(id) = frontier.pop() else {
            break run.exhausted();
        };
        if run.is_goal(id) {
            break Termination::GoalReached { node: id };
        }
        let children = match run.expand(id, run.arena[id].path_cost) {
            Ok(children) => children,
            Err(stop) => break stop,
        };
        for child in children {
            if run.within_depth(child) {
                frontier.push(child, run.arena[child].path_cost);
            }
        }
    };
    run.finish(termination)
}

/// Generic graph search: a state is generated at most once.
///
/// A child is discarded when its state has already been expanded or is
/// already waiting on the frontier (first-seen wins).
pub fn graph_search<P, F>(
    problem: &P,
    frontier: F,
    policy: &SearchPolicy,
) -> SearchResult<P::State, P::Action>
where
    P: Problem + ?Sized,
    F: Frontier,
{
    run_graph_search(problem, frontier, policy, "graph_search")
}

pub(crate) fn run_graph_search<P, F>(
    problem: &P,
    mut frontier: F,
    policy: &SearchPolicy,
    algorithm: &'static str,
) -> SearchResult<P::State, P::Action>
where
    P: Problem + ?Sized,
    F: Frontier,
{
    let mut run = SearchRun::new(problem, policy, algorithm);
    let root = run.root();
    let mut seen: HashSet<P::State> = HashSet::new();
    seen.insert(run.arena[root].state.clone());
    frontier.push(root, 0.0);

    let termination = loop {
        run.note_high_water(frontier.high_water());
        if frontier.is_empty() {
            break run.exhausted();
        }
        if let Some(stop) = run.budget_exceeded() {
            break stop;
        }
        let Some(id) = frontier.pop() else {
            break run.exhausted();
        };
        if run.is_goal(id) {
            break Termination::GoalReached { node: id };
        }
        let children = match run.expand(id, run.arena[id].path_cost) {
            Ok(children) => children,
            Err(stop) => break stop,
        };
        for child in children {
            if !run.within_depth(child) {
                continue;
            }
            if seen.insert(run.arena[child].state.clone()) {
                frontier.push(child, run.arena[child].path_cost);
            } else {
                run.stats.duplicates_suppressed += 1;
            }
        }
    };
    run.finish(termination)
}
