//! Uninformed strategies: breadth-first, depth-first, uniform-cost, and
//! iterative deepening.

use tracing::debug;

use crate::frontier::{FifoFrontier, LifoFrontier};
use crate::informed::{run_best_first, ReopenPolicy};
use crate::node::NodeId;
use crate::policy::SearchPolicy;
use crate::problem::Problem;
use crate::search::{run_graph_search, run_tree_search, SearchResult, SearchRun, Termination};

/// Breadth-first tree search. May revisit states on cyclic spaces.
pub fn breadth_first_tree_search<P: Problem + ?Sized>(
    problem: &P,
    policy: &SearchPolicy,
) -> SearchResult<P::State, P::Action> {
    run_tree_search(problem, FifoFrontier::new(), policy, "breadth_first_tree_search")
}

/// Breadth-first graph search: terminates on finite spaces and returns a
/// shallowest solution.
pub fn breadth_first_graph_search<P: Problem + ?Sized>(
    problem: &P,
    policy: &SearchPolicy,
) -> SearchResult<P::State, P::Action> {
    run_graph_search(problem, FifoFrontier::new(), policy, "breadth_first_graph_search")
}

/// Depth-first tree search. On cyclic spaces only the budgets bound it.
pub fn depth_first_tree_search<P: Problem + ?Sized>(
    problem: &P,
    policy: &SearchPolicy,
) -> SearchResult<P::State, P::Action> {
    run_tree_search(problem, LifoFrontier::new(), policy, "depth_first_tree_search")
}

/// Depth-first graph search.
pub fn depth_first_graph_search<P: Problem + ?Sized>(
    problem: &P,
    policy: &SearchPolicy,
) -> SearchResult<P::State, P::Action> {
    run_graph_search(problem, LifoFrontier::new(), policy, "depth_first_graph_search")
}

/// Uniform-cost search: best-first on path cost `g`.
///
/// Expanded states are never re-opened. Step costs must be non-negative;
/// a negative step ends the search with a contract violation.
pub fn uniform_cost_search<P: Problem + ?Sized>(
    problem: &P,
    policy: &SearchPolicy,
) -> SearchResult<P::State, P::Action> {
    run_best_first(
        problem,
        &|node| Ok(node.path_cost),
        ReopenPolicy::Never,
        policy,
        "uniform_cost_search",
    )
}

enum Dls {
    Found(NodeId),
    Cutoff,
    Failure,
    Stopped(Termination),
}

/// Depth-first tree search that does not expand nodes at depth `limit`.
///
/// Returns [`Termination::Cutoff`] when the limit pruned at least one
/// branch, and [`Termination::FrontierExhausted`] when the whole space
/// within the limit was searched. Failed subtrees are dropped from the
/// arena, so memory grows with the depth of the current path only.
pub fn depth_limited_search<P: Problem + ?Sized>(
    problem: &P,
    limit: u32,
    policy: &SearchPolicy,
) -> SearchResult<P::State, P::Action> {
    let mut run = SearchRun::new(problem, policy, "depth_limited_search");
    let termination = depth_limited_pass(&mut run, limit);
    run.finish(termination)
}

/// Repeated depth-limited search with limits `0, 1, 2, …, max_depth`.
///
/// Budgets are shared across passes. Running past `max_depth` reports
/// [`Termination::DepthBudgetExceeded`].
pub fn iterative_deepening_search<P: Problem + ?Sized>(
    problem: &P,
    policy: &SearchPolicy,
) -> SearchResult<P::State, P::Action> {
    let mut run = SearchRun::new(problem, policy, "iterative_deepening_search");
    for limit in 0..=policy.max_depth {
        let termination = depth_limited_pass(&mut run, limit);
        if termination != Termination::Cutoff {
            return run.finish(termination);
        }
        debug!(limit, expansions = run.stats.expansions, "depth limit cut off");
    }
    run.finish(Termination::DepthBudgetExceeded)
}

fn depth_limited_pass<P: Problem + ?Sized>(run: &mut SearchRun<'_, P>, limit: u32) -> Termination {
    run.arena.truncate(0);
    let root = run.root();
    match recursive_dls(run, root, limit) {
        Dls::Found(node) => Termination::GoalReached { node },
        Dls::Cutoff => Termination::Cutoff,
        Dls::Failure => Termination::FrontierExhausted,
        Dls::Stopped(termination) => termination,
    }
}

fn recursive_dls<P: Problem + ?Sized>(run: &mut SearchRun<'_, P>, id: NodeId, limit: u32) -> Dls {
    if run.is_goal(id) {
        return Dls::Found(id);
    }
    let depth = run.arena[id].depth;
    if depth >= limit {
        return Dls::Cutoff;
    }
    if let Some(stop) = run.budget_exceeded() {
        return Dls::Stopped(stop);
    }

    let mark = run.arena.len();
    let children = match run.expand(id, f64::from(depth)) {
        Ok(children) => children,
        Err(stop) => return Dls::Stopped(stop),
    };
    run.note_high_water(run.arena.len());

    let mut cutoff = false;
    for child in children {
        match recursive_dls(run, child, limit) {
            Dls::Found(goal) => return Dls::Found(goal),
            Dls::Cutoff => cutoff = true,
            Dls::Failure => {}
            Dls::Stopped(stop) => return Dls::Stopped(stop),
        }
    }
    run.arena.truncate(mark);

    if cutoff {
        Dls::Cutoff
    } else {
        Dls::Failure
    }
}
