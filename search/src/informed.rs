//! Best-first graph search and its informed instances.
//!
//! The frontier is a [`PriorityFrontier`] keyed by an evaluation `f(node)`
//! with FIFO tie-breaking. Superseded frontier entries are not removed from
//! the heap; they are skipped when popped (lazy deletion).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::frontier::{Frontier, PriorityFrontier};
use crate::node::{Node, NodeId};
use crate::policy::SearchPolicy;
use crate::problem::Problem;
use crate::search::{ContractViolation, SearchResult, SearchRun, Termination};

/// What to do when an already-expanded state is reached again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReopenPolicy {
    /// Expanded states are final.
    Never,
    /// Re-open an expanded state when it is reached by a strictly cheaper
    /// path. Needed for A* optimality with an inconsistent heuristic.
    OnCheaperPath,
}

type Evaluation<'e, S, A> = dyn Fn(&Node<S, A>) -> Result<f64, ContractViolation> + 'e;

#[derive(Debug, Clone, Copy)]
struct OpenEntry {
    node: NodeId,
    f: f64,
}

/// Best-first graph search ordered by `eval`.
///
/// A successor whose state is waiting on the frontier replaces that entry
/// only if its evaluation is strictly lower. The goal test is applied when
/// a node is popped.
pub fn best_first_graph_search<P, E>(
    problem: &P,
    eval: E,
    reopen: ReopenPolicy,
    policy: &SearchPolicy,
) -> SearchResult<P::State, P::Action>
where
    P: Problem + ?Sized,
    E: Fn(&Node<P::State, P::Action>) -> f64,
{
    run_best_first(
        problem,
        &|node| Ok(eval(node)),
        reopen,
        policy,
        "best_first_graph_search",
    )
}

/// Greedy best-first search: `f = h`.
pub fn greedy_best_first_graph_search<P: Problem + ?Sized>(
    problem: &P,
    policy: &SearchPolicy,
) -> SearchResult<P::State, P::Action> {
    run_best_first(
        problem,
        &|node| checked_heuristic(problem, node),
        ReopenPolicy::Never,
        policy,
        "greedy_best_first_graph_search",
    )
}

/// A* search: `f = g + h`, re-opening states reached by a cheaper path.
///
/// With an admissible heuristic the returned solution is optimal; with a
/// consistent one no state is ever re-opened.
pub fn astar_search<P: Problem + ?Sized>(
    problem: &P,
    policy: &SearchPolicy,
) -> SearchResult<P::State, P::Action> {
    run_best_first(
        problem,
        &|node| Ok(node.path_cost + checked_heuristic(problem, node)?),
        ReopenPolicy::OnCheaperPath,
        policy,
        "astar_search",
    )
}

fn checked_heuristic<P: Problem + ?Sized>(
    problem: &P,
    node: &Node<P::State, P::Action>,
) -> Result<f64, ContractViolation> {
    let h = problem.heuristic(node);
    if h.is_nan() || h < 0.0 {
        return Err(ContractViolation::NegativeHeuristic {
            depth: node.depth,
            value: h,
        });
    }
    Ok(h)
}

pub(crate) fn run_best_first<P: Problem + ?Sized>(
    problem: &P,
    eval: &Evaluation<'_, P::State, P::Action>,
    reopen: ReopenPolicy,
    policy: &SearchPolicy,
    algorithm: &'static str,
) -> SearchResult<P::State, P::Action> {
    let mut run = SearchRun::new(problem, policy, algorithm);
    let mut frontier = PriorityFrontier::new();
    let mut open: HashMap<P::State, OpenEntry> = HashMap::new();
    // Path cost at which each state was expanded.
    let mut closed: HashMap<P::State, f64> = HashMap::new();

    let root = run.root();
    let root_f = match eval(&run.arena[root]) {
        Ok(f) => f,
        Err(violation) => return run.finish(Termination::ContractViolation(violation)),
    };
    open.insert(run.arena[root].state.clone(), OpenEntry { node: root, f: root_f });
    frontier.push(root, root_f);

    let termination = 'search: loop {
        run.note_high_water(frontier.high_water());
        if open.is_empty() {
            break run.exhausted();
        }
        if let Some(stop) = run.budget_exceeded() {
            break stop;
        }
        let Some(id) = frontier.pop() else {
            break run.exhausted();
        };
        let f = match open.get(&run.arena[id].state) {
            Some(entry) if entry.node == id => entry.f,
            _ => continue,
        };
        open.remove(&run.arena[id].state);

        if run.is_goal(id) {
            break Termination::GoalReached { node: id };
        }
        closed.insert(run.arena[id].state.clone(), run.arena[id].path_cost);

        let children = match run.expand(id, f) {
            Ok(children) => children,
            Err(stop) => break stop,
        };
        for child in children {
            if !run.within_depth(child) {
                continue;
            }
            let child_f = match eval(&run.arena[child]) {
                Ok(f) => f,
                Err(violation) => break 'search Termination::ContractViolation(violation),
            };
            let node = &run.arena[child];

            if let Some(&expanded_cost) = closed.get(&node.state) {
                if reopen == ReopenPolicy::OnCheaperPath && node.path_cost < expanded_cost {
                    closed.remove(&node.state);
                    run.stats.reopened += 1;
                } else {
                    run.stats.duplicates_suppressed += 1;
                    continue;
                }
            }
            if let Some(entry) = open.get(&node.state) {
                if child_f >= entry.f {
                    run.stats.duplicates_suppressed += 1;
                    continue;
                }
            }
            open.insert(node.state.clone(), OpenEntry { node: child, f: child_f });
            frontier.push(child, child_f);
        }
    };
    run.finish(termination)
}
