//! Path-finding guarantees checked across strategies and worlds:
//! shortest and cheapest solutions, replayable plans, and budget
//! terminations that stay distinguishable from exhaustion.

use std::time::Duration;

use cairn_search::informed::astar_search;
use cairn_search::uninformed::{
    breadth_first_graph_search, breadth_first_tree_search, uniform_cost_search,
};
use cairn_search::{replay, Problem, SearchPolicy, Termination};
use cairn_worlds::{romania, standard_searchers, EightPuzzle, GraphProblem, Missionaries};
use lock_tests::{init_tracing, PUZZLE_GOAL};

#[test]
fn breadth_first_is_never_longer_than_any_other_strategy() {
    init_tracing();
    let graph = romania();
    let problem = GraphProblem::new(&graph, "arad", "bucharest").unwrap();
    let policy = SearchPolicy::default();
    let shortest = breadth_first_graph_search(&problem, &policy)
        .solution()
        .unwrap()
        .len();
    assert_eq!(shortest, 3);
    for searcher in standard_searchers::<GraphProblem<'_>>() {
        let result = (searcher.run)(&problem, &policy);
        let length = result.solution().map(|s| s.len());
        assert!(length >= Some(shortest), "{}: {length:?}", searcher.name);
    }
}

/// Reach `target` from 1 by adding one or doubling. Values only grow, so
/// the space is acyclic, but many states are reachable along several paths.
struct AddOrDouble {
    target: u32,
}

impl Problem for AddOrDouble {
    type State = u32;
    type Action = &'static str;

    fn initial_state(&self) -> u32 {
        1
    }

    fn actions(&self, state: &u32) -> Vec<&'static str> {
        let mut actions = Vec::new();
        if *state < self.target {
            actions.push("inc");
        }
        if state * 2 <= self.target {
            actions.push("double");
        }
        actions
    }

    fn result(&self, state: &u32, action: &&'static str) -> u32 {
        match *action {
            "double" => state * 2,
            _ => state + 1,
        }
    }

    fn goal_test(&self, state: &u32) -> bool {
        *state == self.target
    }
}

#[test]
fn tree_and_graph_breadth_first_agree_on_acyclic_spaces() {
    let policy = SearchPolicy::default();
    for target in [1, 2, 7, 23, 40] {
        let problem = AddOrDouble { target };
        let tree = breadth_first_tree_search(&problem, &policy);
        let graph = breadth_first_graph_search(&problem, &policy);
        let tree_plan = tree.solution().unwrap();
        let graph_plan = graph.solution().unwrap();
        assert_eq!(tree_plan.len(), graph_plan.len(), "target {target}");
        assert!(problem.goal_test(&replay(&problem, &tree_plan)));
        assert!(problem.goal_test(&replay(&problem, &graph_plan)));
        assert_eq!(tree.stats.duplicates_suppressed, 0);
        assert!(tree.stats.generated >= graph.stats.generated);
    }
    // 1 2 4 5 10 11 22 23
    let plan = breadth_first_tree_search(&AddOrDouble { target: 23 }, &policy)
        .solution()
        .unwrap();
    assert_eq!(plan.len(), 7);
}

#[test]
fn astar_matches_uniform_cost_from_every_city() {
    let graph = romania();
    let policy = SearchPolicy::default();
    for city in graph.nodes() {
        let problem = GraphProblem::new(&graph, city, "bucharest").unwrap();
        let astar = astar_search(&problem, &policy).path_cost().unwrap();
        let ucs = uniform_cost_search(&problem, &policy).path_cost().unwrap();
        assert!((astar - ucs).abs() < 1e-9, "{city}: A* {astar} vs UCS {ucs}");
    }
}

#[test]
fn astar_on_the_puzzle_is_optimal() {
    let puzzle = EightPuzzle::parse("125340678", PUZZLE_GOAL).unwrap();
    let policy = SearchPolicy::default();
    let astar = astar_search(&puzzle, &policy);
    let ucs = uniform_cost_search(&puzzle, &policy);
    let bfs = breadth_first_graph_search(&puzzle, &policy);
    let steps = bfs.solution().unwrap().len();
    assert_eq!(astar.path_cost(), ucs.path_cost());
    assert_eq!(astar.path_cost(), Some(steps as f64));
    assert!(astar.stats.expansions <= ucs.stats.expansions);
}

#[test]
fn every_solution_replays_to_a_goal() {
    let graph = romania();
    let problem = GraphProblem::new(&graph, "timisoara", "bucharest").unwrap();
    let policy = SearchPolicy::default();
    for searcher in standard_searchers::<GraphProblem<'_>>() {
        let result = (searcher.run)(&problem, &policy);
        let solution = result.solution().unwrap();
        let end = replay(&problem, &solution);
        assert!(problem.goal_test(&end), "{}", searcher.name);
        let states = result.path_states().unwrap();
        assert_eq!(states.len(), solution.len() + 1);
        assert_eq!(states.last(), Some(&end));
        assert_eq!(states.first(), Some(&problem.initial_state()));
    }
}

#[test]
fn missionaries_never_pass_through_an_unsafe_bank() {
    let problem = Missionaries::default();
    let result = breadth_first_graph_search(&problem, &SearchPolicy::default());
    let states = result.path_states().unwrap();
    assert_eq!(states.len(), 12);
    assert!(states.iter().all(|s| s.is_safe()));
    let solution = result.solution().unwrap();
    assert!(solution
        .iter()
        .all(|c| c.missionaries + c.cannibals >= 1 && c.missionaries + c.cannibals <= 2));
    assert!(problem.goal_test(&replay(&problem, &solution)));
}

#[test]
fn exhaustion_is_not_reported_as_a_budget_stop() {
    let problem = Missionaries {
        party: 4,
        boat_capacity: 2,
    };
    let result = breadth_first_graph_search(&problem, &SearchPolicy::default());
    assert_eq!(result.termination, Termination::FrontierExhausted);
    assert!(!result.termination.is_budget_limited());
}

#[test]
fn expansion_budget_stops_the_search() {
    let puzzle = EightPuzzle::parse("806547231", PUZZLE_GOAL).unwrap();
    let policy = SearchPolicy {
        max_expansions: 10,
        ..SearchPolicy::default()
    };
    let result = astar_search(&puzzle, &policy);
    assert_eq!(result.termination, Termination::ExpansionBudgetExceeded);
    assert!(result.termination.is_budget_limited());
    assert_eq!(result.stats.expansions, 10);
    assert!(result.solution().is_none());
}

#[test]
fn time_budget_stops_the_search() {
    let puzzle = EightPuzzle::parse("806547231", PUZZLE_GOAL).unwrap();
    let policy = SearchPolicy {
        time_limit: Some(Duration::ZERO),
        ..SearchPolicy::default()
    };
    let result = astar_search(&puzzle, &policy);
    assert_eq!(result.termination, Termination::TimeBudgetExceeded);
    assert_eq!(result.stats.expansions, 0);
}
