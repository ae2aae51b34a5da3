//! Repeated runs make the same decisions: equal trace digests for the
//! deterministic strategies, equal outcomes for seeded solvers.

use cairn_csp::{min_conflicts, MinConflictsConfig};
use cairn_search::genetic::{genetic_search, GeneticConfig};
use cairn_search::informed::{astar_search, greedy_best_first_graph_search};
use cairn_search::local::{simulated_annealing, AnnealingConfig};
use cairn_search::uninformed::{breadth_first_graph_search, iterative_deepening_search};
use cairn_worlds::queens_csp::queens_csp;
use cairn_worlds::{romania, EightPuzzle, GraphProblem, NQueens};
use lock_tests::{fixture_lines, random_boards, trace_digest, tracing_policy, PUZZLE_GOAL};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn trace_digests_repeat_across_runs() {
    let graph = romania();
    let problem = GraphProblem::new(&graph, "lugoj", "bucharest").unwrap();
    let puzzle = EightPuzzle::parse("724506831", PUZZLE_GOAL).unwrap();
    let digests = || {
        vec![
            trace_digest("astar", &astar_search(&problem, &tracing_policy())).unwrap(),
            trace_digest(
                "greedy",
                &greedy_best_first_graph_search(&problem, &tracing_policy()),
            )
            .unwrap(),
            trace_digest("ids", &iterative_deepening_search(&problem, &tracing_policy())).unwrap(),
            trace_digest("puzzle", &astar_search(&puzzle, &tracing_policy())).unwrap(),
        ]
    };
    let first = digests();
    for _ in 0..5 {
        assert_eq!(digests(), first);
    }
}

#[test]
fn different_decisions_give_different_digests() {
    let graph = romania();
    let problem = GraphProblem::new(&graph, "arad", "bucharest").unwrap();
    let bfs = breadth_first_graph_search(&problem, &tracing_policy());
    let astar = astar_search(&problem, &tracing_policy());
    assert_ne!(
        trace_digest("bfs", &bfs).unwrap(),
        trace_digest("astar", &astar).unwrap()
    );
}

#[test]
fn untraced_runs_carry_no_trace() {
    let graph = romania();
    let problem = GraphProblem::new(&graph, "arad", "bucharest").unwrap();
    let result = astar_search(&problem, &cairn_search::SearchPolicy::default());
    assert!(result.trace.is_none());
    assert!(trace_digest("astar", &result).is_err());
}

#[test]
fn seeded_solvers_are_reproducible() {
    let queens = NQueens::new(8);
    let csp = queens_csp(8).unwrap();
    let run = |seed: u64| {
        let mut rng = StdRng::seed_from_u64(seed);
        let annealed = simulated_annealing(&queens, &AnnealingConfig::default(), &mut rng).unwrap();
        let population = random_boards(8, 16, &mut rng);
        let config = GeneticConfig {
            generations: 30,
            ..GeneticConfig::default()
        };
        let evolved = genetic_search(&queens, population, &config, &mut rng).unwrap();
        let repaired = min_conflicts(&csp, &MinConflictsConfig::default(), &mut rng);
        (annealed, evolved, repaired)
    };
    for seed in [0, 1, 99] {
        assert_eq!(run(seed), run(seed), "seed {seed}");
    }
}

#[test]
fn fixture_report_is_stable_in_process() {
    let first = fixture_lines().unwrap();
    assert_eq!(first.len(), 7);
    assert!(first[0].starts_with("romania_astar_digest=sha256:"));
    assert_eq!(first[1], "romania_astar_cost=Some(418.0)");
    assert_eq!(fixture_lines().unwrap(), first);
}
