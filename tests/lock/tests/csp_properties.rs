//! Constraint-solver guarantees: AC-3 leaves every arc supported and never
//! removes a solution value, every backtracking configuration returns a
//! valid assignment, and min-conflicts repairs N-Queens.

use cairn_csp::{
    ac3, backtracking_search, is_arc_consistent, min_conflicts, Assignment, BacktrackingConfig,
    Csp, CspTermination, Inference, MinConflictsConfig, ValueOrder, VarId, VariableOrder,
};
use cairn_worlds::queens_csp::{queens_csp, rows};
use cairn_worlds::{zebra, NQueens};
use lock_tests::init_tracing;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn configs() -> Vec<BacktrackingConfig> {
    let mut configs = Vec::new();
    for variable_order in [
        VariableOrder::FirstUnassigned,
        VariableOrder::Mrv,
        VariableOrder::MrvDegree,
    ] {
        for value_order in [ValueOrder::DomainOrder, ValueOrder::LeastConstraining] {
            for inference in [Inference::None, Inference::ForwardChecking, Inference::Mac] {
                configs.push(BacktrackingConfig {
                    variable_order,
                    value_order,
                    inference,
                    max_assignments: None,
                });
            }
        }
    }
    configs
}

fn assert_ac3_sound<V: Clone + PartialEq>(csp: &Csp<V>, solution: &Assignment<V>) {
    let outcome = ac3(csp);
    assert!(outcome.consistent);
    assert!(is_arc_consistent(csp, &outcome.domains));
    for var in csp.variables() {
        let value = solution.get(var).unwrap();
        assert!(
            outcome.domains.values(csp, var).contains(&value),
            "AC-3 removed the solution value of {}",
            csp.name(var)
        );
    }
}

#[test]
fn four_queens_has_exactly_two_solutions() {
    let csp = queens_csp(4).unwrap();
    let vars: Vec<VarId> = csp.variables().collect();
    let count = (0..256usize)
        .filter(|code| {
            let mut assignment = Assignment::empty(vars.len());
            for (i, &var) in vars.iter().enumerate() {
                assignment.assign(var, (code >> (2 * i)) & 3);
            }
            csp.is_solution(&assignment)
        })
        .count();
    assert_eq!(count, 2);
}

#[test]
fn every_configuration_solves_six_queens() {
    init_tracing();
    let csp = queens_csp(6).unwrap();
    for config in configs() {
        let outcome = backtracking_search(&csp, &config);
        let solution = outcome.solution().unwrap_or_else(|| panic!("{config:?}"));
        assert!(csp.is_solution(solution), "{config:?}");
        let board = rows(&csp, solution).unwrap();
        assert!(NQueens::new(6).is_solution(&board), "{config:?}: {board:?}");
    }
}

#[test]
fn every_configuration_finds_the_unique_zebra_solution() {
    let csp = zebra().unwrap();
    let reference = backtracking_search(&csp, &BacktrackingConfig::default());
    let reference = reference.solution().unwrap().clone();
    assert!(csp.is_solution(&reference));
    for config in configs() {
        let outcome = backtracking_search(&csp, &config);
        assert_eq!(outcome.solution(), Some(&reference), "{config:?}");
    }
    assert_ac3_sound(&csp, &reference);
}

#[test]
fn ac3_on_eight_queens_keeps_every_solution_value() {
    let csp = queens_csp(8).unwrap();
    let outcome = backtracking_search(&csp, &BacktrackingConfig::default());
    assert_ac3_sound(&csp, outcome.solution().unwrap());
}

#[test]
fn unsatisfiable_models_are_reported_by_every_configuration() {
    let csp = queens_csp(3).unwrap();
    for config in configs() {
        let outcome = backtracking_search(&csp, &config);
        assert_eq!(outcome.termination, CspTermination::Unsatisfiable, "{config:?}");
    }
}

#[test]
fn min_conflicts_solves_eight_queens_across_seeds() {
    let csp = queens_csp(8).unwrap();
    let mut solved = 0;
    for seed in 0..200 {
        let mut rng = StdRng::seed_from_u64(seed);
        let outcome = min_conflicts(&csp, &MinConflictsConfig::default(), &mut rng);
        if let Some(solution) = outcome.solution() {
            assert!(csp.is_solution(solution));
            let board = rows(&csp, solution).unwrap();
            assert_eq!(NQueens::new(8).conflicts(&board), 0, "seed {seed}");
            solved += 1;
        }
    }
    assert!(solved >= 190, "solved {solved} of 200");
}

#[test]
fn stalled_seeds_are_recovered_by_restarts() {
    let csp = queens_csp(8).unwrap();
    let config = MinConflictsConfig {
        max_steps: 2_000,
        restart_after: None,
    };
    let mut restarted = 0;
    for seed in 0..200 {
        let mut rng = StdRng::seed_from_u64(seed);
        let outcome = min_conflicts(&csp, &config, &mut rng);
        assert_eq!(outcome.stats.restarts, 0);
        if outcome.solution().is_none() {
            assert_eq!(outcome.termination, CspTermination::BudgetExceeded);
            let mut rng = StdRng::seed_from_u64(seed);
            let retry = min_conflicts(&csp, &MinConflictsConfig::default(), &mut rng);
            assert!(retry.solution().is_some(), "seed {seed} with restarts");
            restarted += 1;
        }
    }
    assert!(restarted < 200);
}

#[test]
fn min_conflicts_reports_budget_not_unsatisfiable() {
    let csp = queens_csp(3).unwrap();
    let config = MinConflictsConfig {
        max_steps: 500,
        ..MinConflictsConfig::default()
    };
    let mut rng = StdRng::seed_from_u64(3);
    let outcome = min_conflicts(&csp, &config, &mut rng);
    assert_eq!(outcome.termination, CspTermination::BudgetExceeded);
    assert_eq!(outcome.stats.assignments, 500);
}
