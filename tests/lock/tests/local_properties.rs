//! Local and genetic search on complete-state problems.

use cairn_search::genetic::{genetic_search, GeneticConfig};
use cairn_search::local::{
    hill_climbing, simulated_annealing, AnnealingConfig, HillClimbingConfig, LocalTermination,
};
use cairn_search::{GeneticProblem, OptimizationProblem};
use cairn_worlds::{AbsVariant, NQueens};
use lock_tests::{init_tracing, random_boards};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn hill_climbing_reaches_the_peak_from_every_integer_start() {
    init_tracing();
    for start in 0..=30 {
        let problem = AbsVariant::new(f64::from(start), 30.0, 1.0);
        let outcome = hill_climbing(&problem, &HillClimbingConfig::default());
        assert_eq!(outcome.state, 15.0, "start {start}");
        assert_eq!(outcome.value, 15.0);
        assert_eq!(outcome.termination, LocalTermination::LocalMaximum);
    }
}

#[test]
fn hill_climbing_with_fine_steps_stops_next_to_the_peak() {
    let problem = AbsVariant::new(0.0, 30.0, 0.001);
    let config = HillClimbingConfig { max_steps: 20_000 };
    let outcome = hill_climbing(&problem, &config);
    assert_eq!(outcome.termination, LocalTermination::LocalMaximum);
    assert!((outcome.state - problem.peak()).abs() < 0.002, "{}", outcome.state);

    // The same step is out of reach of the default budget.
    let short = hill_climbing(&problem, &HillClimbingConfig::default());
    assert_eq!(short.termination, LocalTermination::StepBudgetExceeded);
}

#[test]
fn annealing_reports_the_value_of_its_state() {
    let queens = NQueens::new(8);
    for seed in 0..5 {
        let mut rng = StdRng::seed_from_u64(seed);
        let outcome = simulated_annealing(&queens, &AnnealingConfig::default(), &mut rng).unwrap();
        assert_eq!(outcome.state.len(), 8);
        assert!(outcome.state.iter().all(|&row| row < 8));
        assert_eq!(outcome.value, queens.value(&outcome.state));
        assert!(outcome.value <= 28.0);
    }
}

#[test]
fn genetic_best_never_falls_below_the_initial_population() {
    let queens = NQueens::new(8);
    let mut rng = StdRng::seed_from_u64(11);
    let population = random_boards(8, 30, &mut rng);
    let initial_best = population
        .iter()
        .map(|genes| queens.fitness(genes))
        .fold(f64::NEG_INFINITY, f64::max);
    let config = GeneticConfig {
        generations: 100,
        target_fitness: Some(28.0),
        ..GeneticConfig::default()
    };
    let outcome = genetic_search(&queens, population, &config, &mut rng).unwrap();
    assert!(outcome.best.fitness >= initial_best);
    assert_eq!(outcome.best.fitness, queens.fitness(&outcome.best.genes));
    assert!(outcome.best.genes.iter().all(|&row| row < 8));
    assert!(outcome.generations <= 100);
    assert_eq!(outcome.reached_target, outcome.best.fitness >= 28.0);
}
