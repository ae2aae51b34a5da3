//! Genetic search over fixed-length genomes.
//!
//! Each generation draws two parents with probability proportional to
//! fitness, recombines them at a single random cut point, and mutates the
//! child gene by gene. The population size stays constant.

use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::SearchError;
use crate::problem::{GeneticProblem, OptimizationProblem};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneticConfig {
    pub generations: u64,
    /// Per-gene probability of replacement by a random gene from the pool.
    pub mutation_rate: f64,
    /// Stop early once an individual reaches this fitness.
    pub target_fitness: Option<f64>,
}

impl Default for GeneticConfig {
    fn default() -> Self {
        Self {
            generations: 1000,
            mutation_rate: 0.1,
            target_fitness: None,
        }
    }
}

/// A genome with its cached fitness.
#[derive(Debug, Clone, PartialEq)]
pub struct Individual<G> {
    pub genes: Vec<G>,
    pub fitness: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeneticOutcome<G> {
    /// Fittest individual seen in any generation.
    pub best: Individual<G>,
    /// Generations actually run.
    pub generations: u64,
    pub reached_target: bool,
}

/// Run genetic search from `population`.
///
/// # Errors
///
/// Returns a [`SearchError`] if the population is empty, genomes are empty
/// or of unequal length, the mutation rate is outside `[0, 1]`, or mutation
/// is enabled with an empty gene pool.
pub fn genetic_search<P, R>(
    problem: &P,
    population: Vec<Vec<P::Gene>>,
    config: &GeneticConfig,
    rng: &mut R,
) -> Result<GeneticOutcome<P::Gene>, SearchError>
where
    P: GeneticProblem + ?Sized,
    R: Rng + ?Sized,
{
    validate(&population, config)?;
    let pool = problem.gene_pool();
    if pool.is_empty() && config.mutation_rate > 0.0 {
        return Err(SearchError::EmptyGenePool {
            rate: config.mutation_rate,
        });
    }

    let mut population: Vec<Individual<P::Gene>> = population
        .into_iter()
        .map(|genes| {
            let fitness = problem.fitness(&genes);
            Individual { genes, fitness }
        })
        .collect();
    let mut best = fittest(&population).clone();

    let mut generation = 0;
    while generation < config.generations && !reached(config, best.fitness) {
        let selector = Selector::new(&population);
        let mut next = Vec::with_capacity(population.len());
        for _ in 0..population.len() {
            let x = &population[selector.pick(rng)].genes;
            let y = &population[selector.pick(rng)].genes;
            let mut genes = reproduce(x, y, rng);
            mutate(&mut genes, &pool, config.mutation_rate, rng);
            let fitness = problem.fitness(&genes);
            next.push(Individual { genes, fitness });
        }
        population = next;
        generation += 1;

        let leader = fittest(&population);
        if leader.fitness > best.fitness {
            best = leader.clone();
        }
        trace!(generation, best = best.fitness, "generation");
    }

    let reached_target = reached(config, best.fitness);
    debug!(
        generations = generation,
        best = best.fitness,
        reached_target,
        "genetic search finished"
    );
    Ok(GeneticOutcome {
        best,
        generations: generation,
        reached_target,
    })
}

/// Build a population of `size` individuals by applying one random move to
/// the problem's initial state.
///
/// Works with any [`OptimizationProblem`] whose state is a genome.
pub fn initial_population_from_neighbors<P, R, G>(
    problem: &P,
    size: usize,
    rng: &mut R,
) -> Vec<Vec<G>>
where
    P: OptimizationProblem<State = Vec<G>> + ?Sized,
    R: Rng + ?Sized,
    G: Clone,
{
    let initial = problem.initial_state();
    (0..size)
        .map(|_| {
            let actions = problem.actions(&initial);
            match actions.choose(rng) {
                Some(action) => problem.result(&initial, action),
                None => initial.clone(),
            }
        })
        .collect()
}

fn validate<G>(population: &[Vec<G>], config: &GeneticConfig) -> Result<(), SearchError> {
    let Some(first) = population.first() else {
        return Err(SearchError::EmptyPopulation);
    };
    if first.is_empty() {
        return Err(SearchError::EmptyGenome);
    }
    if let Some((index, genes)) = population
        .iter()
        .enumerate()
        .find(|(_, genes)| genes.len() != first.len())
    {
        return Err(SearchError::InconsistentGenomeLength {
            index,
            expected: first.len(),
            actual: genes.len(),
        });
    }
    let rate = config.mutation_rate;
    if !(0.0..=1.0).contains(&rate) {
        return Err(SearchError::InvalidMutationRate { rate });
    }
    Ok(())
}

fn reached(config: &GeneticConfig, fitness: f64) -> bool {
    config.target_fitness.is_some_and(|target| fitness >= target)
}

/// First individual with the highest fitness. `population` is non-empty.
fn fittest<G>(population: &[Individual<G>]) -> &Individual<G> {
    let mut best = &population[0];
    for individual in &population[1..] {
        if individual.fitness > best.fitness {
            best = individual;
        }
    }
    best
}

/// Fitness-proportional parent selection. Negative and NaN fitness count as
/// zero; if every weight is zero selection is uniform.
enum Selector {
    Weighted(WeightedIndex<f64>),
    Uniform(usize),
}

impl Selector {
    fn new<G>(population: &[Individual<G>]) -> Self {
        let weights = population.iter().map(|i| {
            if i.fitness.is_finite() && i.fitness > 0.0 {
                i.fitness
            } else {
                0.0
            }
        });
        match WeightedIndex::new(weights) {
            Ok(index) => Self::Weighted(index),
            Err(_) => Self::Uniform(population.len()),
        }
    }

    fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        match self {
            Self::Weighted(index) => index.sample(rng),
            Self::Uniform(len) => rng.gen_range(0..*len),
        }
    }
}

/// Single-point crossover: `x[..c] ++ y[c..]` for a random `c` in `0..n`.
fn reproduce<G: Clone, R: Rng + ?Sized>(x: &[G], y: &[G], rng: &mut R) -> Vec<G> {
    let c = rng.gen_range(0..x.len());
    x[..c].iter().chain(&y[c..]).cloned().collect()
}

fn mutate<G: Clone, R: Rng + ?Sized>(genes: &mut [G], pool: &[G], rate: f64, rng: &mut R) {
    if rate <= 0.0 {
        return;
    }
    for gene in genes.iter_mut() {
        if rng.gen::<f64>() < rate {
            if let Some(replacement) = pool.choose(rng) {
                *gene = replacement.clone();
            }
        }
    }
}
