//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only: configuration that
//! cannot be run at all. Runtime outcomes (goal, exhaustion, budgets,
//! contract violations) are expressed via [`crate::search::Termination`]
//! and [`crate::local::LocalTermination`].

/// Typed failure for pre-flight configuration validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SearchError {
    /// Genetic search was given no individuals.
    #[error("population must contain at least one individual")]
    EmptyPopulation,
    /// Genetic search was given zero-length genomes.
    #[error("individuals must contain at least one gene")]
    EmptyGenome,
    /// Individuals of different lengths cannot be recombined.
    #[error("individual {index} has {actual} genes, expected {expected}")]
    InconsistentGenomeLength {
        index: usize,
        expected: usize,
        actual: usize,
    },
    /// Mutation is enabled but the gene pool is empty.
    #[error("gene pool is empty but mutation rate is {rate}")]
    EmptyGenePool { rate: f64 },
    /// Mutation probability outside `[0, 1]`.
    #[error("mutation rate {rate} is outside [0, 1]")]
    InvalidMutationRate { rate: f64 },
    /// Annealing schedule parameters out of range.
    #[error("invalid annealing schedule: {detail}")]
    InvalidSchedule { detail: String },
}
