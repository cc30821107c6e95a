//! Genetic-algorithm optimization over fixed-length binary genomes.
//!
//! A generic, domain-agnostic evolution engine: a population of binary-encoded
//! candidate solutions evolves across generations toward **maximizing** a
//! user-supplied fitness function. The engine is assembled from four pluggable
//! strategies — population generation, selection, crossover, and mutation —
//! tied together by the fitness contract.
//!
//! # Core Traits
//!
//! - [`Populate`]: Produces the initial population
//! - [`Selection`]: Picks a parent pair, weighted by fitness
//! - [`Crossover`]: Recombines two parents into two offspring
//! - [`Mutation`]: Stochastically flips genes in an offspring
//!
//! # Key Types
//!
//! - [`EvolutionConfig`]: Termination parameters (fitness limit, generation budget, seed)
//! - [`EvolutionRunner`]: Executes the evolutionary loop
//! - [`EvolutionResult`]: Final population with statistics
//!
//! # Submodules
//!
//! - [`operators`]: Single-point crossover and gene-flip mutation
//! - [`selection`]: Fitness-proportionate pair selection
//! - [`knapsack`]: 0/1 knapsack fitness evaluator, the example instantiation
//!   of the fitness contract
//!
//! # Fitness contract
//!
//! A fitness function is any `Fn(&Genome) -> Result<f64>` that is
//! deterministic, side-effect-free, and returns a score `>= 0.0` for every
//! genome of the expected length. Higher is better. A genome of the wrong
//! length is a contract violation and must fail with
//! [`EvolutionError::InvalidInput`].
//!
//! # Example
//!
//! ```
//! use bitgene::{EvolutionConfig, EvolutionRunner, RandomPopulate};
//! use bitgene::knapsack::{Item, Knapsack};
//!
//! let problem = Knapsack::new(
//!     vec![Item::new("laptop", 500.0, 2200.0), Item::new("headphones", 150.0, 160.0)],
//!     3000.0,
//! );
//! let populate = RandomPopulate::new(10, problem.len());
//! let config = EvolutionConfig::default()
//!     .with_fitness_limit(650.0)
//!     .with_generation_limit(100)
//!     .with_seed(42);
//!
//! let result = EvolutionRunner::run(&populate, &|g| problem.fitness(g), &config).unwrap();
//! assert!(result.best_fitness >= 0.0);
//! ```
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod error;
pub mod knapsack;
pub mod operators;
pub mod random;
mod runner;
pub mod selection;
mod types;

pub use config::EvolutionConfig;
pub use error::{EvolutionError, Result};
pub use operators::{GeneFlip, SinglePoint};
pub use runner::{EvolutionResult, EvolutionRunner};
pub use selection::RouletteWheel;
pub use types::{
    generate_genome, generate_population, Crossover, Genome, Mutation, Populate, Population,
    RandomPopulate, Selection,
};
