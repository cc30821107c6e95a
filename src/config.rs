//! Engine configuration.
//!
//! [`EvolutionConfig`] holds the parameters that control termination and
//! reproducibility. Strategy behavior is configured on the strategy values
//! themselves (e.g. [`GeneFlip`](crate::GeneFlip)).

use crate::error::{EvolutionError, Result};

/// Configuration for an evolutionary run.
///
/// # Defaults
///
/// ```
/// use bitgene::EvolutionConfig;
///
/// let config = EvolutionConfig::default();
/// assert_eq!(config.generation_limit, 100);
/// assert_eq!(config.fitness_limit, f64::INFINITY);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use bitgene::EvolutionConfig;
///
/// let config = EvolutionConfig::default()
///     .with_fitness_limit(740.0)
///     .with_generation_limit(500)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolutionConfig {
    /// The run stops as soon as the best genome's fitness reaches this value.
    ///
    /// The default of `f64::INFINITY` disables the fitness terminal, so the
    /// run always exhausts `generation_limit`.
    pub fitness_limit: f64,

    /// Maximum number of generations before termination.
    pub generation_limit: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            fitness_limit: f64::INFINITY,
            generation_limit: 100,
            seed: None,
        }
    }
}

impl EvolutionConfig {
    /// Sets the fitness threshold at which the run stops.
    pub fn with_fitness_limit(mut self, limit: f64) -> Self {
        self.fitness_limit = limit;
        self
    }

    /// Sets the generation budget.
    pub fn with_generation_limit(mut self, limit: usize) -> Self {
        self.generation_limit = limit;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.generation_limit == 0 {
            return Err(EvolutionError::InvalidConfig(
                "generation_limit must be at least 1".into(),
            ));
        }
        if self.fitness_limit.is_nan() {
            return Err(EvolutionError::InvalidConfig(
                "fitness_limit must not be NaN".into(),
            ));
        }
        Ok(())
    }
}
