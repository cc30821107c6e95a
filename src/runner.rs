//! Evolutionary loop execution.
//!
//! [`EvolutionRunner`] orchestrates the complete process per generation:
//! rank by fitness → terminal check → elitism → selection → crossover →
//! mutation → replace.

use crate::config::EvolutionConfig;
use crate::error::{EvolutionError, Result};
use crate::operators::{GeneFlip, SinglePoint};
use crate::random::create_rng;
use crate::selection::RouletteWheel;
use crate::types::{Crossover, Genome, Mutation, Populate, Population, Selection};
use log::debug;

/// Result of an evolutionary run.
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionResult {
    /// The final population, sorted by fitness descending when the run
    /// terminated on the fitness limit; in reproduction order when the
    /// generation budget was exhausted.
    pub population: Population,

    /// The best genome of the final population.
    pub best: Genome,

    /// Fitness of [`best`](Self::best).
    pub best_fitness: f64,

    /// Index of the generation at which the run stopped. Equals
    /// `generation_limit - 1` when the budget was exhausted.
    pub generations: usize,

    /// `true` when the generation budget ran out before any genome reached
    /// the fitness limit.
    pub reached_limit: bool,

    /// Best fitness observed at the ranking step of each generation.
    pub fitness_history: Vec<f64>,
}

/// Executes the evolutionary loop.
///
/// # Usage
///
/// ```
/// use bitgene::{EvolutionConfig, EvolutionRunner, RandomPopulate};
///
/// // Maximize the number of ones in a 16-gene genome.
/// let populate = RandomPopulate::new(30, 16);
/// let config = EvolutionConfig::default()
///     .with_fitness_limit(16.0)
///     .with_generation_limit(200)
///     .with_seed(42);
///
/// let result = EvolutionRunner::run(
///     &populate,
///     &|genome| Ok(genome.iter().map(|&g| f64::from(g)).sum()),
///     &config,
/// ).unwrap();
/// assert!(result.best_fitness > 0.0);
/// ```
pub struct EvolutionRunner;

impl EvolutionRunner {
    /// Runs the evolution with the default strategies: [`RouletteWheel`]
    /// selection, [`SinglePoint`] crossover, and [`GeneFlip`] mutation.
    pub fn run<P, F>(populate: &P, fitness: &F, config: &EvolutionConfig) -> Result<EvolutionResult>
    where
        P: Populate,
        F: Fn(&Genome) -> Result<f64>,
    {
        Self::run_with_strategies(
            populate,
            fitness,
            &RouletteWheel,
            &SinglePoint,
            &GeneFlip::default(),
            config,
        )
    }

    /// Runs the evolution with explicit strategies.
    ///
    /// Per generation:
    ///
    /// 1. Score every genome and stable-sort descending by fitness, so tied
    ///    genomes keep their relative order.
    /// 2. Stop when the best fitness reaches `config.fitness_limit`.
    /// 3. Elitism: the top two genomes survive unmutated.
    /// 4. Run `population_size / 2 - 1` reproduction iterations, each
    ///    appending one mutated offspring pair.
    ///
    /// Elitism plus the offspring pairs reproduces the population size for
    /// even sizes; an odd size under-fills by one slot, so the population
    /// settles to `size - 1` after the first generation.
    ///
    /// # Errors
    ///
    /// - [`EvolutionError::InvalidConfig`] if the configuration is invalid.
    /// - [`EvolutionError::InvalidInput`] if `populate` produces an empty
    ///   population.
    /// - Any error returned by `fitness` or a strategy is propagated.
    pub fn run_with_strategies<P, F, S, C, M>(
        populate: &P,
        fitness: &F,
        selection: &S,
        crossover: &C,
        mutation: &M,
        config: &EvolutionConfig,
    ) -> Result<EvolutionResult>
    where
        P: Populate,
        F: Fn(&Genome) -> Result<f64>,
        S: Selection,
        C: Crossover,
        M: Mutation,
    {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        let mut population = populate.generate(&mut rng);
        if population.is_empty() {
            return Err(EvolutionError::InvalidInput(
                "populate produced an empty population".into(),
            ));
        }

        let mut fitness_history = Vec::with_capacity(config.generation_limit);
        let mut generations = 0;
        let mut reached_limit = true;

        for generation in 0..config.generation_limit {
            generations = generation;

            let scores = population
                .iter()
                .map(fitness)
                .collect::<Result<Vec<f64>>>()?;
            let mut ranked: Vec<(Genome, f64)> = population.into_iter().zip(scores).collect();
            // Stable sort: tied genomes keep their original relative order.
            ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

            let best_score = ranked[0].1;
            fitness_history.push(best_score);
            debug!("generation {generation}: best fitness {best_score}");

            population = ranked.into_iter().map(|(genome, _)| genome).collect();

            if best_score >= config.fitness_limit {
                reached_limit = false;
                break;
            }

            // Elitism: the best two carry over unmutated.
            let mut next_generation: Population = population.iter().take(2).cloned().collect();

            let pairs = (population.len() / 2).saturating_sub(1);
            for _ in 0..pairs {
                let (parent_a, parent_b) =
                    selection.selection_pair(&population, fitness, &mut rng)?;
                let (offspring_a, offspring_b) = crossover.crossover(&parent_a, &parent_b, &mut rng)?;
                next_generation.push(mutation.mutate(offspring_a, &mut rng));
                next_generation.push(mutation.mutate(offspring_b, &mut rng));
            }

            population = next_generation;
        }

        let (best_index, best_fitness) = find_best(&population, fitness)?;
        let best = population[best_index].clone();

        Ok(EvolutionResult {
            population,
            best,
            best_fitness,
            generations,
            reached_limit,
            fitness_history,
        })
    }
}

/// Index and fitness of the best genome, keeping the first on ties.
fn find_best<F>(population: &[Genome], fitness: &F) -> Result<(usize, f64)>
where
    F: Fn(&Genome) -> Result<f64>,
{
    let mut best_index = 0;
    let mut best_fitness = f64::NEG_INFINITY;
    for (index, genome) in population.iter().enumerate() {
        let score = fitness(genome)?;
        if score > best_fitness {
            best_index = index;
            best_fitness = score;
        }
    }
    Ok((best_index, best_fitness))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knapsack::{Item, Knapsack};
    use crate::types::RandomPopulate;

    /// OneMax: maximize the number of ones.
    fn one_max(genome: &Genome) -> Result<f64> {
        Ok(genome.iter().map(|&g| f64::from(g)).sum())
    }

    struct EmptyPopulate;

    impl Populate for EmptyPopulate {
        fn generate<R: rand::Rng>(&self, _rng: &mut R) -> Population {
            Vec::new()
        }
    }

    #[test]
    fn test_onemax_convergence() {
        let _ = env_logger::builder().is_test(true).try_init();

        let populate = RandomPopulate::new(50, 20);
        let config = EvolutionConfig::default()
            .with_fitness_limit(20.0)
            .with_generation_limit(200)
            .with_seed(42);

        let result = EvolutionRunner::run(&populate, &one_max, &config).unwrap();

        assert!(
            result.best_fitness >= 15.0,
            "expected fitness >= 15.0 for 20-bit OneMax, got {}",
            result.best_fitness
        );
        assert_eq!(one_max(&result.best).unwrap(), result.best_fitness);
    }

    #[test]
    fn test_knapsack_two_items_finds_optimum() {
        // Items A(value 10, weight 5) and B(value 7, weight 3) under limit 5:
        // only [1,0] scores 10, [1,1] overflows to 0.
        let knapsack = Knapsack::new(
            vec![Item::new("A", 10.0, 5.0), Item::new("B", 7.0, 3.0)],
            5.0,
        );
        let populate = RandomPopulate::new(64, knapsack.len());
        let config = EvolutionConfig::default()
            .with_fitness_limit(10.0)
            .with_generation_limit(100)
            .with_seed(42);

        let result = EvolutionRunner::run_with_strategies(
            &populate,
            &|g| knapsack.fitness(g),
            &RouletteWheel,
            &SinglePoint,
            &GeneFlip::new(2, 0.5),
            &config,
        )
        .unwrap();

        assert!(!result.reached_limit, "should hit the fitness limit");
        assert!(result.generations < 100);
        assert_eq!(result.best, vec![1, 0]);
        assert_eq!(result.best_fitness, 10.0);
        // Terminated on the fitness limit, so the population is ranked.
        assert_eq!(result.population[0], vec![1, 0]);
    }

    #[test]
    fn test_best_fitness_never_decreases() {
        let populate = RandomPopulate::new(20, 10);
        let config = EvolutionConfig::default()
            .with_generation_limit(50)
            .with_seed(42);

        let result = EvolutionRunner::run(&populate, &one_max, &config).unwrap();

        for window in result.fitness_history.windows(2) {
            assert!(
                window[1] >= window[0],
                "elitism must keep best fitness monotone: {} < {}",
                window[1],
                window[0]
            );
        }
    }

    #[test]
    fn test_generation_limit_exhaustion() {
        let populate = RandomPopulate::new(10, 6);
        // fitness_limit stays at INFINITY, so the budget always runs out.
        let config = EvolutionConfig::default()
            .with_generation_limit(30)
            .with_seed(42);

        let result = EvolutionRunner::run(&populate, &one_max, &config).unwrap();

        assert!(result.reached_limit);
        assert_eq!(result.generations, 29);
        assert_eq!(result.fitness_history.len(), 30);
    }

    #[test]
    fn test_immediate_termination_when_limit_already_met() {
        let populate = RandomPopulate::new(10, 4);
        let config = EvolutionConfig::default()
            .with_fitness_limit(0.0)
            .with_generation_limit(50)
            .with_seed(42);

        let result = EvolutionRunner::run(&populate, &one_max, &config).unwrap();

        assert!(!result.reached_limit);
        assert_eq!(result.generations, 0);
        assert_eq!(result.fitness_history.len(), 1);
        assert_eq!(result.population.len(), 10);
    }

    #[test]
    fn test_odd_population_settles_to_even() {
        let populate = RandomPopulate::new(11, 6);
        let config = EvolutionConfig::default()
            .with_generation_limit(10)
            .with_seed(42);

        let result = EvolutionRunner::run(&populate, &one_max, &config).unwrap();

        // Elitism (2) plus 11/2 - 1 = 4 offspring pairs fills 10 slots.
        assert_eq!(result.population.len(), 10);
    }

    #[test]
    fn test_even_population_size_is_preserved() {
        let populate = RandomPopulate::new(12, 6);
        let config = EvolutionConfig::default()
            .with_generation_limit(10)
            .with_seed(42);

        let result = EvolutionRunner::run(&populate, &one_max, &config).unwrap();
        assert_eq!(result.population.len(), 12);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let populate = RandomPopulate::new(20, 12);
        let config = EvolutionConfig::default()
            .with_generation_limit(40)
            .with_seed(7);

        let a = EvolutionRunner::run(&populate, &one_max, &config).unwrap();
        let b = EvolutionRunner::run(&populate, &one_max, &config).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn test_all_infeasible_population_survives_on_uniform_fallback() {
        // Every single item overflows the limit, so every genome scores 0
        // and selection must fall back to uniform sampling.
        let knapsack = Knapsack::new(
            vec![Item::new("anvil", 5.0, 100.0), Item::new("piano", 9.0, 300.0)],
            10.0,
        );
        let populate = RandomPopulate::new(10, knapsack.len());
        let config = EvolutionConfig::default()
            .with_generation_limit(20)
            .with_seed(42);

        let result = EvolutionRunner::run(&populate, &|g| knapsack.fitness(g), &config).unwrap();

        assert!(result.reached_limit);
        // [0,0] is feasible and scores 0, so 0 is the true optimum here.
        assert_eq!(result.best_fitness, 0.0);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let populate = RandomPopulate::new(10, 4);
        let config = EvolutionConfig::default().with_generation_limit(0);

        let err = EvolutionRunner::run(&populate, &one_max, &config).unwrap_err();
        assert!(matches!(err, EvolutionError::InvalidConfig(_)));
    }

    #[test]
    fn test_empty_population_is_rejected() {
        let config = EvolutionConfig::default().with_seed(42);
        let err = EvolutionRunner::run(&EmptyPopulate, &one_max, &config).unwrap_err();
        assert!(matches!(err, EvolutionError::InvalidInput(_)));
    }

    #[test]
    fn test_fitness_length_mismatch_propagates() {
        // Genomes of length 3 against a 2-item knapsack must fail fast.
        let knapsack = Knapsack::new(
            vec![Item::new("A", 10.0, 5.0), Item::new("B", 7.0, 3.0)],
            5.0,
        );
        let populate = RandomPopulate::new(10, 3);
        let config = EvolutionConfig::default().with_seed(42);

        let err =
            EvolutionRunner::run(&populate, &|g| knapsack.fitness(g), &config).unwrap_err();
        assert!(matches!(err, EvolutionError::InvalidInput(_)));
    }
}
