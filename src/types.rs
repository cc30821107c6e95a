//! Core types and strategy traits.
//!
//! A [`Genome`] is a plain vector of binary genes; a [`Population`] is a
//! vector of genomes. Both are value types with no identity beyond their
//! content, freely cloned and discarded as generations are replaced.
//!
//! The four strategy traits — [`Populate`], [`Selection`], [`Crossover`],
//! [`Mutation`] — are the seams where the generic engine meets pluggable
//! behavior. Default implementations live in [`crate::operators`] and
//! [`crate::selection`].

use crate::error::Result;
use rand::Rng;

/// A fixed-length sequence of binary genes. Every element is 0 or 1.
pub type Genome = Vec<u8>;

/// One generation's worth of genomes.
///
/// Insertion order is irrelevant except that after the engine sorts by
/// fitness, indices 0 and 1 hold the current best two (used for elitism).
pub type Population = Vec<Genome>;

/// Returns a new genome of `length` genes, each drawn uniformly from {0, 1}.
pub fn generate_genome<R: Rng>(length: usize, rng: &mut R) -> Genome {
    (0..length).map(|_| rng.random_range(0..=1)).collect()
}

/// Returns `size` independently generated genomes of `genome_length` genes.
///
/// Entries never alias shared storage.
pub fn generate_population<R: Rng>(size: usize, genome_length: usize, rng: &mut R) -> Population {
    (0..size).map(|_| generate_genome(genome_length, rng)).collect()
}

/// Produces the initial population for an evolutionary run.
pub trait Populate {
    /// Creates one full population.
    ///
    /// Every genome must have the same length; the engine fixes genome
    /// length for the whole run at this point.
    fn generate<R: Rng>(&self, rng: &mut R) -> Population;
}

/// Uniform-random population generation via [`generate_population`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomPopulate {
    /// Number of genomes per generation.
    pub size: usize,
    /// Genes per genome.
    pub genome_length: usize,
}

impl RandomPopulate {
    /// Creates a populate strategy for `size` genomes of `genome_length` genes.
    pub fn new(size: usize, genome_length: usize) -> Self {
        Self { size, genome_length }
    }
}

impl Populate for RandomPopulate {
    fn generate<R: Rng>(&self, rng: &mut R) -> Population {
        generate_population(self.size, self.genome_length, rng)
    }
}

/// Picks two parents from a population, weighted by fitness.
pub trait Selection {
    /// Draws a parent pair with replacement; the same genome may be returned
    /// as both members of the pair.
    ///
    /// `fitness` follows the crate-wide fitness contract (deterministic,
    /// score `>= 0.0`, higher is better).
    fn selection_pair<R, F>(
        &self,
        population: &[Genome],
        fitness: &F,
        rng: &mut R,
    ) -> Result<(Genome, Genome)>
    where
        R: Rng,
        F: Fn(&Genome) -> Result<f64>;
}

/// Recombines two parent genomes into two offspring.
pub trait Crossover {
    /// Produces two offspring from `a` and `b`.
    ///
    /// Fails with [`EvolutionError::InvalidInput`](crate::EvolutionError::InvalidInput)
    /// if the parents have different lengths.
    fn crossover<R: Rng>(&self, a: &Genome, b: &Genome, rng: &mut R) -> Result<(Genome, Genome)>;
}

/// Stochastically perturbs a genome.
///
/// Value semantics: the genome is consumed and the mutated genome is
/// returned. Callers must not assume the content is unchanged.
pub trait Mutation {
    /// Mutates `genome` and returns it.
    fn mutate<R: Rng>(&self, genome: Genome, rng: &mut R) -> Genome;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_generate_genome_length_and_alphabet() {
        let mut rng = create_rng(42);
        for n in [0, 1, 2, 17, 256] {
            let genome = generate_genome(n, &mut rng);
            assert_eq!(genome.len(), n);
            assert!(genome.iter().all(|&g| g == 0 || g == 1));
        }
    }

    #[test]
    fn test_generate_genome_uses_both_values() {
        let mut rng = create_rng(42);
        let genome = generate_genome(1000, &mut rng);
        let ones = genome.iter().filter(|&&g| g == 1).count();
        // A uniform draw of 1000 genes lands well inside this band.
        assert!(ones > 400 && ones < 600, "ones = {ones}");
    }

    #[test]
    fn test_generate_population_shape() {
        let mut rng = create_rng(42);
        let pop = generate_population(12, 8, &mut rng);
        assert_eq!(pop.len(), 12);
        assert!(pop.iter().all(|g| g.len() == 8));
    }

    #[test]
    fn test_generate_population_independent_entries() {
        let mut rng = create_rng(42);
        let mut pop = generate_population(5, 16, &mut rng);
        let snapshot = pop[1].clone();
        pop[0][0] ^= 1;
        assert_eq!(pop[1], snapshot);
    }

    #[test]
    fn test_random_populate_strategy() {
        let mut rng = create_rng(7);
        let pop = RandomPopulate::new(6, 4).generate(&mut rng);
        assert_eq!(pop.len(), 6);
        assert!(pop.iter().all(|g| g.len() == 4));
    }
}
