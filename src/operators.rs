//! Genetic operators for binary genomes.
//!
//! Free-function operators plus thin strategy wrappers implementing
//! [`Crossover`] and [`Mutation`] for the engine.
//!
//! # Operators
//!
//! - [`single_point_crossover`]: complementary splice of two parents at one
//!   random cut point
//! - [`mutation`]: repeated single-gene flip attempts at a fixed probability
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - De Jong (1975), *An Analysis of the Behavior of a Class of Genetic
//!   Adaptive Systems*

use crate::error::{EvolutionError, Result};
use crate::types::{Crossover, Genome, Mutation};
use rand::Rng;

/// Single-point crossover.
///
/// Picks a cut point `p` uniformly from `[1, length - 1]` and returns the two
/// complementary splices `(a[..p] + b[p..], b[..p] + a[p..])`.
///
/// Genomes shorter than 2 genes have no interior cut point and are returned
/// unchanged.
///
/// # Errors
///
/// [`EvolutionError::InvalidInput`] if the parents have different lengths.
/// The inputs are never modified.
pub fn single_point_crossover<R: Rng>(
    a: &Genome,
    b: &Genome,
    rng: &mut R,
) -> Result<(Genome, Genome)> {
    if a.len() != b.len() {
        return Err(EvolutionError::InvalidInput(format!(
            "crossover parents must have equal length, got {} and {}",
            a.len(),
            b.len()
        )));
    }

    let length = a.len();
    if length < 2 {
        return Ok((a.clone(), b.clone()));
    }

    let p = rng.random_range(1..length);

    let mut child_a = a[..p].to_vec();
    child_a.extend_from_slice(&b[p..]);
    let mut child_b = b[..p].to_vec();
    child_b.extend_from_slice(&a[p..]);

    Ok((child_a, child_b))
}

/// Gene-flip mutation.
///
/// Performs `num` independent attempts. Each attempt picks a gene index
/// uniformly over the full genome (with replacement across attempts, so the
/// same index may be touched more than once or not at all) and flips that
/// gene when the draw lands at or below `probability`; a draw above
/// `probability` keeps the gene unchanged.
///
/// Consumes and returns the genome; a zero-length genome is returned as-is.
pub fn mutation<R: Rng>(mut genome: Genome, num: usize, probability: f64, rng: &mut R) -> Genome {
    if genome.is_empty() {
        return genome;
    }

    for _ in 0..num {
        let index = rng.random_range(0..genome.len());
        if rng.random_range(0.0..1.0) > probability {
            continue;
        }
        genome[index] = 1 - genome[index];
    }

    genome
}

/// [`Crossover`] strategy wrapping [`single_point_crossover`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SinglePoint;

impl Crossover for SinglePoint {
    fn crossover<R: Rng>(&self, a: &Genome, b: &Genome, rng: &mut R) -> Result<(Genome, Genome)> {
        single_point_crossover(a, b, rng)
    }
}

/// [`Mutation`] strategy wrapping [`mutation`].
///
/// The default of one attempt at probability 0.5 gives a light mutation
/// pressure suitable for small genomes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneFlip {
    /// Number of independent flip attempts per genome.
    pub num: usize,
    /// Probability that an attempt actually flips its gene.
    pub probability: f64,
}

impl Default for GeneFlip {
    fn default() -> Self {
        Self {
            num: 1,
            probability: 0.5,
        }
    }
}

impl GeneFlip {
    /// Creates a mutation strategy with `num` attempts at `probability`.
    pub fn new(num: usize, probability: f64) -> Self {
        Self { num, probability }
    }
}

impl Mutation for GeneFlip {
    fn mutate<R: Rng>(&self, genome: Genome, rng: &mut R) -> Genome {
        mutation(genome, self.num, self.probability, rng)
    }
}
