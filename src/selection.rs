//! Parent selection.
//!
//! Fitness-proportionate (roulette wheel) sampling: the probability of a
//! genome becoming a parent is proportional to its raw fitness score.
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use crate::error::{EvolutionError, Result};
use crate::types::{Genome, Selection};
use log::warn;
use rand::Rng;

/// Draws a fitness-weighted parent pair from the population.
///
/// Samples exactly twice, with replacement, weighting each genome by
/// `fitness(genome)`; the same genome may be returned as both members of the
/// pair.
///
/// When every weight is zero the roulette wheel is undefined; the draw falls
/// back to uniform sampling over the population so that runs whose early
/// generations are entirely infeasible can still make progress. The fallback
/// is logged at `warn` level.
///
/// # Errors
///
/// - [`EvolutionError::InvalidInput`] if the population is empty.
/// - Any error returned by `fitness` is propagated.
pub fn selection_pair<R, F>(
    population: &[Genome],
    fitness: &F,
    rng: &mut R,
) -> Result<(Genome, Genome)>
where
    R: Rng,
    F: Fn(&Genome) -> Result<f64>,
{
    if population.is_empty() {
        return Err(EvolutionError::InvalidInput(
            "cannot select from an empty population".into(),
        ));
    }

    let weights: Vec<f64> = population
        .iter()
        .map(fitness)
        .collect::<Result<Vec<f64>>>()?;
    let total: f64 = weights.iter().sum();

    if total <= 0.0 {
        warn!("all selection weights are zero, falling back to uniform sampling");
        let a = population[rng.random_range(0..population.len())].clone();
        let b = population[rng.random_range(0..population.len())].clone();
        return Ok((a, b));
    }

    let a = population[spin(&weights, total, rng)].clone();
    let b = population[spin(&weights, total, rng)].clone();
    Ok((a, b))
}

/// One roulette-wheel draw: cumulative scan against a uniform threshold.
fn spin<R: Rng>(weights: &[f64], total: f64, rng: &mut R) -> usize {
    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w;
        if cumulative > threshold {
            return i;
        }
    }
    weights.len() - 1 // floating-point fallback
}

/// [`Selection`] strategy wrapping [`selection_pair`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouletteWheel;

impl Selection for RouletteWheel {
    fn selection_pair<R, F>(
        &self,
        population: &[Genome],
        fitness: &F,
        rng: &mut R,
    ) -> Result<(Genome, Genome)>
    where
        R: Rng,
        F: Fn(&Genome) -> Result<f64>,
    {
        selection_pair(population, fitness, rng)
    }
}
