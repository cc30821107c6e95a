//! 0/1 knapsack fitness evaluation.
//!
//! The example instantiation of the crate-wide fitness contract: genome
//! position `i` decides whether item `i` goes into the knapsack. Other
//! domains supply their own evaluator with the same shape
//! (`Fn(&Genome) -> Result<f64>`, score `>= 0.0`).

use crate::error::{EvolutionError, Result};
use crate::types::Genome;

/// One candidate item for the knapsack.
///
/// Immutable once defined; consumed read-only by the evaluator.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Display name.
    pub name: String,
    /// Value contributed when the item is selected.
    pub value: f64,
    /// Weight counted against the knapsack limit.
    pub weight: f64,
}

impl Item {
    /// Creates an item.
    pub fn new(name: impl Into<String>, value: f64, weight: f64) -> Self {
        Self {
            name: name.into(),
            value,
            weight,
        }
    }
}

/// A 0/1 knapsack instance: items plus a weight limit.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Knapsack {
    items: Vec<Item>,
    weight_limit: f64,
}

impl Knapsack {
    /// Creates a knapsack instance.
    pub fn new(items: Vec<Item>, weight_limit: f64) -> Self {
        Self {
            items,
            weight_limit,
        }
    }

    /// Number of items, which is also the required genome length.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the instance holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The items of this instance.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// The weight limit of this instance.
    pub fn weight_limit(&self) -> f64 {
        self.weight_limit
    }

    /// Scores a genome against this instance.
    ///
    /// Scans genome positions in order, accumulating the weight and value of
    /// each selected item. The moment the accumulated weight exceeds the
    /// limit the whole genome scores 0 — an all-or-nothing infeasibility
    /// penalty, not partial credit. A feasible genome scores its accumulated
    /// value.
    ///
    /// # Errors
    ///
    /// [`EvolutionError::InvalidInput`] if the genome length differs from the
    /// item count. Checked before any accumulation.
    pub fn fitness(&self, genome: &Genome) -> Result<f64> {
        if genome.len() != self.items.len() {
            return Err(EvolutionError::InvalidInput(format!(
                "genome has {} genes but knapsack has {} items",
                genome.len(),
                self.items.len()
            )));
        }

        let mut weight = 0.0;
        let mut value = 0.0;

        for (gene, item) in genome.iter().zip(&self.items) {
            if *gene == 1 {
                weight += item.weight;
                value += item.value;
            }
            if weight > self.weight_limit {
                return Ok(0.0);
            }
        }

        Ok(value)
    }
}
