//! Crossover operators
//!
//! This module provides crossover operators for real-valued chromosomes.

use rand::Rng;

use crate::error::{OperatorError, OperatorResult};
use crate::genome::real_vector::RealVector;
use crate::operators::traits::CrossoverOperator;

fn check_dimensions(parent1: &RealVector, parent2: &RealVector) -> Result<usize, OperatorError> {
    if parent1.dimension() != parent2.dimension() {
        return Err(OperatorError::CrossoverFailed(format!(
            "Parent dimensions do not match: {} vs {}",
            parent1.dimension(),
            parent2.dimension()
        )));
    }
    Ok(parent1.dimension())
}

/// Single-point crossover
///
/// Picks one cut point and swaps the tails of the two parents. Genes are
/// copied unchanged, so children stay inside the parents' bounds.
#[derive(Clone, Debug, Default)]
pub struct SinglePointCrossover;

impl SinglePointCrossover {
    /// Create a new single-point crossover
    pub fn new() -> Self {
        Self
    }
}

impl CrossoverOperator for SinglePointCrossover {
    fn crossover<R: Rng>(
        &self,
        parent1: &RealVector,
        parent2: &RealVector,
        rng: &mut R,
    ) -> OperatorResult<(RealVector, RealVector)> {
        let n = match check_dimensions(parent1, parent2) {
            Ok(n) => n,
            Err(e) => return OperatorResult::Failed(e),
        };
        if n < 2 {
            return OperatorResult::Success((parent1.clone(), parent2.clone()));
        }

        // Cut strictly inside so both children mix material
        let crossover_point = rng.gen_range(1..n);

        let mut child1 = parent1.clone();
        let mut child2 = parent2.clone();
        child1.genes_mut()[crossover_point..]
            .copy_from_slice(&parent2.genes()[crossover_point..]);
        child2.genes_mut()[crossover_point..]
            .copy_from_slice(&parent1.genes()[crossover_point..]);

        OperatorResult::Success((child1, child2))
    }
}
