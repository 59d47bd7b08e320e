//! Operator traits
//!
//! This module defines the core operator traits used by the evolution
//! strategy. All operators work on real-valued chromosomes and treat higher
//! fitness as better.

use rand::Rng;

use crate::error::{OperatorError, OperatorResult};
use crate::genome::bounds::MultiBounds;
use crate::genome::real_vector::RealVector;
use crate::population::entity::Entity;

/// Selection operator trait
///
/// Selects individuals from a population for reproduction.
pub trait SelectionOperator: Send + Sync {
    /// Select a single entity, returning its index in `population`
    fn select<R: Rng>(&self, population: &[Entity], rng: &mut R) -> Result<usize, OperatorError>;

    /// Select two parents for crossover
    fn select_pair<R: Rng>(
        &self,
        population: &[Entity],
        rng: &mut R,
    ) -> Result<(usize, usize), OperatorError> {
        Ok((self.select(population, rng)?, self.select(population, rng)?))
    }
}

/// Crossover operator trait
///
/// Combines genetic material from two parents to create offspring.
pub trait CrossoverOperator: Send + Sync {
    /// Apply crossover to two parents and produce two offspring
    fn crossover<R: Rng>(
        &self,
        parent1: &RealVector,
        parent2: &RealVector,
        rng: &mut R,
    ) -> OperatorResult<(RealVector, RealVector)>;
}

/// Mutation operator trait
///
/// Applies random changes to a chromosome, keeping it inside `bounds`.
pub trait MutationOperator: Send + Sync {
    /// Apply mutation to a chromosome in place
    fn mutate<R: Rng>(&self, genome: &mut RealVector, bounds: &MultiBounds, rng: &mut R);
}
