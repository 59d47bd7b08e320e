//! Evaluated population member
//!
//! This module provides the Entity type that pairs a chromosome with its
//! maximization fitness.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::fitness::benchmarks::Objective;
use crate::fitness::evaluator::{fitness_to_objective, FitnessEvaluator};
use crate::genome::real_vector::RealVector;

/// A member of an island's population
///
/// Entities are always evaluated: there is no way to build one without a
/// fitness. Higher fitness is better.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    genome: RealVector,
    fitness: f64,
}

impl Entity {
    /// Create an entity with a known fitness
    pub fn new(genome: RealVector, fitness: f64) -> Self {
        Self { genome, fitness }
    }

    /// Evaluate `genome` and wrap it with the resulting fitness
    pub fn evaluate<O>(genome: RealVector, evaluator: &mut FitnessEvaluator<'_, O>) -> Self
    where
        O: Objective + ?Sized,
    {
        let fitness = evaluator.evaluate(&genome);
        Self { genome, fitness }
    }

    /// Get a reference to the genome
    pub fn genome(&self) -> &RealVector {
        &self.genome
    }

    /// Take the genome out of this entity
    pub fn into_genome(self) -> RealVector {
        self.genome
    }

    /// The maximization fitness
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// The objective value this fitness was derived from
    pub fn objective(&self) -> f64 {
        fitness_to_objective(self.fitness)
    }

    /// Number of genes
    pub fn dimension(&self) -> usize {
        self.genome.dimension()
    }

    /// Strictly better than `other`. A `NaN` fitness is never better and
    /// everything comparable is better than `NaN`.
    pub fn is_better_than(&self, other: &Self) -> bool {
        self.rank_key() > other.rank_key()
    }

    /// Sort key: `NaN` ranks below every real fitness
    pub(crate) fn rank_key(&self) -> f64 {
        if self.fitness.is_nan() {
            f64::NEG_INFINITY
        } else {
            self.fitness
        }
    }

    /// Descending rank order: best first
    pub(crate) fn rank_order(a: &Self, b: &Self) -> Ordering {
        b.rank_key().total_cmp(&a.rank_key())
    }
}
