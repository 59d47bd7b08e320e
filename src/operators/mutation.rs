//! Mutation operators
//!
//! This module provides bounded mutation operators for real-valued
//! chromosomes.

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::genome::bounds::MultiBounds;
use crate::genome::real_vector::RealVector;
use crate::operators::traits::MutationOperator;

/// Single-point random reset
///
/// Picks one locus and redraws it uniformly from that dimension's bound.
#[derive(Clone, Debug, Default)]
pub struct RandomResetMutation;

impl RandomResetMutation {
    /// Create a new random reset mutation
    pub fn new() -> Self {
        Self
    }
}

impl MutationOperator for RandomResetMutation {
    fn mutate<R: Rng>(&self, genome: &mut RealVector, bounds: &MultiBounds, rng: &mut R) {
        let n = genome.dimension();
        if n == 0 {
            return;
        }
        let locus = rng.gen_range(0..n);
        if let Some(bound) = bounds.get(locus) {
            genome[locus] = rng.gen_range(bound.min..=bound.max);
        }
    }
}

/// Gaussian mutation
///
/// Adds Gaussian noise to each gene with a given probability, then clamps
/// the gene back into its bound.
#[derive(Clone, Debug)]
pub struct GaussianMutation {
    /// Standard deviation of the Gaussian noise
    pub sigma: f64,
    /// Per-gene mutation probability (default: 1/n)
    pub mutation_probability: Option<f64>,
}

impl GaussianMutation {
    /// Create a new Gaussian mutation with the given standard deviation
    pub fn new(sigma: f64) -> Self {
        assert!(sigma >= 0.0, "Sigma must be non-negative");
        Self {
            sigma,
            mutation_probability: None,
        }
    }

    /// Set a fixed mutation probability per gene
    pub fn with_probability(mut self, probability: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&probability),
            "Probability must be in [0, 1]"
        );
        self.mutation_probability = Some(probability);
        self
    }
}

impl MutationOperator for GaussianMutation {
    fn mutate<R: Rng>(&self, genome: &mut RealVector, bounds: &MultiBounds, rng: &mut R) {
        let n = genome.dimension();
        if n == 0 {
            return;
        }
        let prob = self.mutation_probability.unwrap_or(1.0 / n as f64);
        let Ok(normal) = Normal::new(0.0, self.sigma) else {
            return;
        };

        for (gene, bound) in genome.genes_mut().iter_mut().zip(&bounds.bounds) {
            if rng.gen::<f64>() < prob {
                *gene = bound.clamp(*gene + normal.sample(rng));
            }
        }
    }
}
