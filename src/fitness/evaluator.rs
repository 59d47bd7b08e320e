//! Fitness evaluation
//!
//! The operator side of the crate maximizes, while objectives are minimized.
//! [`FitnessEvaluator`] sits between the two: it calls the objective, maps
//! the cost onto a score where higher is better, and keeps the island's
//! evaluation counters up to date.

use crate::algorithms::stats::AlgorithmStats;
use crate::fitness::benchmarks::Objective;
use crate::genome::real_vector::RealVector;

/// Map a minimization cost onto the maximization score: `1 / (1 + cost)`
///
/// Monotone decreasing, so a lower cost always gives a higher fitness. Any
/// non-negative cost lands in `(0, 1]`. Non-finite or negative costs are not
/// special-cased: `-1` gives `+inf` and `NaN` gives `NaN`.
pub fn objective_to_fitness(objective: f64) -> f64 {
    1.0 / (1.0 + objective)
}

/// Inverse of [`objective_to_fitness`]
pub fn fitness_to_objective(fitness: f64) -> f64 {
    1.0 / fitness - 1.0
}

/// Evaluates chromosomes against an objective and records every call
///
/// Borrows the objective and the stats it updates, so one is built for the
/// duration of each population operation.
pub struct FitnessEvaluator<'a, O: ?Sized> {
    objective: &'a O,
    stats: &'a mut AlgorithmStats,
}

impl<'a, O> FitnessEvaluator<'a, O>
where
    O: Objective + ?Sized,
{
    /// Create an evaluator over `objective` that records into `stats`
    pub fn new(objective: &'a O, stats: &'a mut AlgorithmStats) -> Self {
        Self { objective, stats }
    }

    /// Evaluate a chromosome, returning its maximization fitness
    ///
    /// The chromosome must have exactly the objective's dimensionality.
    /// Migrant lengths are checked before they get here.
    pub fn evaluate(&mut self, genome: &RealVector) -> f64 {
        debug_assert_eq!(
            genome.dimension(),
            self.objective.dimension(),
            "chromosome length does not match objective dimension"
        );
        let objective = self.objective.evaluate_raw(genome.genes());
        self.stats.record_evaluation(objective);
        objective_to_fitness(objective)
    }

    /// Dimensionality every evaluated chromosome must have
    pub fn dimension(&self) -> usize {
        self.objective.dimension()
    }

    /// Counters recorded so far
    pub fn stats(&self) -> &AlgorithmStats {
        &*self.stats
    }
}
