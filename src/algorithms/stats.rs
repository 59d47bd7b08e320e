//! Per-island run statistics

use serde::{Deserialize, Serialize};

/// Counters an island reports to the coordinating node
///
/// `best_fitness` is an *objective* value (minimization), not the internal
/// maximization score. It starts at `+inf`, meaning nothing has been
/// evaluated yet, and never increases during a run.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmStats {
    /// Local generations executed
    pub iterations: usize,
    /// Objective function calls
    pub fitness_evals: usize,
    /// Lowest objective value observed
    pub best_fitness: f64,
}

impl AlgorithmStats {
    /// Zeroed counters with no evaluation recorded
    pub fn new() -> Self {
        Self {
            iterations: 0,
            fitness_evals: 0,
            best_fitness: f64::INFINITY,
        }
    }

    /// Record one objective evaluation
    ///
    /// A `NaN` objective is counted but cannot replace a recorded best.
    pub fn record_evaluation(&mut self, objective: f64) {
        self.fitness_evals += 1;
        self.best_fitness = self.best_fitness.min(objective);
    }

    /// Add completed generations
    pub fn record_iterations(&mut self, generations: usize) {
        self.iterations += generations;
    }
}

impl Default for AlgorithmStats {
    fn default() -> Self {
        Self::new()
    }
}
