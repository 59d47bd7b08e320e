//! Evolution strategies
//!
//! A strategy performs one generation on a [`Population`]. The population
//! re-sorts after every step, so a strategy only has to keep the population
//! size fixed.

use rand::Rng;
use tracing::trace;

use crate::error::{EvoResult, EvolutionError, OperatorResult};
use crate::fitness::benchmarks::Objective;
use crate::fitness::evaluator::FitnessEvaluator;
use crate::operators::crossover::SinglePointCrossover;
use crate::operators::mutation::RandomResetMutation;
use crate::operators::selection::RouletteSelection;
use crate::operators::traits::{CrossoverOperator, MutationOperator, SelectionOperator};
use crate::population::entity::Entity;
use crate::population::population::Population;

/// One generation step over a population
pub trait EvolutionStrategy: Send + Sync {
    /// Produce and evaluate offspring, leaving the population at its
    /// original size
    fn evolve<O, R>(
        &self,
        population: &mut Population,
        evaluator: &mut FitnessEvaluator<'_, O>,
        rng: &mut R,
    ) -> EvoResult<()>
    where
        O: Objective + ?Sized,
        R: Rng;
}

/// Generational step with parents-survive truncation
///
/// Each generation breeds `round(P * crossover_ratio)` crossover pairs and
/// `round(P * mutation_ratio)` mutants, evaluates them, then keeps the best
/// `P` of parents and offspring together.
#[derive(Clone, Debug)]
pub struct GenerationalStrategy<S, C, M> {
    selection: S,
    crossover: C,
    mutation: M,
    crossover_ratio: f64,
    mutation_ratio: f64,
}

/// Roulette selection, single-point crossover, single-locus random reset
pub type DefaultStrategy =
    GenerationalStrategy<RouletteSelection, SinglePointCrossover, RandomResetMutation>;

impl DefaultStrategy {
    /// The default operator set with the given ratios
    pub fn with_ratios(crossover_ratio: f64, mutation_ratio: f64) -> Self {
        GenerationalStrategy::new(
            RouletteSelection::new(),
            SinglePointCrossover::new(),
            RandomResetMutation::new(),
        )
        .ratios(crossover_ratio, mutation_ratio)
    }
}

impl Default for DefaultStrategy {
    fn default() -> Self {
        Self::with_ratios(0.9, 0.1)
    }
}

impl<S, C, M> GenerationalStrategy<S, C, M>
where
    S: SelectionOperator,
    C: CrossoverOperator,
    M: MutationOperator,
{
    /// Create a strategy from its operators, with ratios 0.9 and 0.1
    pub fn new(selection: S, crossover: C, mutation: M) -> Self {
        Self {
            selection,
            crossover,
            mutation,
            crossover_ratio: 0.9,
            mutation_ratio: 0.1,
        }
    }

    /// Set the crossover and mutation ratios
    ///
    /// Values outside `[0, 1]` are clamped.
    pub fn ratios(mut self, crossover_ratio: f64, mutation_ratio: f64) -> Self {
        self.crossover_ratio = crossover_ratio.clamp(0.0, 1.0);
        self.mutation_ratio = mutation_ratio.clamp(0.0, 1.0);
        self
    }

    /// Fraction of the population bred by crossover, in pairs
    pub fn crossover_ratio(&self) -> f64 {
        self.crossover_ratio
    }

    /// Fraction of the population bred by mutation
    pub fn mutation_ratio(&self) -> f64 {
        self.mutation_ratio
    }

    fn offspring_counts(&self, size: usize) -> (usize, usize) {
        let pairs = (size as f64 * self.crossover_ratio).round() as usize;
        let mutants = (size as f64 * self.mutation_ratio).round() as usize;
        (pairs, mutants)
    }
}

impl<S, C, M> EvolutionStrategy for GenerationalStrategy<S, C, M>
where
    S: SelectionOperator,
    C: CrossoverOperator,
    M: MutationOperator,
{
    fn evolve<O, R>(
        &self,
        population: &mut Population,
        evaluator: &mut FitnessEvaluator<'_, O>,
        rng: &mut R,
    ) -> EvoResult<()>
    where
        O: Objective + ?Sized,
        R: Rng,
    {
        if population.is_empty() {
            return Err(EvolutionError::EmptyPopulation);
        }

        let (pairs, mutants) = self.offspring_counts(population.len());
        let mut offspring = Vec::with_capacity(2 * pairs + mutants);
        let parents = population.entities();

        for _ in 0..pairs {
            let (i, j) = self.selection.select_pair(parents, rng)?;
            let (child1, child2) =
                match self
                    .crossover
                    .crossover(parents[i].genome(), parents[j].genome(), rng)
                {
                    OperatorResult::Success(children) => children,
                    OperatorResult::Failed(e) => return Err(e.into()),
                };
            offspring.push(Entity::evaluate(child1, evaluator));
            offspring.push(Entity::evaluate(child2, evaluator));
        }

        for _ in 0..mutants {
            let i = self.selection.select(parents, rng)?;
            let mut genome = parents[i].genome().clone();
            self.mutation.mutate(&mut genome, population.bounds(), rng);
            offspring.push(Entity::evaluate(genome, evaluator));
        }

        trace!(offspring = offspring.len(), "Generation bred");
        population.merge_offspring(offspring);
        Ok(())
    }
}
