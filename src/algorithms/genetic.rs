//! Genetic island algorithm
//!
//! [`GeneticAlgorithm`] owns one island's population, counters and random
//! stream, and exposes them through [`IslandAlgorithm`]. Every instance is
//! independent; there is no shared state between islands.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use crate::algorithms::stats::AlgorithmStats;
use crate::algorithms::strategy::{DefaultStrategy, EvolutionStrategy};
use crate::algorithms::traits::{AlgorithmState, IslandAlgorithm, PopulationSnapshot};
use crate::config::AlgorithmConfig;
use crate::error::{EvoResult, EvolutionError, GenomeError};
use crate::fitness::benchmarks::Objective;
use crate::fitness::evaluator::FitnessEvaluator;
use crate::genome::bounds::MultiBounds;
use crate::genome::real_vector::RealVector;
use crate::migration::migrant::{InsertOutcome, Migrant};
use crate::population::entity::Entity;
use crate::population::population::{invalid_bounds, Population};

fn state_error(operation: &'static str, state: AlgorithmState) -> EvolutionError {
    EvolutionError::InvalidState {
        operation,
        state: state.as_str(),
    }
}

#[derive(Clone, Debug)]
struct Island {
    population: Population,
    max_generations: usize,
}

/// Steady-state island adapter around a generational GA
///
/// Lifecycle: `Uninitialized` until [`IslandAlgorithm::init`], `Running`
/// while `iterations < max_generations`, `Ended` afterwards. Reads stay
/// valid once ended.
#[derive(Clone, Debug)]
pub struct GeneticAlgorithm<O, S = DefaultStrategy> {
    objective: O,
    strategy: S,
    stats: AlgorithmStats,
    island: Option<Island>,
    rng: StdRng,
}

impl<O: Objective> GeneticAlgorithm<O> {
    /// Default operators with the ratios from `config`
    pub fn from_config(objective: O, config: &AlgorithmConfig) -> Self {
        Self::with_strategy(
            objective,
            DefaultStrategy::with_ratios(config.crossover_ratio, config.mutation_ratio),
        )
    }
}

impl<O, S> GeneticAlgorithm<O, S>
where
    O: Objective,
    S: EvolutionStrategy,
{
    /// Create an uninitialized island with a custom strategy
    pub fn with_strategy(objective: O, strategy: S) -> Self {
        Self {
            objective,
            strategy,
            stats: AlgorithmStats::new(),
            island: None,
            rng: StdRng::from_entropy(),
        }
    }

    /// Initialize with caller-supplied chromosomes instead of random seeds
    ///
    /// Exactly `population_size` chromosomes are required. Each is clamped
    /// into the seeding bounds before evaluation.
    pub fn init_with_chromosomes(
        &mut self,
        config: &AlgorithmConfig,
        bounds: &MultiBounds,
        chromosomes: &[Vec<f64>],
    ) -> EvoResult<()> {
        if chromosomes.len() != config.population_size {
            return Err(EvolutionError::Configuration(format!(
                "Expected {} seed chromosomes, got {}",
                config.population_size,
                chromosomes.len()
            )));
        }
        self.start(config, bounds, Some(chromosomes))
    }

    /// The objective being minimized
    pub fn objective(&self) -> &O {
        &self.objective
    }

    /// The strategy run each generation
    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Live population, once initialized
    pub fn population(&self) -> Option<&Population> {
        self.island.as_ref().map(|island| &island.population)
    }

    /// Generation budget, once initialized
    pub fn max_generations(&self) -> Option<usize> {
        self.island.as_ref().map(|island| island.max_generations)
    }

    fn invalid_state(&self, operation: &'static str) -> EvolutionError {
        state_error(operation, self.state())
    }

    fn start(
        &mut self,
        config: &AlgorithmConfig,
        bounds: &MultiBounds,
        chromosomes: Option<&[Vec<f64>]>,
    ) -> EvoResult<()> {
        if self.island.is_some() {
            return Err(self.invalid_state("init"));
        }
        if config.max_generations == 0 {
            return Err(EvolutionError::Configuration(
                "max_generations must be at least 1".to_string(),
            ));
        }
        if bounds.dimension() != self.objective.dimension() {
            return Err(GenomeError::DimensionMismatch {
                expected: self.objective.dimension(),
                actual: bounds.dimension(),
            }
            .into());
        }
        if let Some(index) = bounds.first_invalid() {
            return Err(invalid_bounds(bounds, index));
        }
        let seeding = bounds.widened().ok_or_else(|| {
            EvolutionError::Configuration("Bounds must have at least one dimension".to_string())
        })?;

        if let Some(seed) = config.seed {
            self.rng = StdRng::seed_from_u64(seed);
        }
        self.stats = AlgorithmStats::new();

        let mut evaluator = FitnessEvaluator::new(&self.objective, &mut self.stats);
        let population = match chromosomes {
            Some(chromosomes) => Population::create_with(
                config.population_size,
                &seeding,
                &mut evaluator,
                |slot| RealVector::new(chromosomes[slot].clone()),
            )?,
            None => Population::create(
                config.population_size,
                &seeding,
                &mut evaluator,
                &mut self.rng,
            )?,
        };

        info!(
            objective = self.objective.name(),
            population_size = population.len(),
            dimensions = population.dimension(),
            max_generations = config.max_generations,
            best_objective = self.stats.best_fitness,
            "Island initialized"
        );

        self.island = Some(Island {
            population,
            max_generations: config.max_generations,
        });
        Ok(())
    }
}

impl<O, S> IslandAlgorithm for GeneticAlgorithm<O, S>
where
    O: Objective,
    S: EvolutionStrategy,
{
    fn init(&mut self, config: &AlgorithmConfig, bounds: &MultiBounds) -> EvoResult<()> {
        self.start(config, bounds, None)
    }

    fn run_iterations(&mut self, n: usize) -> EvoResult<usize> {
        let state = self.state();
        let Some(island) = self.island.as_mut().filter(|_| state == AlgorithmState::Running) else {
            return Err(state_error("run iterations", state));
        };
        let population = &mut island.population;
        let mut evaluator = FitnessEvaluator::new(&self.objective, &mut self.stats);
        let completed = population.advance(n, &self.strategy, &mut evaluator, &mut self.rng)?;
        self.stats.record_iterations(completed);

        debug!(
            completed,
            iterations = self.stats.iterations,
            fitness_evals = self.stats.fitness_evals,
            best_objective = self.stats.best_fitness,
            "Generations complete"
        );
        if self.ended() {
            info!(
                iterations = self.stats.iterations,
                best_objective = self.stats.best_fitness,
                "Generation budget reached"
            );
        }
        Ok(completed)
    }

    fn insert_migrant(&mut self, migrant: &Migrant) -> EvoResult<InsertOutcome> {
        let state = self.state();
        let Some(island) = self.island.as_mut().filter(|_| state == AlgorithmState::Running) else {
            return Err(state_error("insert migrant", state));
        };
        let population = &mut island.population;
        let dimension = self.objective.dimension();

        let genome = match migrant.to_genome(dimension) {
            Ok(genome) => genome,
            Err(e) => {
                warn!(expected = dimension, actual = migrant.len(), "Rejected migrant");
                return Err(e.into());
            }
        };

        let mut evaluator = FitnessEvaluator::new(&self.objective, &mut self.stats);
        let candidate = Entity::evaluate(genome, &mut evaluator);
        let fitness = candidate.fitness();

        let outcome = if population.replace_worst_if_better(candidate) {
            InsertOutcome::Accepted { fitness }
        } else {
            InsertOutcome::Discarded { fitness }
        };
        debug!(fitness, accepted = outcome.is_accepted(), "Migrant inserted");
        Ok(outcome)
    }

    fn pick_migrant(&self) -> EvoResult<Migrant> {
        let island = self
            .island
            .as_ref()
            .ok_or_else(|| self.invalid_state("pick migrant"))?;
        island
            .population
            .best()
            .map(Migrant::from_entity)
            .ok_or(EvolutionError::EmptyPopulation)
    }

    fn ended(&self) -> bool {
        self.state() == AlgorithmState::Ended
    }

    fn get_population(&self) -> EvoResult<PopulationSnapshot> {
        let island = self
            .island
            .as_ref()
            .ok_or_else(|| self.invalid_state("get population"))?;
        Ok(PopulationSnapshot {
            chromosomes: island.population.chromosomes(),
            stats: self.stats,
        })
    }

    fn get_stats(&self) -> &AlgorithmStats {
        &self.stats
    }

    fn state(&self) -> AlgorithmState {
        match &self.island {
            None => AlgorithmState::Uninitialized,
            Some(island) if self.stats.iterations >= island.max_generations => {
                AlgorithmState::Ended
            }
            Some(_) => AlgorithmState::Running,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fitness::benchmarks::{FnObjective, Rastrigin, Sphere};
    use crate::genome::bounds::Bounds;
    use approx::assert_relative_eq;

    fn sphere_island(max_generations: usize, population_size: usize) -> GeneticAlgorithm<Sphere> {
        let config = AlgorithmConfig::new(max_generations, population_size).with_seed(42);
        let mut ga = GeneticAlgorithm::from_config(Sphere::new(3), &config);
        ga.init(&config, &MultiBounds::symmetric(5.0, 3)).unwrap();
        ga
    }

    fn scenario_island() -> GeneticAlgorithm<Sphere> {
        let config = AlgorithmConfig::new(10, 4).with_seed(1);
        let mut ga = GeneticAlgorithm::from_config(Sphere::new(2), &config);
        ga.init_with_chromosomes(
            &config,
            &MultiBounds::symmetric(1.0, 2),
            &[vec![0.0, 0.0], vec![1.0, 1.0], vec![0.5, 0.5], vec![1.0, 0.0]],
        )
        .unwrap();
        ga
    }

    #[test]
    fn test_state_before_init() {
        let config = AlgorithmConfig::new(10, 4);
        let mut ga = GeneticAlgorithm::from_config(Sphere::new(2), &config);

        assert_eq!(ga.state(), AlgorithmState::Uninitialized);
        assert!(!ga.ended());
        assert_eq!(ga.get_stats(), &AlgorithmStats::new());
        assert!(matches!(
            ga.run_iterations(1),
            Err(EvolutionError::InvalidState { .. })
        ));
        assert!(ga.pick_migrant().is_err());
        assert!(ga.get_population().is_err());
        assert!(ga.insert_migrant(&Migrant::new(vec![0.0, 0.0])).is_err());
    }

    #[test]
    fn test_init_creates_sorted_population() {
        let ga = sphere_island(10, 12);
        let population = ga.population().unwrap();

        assert_eq!(ga.state(), AlgorithmState::Running);
        assert_eq!(population.len(), 12);
        assert!(population.is_sorted());
        assert_eq!(ga.get_stats().fitness_evals, 12);
        assert_eq!(ga.get_stats().iterations, 0);
        assert!(ga.get_stats().best_fitness.is_finite());
    }

    #[test]
    fn test_double_init_is_rejected() {
        let mut ga = sphere_island(10, 4);
        let config = AlgorithmConfig::new(10, 4);
        let err = ga.init(&config, &MultiBounds::symmetric(5.0, 3)).unwrap_err();
        assert_eq!(err.to_string(), "Cannot init while algorithm is running");
    }

    #[test]
    fn test_init_rejects_mismatched_bounds() {
        let config = AlgorithmConfig::new(10, 4);
        let mut ga = GeneticAlgorithm::from_config(Sphere::new(3), &config);
        let err = ga.init(&config, &MultiBounds::symmetric(1.0, 2)).unwrap_err();
        assert!(matches!(
            err,
            EvolutionError::Genome(GenomeError::DimensionMismatch {
                expected: 3,
                actual: 2
            })
        ));
        assert_eq!(ga.state(), AlgorithmState::Uninitialized);
    }

    #[test]
    fn test_init_rejects_invalid_bounds() {
        let config = AlgorithmConfig::new(10, 4).with_seed(3);
        let inverted = MultiBounds::uniform(Bounds { min: 5.0, max: -5.0 }, 2);
        // NaN vanishes from the widened interval
        let not_finite = MultiBounds::new(vec![
            Bounds { min: f64::NAN, max: 1.0 },
            Bounds::new(-1.0, 1.0),
        ]);

        for bounds in [inverted, not_finite] {
            let mut ga = GeneticAlgorithm::from_config(Sphere::new(2), &config);
            let err = ga.init(&config, &bounds).unwrap_err();
            assert!(matches!(err, EvolutionError::Configuration(_)));
            assert_eq!(ga.state(), AlgorithmState::Uninitialized);
            assert_eq!(ga.get_stats().fitness_evals, 0);
        }
    }

    #[test]
    fn test_init_rejects_empty_population() {
        let config = AlgorithmConfig::new(10, 0);
        let mut ga = GeneticAlgorithm::from_config(Sphere::new(2), &config);
        assert!(matches!(
            ga.init(&config, &MultiBounds::symmetric(1.0, 2)),
            Err(EvolutionError::EmptyPopulation)
        ));
    }

    #[test]
    fn test_seeding_uses_widest_enclosing_interval() {
        let config = AlgorithmConfig::new(10, 200).with_seed(5);
        let mut ga = GeneticAlgorithm::from_config(Sphere::new(2), &config);
        let bounds: MultiBounds = [(-1.0, 0.0), (0.0, 4.0)].into_iter().collect();
        ga.init(&config, &bounds).unwrap();

        let population = ga.population().unwrap();
        assert!(population
            .bounds()
            .bounds
            .iter()
            .all(|b| b.min == -1.0 && b.max == 4.0));
        // Dimension 0 is seeded beyond its own declared limit
        assert!(population.iter().any(|e| e.genome()[0] > 0.0));
    }

    #[test]
    fn test_scenario_migrant_replaces_worst() {
        let mut ga = scenario_island();
        assert_eq!(
            ga.get_population().unwrap().chromosomes,
            vec![vec![0.0, 0.0], vec![0.5, 0.5], vec![1.0, 0.0], vec![1.0, 1.0]]
        );

        let outcome = ga.insert_migrant(&Migrant::new(vec![0.1, 0.1])).unwrap();
        assert!(outcome.is_accepted());
        assert_relative_eq!(outcome.fitness(), 1.0 / 1.02, epsilon = 1e-12);

        let snapshot = ga.get_population().unwrap();
        assert_eq!(
            snapshot.chromosomes,
            vec![vec![0.0, 0.0], vec![0.1, 0.1], vec![0.5, 0.5], vec![1.0, 0.0]]
        );
        assert_eq!(snapshot.stats.fitness_evals, 5);
        assert_eq!(snapshot.stats.best_fitness, 0.0);
    }

    #[test]
    fn test_worse_migrant_is_discarded() {
        let mut ga = scenario_island();
        let before = ga.get_population().unwrap().chromosomes;

        let outcome = ga.insert_migrant(&Migrant::new(vec![7.0, 7.0])).unwrap();
        assert!(!outcome.is_accepted());
        assert_eq!(ga.get_population().unwrap().chromosomes, before);
        assert_eq!(ga.get_stats().fitness_evals, 5);
    }

    #[test]
    fn test_wrong_dimension_migrant_is_rejected() {
        let mut ga = scenario_island();
        let before = ga.get_population().unwrap();

        let err = ga
            .insert_migrant(&Migrant::new(vec![0.0, 0.0, 0.0]))
            .unwrap_err();
        assert!(matches!(
            err,
            EvolutionError::Genome(GenomeError::DimensionMismatch {
                expected: 2,
                actual: 3
            })
        ));
        assert_eq!(ga.get_population().unwrap(), before);
    }

    #[test]
    fn test_self_migration_changes_nothing() {
        let mut ga = sphere_island(10, 8);
        let before = ga.get_population().unwrap().chromosomes;

        let migrant = ga.pick_migrant().unwrap();
        assert_eq!(ga.pick_migrant().unwrap(), migrant);
        assert_eq!(migrant.var, before[0]);

        let outcome = ga.insert_migrant(&migrant).unwrap();
        assert!(!outcome.is_accepted());
        assert_eq!(ga.get_population().unwrap().chromosomes, before);
    }

    #[test]
    fn test_snapshot_is_independent() {
        let ga = sphere_island(10, 4);
        let mut snapshot = ga.get_population().unwrap();
        snapshot.chromosomes[0][0] = 1e9;
        snapshot.stats.iterations = 99;

        assert_ne!(ga.get_population().unwrap().chromosomes[0][0], 1e9);
        assert_eq!(ga.get_stats().iterations, 0);
    }

    #[test]
    fn test_run_until_ended() {
        let mut ga = sphere_island(25, 10);

        assert_eq!(ga.run_iterations(10).unwrap(), 10);
        assert!(!ga.ended());
        assert_eq!(ga.run_iterations(10).unwrap(), 10);
        assert!(!ga.ended());
        // Not clamped to the remaining budget
        assert_eq!(ga.run_iterations(10).unwrap(), 10);
        assert!(ga.ended());
        assert_eq!(ga.get_stats().iterations, 30);
        assert_eq!(ga.state(), AlgorithmState::Ended);
    }

    #[test]
    fn test_ended_island_rejects_mutation_but_allows_reads() {
        let mut ga = sphere_island(5, 6);
        ga.run_iterations(5).unwrap();
        assert!(ga.ended());

        assert!(matches!(
            ga.run_iterations(1),
            Err(EvolutionError::InvalidState { state: "ended", .. })
        ));
        assert!(ga.insert_migrant(&Migrant::new(vec![0.0; 3])).is_err());

        let first = ga.get_population().unwrap();
        assert_eq!(ga.get_population().unwrap(), first);
        assert!(ga.pick_migrant().is_ok());
        assert!(ga.ended());
    }

    #[test]
    fn test_best_fitness_never_increases() {
        let mut ga = sphere_island(200, 20);
        let mut previous = ga.get_stats().best_fitness;

        while !ga.ended() {
            ga.run_iterations(20).unwrap();
            let best = ga.get_stats().best_fitness;
            assert!(best <= previous);
            previous = best;
        }
    }

    #[test]
    fn test_rastrigin_improves() {
        let config = AlgorithmConfig::new(200, 50).with_seed(11);
        let mut ga = GeneticAlgorithm::from_config(Rastrigin::new(4), &config);
        ga.init(&config, &MultiBounds::symmetric(5.12, 4)).unwrap();
        let initial = ga.get_stats().best_fitness;

        ga.run_iterations(200).unwrap();
        assert!(ga.get_stats().best_fitness < initial);
        assert!(ga.population().unwrap().is_sorted());
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let mut a = sphere_island(50, 10);
        let mut b = sphere_island(50, 10);
        a.run_iterations(50).unwrap();
        b.run_iterations(50).unwrap();
        assert_eq!(a.get_population().unwrap(), b.get_population().unwrap());
    }

    #[test]
    fn test_nan_migrant_never_enters() {
        let config = AlgorithmConfig::new(10, 3).with_seed(2);
        let objective = FnObjective::new(1, |x: &[f64]| if x[0] > 0.5 { f64::NAN } else { x[0] });
        let mut ga = GeneticAlgorithm::from_config(objective, &config);
        ga.init_with_chromosomes(
            &config,
            &MultiBounds::symmetric(1.0, 1),
            &[vec![0.1], vec![0.2], vec![0.3]],
        )
        .unwrap();

        let outcome = ga.insert_migrant(&Migrant::new(vec![0.9])).unwrap();
        assert!(!outcome.is_accepted());
        assert!(outcome.fitness().is_nan());
        assert_relative_eq!(ga.get_stats().best_fitness, 0.1);
    }
}
