//! Selection operators
//!
//! This module provides the parent selection operators.

use rand::seq::index::sample;
use rand::Rng;
use rand_distr::{Distribution, WeightedIndex};

use crate::error::OperatorError;
use crate::operators::traits::SelectionOperator;
use crate::population::entity::Entity;

fn empty_population() -> OperatorError {
    OperatorError::SelectionFailed("Population cannot be empty".to_string())
}

/// Tournament selection operator
///
/// Selects the best individual from a random subset of the population.
#[derive(Clone, Debug)]
pub struct TournamentSelection {
    /// Tournament size (number of individuals competing)
    pub tournament_size: usize,
}

impl TournamentSelection {
    /// Create a new tournament selection with the given size
    pub fn new(tournament_size: usize) -> Self {
        assert!(tournament_size >= 1, "Tournament size must be at least 1");
        Self { tournament_size }
    }

    /// Create binary tournament selection (size = 2)
    pub fn binary() -> Self {
        Self::new(2)
    }
}

impl SelectionOperator for TournamentSelection {
    fn select<R: Rng>(&self, population: &[Entity], rng: &mut R) -> Result<usize, OperatorError> {
        if population.is_empty() {
            return Err(empty_population());
        }

        let tournament_size = self.tournament_size.min(population.len());

        sample(rng, population.len(), tournament_size)
            .into_iter()
            .reduce(|best, challenger| {
                if population[challenger].is_better_than(&population[best]) {
                    challenger
                } else {
                    best
                }
            })
            .ok_or_else(empty_population)
    }
}

/// Roulette wheel selection (fitness proportionate)
///
/// Selection probability is proportional to fitness. Fitness produced by the
/// evaluator is already positive, but negative values are shifted and
/// non-finite ones weighted as zero.
#[derive(Clone, Debug, Default)]
pub struct RouletteSelection;

impl RouletteSelection {
    /// Create a new roulette selection
    pub fn new() -> Self {
        Self
    }
}

impl SelectionOperator for RouletteSelection {
    fn select<R: Rng>(&self, population: &[Entity], rng: &mut R) -> Result<usize, OperatorError> {
        if population.is_empty() {
            return Err(empty_population());
        }

        let min_fitness = population
            .iter()
            .map(Entity::fitness)
            .filter(|f| f.is_finite())
            .fold(f64::INFINITY, f64::min);

        let offset = if min_fitness < 0.0 { -min_fitness } else { 0.0 };

        let weights: Vec<f64> = population
            .iter()
            .map(|e| {
                let f = e.fitness();
                if f.is_finite() {
                    f + offset
                } else {
                    0.0
                }
            })
            .collect();

        match WeightedIndex::new(&weights) {
            Ok(dist) => Ok(dist.sample(rng)),
            Err(_) => Ok(rng.gen_range(0..population.len())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::real_vector::RealVector;
    use rand::SeedableRng;

    fn create_population(fitnesses: &[f64]) -> Vec<Entity> {
        fitnesses
            .iter()
            .enumerate()
            .map(|(i, &f)| Entity::new(RealVector::new(vec![i as f64]), f))
            .collect()
    }

    #[test]
    fn test_tournament_selection_selects_valid_index() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(11);
        let population = create_population(&[0.1, 0.2, 0.3, 0.4, 0.5]);
        let selection = TournamentSelection::new(3);

        for _ in 0..100 {
            let idx = selection.select(&population, &mut rng).unwrap();
            assert!(idx < population.len());
        }
    }

    #[test]
    fn test_tournament_selection_full_tournament_picks_best() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(5);
        let population = create_population(&[0.2, 0.9, 0.1]);
        let selection = TournamentSelection::new(3);

        for _ in 0..50 {
            assert_eq!(selection.select(&population, &mut rng).unwrap(), 1);
        }
    }

    #[test]
    fn test_tournament_selection_binary() {
        assert_eq!(TournamentSelection::binary().tournament_size, 2);
    }

    #[test]
    #[should_panic(expected = "Tournament size must be at least 1")]
    fn test_tournament_size_zero() {
        TournamentSelection::new(0);
    }

    #[test]
    fn test_roulette_selection_prefers_fitter() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(9);
        let population = create_population(&[0.01, 0.98, 0.01]);
        let selection = RouletteSelection::new();

        let picks = (0..1000)
            .filter(|_| selection.select(&population, &mut rng).unwrap() == 1)
            .count();
        assert!(picks > 900);
    }

    #[test]
    fn test_roulette_selection_ignores_nan() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(2);
        let population = create_population(&[f64::NAN, 0.5]);
        let selection = RouletteSelection::new();

        for _ in 0..100 {
            assert_eq!(selection.select(&population, &mut rng).unwrap(), 1);
        }
    }

    #[test]
    fn test_roulette_selection_handles_negative_fitness() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(4);
        let population = create_population(&[-3.0, -1.0, 2.0]);
        let selection = RouletteSelection::new();

        for _ in 0..100 {
            let idx = selection.select(&population, &mut rng).unwrap();
            assert!(idx < population.len());
        }
    }

    #[test]
    fn test_selection_on_empty_population_fails() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(0);
        assert!(RouletteSelection::new().select(&[], &mut rng).is_err());
        assert!(TournamentSelection::binary().select(&[], &mut rng).is_err());
    }
}
