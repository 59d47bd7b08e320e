//! Population type
//!
//! A fixed-size, rank-ordered collection of evaluated entities. Index 0 is
//! always the island's best member and the last index its worst; every
//! operation that changes membership restores that order before returning.

use rand::Rng;

use crate::algorithms::strategy::EvolutionStrategy;
use crate::error::{EvoResult, EvolutionError, GenomeError};
use crate::fitness::benchmarks::Objective;
use crate::fitness::evaluator::FitnessEvaluator;
use crate::genome::bounds::MultiBounds;
use crate::genome::real_vector::RealVector;
use crate::population::entity::Entity;

pub(crate) fn invalid_bounds(bounds: &MultiBounds, index: usize) -> EvolutionError {
    let (min, max) = bounds
        .get(index)
        .map_or((f64::NAN, f64::NAN), |b| (b.min, b.max));
    EvolutionError::Configuration(format!(
        "Invalid bounds for dimension {index}: [{min}, {max}]"
    ))
}

/// A rank-ordered population of entities
#[derive(Clone, Debug)]
pub struct Population {
    /// Members, best first
    entities: Vec<Entity>,
    /// Region the population was seeded in
    bounds: MultiBounds,
}

impl Population {
    /// Seed `size` chromosomes uniformly inside `bounds`, evaluate each once
    /// and sort best first
    pub fn create<O, R>(
        size: usize,
        bounds: &MultiBounds,
        evaluator: &mut FitnessEvaluator<'_, O>,
        rng: &mut R,
    ) -> EvoResult<Self>
    where
        O: Objective + ?Sized,
        R: Rng,
    {
        Self::create_with(size, bounds, evaluator, |_| RealVector::generate(rng, bounds))
    }

    /// Like [`Population::create`], with chromosomes supplied by `seed`
    ///
    /// `seed` is called with the slot index. Seeded chromosomes are clamped
    /// into `bounds` before evaluation.
    pub fn create_with<O, S>(
        size: usize,
        bounds: &MultiBounds,
        evaluator: &mut FitnessEvaluator<'_, O>,
        mut seed: S,
    ) -> EvoResult<Self>
    where
        O: Objective + ?Sized,
        S: FnMut(usize) -> RealVector,
    {
        if size == 0 {
            return Err(EvolutionError::EmptyPopulation);
        }
        if bounds.dimension() != evaluator.dimension() {
            return Err(GenomeError::DimensionMismatch {
                expected: evaluator.dimension(),
                actual: bounds.dimension(),
            }
            .into());
        }
        if let Some(index) = bounds.first_invalid() {
            return Err(invalid_bounds(bounds, index));
        }

        let mut entities = Vec::with_capacity(size);
        for slot in 0..size {
            let mut genome = seed(slot);
            if genome.dimension() != bounds.dimension() {
                return Err(GenomeError::DimensionMismatch {
                    expected: bounds.dimension(),
                    actual: genome.dimension(),
                }
                .into());
            }
            genome.apply_bounds(bounds);
            entities.push(Entity::evaluate(genome, evaluator));
        }

        let mut population = Self {
            entities,
            bounds: bounds.clone(),
        };
        population.sort_by_fitness();
        Ok(population)
    }

    /// Run `generations` steps of `strategy`, re-sorting after each
    ///
    /// Returns the number of generations completed.
    pub fn advance<St, O, R>(
        &mut self,
        generations: usize,
        strategy: &St,
        evaluator: &mut FitnessEvaluator<'_, O>,
        rng: &mut R,
    ) -> EvoResult<usize>
    where
        St: EvolutionStrategy + ?Sized,
        O: Objective + ?Sized,
        R: Rng,
    {
        let size = self.len();
        for _ in 0..generations {
            strategy.evolve(self, evaluator, rng)?;
            debug_assert_eq!(self.len(), size, "strategy changed the population size");
            self.sort_by_fitness();
        }
        Ok(generations)
    }

    /// Get the population size
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Check if the population is empty
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Chromosome length shared by every member
    pub fn dimension(&self) -> usize {
        self.bounds.dimension()
    }

    /// Bounds the population was seeded in
    pub fn bounds(&self) -> &MultiBounds {
        &self.bounds
    }

    /// The `index`-th best entity; rank 0 is the best
    pub fn rank(&self, index: usize) -> Option<&Entity> {
        self.entities.get(index)
    }

    /// Get the best entity
    pub fn best(&self) -> Option<&Entity> {
        self.entities.first()
    }

    /// Get the worst entity
    pub fn worst(&self) -> Option<&Entity> {
        self.entities.last()
    }

    /// Get an iterator over the entities, best first
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Get the underlying slice of entities, best first
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Owned copies of every chromosome, best first
    pub fn chromosomes(&self) -> Vec<Vec<f64>> {
        self.entities
            .iter()
            .map(|e| e.genome().genes().to_vec())
            .collect()
    }

    /// Sort the population by fitness (best first)
    ///
    /// The sort is stable, so members with equal fitness keep their order.
    pub fn sort_by_fitness(&mut self) {
        self.entities.sort_by(Entity::rank_order);
    }

    /// Check the rank-order invariant
    pub fn is_sorted(&self) -> bool {
        self.entities
            .windows(2)
            .all(|w| !w[1].is_better_than(&w[0]))
    }

    /// Add offspring, then keep only the best `len()` members
    ///
    /// Parents and offspring compete on equal terms.
    pub fn merge_offspring(&mut self, offspring: Vec<Entity>) {
        let size = self.len();
        self.entities.extend(offspring);
        self.sort_by_fitness();
        self.entities.truncate(size);
    }

    /// Elitist steady-state replacement
    ///
    /// When `candidate` is strictly better than the current worst member it
    /// takes the worst slot and rank order is restored; otherwise the
    /// population is left untouched. A candidate whose chromosome is already
    /// held by a member is discarded, so an island receiving its own best
    /// stays unchanged. Returns whether the candidate was admitted.
    pub fn replace_worst_if_better(&mut self, candidate: Entity) -> bool {
        if self.contains_chromosome(candidate.genome()) {
            return false;
        }
        let Some(worst) = self.entities.last_mut() else {
            return false;
        };
        if !candidate.is_better_than(worst) {
            return false;
        }
        *worst = candidate;
        self.sift_up_last();
        true
    }

    /// Move the last member up to its rank, assuming the rest is sorted
    fn sift_up_last(&mut self) {
        let mut i = self.entities.len().saturating_sub(1);
        while i > 0 && self.entities[i].is_better_than(&self.entities[i - 1]) {
            self.entities.swap(i, i - 1);
            i -= 1;
        }
    }

    /// Whether some member carries exactly `genome`
    pub fn contains_chromosome(&self, genome: &RealVector) -> bool {
        self.entities.iter().any(|e| e.genome() == genome)
    }
}

impl std::ops::Index<usize> for Population {
    type Output = Entity;

    fn index(&self, index: usize) -> &Self::Output {
        &self.entities[index]
    }
}
