//! Island Model Driver
//!
//! An in-process archipelago: several [`IslandAlgorithm`]s evolve
//! independently and exchange their best chromosomes every
//! `migration_interval` generations along a [`MigrationTopology`].
//!
//! With the `parallel` feature the generation phase of a round runs the
//! islands on the rayon pool. Migration is always sequential and each
//! migrant is inserted on its own.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, info_span, warn};

use crate::algorithms::genetic::GeneticAlgorithm;
use crate::algorithms::traits::{IslandAlgorithm, PopulationSnapshot};
use crate::config::IslandConfig;
use crate::error::{EvoResult, EvolutionError};
use crate::fitness::benchmarks::Benchmark;
use crate::migration::migrant::Migrant;
use crate::migration::topology::MigrationTopology;

/// Tally of one migration round
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrationSummary {
    /// Migrants delivered to a live island
    pub sent: usize,
    /// Migrants that replaced a local worst
    pub accepted: usize,
    /// Migrants evaluated and dropped
    pub discarded: usize,
    /// Migrants refused with an error
    pub rejected: usize,
}

/// Final state of an archipelago run
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArchipelagoReport {
    /// Migration rounds performed
    pub rounds: usize,
    /// Lowest objective seen on any island
    pub best_objective: f64,
    /// Island holding `best_objective`
    pub best_island: Option<usize>,
    /// Best chromosome of `best_island`
    pub best_chromosome: Option<Vec<f64>>,
    /// One snapshot per island, in island order
    pub islands: Vec<PopulationSnapshot>,
}

impl ArchipelagoReport {
    /// Objective evaluations across every island
    pub fn total_evaluations(&self) -> usize {
        self.islands.iter().map(|s| s.stats.fitness_evals).sum()
    }
}

/// A set of islands joined by a migration topology
pub struct Archipelago<A> {
    islands: Vec<A>,
    topology: MigrationTopology,
    migration_interval: usize,
    rounds: usize,
}

impl Archipelago<GeneticAlgorithm<Benchmark>> {
    /// Build and initialize every island described by `config`
    ///
    /// With a seed, island `i` is seeded with `seed + i`.
    pub fn from_config(config: &IslandConfig) -> EvoResult<Self> {
        let bounds = config.problem.bounds();
        let islands = (0..config.migration.islands)
            .map(|index| -> EvoResult<_> {
                let mut algorithm = config.algorithm.clone();
                algorithm.seed = algorithm.seed.map(|seed| seed.wrapping_add(index as u64));

                let mut island =
                    GeneticAlgorithm::from_config(config.problem.objective(), &algorithm);
                island.init(&algorithm, &bounds)?;
                Ok(island)
            })
            .collect::<EvoResult<Vec<_>>>()?;

        Self::new(
            islands,
            config.migration.topology.clone(),
            config.migration.interval,
        )
    }
}

impl<A: IslandAlgorithm> Archipelago<A> {
    /// Join initialized islands with a topology
    pub fn new(
        islands: Vec<A>,
        topology: MigrationTopology,
        migration_interval: usize,
    ) -> EvoResult<Self> {
        topology.validate(islands.len())?;
        if migration_interval == 0 {
            return Err(EvolutionError::Configuration(
                "Migration interval must be at least 1".to_string(),
            ));
        }

        info!(
            islands = islands.len(),
            migration_interval,
            topology = ?topology,
            "Archipelago created"
        );
        Ok(Self {
            islands,
            topology,
            migration_interval,
            rounds: 0,
        })
    }

    /// The islands, in index order
    pub fn islands(&self) -> &[A] {
        &self.islands
    }

    /// Mutable access to one island
    pub fn island_mut(&mut self, index: usize) -> Option<&mut A> {
        self.islands.get_mut(index)
    }

    /// Migration rounds performed so far
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// The routing topology
    pub fn topology(&self) -> &MigrationTopology {
        &self.topology
    }

    /// True once every island has ended
    pub fn is_finished(&self) -> bool {
        self.islands.iter().all(IslandAlgorithm::ended)
    }

    /// One round: local generations on every live island, then migration
    pub fn step(&mut self) -> EvoResult<MigrationSummary> {
        self.evolve_islands()?;
        let summary = self.migrate();
        self.rounds += 1;

        debug!(
            round = self.rounds,
            sent = summary.sent,
            accepted = summary.accepted,
            rejected = summary.rejected,
            "Migration round complete"
        );
        Ok(summary)
    }

    /// Step until every island has ended
    pub fn run(&mut self) -> EvoResult<ArchipelagoReport> {
        while !self.is_finished() {
            self.step()?;
        }

        let report = self.report()?;
        info!(
            rounds = report.rounds,
            best_objective = report.best_objective,
            best_island = ?report.best_island,
            evaluations = report.total_evaluations(),
            "Archipelago finished"
        );
        Ok(report)
    }

    /// Snapshot every island
    pub fn report(&self) -> EvoResult<ArchipelagoReport> {
        let islands = self
            .islands
            .iter()
            .map(IslandAlgorithm::get_population)
            .collect::<EvoResult<Vec<_>>>()?;

        let best_island = islands
            .iter()
            .enumerate()
            .filter(|(_, s)| !s.stats.best_fitness.is_nan())
            .min_by(|(_, a), (_, b)| a.stats.best_fitness.total_cmp(&b.stats.best_fitness))
            .map(|(index, _)| index);
        let best_objective = best_island
            .map(|index| islands[index].stats.best_fitness)
            .unwrap_or(f64::INFINITY);
        let best_chromosome =
            best_island.and_then(|index| islands[index].chromosomes.first().cloned());

        Ok(ArchipelagoReport {
            rounds: self.rounds,
            best_objective,
            best_island,
            best_chromosome,
            islands,
        })
    }

    #[cfg(feature = "parallel")]
    fn evolve_islands(&mut self) -> EvoResult<()> {
        let interval = self.migration_interval;
        self.islands
            .par_iter_mut()
            .enumerate()
            .filter(|(_, island)| !island.ended())
            .try_for_each(|(index, island)| {
                let _span = info_span!("island", index).entered();
                island.run_iterations(interval).map(|_| ())
            })
    }

    #[cfg(not(feature = "parallel"))]
    fn evolve_islands(&mut self) -> EvoResult<()> {
        let interval = self.migration_interval;
        for (index, island) in self.islands.iter_mut().enumerate() {
            if island.ended() {
                continue;
            }
            let _span = info_span!("island", index).entered();
            island.run_iterations(interval)?;
        }
        Ok(())
    }

    fn migrate(&mut self) -> MigrationSummary {
        let n = self.islands.len();
        let mut summary = MigrationSummary::default();

        // Every sender is read before any receiver changes
        let outgoing: Vec<(usize, Migrant)> = self
            .islands
            .iter()
            .enumerate()
            .filter(|(_, island)| !island.ended())
            .filter_map(|(index, island)| match island.pick_migrant() {
                Ok(migrant) => Some((index, migrant)),
                Err(e) => {
                    warn!(island = index, error = %e, "Could not pick migrant");
                    None
                }
            })
            .collect();

        for (source, migrant) in &outgoing {
            for target in self.topology.targets(*source, n) {
                let island = &mut self.islands[target];
                if island.ended() {
                    continue;
                }
                summary.sent += 1;

                let _span = info_span!("island", index = target).entered();
                match island.insert_migrant(migrant) {
                    Ok(outcome) if outcome.is_accepted() => summary.accepted += 1,
                    Ok(_) => summary.discarded += 1,
                    Err(e) => {
                        warn!(source, target, error = %e, "Migrant rejected");
                        summary.rejected += 1;
                    }
                }
            }
        }
        summary
    }
}
