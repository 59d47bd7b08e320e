//! Island algorithm contract
//!
//! The operations a coordinating driver uses to run one island: lifecycle,
//! local generations, migration, and read-only reporting.

use serde::{Deserialize, Serialize};

use crate::algorithms::stats::AlgorithmStats;
use crate::config::AlgorithmConfig;
use crate::error::EvoResult;
use crate::genome::bounds::MultiBounds;
use crate::migration::migrant::{InsertOutcome, Migrant};

/// Lifecycle of an island algorithm
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlgorithmState {
    /// Created, no population yet
    Uninitialized,
    /// Population exists and generations remain
    Running,
    /// Generation budget spent
    Ended,
}

impl AlgorithmState {
    /// Lowercase name used in error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Uninitialized => "uninitialized",
            Self::Running => "running",
            Self::Ended => "ended",
        }
    }
}

impl std::fmt::Display for AlgorithmState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Owned copy of an island's population and counters
///
/// Chromosomes are listed best first. Nothing here aliases the live
/// population.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PopulationSnapshot {
    /// Every chromosome, best first
    pub chromosomes: Vec<Vec<f64>>,
    /// Counters at the time of the snapshot
    pub stats: AlgorithmStats,
}

impl PopulationSnapshot {
    /// Number of chromosomes
    pub fn len(&self) -> usize {
        self.chromosomes.len()
    }

    /// True when the snapshot holds no chromosomes
    pub fn is_empty(&self) -> bool {
        self.chromosomes.is_empty()
    }
}

/// One island in an island-model run
///
/// Calls against a single island are expected to be serialized by the
/// driver. Implementations must be `Send` so islands can advance on worker
/// threads.
pub trait IslandAlgorithm: Send {
    /// Create and evaluate the initial population
    ///
    /// Moves `Uninitialized` to `Running`.
    fn init(&mut self, config: &AlgorithmConfig, bounds: &MultiBounds) -> EvoResult<()>;

    /// Run up to `n` local generations, returning how many ran
    fn run_iterations(&mut self, n: usize) -> EvoResult<usize>;

    /// Offer a migrant for elitist replacement of the local worst
    fn insert_migrant(&mut self, migrant: &Migrant) -> EvoResult<InsertOutcome>;

    /// Copy the current local best
    fn pick_migrant(&self) -> EvoResult<Migrant>;

    /// True once the generation budget is spent
    fn ended(&self) -> bool;

    /// Copy the population and counters for reporting
    fn get_population(&self) -> EvoResult<PopulationSnapshot>;

    /// Current counters
    fn get_stats(&self) -> &AlgorithmStats;

    /// Current lifecycle state
    fn state(&self) -> AlgorithmState;
}
