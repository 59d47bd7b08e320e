//! Run configuration
//!
//! ## Responsibility
//! Define the TOML schema for an island run: the per-island algorithm
//! parameters, the problem being minimized, and how islands migrate.
//!
//! ## Guarantees
//! - `max_generations` and `population_size` have no defaults; a file that
//!   omits either fails to parse
//! - Every other field has a default matching the classic Rastrigin setup
//!
//! ## NOT Responsible For
//! - Reading files (that belongs to `loader`)
//! - Semantic checks (that belongs to `validation`)

pub mod loader;
pub mod validation;

use serde::{Deserialize, Serialize};

use crate::fitness::benchmarks::{Benchmark, ObjectiveKind};
use crate::genome::bounds::{Bounds, MultiBounds};
use crate::migration::topology::MigrationTopology;

pub use validation::ConfigError;

/// Top-level configuration of an island run
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IslandConfig {
    /// Per-island algorithm parameters
    pub algorithm: AlgorithmConfig,
    /// The problem every island minimizes
    #[serde(default)]
    pub problem: ProblemConfig,
    /// Island count and migration schedule
    #[serde(default)]
    pub migration: MigrationConfig,
}

/// Per-island algorithm parameters
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmConfig {
    /// Generations each island runs before it ends
    pub max_generations: usize,
    /// Fixed number of entities per island
    pub population_size: usize,
    /// Fraction of the population bred by crossover each generation
    #[serde(default = "default_crossover_ratio")]
    pub crossover_ratio: f64,
    /// Fraction of the population bred by mutation each generation
    #[serde(default = "default_mutation_ratio")]
    pub mutation_ratio: f64,
    /// Random seed; entropy-seeded when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

impl AlgorithmConfig {
    /// Create a config with default ratios and no seed
    pub fn new(max_generations: usize, population_size: usize) -> Self {
        Self {
            max_generations,
            population_size,
            crossover_ratio: default_crossover_ratio(),
            mutation_ratio: default_mutation_ratio(),
            seed: None,
        }
    }

    /// Set the random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// The problem being minimized
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProblemConfig {
    /// Objective function
    #[serde(default)]
    pub objective: ObjectiveKind,
    /// Chromosome length
    #[serde(default = "default_dimensions")]
    pub dimensions: usize,
    /// Lower limit shared by every dimension
    #[serde(default = "default_lower")]
    pub lower: f64,
    /// Upper limit shared by every dimension
    #[serde(default = "default_upper")]
    pub upper: f64,
    /// Per-dimension `[lower, upper]` pairs, overriding `lower`/`upper`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounds: Option<Vec<(f64, f64)>>,
}

impl ProblemConfig {
    /// Declared limits for every dimension
    pub fn bounds(&self) -> MultiBounds {
        match &self.bounds {
            Some(pairs) => pairs
                .iter()
                .map(|&(lower, upper)| Bounds { min: lower, max: upper })
                .collect(),
            None => MultiBounds::uniform(
                Bounds {
                    min: self.lower,
                    max: self.upper,
                },
                self.dimensions,
            ),
        }
    }

    /// The configured objective
    pub fn objective(&self) -> Benchmark {
        Benchmark::new(self.objective, self.dimensions)
    }
}

impl Default for ProblemConfig {
    fn default() -> Self {
        Self {
            objective: ObjectiveKind::default(),
            dimensions: default_dimensions(),
            lower: default_lower(),
            upper: default_upper(),
            bounds: None,
        }
    }
}

/// Island count and migration schedule
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MigrationConfig {
    /// Number of islands
    #[serde(default = "default_islands")]
    pub islands: usize,
    /// Generations between migration rounds
    #[serde(default = "default_interval")]
    pub interval: usize,
    /// Which islands send to which
    #[serde(default)]
    pub topology: MigrationTopology,
}

impl Default for MigrationConfig {
    fn default() -> Self {
        Self {
            islands: default_islands(),
            interval: default_interval(),
            topology: MigrationTopology::default(),
        }
    }
}

fn default_crossover_ratio() -> f64 {
    0.9
}

fn default_mutation_ratio() -> f64 {
    0.1
}

fn default_dimensions() -> usize {
    50
}

fn default_lower() -> f64 {
    -12.0
}

fn default_upper() -> f64 {
    12.0
}

fn default_islands() -> usize {
    4
}

fn default_interval() -> usize {
    100
}
