//! # island-evo
//!
//! The local-island half of an island-model genetic algorithm.
//!
//! Each island owns a fixed-size, rank-ordered population of real-valued
//! chromosomes and evolves it independently. Every few generations islands
//! trade their best chromosome; an arriving migrant replaces the local worst
//! only when it is strictly better, so migration never degrades an island.
//!
//! Objectives are minimized. Internally the GA maximizes
//! `fitness = 1 / (1 + objective)`, while reported statistics stay in
//! objective space.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use island_evo::prelude::*;
//!
//! let config = AlgorithmConfig::new(500, 100).with_seed(42);
//! let mut island = GeneticAlgorithm::from_config(Rastrigin::new(10), &config);
//! island.init(&config, &MultiBounds::symmetric(5.12, 10))?;
//!
//! while !island.ended() {
//!     island.run_iterations(50)?;
//!     let migrant = island.pick_migrant()?;
//!     // ship `migrant` to a neighbour, insert whatever arrives
//! }
//! println!("best objective: {}", island.get_stats().best_fitness);
//! ```

pub mod algorithms;
pub mod config;
pub mod error;
pub mod fitness;
pub mod genome;
pub mod migration;
pub mod operators;
pub mod population;

use tracing_subscriber::EnvFilter;

use crate::error::EvolutionError;

/// Install the global tracing subscriber
///
/// `RUST_LOG` sets the filter. `LOG_FORMAT=json` selects JSON lines with the
/// current span attached; anything else gives human-readable output. Fails
/// if a subscriber is already installed.
pub fn init_tracing() -> Result<(), EvolutionError> {
    let format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let result = match format.as_str() {
        "json" => tracing_subscriber::fmt()
            .json()
            .with_env_filter(EnvFilter::from_default_env())
            .with_current_span(true)
            .with_span_list(true)
            .try_init(),
        _ => tracing_subscriber::fmt()
            .pretty()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init(),
    };

    result.map_err(|e| EvolutionError::Tracing(e.to_string()))
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::algorithms::prelude::*;
    pub use crate::config::loader::{load_from_file, load_from_str};
    pub use crate::config::{
        AlgorithmConfig, ConfigError, IslandConfig, MigrationConfig, ProblemConfig,
    };
    pub use crate::error::*;
    pub use crate::fitness::prelude::*;
    pub use crate::genome::prelude::*;
    pub use crate::migration::prelude::*;
    pub use crate::operators::prelude::*;
    pub use crate::population::prelude::*;
    pub use crate::init_tracing;
}
