//! Migration topologies
//!
//! Which islands receive a given island's migrant. Only the fixed shapes the
//! in-process archipelago needs are provided.

use serde::{Deserialize, Serialize};

use crate::error::{EvoResult, EvolutionError};

/// Migration topology determines which islands exchange individuals
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MigrationTopology {
    /// Ring topology: each island sends to the next
    #[default]
    Ring,
    /// Fully connected: every island sends to every other
    FullyConnected,
    /// Star: spokes send to the hub, the hub sends to every spoke
    Star { hub_index: usize },
}

impl MigrationTopology {
    /// Get the target islands for migration from a given source island
    pub fn targets(&self, source: usize, num_islands: usize) -> Vec<usize> {
        if num_islands < 2 {
            return Vec::new();
        }
        match self {
            Self::Ring => vec![(source + 1) % num_islands],
            Self::FullyConnected => (0..num_islands).filter(|&i| i != source).collect(),
            Self::Star { hub_index } => {
                if source == *hub_index {
                    (0..num_islands).filter(|&i| i != source).collect()
                } else {
                    vec![*hub_index]
                }
            }
        }
    }

    /// Check the topology can be laid over `num_islands` islands
    pub fn validate(&self, num_islands: usize) -> EvoResult<()> {
        if num_islands == 0 {
            return Err(EvolutionError::Configuration(
                "Topology needs at least one island".to_string(),
            ));
        }
        if let Self::Star { hub_index } = self {
            if *hub_index >= num_islands {
                return Err(EvolutionError::Configuration(format!(
                    "Star hub {} is out of range for {} islands",
                    hub_index, num_islands
                )));
            }
        }
        Ok(())
    }
}
