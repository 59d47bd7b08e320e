//! Migrant values exchanged between islands

use serde::{Deserialize, Serialize};

use crate::error::GenomeError;
use crate::genome::real_vector::RealVector;
use crate::population::entity::Entity;

/// A transport-neutral copy of one chromosome
///
/// Migrants own their data: building one from a population copies the genes,
/// and inserting one copies them again, so nothing is shared across the
/// transport boundary.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Migrant {
    /// Chromosome values
    pub var: Vec<f64>,
}

impl Migrant {
    /// Create a migrant from raw values
    pub fn new(var: Vec<f64>) -> Self {
        Self { var }
    }

    /// Copy an entity's chromosome
    pub fn from_entity(entity: &Entity) -> Self {
        Self {
            var: entity.genome().genes().to_vec(),
        }
    }

    /// Number of values carried
    pub fn len(&self) -> usize {
        self.var.len()
    }

    /// True when the migrant carries no values
    pub fn is_empty(&self) -> bool {
        self.var.is_empty()
    }

    /// Copy the values into a chromosome of exactly `dimension` genes
    pub fn to_genome(&self, dimension: usize) -> Result<RealVector, GenomeError> {
        RealVector::with_dimension(&self.var, dimension)
    }
}

/// What happened to an inserted migrant
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsertOutcome {
    /// The migrant beat the local worst and took its slot
    Accepted {
        /// Fitness the migrant was admitted with
        fitness: f64,
    },
    /// The migrant was no better than the local worst and was dropped
    Discarded {
        /// Fitness the migrant was evaluated at
        fitness: f64,
    },
}

impl InsertOutcome {
    /// True if the population changed
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// Fitness the migrant was evaluated at
    pub fn fitness(&self) -> f64 {
        match self {
            Self::Accepted { fitness } | Self::Discarded { fitness } => *fitness,
        }
    }
}
