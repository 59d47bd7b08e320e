//! Real-valued chromosome
//!
//! This module provides the fixed-length real-valued vector that every
//! entity on an island carries.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::GenomeError;
use crate::genome::bounds::MultiBounds;

/// Fixed-length real-valued vector genome
///
/// Cloning is a deep copy, so a chromosome copied into a migrant or snapshot
/// never aliases the population it came from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RealVector {
    genes: Vec<f64>,
}

impl RealVector {
    /// Create a new real vector with the given genes
    pub fn new(genes: Vec<f64>) -> Self {
        Self { genes }
    }

    /// Build a chromosome of exactly `expected` genes, rejecting any other
    /// length instead of truncating or padding
    pub fn with_dimension(genes: &[f64], expected: usize) -> Result<Self, GenomeError> {
        if genes.len() != expected {
            return Err(GenomeError::DimensionMismatch {
                expected,
                actual: genes.len(),
            });
        }
        Ok(Self {
            genes: genes.to_vec(),
        })
    }

    /// Draw each gene independently and uniformly from its bound
    pub fn generate<R: Rng>(rng: &mut R, bounds: &MultiBounds) -> Self {
        let genes = bounds
            .bounds
            .iter()
            .map(|b| rng.gen_range(b.min..=b.max))
            .collect();
        Self { genes }
    }

    /// Number of genes
    pub fn dimension(&self) -> usize {
        self.genes.len()
    }

    /// Get a reference to the genes
    pub fn genes(&self) -> &[f64] {
        &self.genes
    }

    /// Get a mutable reference to the genes
    pub fn genes_mut(&mut self) -> &mut [f64] {
        &mut self.genes
    }

    /// Get the underlying vector
    pub fn into_inner(self) -> Vec<f64> {
        self.genes
    }

    /// Clamp every gene into its bound
    pub fn apply_bounds(&mut self, bounds: &MultiBounds) {
        bounds.clamp_vec(&mut self.genes);
    }
}

impl std::ops::Index<usize> for RealVector {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.genes[index]
    }
}

impl std::ops::IndexMut<usize> for RealVector {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.genes[index]
    }
}

impl From<Vec<f64>> for RealVector {
    fn from(genes: Vec<f64>) -> Self {
        Self { genes }
    }
}

impl From<RealVector> for Vec<f64> {
    fn from(genome: RealVector) -> Self {
        genome.genes
    }
}

impl<const N: usize> From<[f64; N]> for RealVector {
    fn from(arr: [f64; N]) -> Self {
        Self {
            genes: arr.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_real_vector_new() {
        let v = RealVector::new(vec![1.0, 2.0, 3.0]);
        assert_eq!(v.dimension(), 3);
        assert_eq!(v.genes(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_real_vector_from_array() {
        let v: RealVector = [1.0, 2.0, 3.0].into();
        assert_eq!(v.genes(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_with_dimension_rejects_wrong_length() {
        assert!(RealVector::with_dimension(&[1.0, 2.0], 2).is_ok());
        assert_eq!(
            RealVector::with_dimension(&[1.0, 2.0, 3.0], 2),
            Err(GenomeError::DimensionMismatch {
                expected: 2,
                actual: 3
            })
        );
        assert_eq!(
            RealVector::with_dimension(&[1.0], 2),
            Err(GenomeError::DimensionMismatch {
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn test_real_vector_generate() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        let bounds = MultiBounds::symmetric(5.0, 10);
        let v = RealVector::generate(&mut rng, &bounds);

        assert_eq!(v.dimension(), 10);
        assert!(bounds.contains_vec(v.genes()));
    }

    #[test]
    fn test_real_vector_indexing() {
        let mut v = RealVector::new(vec![1.0, 2.0, 3.0]);
        assert_eq!(v[0], 1.0);
        v[1] = 42.0;
        assert_eq!(v[1], 42.0);
    }

    #[test]
    fn test_real_vector_apply_bounds() {
        let mut v = RealVector::new(vec![-10.0, 0.0, 10.0]);
        let bounds = MultiBounds::symmetric(5.0, 3);
        v.apply_bounds(&bounds);
        assert_eq!(v.genes(), &[-5.0, 0.0, 5.0]);
    }

    #[test]
    fn test_real_vector_serializes_as_plain_array() {
        let v = RealVector::new(vec![1.0, 2.5]);
        let serialized = serde_json::to_string(&v).unwrap();
        assert_eq!(serialized, "[1.0,2.5]");
        let deserialized: RealVector = serde_json::from_str(&serialized).unwrap();
        assert_eq!(v, deserialized);
    }
}
