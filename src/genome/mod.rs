//! Chromosome representation
//!
//! This module provides the real-valued chromosome and its bounds.

pub mod bounds;
pub mod real_vector;

pub mod prelude {
    pub use super::bounds::*;
    pub use super::real_vector::*;
}
