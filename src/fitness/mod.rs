//! Objectives and fitness evaluation
//!
//! This module provides the minimization objectives and the evaluator that
//! turns them into maximization scores.

pub mod benchmarks;
pub mod evaluator;

pub mod prelude {
    pub use super::benchmarks::*;
    pub use super::evaluator::*;
}
