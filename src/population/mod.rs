//! Population management
//!
//! This module provides the Entity and Population types.

pub mod entity;
#[allow(clippy::module_inception)]
pub mod population;

pub mod prelude {
    pub use super::entity::*;
    pub use super::population::*;
}
