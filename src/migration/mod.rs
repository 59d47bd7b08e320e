//! Migration between islands
//!
//! Migrant values, insertion outcomes, and the topologies that route them.

pub mod migrant;
pub mod topology;

pub mod prelude {
    pub use super::migrant::*;
    pub use super::topology::*;
}
