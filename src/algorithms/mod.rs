//! Island algorithms
//!
//! The adapter contract, its genetic implementation, and the archipelago
//! driver that runs several of them with migration.

pub mod genetic;
pub mod island;
pub mod stats;
pub mod strategy;
pub mod traits;

pub mod prelude {
    pub use super::genetic::*;
    pub use super::island::*;
    pub use super::stats::*;
    pub use super::strategy::*;
    pub use super::traits::*;
}
