//! Domain layer: pure, synchronous bookmark rules.

pub mod error;
pub mod model;
pub mod store;
pub mod traits;
