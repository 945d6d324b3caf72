pub mod generator;
pub mod plan;

pub use generator::*;
pub use plan::*;
