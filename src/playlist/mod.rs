pub mod generator;
pub mod metadata;
pub mod sampler;
pub mod template;

#[cfg(test)]
mod generator_tests;

pub use generator::*;
pub use metadata::*;
pub use template::*;
