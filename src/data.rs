//! Report types and serialization.

pub mod check;
pub mod yaml;

pub use check::*;
pub use yaml::*;
