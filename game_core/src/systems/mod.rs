pub mod collision;
pub mod scoring;

pub use collision::*;
pub use scoring::*;
