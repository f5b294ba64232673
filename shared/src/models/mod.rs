//! Domain models for the FertilizerPro platform

mod crop;
mod farm;
mod fertilizer;
mod recommendation;
mod soil;
mod weather;

pub use crop::*;
pub use farm::*;
pub use fertilizer::*;
pub use recommendation::*;
pub use soil::*;
pub use weather::*;
