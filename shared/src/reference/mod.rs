//! Static reference tables: crop nutrient targets and the fertilizer catalog

mod crops;
mod fertilizers;

pub use crops::*;
pub use fertilizers::*;
