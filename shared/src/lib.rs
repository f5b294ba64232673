//! Shared types, reference data and the recommendation engine for FertilizerPro
//!
//! This crate contains the fertilizer scoring engine and the types shared
//! between the backend, frontend (via WASM), and other components of the system.

pub mod engine;
pub mod error;
pub mod models;
pub mod reference;
pub mod types;
pub mod validation;

pub use engine::{compute_recommendations, score_candidates};
pub use error::*;
pub use models::*;
pub use types::*;
pub use validation::*;
