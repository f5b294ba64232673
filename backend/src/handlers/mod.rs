//! HTTP request handlers

pub mod farm;
pub mod health;
pub mod recommendation;
pub mod report;
pub mod weather;

pub use farm::*;
pub use health::*;
pub use recommendation::*;
pub use report::*;
pub use weather::*;
