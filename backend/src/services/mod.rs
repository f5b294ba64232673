//! Business logic services for the FertilizerPro platform

pub mod farm;
pub mod recommendation;
pub mod reporting;
pub mod weather;

pub use farm::{FarmService, FarmStore};
pub use recommendation::RecommendationService;
pub use reporting::ReportingService;
pub use weather::WeatherService;
