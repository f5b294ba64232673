//! Route definitions for the FertilizerPro platform

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Crop reference data
        .route("/crops", get(handlers::list_crops))
        // Ad-hoc recommendations
        .route("/recommendations", post(handlers::create_recommendations))
        // Farm management
        .nest("/farms", farm_routes())
        // Weather lookups
        .route("/weather", get(handlers::get_current_weather))
}

/// Farm and soil test routes
fn farm_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_farms).post(handlers::create_farm))
        .route(
            "/:farm_id",
            get(handlers::get_farm).delete(handlers::delete_farm),
        )
        .route(
            "/:farm_id/soil-tests",
            get(handlers::list_soil_tests).post(handlers::create_soil_test),
        )
        .route(
            "/:farm_id/soil-tests/:test_id/recommendations",
            get(handlers::get_soil_test_recommendations),
        )
        .route(
            "/:farm_id/soil-tests/:test_id/report.csv",
            get(handlers::get_soil_test_report),
        )
}
