//! HTTP handlers for weather lookups

use axum::{
    extract::{Query, State},
    Json,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use shared::{validate_coordinates, GpsCoordinates};

use crate::error::{AppError, AppResult};
use crate::services::weather::CurrentWeatherReport;
use crate::AppState;

/// Query parameters for a weather lookup
#[derive(Debug, Deserialize)]
pub struct LocationQuery {
    pub latitude: Decimal,
    pub longitude: Decimal,
}

/// Current weather at a location
pub async fn get_current_weather(
    State(state): State<AppState>,
    Query(query): Query<LocationQuery>,
) -> AppResult<Json<CurrentWeatherReport>> {
    let coordinates = GpsCoordinates::new(query.latitude, query.longitude);
    validate_coordinates(&coordinates)
        .map_err(|msg| AppError::validation("coordinates", msg, "GPS निर्देशांक अमान्य हैं"))?;

    let report = state.weather.current_report(coordinates).await?;
    Ok(Json(report))
}
