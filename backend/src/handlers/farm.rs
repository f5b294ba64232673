//! HTTP handlers for farm and soil test endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use shared::{Farm, SoilTestRecord};
use uuid::Uuid;

use crate::error::AppResult;
use crate::services::farm::{CreateFarmInput, CreateSoilTestInput, FarmService};
use crate::services::recommendation::{RecommendationResponse, RecommendationService};
use crate::AppState;

/// Register a farm. A missing location is resolved from its coordinates.
pub async fn create_farm(
    State(state): State<AppState>,
    Json(input): Json<CreateFarmInput>,
) -> AppResult<(StatusCode, Json<Farm>)> {
    let service = FarmService::new(state.farms);
    let mut farm = service.create_farm(input).await?;

    if farm.location.is_empty() {
        if let Some(coordinates) = farm.coordinates {
            if let Some(name) = state.weather.location_name(&coordinates).await {
                farm = service.set_location(farm.id, name).await?;
            }
        }
    }

    Ok((StatusCode::CREATED, Json(farm)))
}

/// List all farms
pub async fn list_farms(State(state): State<AppState>) -> Json<Vec<Farm>> {
    let service = FarmService::new(state.farms);
    Json(service.list_farms().await)
}

/// Get a farm by ID
pub async fn get_farm(
    State(state): State<AppState>,
    Path(farm_id): Path<Uuid>,
) -> AppResult<Json<Farm>> {
    let service = FarmService::new(state.farms);
    let farm = service.get_farm(farm_id).await?;
    Ok(Json(farm))
}

/// Delete a farm and its soil tests
pub async fn delete_farm(
    State(state): State<AppState>,
    Path(farm_id): Path<Uuid>,
) -> AppResult<StatusCode> {
    let service = FarmService::new(state.farms);
    service.delete_farm(farm_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Record a soil test
pub async fn create_soil_test(
    State(state): State<AppState>,
    Path(farm_id): Path<Uuid>,
    Json(input): Json<CreateSoilTestInput>,
) -> AppResult<(StatusCode, Json<SoilTestRecord>)> {
    let service = FarmService::new(state.farms);
    let record = service.add_soil_test(farm_id, input).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// List soil tests for a farm
pub async fn list_soil_tests(
    State(state): State<AppState>,
    Path(farm_id): Path<Uuid>,
) -> AppResult<Json<Vec<SoilTestRecord>>> {
    let service = FarmService::new(state.farms);
    let tests = service.list_soil_tests(farm_id).await?;
    Ok(Json(tests))
}

/// Recommendations for a stored soil test
pub async fn get_soil_test_recommendations(
    State(state): State<AppState>,
    Path((farm_id, test_id)): Path<(Uuid, Uuid)>,
) -> AppResult<Json<RecommendationResponse>> {
    let service = FarmService::new(state.farms);
    let farm = service.get_farm(farm_id).await?;
    let test = service.get_soil_test(farm_id, test_id).await?;

    let response = RecommendationService::new(state.weather)
        .recommend_for_soil_test(&farm, &test)
        .await?;
    Ok(Json(response))
}
