//! HTTP handlers for crop reference data and ad-hoc recommendations

use axum::{extract::State, Json};
use serde::Serialize;
use shared::reference::{has_dedicated_list, CROP_PROFILES};
use shared::NutrientTargets;

use crate::error::AppResult;
use crate::services::recommendation::{
    RecommendationRequest, RecommendationResponse, RecommendationService,
};
use crate::AppState;

/// A supported crop and its nutrient targets
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CropSummary {
    pub crop: &'static str,
    pub targets: NutrientTargets,
    /// False when the crop shares the default fertilizer list
    pub dedicated_fertilizers: bool,
}

/// List supported crops
pub async fn list_crops() -> Json<Vec<CropSummary>> {
    let crops = CROP_PROFILES
        .iter()
        .map(|profile| CropSummary {
            crop: profile.crop,
            targets: profile.targets,
            dedicated_fertilizers: has_dedicated_list(profile.crop),
        })
        .collect();
    Json(crops)
}

/// Score a soil sample for a crop
pub async fn create_recommendations(
    State(state): State<AppState>,
    Json(request): Json<RecommendationRequest>,
) -> AppResult<Json<RecommendationResponse>> {
    let service = RecommendationService::new(state.weather);
    let response = service.recommend(request).await?;
    Ok(Json(response))
}
