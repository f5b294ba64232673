//! Recommendation service: resolves weather, then runs the scoring engine

use serde::{Deserialize, Serialize};
use shared::engine::{deficiency_profile, DeficiencyProfile};
use shared::reference::crop_profile;
use shared::{
    compute_recommendations, Farm, GpsCoordinates, NutrientTargets, ScoredRecommendation,
    SoilSample, SoilTestRecord, WeatherSnapshot,
};

use crate::error::AppResult;
use crate::services::weather::WeatherService;

/// Ad-hoc recommendation request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    pub sample: SoilSample,
    pub crop: String,
    /// Explicit weather takes precedence over a lookup by coordinates
    #[serde(default)]
    pub weather: Option<WeatherSnapshot>,
    #[serde(default)]
    pub coordinates: Option<GpsCoordinates>,
}

/// Ranked recommendations with the context they were scored in
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResponse {
    pub requested_crop: String,
    /// Crop whose nutrient targets were used
    pub crop: &'static str,
    pub targets: NutrientTargets,
    pub deficiency: DeficiencyProfile,
    /// Soil already meets every nutrient target
    pub soil_sufficient: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather: Option<WeatherSnapshot>,
    pub recommendations: Vec<ScoredRecommendation>,
}

/// Recommendation service
#[derive(Clone)]
pub struct RecommendationService {
    weather: WeatherService,
}

impl RecommendationService {
    pub fn new(weather: WeatherService) -> Self {
        Self { weather }
    }

    /// Score an ad-hoc sample
    pub async fn recommend(&self, request: RecommendationRequest) -> AppResult<RecommendationResponse> {
        let weather = match (request.weather, request.coordinates) {
            (Some(weather), _) => Some(weather),
            (None, Some(coordinates)) => self.weather.current_for(&coordinates).await,
            (None, None) => None,
        };

        score(&request.sample, &request.crop, weather)
    }

    /// Score a stored soil test with the farm's crop, soil type and live weather
    pub async fn recommend_for_soil_test(
        &self,
        farm: &Farm,
        test: &SoilTestRecord,
    ) -> AppResult<RecommendationResponse> {
        let weather = match &farm.coordinates {
            Some(coordinates) => self.weather.current_for(coordinates).await,
            None => None,
        };
        let sample = test.to_sample(Some(&farm.soil_type));

        score(&sample, &farm.crop_type, weather)
    }
}

/// Run the engine and attach the scoring context
pub fn score(
    sample: &SoilSample,
    crop: &str,
    weather: Option<WeatherSnapshot>,
) -> AppResult<RecommendationResponse> {
    let recommendations = compute_recommendations(sample, crop, weather.as_ref())?;
    let profile = crop_profile(crop);
    let deficiency = deficiency_profile(sample, &profile.targets);

    tracing::debug!(
        crop = %profile.crop,
        with_weather = weather.is_some(),
        count = recommendations.len(),
        "Computed recommendations"
    );

    Ok(RecommendationResponse {
        requested_crop: crop.to_string(),
        crop: profile.crop,
        targets: profile.targets,
        deficiency,
        soil_sufficient: deficiency.is_sufficient(),
        weather,
        recommendations,
    })
}
