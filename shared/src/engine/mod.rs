//! Recommendation scoring engine
//!
//! Scores every candidate fertilizer for a crop against a soil sample's
//! nutrient gap, weighted by pH, weather and soil-texture compatibility, and
//! returns the best matches. The engine is pure and deterministic: the same
//! inputs always produce the same ranked output.

mod compatibility;
mod deficiency;
mod environment;

pub use compatibility::*;
pub use deficiency::*;
pub use environment::*;

use crate::error::RecommendationError;
use crate::models::{
    FertilizerCandidate, Nutrient, ScoreBreakdown, ScoredRecommendation, SoilSample, SoilTexture,
    WeatherSnapshot,
};
use crate::reference::{crop_profile, fertilizers_for, find_crop_profile, has_dedicated_list};
use crate::validation::{validate_soil_sample, validate_weather};

/// Maximum number of recommendations returned
pub const MAX_RECOMMENDATIONS: usize = 5;

/// Score every candidate starts from
pub const BASE_SCORE: f64 = 50.0;

pub const NUTRIENT_MATCH_WEIGHT: f64 = 0.4;
pub const PH_WEIGHT: f64 = 0.2;
pub const WEATHER_WEIGHT: f64 = 0.2;
pub const SOIL_WEIGHT: f64 = 0.1;

/// Nutrient percentage at which a product fully covers a deficiency
pub const FULL_MATCH_PERCENT: f64 = 50.0;

/// Everything about the sample and conditions that is shared by all candidates
#[derive(Debug, Clone)]
pub struct ScoringContext<'a> {
    pub deficiency: DeficiencyProfile,
    pub factors: EnvironmentalFactors,
    pub ph: f64,
    pub texture: Option<SoilTexture>,
    pub weather: Option<&'a WeatherSnapshot>,
}

impl<'a> ScoringContext<'a> {
    /// Build the context for a crop. Inputs are assumed valid.
    pub fn new(sample: &SoilSample, crop: &str, weather: Option<&'a WeatherSnapshot>) -> Self {
        let targets = crop_profile(crop).targets;
        let factors = environmental_factors(sample.ph, weather);
        Self {
            deficiency: deficiency_profile(sample, &targets),
            factors,
            ph: sample.ph,
            texture: sample.texture(),
            weather,
        }
    }

    /// Weather demand multiplier for a candidate.
    ///
    /// Products at risk of volatilisation get no weather boost, so the heat
    /// penalty in their weather term is never offset by extra demand.
    pub fn demand_for(&self, candidate: &FertilizerCandidate) -> f64 {
        match self.weather {
            Some(weather) if volatilisation_risk(candidate, weather) => 1.0,
            _ => self.factors.nutrient_demand(),
        }
    }
}

/// How well a product's N/P/K content covers the deficiency, 0-100
pub fn nutrient_match(candidate: &FertilizerCandidate, deficiency: &DeficiencyProfile) -> f64 {
    let total: f64 = Nutrient::ALL
        .iter()
        .map(|nutrient| {
            let content = candidate.content(*nutrient);
            if content <= 0.0 {
                return 0.0;
            }
            let coverage = (content / FULL_MATCH_PERCENT * 100.0).min(100.0);
            coverage * deficiency.ratio(*nutrient)
        })
        .sum();
    total / Nutrient::ALL.len() as f64
}

/// Score a single candidate. `index` is its position in the crop's list.
pub fn score_candidate(
    index: usize,
    candidate: &FertilizerCandidate,
    context: &ScoringContext<'_>,
) -> ScoredRecommendation {
    let demand = context.demand_for(candidate);
    let deficiency = context.deficiency.scaled(demand);

    let nutrient = nutrient_match(candidate, &deficiency) * NUTRIENT_MATCH_WEIGHT;
    let ph = ph_compatibility(context.ph, candidate) * PH_WEIGHT;
    let weather = context
        .weather
        .map(|w| (weather_compatibility(candidate, w) - WEATHER_BASELINE) * WEATHER_WEIGHT);
    let soil = soil_compatibility(context.texture, candidate) * SOIL_WEIGHT;

    let raw_score = (BASE_SCORE + nutrient + ph + weather.unwrap_or(0.0) + soil) * context.factors.ph;
    let score = raw_score.clamp(0.0, 100.0).round() as u8;

    let breakdown = ScoreBreakdown {
        base: BASE_SCORE,
        nutrient_match: nutrient,
        ph_compatibility: ph,
        weather_adjustment: weather,
        soil_compatibility: soil,
        nutrient_demand_factor: demand,
        ph_factor: context.factors.ph,
        raw_score,
    };

    ScoredRecommendation::from_candidate(index, candidate, score, breakdown)
}

/// Validate inputs and score every candidate for the crop, in catalog order
pub fn score_candidates(
    sample: &SoilSample,
    crop: &str,
    weather: Option<&WeatherSnapshot>,
) -> Result<Vec<ScoredRecommendation>, RecommendationError> {
    validate_soil_sample(sample)?;
    if let Some(weather) = weather {
        validate_weather(weather)?;
    }

    if find_crop_profile(crop).is_none() {
        tracing::debug!(crop = %crop, "Unknown crop, using default crop profile");
    } else if !has_dedicated_list(crop) {
        tracing::debug!(crop = %crop, "No dedicated fertilizer list, using default list");
    }

    let context = ScoringContext::new(sample, crop, weather);
    Ok(fertilizers_for(crop)
        .iter()
        .enumerate()
        .map(|(index, candidate)| score_candidate(index, candidate, &context))
        .collect())
}

/// Ranked recommendations: highest score first, at most [`MAX_RECOMMENDATIONS`].
///
/// Ties keep catalog order. Unknown crops are scored as the default crop.
pub fn compute_recommendations(
    sample: &SoilSample,
    crop: &str,
    weather: Option<&WeatherSnapshot>,
) -> Result<Vec<ScoredRecommendation>, RecommendationError> {
    let mut scored = score_candidates(sample, crop, weather)?;
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(MAX_RECOMMENDATIONS);
    Ok(scored)
}
