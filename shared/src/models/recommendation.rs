//! Recommendation output models

use serde::{Deserialize, Serialize};

use super::fertilizer::{ChemicalClass, FertilizerCandidate};

/// A fertilizer candidate annotated with its match score
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoredRecommendation {
    /// `rec-{n}` where `n` is the product's position in the crop's catalog list
    pub id: String,
    pub name: String,
    pub npk_ratio: String,
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub dosage: String,
    pub application_method: String,
    pub benefits: Vec<String>,
    pub classes: Vec<ChemicalClass>,
    /// Final score, 0-100
    pub score: u8,
    pub breakdown: ScoreBreakdown,
}

impl ScoredRecommendation {
    pub fn from_candidate(
        index: usize,
        candidate: &FertilizerCandidate,
        score: u8,
        breakdown: ScoreBreakdown,
    ) -> Self {
        Self {
            id: format!("rec-{}", index),
            name: candidate.name.to_string(),
            npk_ratio: candidate.npk_ratio.to_string(),
            nitrogen: candidate.nitrogen,
            phosphorus: candidate.phosphorus,
            potassium: candidate.potassium,
            dosage: candidate.dosage.to_string(),
            application_method: candidate.application_method.to_string(),
            benefits: candidate.benefits.iter().map(|b| b.to_string()).collect(),
            classes: candidate.classes.to_vec(),
            score,
            breakdown,
        }
    }
}

/// Weighted contributions that make up a score
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub base: f64,
    /// Nutrient match after its 40% weight
    pub nutrient_match: f64,
    /// pH compatibility after its 20% weight
    pub ph_compatibility: f64,
    /// Weather compatibility relative to the neutral baseline after its 20% weight.
    /// `None` when no weather was supplied.
    pub weather_adjustment: Option<f64>,
    /// Soil texture compatibility after its 10% weight
    pub soil_compatibility: f64,
    /// Multiplier applied to the deficiency ratios
    pub nutrient_demand_factor: f64,
    /// Multiplier applied to the weighted sum
    pub ph_factor: f64,
    /// Score before clamping and rounding
    pub raw_score: f64,
}
