//! Farm and soil test record models

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::soil::SoilSample;
use crate::types::GpsCoordinates;

/// A farm registered by a grower
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Farm {
    pub id: Uuid,
    pub name: String,
    pub location: String,
    pub area_acres: Decimal,
    /// Texture label as entered, e.g. "Clay" or "Sandy"
    pub soil_type: String,
    pub crop_type: String,
    pub coordinates: Option<GpsCoordinates>,
    pub soil_ph: Option<f64>,
    pub organic_matter: Option<f64>,
    pub created_at: DateTime<Utc>,
}

/// A stored soil test for a farm
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SoilTestRecord {
    pub id: Uuid,
    pub farm_id: Uuid,
    pub test_date: NaiveDate,
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub ph: f64,
    pub organic_matter: f64,
    pub moisture: f64,
    pub temperature: f64,
    pub rainfall: f64,
    pub created_at: DateTime<Utc>,
}

impl SoilTestRecord {
    /// Build the engine input, taking the texture from the farm
    pub fn to_sample(&self, soil_type: Option<&str>) -> SoilSample {
        SoilSample {
            nitrogen: self.nitrogen,
            phosphorus: self.phosphorus,
            potassium: self.potassium,
            ph: self.ph,
            organic_matter: self.organic_matter,
            moisture: self.moisture,
            temperature: self.temperature,
            rainfall: self.rainfall,
            soil_texture: soil_type
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        }
    }
}
