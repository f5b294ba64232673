//! Crop nutrient requirement models

use serde::Serialize;

/// The three primary macronutrients
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Nutrient {
    Nitrogen,
    Phosphorus,
    Potassium,
}

impl Nutrient {
    pub const ALL: [Nutrient; 3] = [Nutrient::Nitrogen, Nutrient::Phosphorus, Nutrient::Potassium];
}

/// Nutrient levels (kg/ha) considered sufficient for a crop
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct NutrientTargets {
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
}

impl NutrientTargets {
    pub const fn new(nitrogen: f64, phosphorus: f64, potassium: f64) -> Self {
        Self {
            nitrogen,
            phosphorus,
            potassium,
        }
    }
}

/// A supported crop and its nutrient targets
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct CropProfile {
    pub crop: &'static str,
    pub targets: NutrientTargets,
}
