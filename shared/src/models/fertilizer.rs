//! Fertilizer product models

use serde::{Deserialize, Serialize};

use super::crop::Nutrient;

/// Chemical classes a product belongs to.
///
/// The compatibility rules key off these tags rather than the display name,
/// so a product such as "Muriate of Potash" still counts as a potassium source.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ChemicalClass {
    Urea,
    Ammonium,
    Nitrate,
    Phosphate,
    Sulfate,
    Potassium,
    /// Calcium carriers, including lime
    Calcium,
    Organic,
}

impl std::fmt::Display for ChemicalClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChemicalClass::Urea => write!(f, "Urea"),
            ChemicalClass::Ammonium => write!(f, "Ammonium"),
            ChemicalClass::Nitrate => write!(f, "Nitrate"),
            ChemicalClass::Phosphate => write!(f, "Phosphate"),
            ChemicalClass::Sulfate => write!(f, "Sulfate"),
            ChemicalClass::Potassium => write!(f, "Potassium"),
            ChemicalClass::Calcium => write!(f, "Calcium"),
            ChemicalClass::Organic => write!(f, "Organic"),
        }
    }
}

/// A fertilizer product from the reference catalog
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FertilizerCandidate {
    pub name: &'static str,
    pub npk_ratio: &'static str,
    /// Nitrogen content in percent of product weight
    pub nitrogen: f64,
    /// Phosphorus (P2O5) content in percent of product weight
    pub phosphorus: f64,
    /// Potassium (K2O) content in percent of product weight
    pub potassium: f64,
    pub dosage: &'static str,
    pub application_method: &'static str,
    pub benefits: &'static [&'static str],
    pub classes: &'static [ChemicalClass],
}

impl FertilizerCandidate {
    pub fn has_class(&self, class: ChemicalClass) -> bool {
        self.classes.contains(&class)
    }

    /// Percentage of the given nutrient in the product
    pub fn content(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Nitrogen => self.nitrogen,
            Nutrient::Phosphorus => self.phosphorus,
            Nutrient::Potassium => self.potassium,
        }
    }
}
