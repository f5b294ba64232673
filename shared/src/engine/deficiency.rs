//! Nutrient deficiency profiling

use serde::Serialize;

use crate::models::{Nutrient, NutrientTargets, SoilSample};

/// Normalised shortfall of each macronutrient against the crop target.
///
/// Each ratio is `max(0, (target - actual) / target)`: 1.0 when the soil has
/// none of the nutrient, falling linearly to 0.0 at the target, and 0.0 for
/// any surplus.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct DeficiencyProfile {
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
}

impl DeficiencyProfile {
    pub fn ratio(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Nitrogen => self.nitrogen,
            Nutrient::Phosphorus => self.phosphorus,
            Nutrient::Potassium => self.potassium,
        }
    }

    /// Scale every ratio by a demand multiplier, capped at full deficiency
    pub fn scaled(&self, demand: f64) -> Self {
        let scale = |ratio: f64| (ratio * demand).clamp(0.0, 1.0);
        Self {
            nitrogen: scale(self.nitrogen),
            phosphorus: scale(self.phosphorus),
            potassium: scale(self.potassium),
        }
    }

    pub fn is_sufficient(&self) -> bool {
        Nutrient::ALL.iter().all(|n| self.ratio(*n) == 0.0)
    }
}

/// Shortfall of a single nutrient. `target` must be positive.
pub fn deficiency_ratio(target: f64, actual: f64) -> f64 {
    ((target - actual) / target).max(0.0)
}

/// Compare a soil sample against a crop's nutrient targets
pub fn deficiency_profile(sample: &SoilSample, targets: &NutrientTargets) -> DeficiencyProfile {
    DeficiencyProfile {
        nitrogen: deficiency_ratio(targets.nitrogen, sample.nitrogen),
        phosphorus: deficiency_ratio(targets.phosphorus, sample.phosphorus),
        potassium: deficiency_ratio(targets.potassium, sample.potassium),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_zero_reading_is_full_deficiency() {
        assert_eq!(deficiency_ratio(120.0, 0.0), 1.0);
    }

    #[test]
    fn test_ratio_at_or_above_target_is_zero() {
        assert_eq!(deficiency_ratio(40.0, 40.0), 0.0);
        assert_eq!(deficiency_ratio(40.0, 100.0), 0.0);
    }

    #[test]
    fn test_ratio_partial() {
        assert!((deficiency_ratio(120.0, 80.0) - 1.0 / 3.0).abs() < 1e-12);
        assert!((deficiency_ratio(60.0, 10.0) - 5.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_profile_for_rice_sample() {
        let sample = SoilSample::new(80.0, 10.0, 100.0, 6.2);
        let profile = deficiency_profile(&sample, &NutrientTargets::new(120.0, 60.0, 40.0));
        assert!(profile.nitrogen > 0.0);
        assert!(profile.phosphorus > 0.0);
        assert_eq!(profile.potassium, 0.0);
        assert!(!profile.is_sufficient());
    }

    #[test]
    fn test_scaled_caps_at_one() {
        let profile = DeficiencyProfile {
            nitrogen: 0.9,
            phosphorus: 0.5,
            potassium: 0.0,
        };
        let scaled = profile.scaled(1.3);
        assert_eq!(scaled.nitrogen, 1.0);
        assert!((scaled.phosphorus - 0.65).abs() < 1e-12);
        assert_eq!(scaled.potassium, 0.0);
    }

    #[test]
    fn test_scaled_neutral_demand_is_identity() {
        let profile = DeficiencyProfile {
            nitrogen: 0.25,
            phosphorus: 0.75,
            potassium: 1.0,
        };
        assert_eq!(profile.scaled(1.0), profile);
    }
}
