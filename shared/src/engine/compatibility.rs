//! Rule-table compatibility scorers
//!
//! Each scorer rates a candidate 0-100 for one condition. The rules match on
//! chemical-class tags and are a coarse heuristic, not agronomic modelling.

use crate::models::{ChemicalClass, FertilizerCandidate, SoilTexture, WeatherSnapshot};

/// Weather compatibility for a product no weather rule touches
pub const WEATHER_BASELINE: f64 = 70.0;

/// Compatibility when no texture label was recorded
pub const UNKNOWN_TEXTURE_SCORE: f64 = 70.0;

/// Air temperature above which urea loses nitrogen to the air
pub const VOLATILISATION_TEMPERATURE: f64 = 35.0;

/// Pick the score of the first class the candidate carries, else the fallback
fn first_match(candidate: &FertilizerCandidate, rules: &[(ChemicalClass, f64)], fallback: f64) -> f64 {
    rules
        .iter()
        .find(|(class, _)| candidate.has_class(*class))
        .map(|(_, score)| *score)
        .unwrap_or(fallback)
}

/// Urea applied in this heat volatilises before the crop can take it up
pub fn volatilisation_risk(candidate: &FertilizerCandidate, weather: &WeatherSnapshot) -> bool {
    weather.temperature > VOLATILISATION_TEMPERATURE && candidate.has_class(ChemicalClass::Urea)
}

pub fn ph_compatibility(ph: f64, candidate: &FertilizerCandidate) -> f64 {
    use ChemicalClass::*;

    if ph < 6.0 {
        first_match(candidate, &[(Calcium, 90.0), (Ammonium, 70.0)], 50.0)
    } else if ph > 7.5 {
        first_match(
            candidate,
            &[(Sulfate, 90.0), (Nitrate, 90.0), (Phosphate, 70.0)],
            50.0,
        )
    } else {
        80.0
    }
}

/// Start from [`WEATHER_BASELINE`] and apply every matching rule, clamped to 0-100
pub fn weather_compatibility(candidate: &FertilizerCandidate, weather: &WeatherSnapshot) -> f64 {
    use ChemicalClass::*;

    let mut score = WEATHER_BASELINE;
    let mut adjust = |class: ChemicalClass, delta: f64| {
        if candidate.has_class(class) {
            score += delta;
        }
    };

    // Volatilisation
    if weather.temperature > VOLATILISATION_TEMPERATURE {
        adjust(Urea, -20.0);
        adjust(Nitrate, 10.0);
    }
    if weather.temperature < 10.0 {
        adjust(Nitrate, -15.0);
        adjust(Urea, 10.0);
    }
    // Leaching
    if weather.rainfall > 100.0 {
        adjust(Nitrate, -20.0);
        adjust(Potassium, 15.0);
    }
    if weather.humidity > 80.0 {
        adjust(Sulfate, 10.0);
    }

    score.clamp(0.0, 100.0)
}

pub fn soil_compatibility(texture: Option<SoilTexture>, candidate: &FertilizerCandidate) -> f64 {
    use ChemicalClass::*;

    let Some(texture) = texture else {
        return UNKNOWN_TEXTURE_SCORE;
    };

    match texture {
        SoilTexture::Sandy => first_match(candidate, &[(Potassium, 90.0), (Organic, 85.0)], 60.0),
        SoilTexture::Clay => first_match(candidate, &[(Phosphate, 90.0), (Sulfate, 80.0)], 70.0),
        SoilTexture::Loamy => 85.0,
        SoilTexture::Acidic | SoilTexture::Peaty => {
            first_match(candidate, &[(Calcium, 90.0), (Nitrate, 80.0)], 65.0)
        }
        SoilTexture::Alkaline | SoilTexture::Chalky => {
            first_match(candidate, &[(Sulfate, 90.0), (Ammonium, 80.0)], 65.0)
        }
        SoilTexture::Silty | SoilTexture::Unrecognized => UNKNOWN_TEXTURE_SCORE,
    }
}
