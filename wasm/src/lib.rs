//! WebAssembly module for FertilizerPro
//!
//! Provides client-side computation for:
//! - Fertilizer recommendations while offline
//! - Deficiency and pH factor previews
//! - Soil texture and weather classification
//! - Offline data validation

use rust_decimal::Decimal;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use shared::engine;
use shared::reference::{crop_profile, CROP_PROFILES};

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::log_1(&JsValue::from_str("FertilizerPro engine loaded"));
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CropEntry {
    crop: &'static str,
    nitrogen: f64,
    phosphorus: f64,
    potassium: f64,
}

/// Rank fertilizers for a soil sample. Takes and returns JSON.
#[wasm_bindgen]
pub fn compute_recommendations(
    sample_json: &str,
    crop: &str,
    weather_json: Option<String>,
) -> Result<String, JsValue> {
    let sample: SoilSample = serde_json::from_str(sample_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid sample JSON: {}", e)))?;

    let weather: Option<WeatherSnapshot> = weather_json
        .as_deref()
        .map(serde_json::from_str)
        .transpose()
        .map_err(|e| JsValue::from_str(&format!("Invalid weather JSON: {}", e)))?;

    let results = shared::compute_recommendations(&sample, crop, weather.as_ref())
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_json::to_string(&results).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Supported crops and their N/P/K targets as JSON
#[wasm_bindgen]
pub fn supported_crops() -> String {
    let crops: Vec<CropEntry> = CROP_PROFILES
        .iter()
        .map(|profile| CropEntry {
            crop: profile.crop,
            nitrogen: profile.targets.nitrogen,
            phosphorus: profile.targets.phosphorus,
            potassium: profile.targets.potassium,
        })
        .collect();
    serde_json::to_string(&crops).unwrap_or_else(|_| "[]".to_string())
}

/// Crop whose targets apply, after the default-crop fallback
#[wasm_bindgen]
pub fn resolve_crop(crop: &str) -> String {
    crop_profile(crop).crop.to_string()
}

/// Shortfall of one nutrient against its target, 0-1
#[wasm_bindgen]
pub fn deficiency_ratio(target: f64, actual: f64) -> f64 {
    if target <= 0.0 {
        return 0.0;
    }
    engine::deficiency_ratio(target, actual)
}

/// Score multiplier for a soil pH
#[wasm_bindgen]
pub fn ph_factor(ph: f64) -> f64 {
    engine::ph_factor(ph)
}

/// Texture class for a free-text soil label
#[wasm_bindgen]
pub fn classify_soil_texture(label: &str) -> String {
    format!("{}", SoilTexture::from_label(label))
}

/// Weather condition for a WMO code
#[wasm_bindgen]
pub fn classify_weather_code(code: u16) -> String {
    format!("{}", WeatherCondition::from_code(code))
}

/// Validate a soil pH reading
#[wasm_bindgen]
pub fn is_valid_ph(ph: f64) -> bool {
    validate_ph(ph).is_ok()
}

/// Validate a farm area in acres
#[wasm_bindgen]
pub fn is_valid_farm_area(area_acres: f64) -> bool {
    Decimal::try_from(area_acres)
        .map(|area| validate_farm_area(area).is_ok())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_recommendations_json() {
        let sample = r#"{"nitrogen":80,"phosphorus":10,"potassium":100,"ph":6.2}"#;
        let json = compute_recommendations(sample, "rice", None).unwrap();
        let results: Vec<ScoredRecommendation> = serde_json::from_str(&json).unwrap();
        assert_eq!(results.len(), 5);
        assert_eq!(results[0].name, "Diammonium Phosphate (DAP)");
    }

    #[test]
    fn test_compute_recommendations_with_weather() {
        let sample = r#"{"nitrogen":80,"phosphorus":10,"potassium":100,"ph":6.2}"#;
        let weather = r#"{"temperature":40,"humidity":55,"rainfall":50}"#.to_string();
        let json = compute_recommendations(sample, "rice", Some(weather)).unwrap();
        assert!(json.contains("\"weatherAdjustment\":"));
    }

    #[test]
    fn test_supported_crops() {
        let json = supported_crops();
        assert!(json.contains("\"crop\":\"sugarcane\""));
        assert!(json.contains("\"crop\":\"watermelon\""));
    }

    #[test]
    fn test_resolve_crop() {
        assert_eq!(resolve_crop("Tomato"), "tomato");
        assert_eq!(resolve_crop("quinoa"), "sugarcane");
    }

    #[test]
    fn test_deficiency_ratio() {
        assert_eq!(deficiency_ratio(120.0, 0.0), 1.0);
        assert_eq!(deficiency_ratio(40.0, 100.0), 0.0);
        assert_eq!(deficiency_ratio(0.0, 10.0), 0.0);
    }

    #[test]
    fn test_ph_factor() {
        assert_eq!(ph_factor(6.5), 1.0);
        assert_eq!(ph_factor(30.0), 0.1);
    }

    #[test]
    fn test_classifiers() {
        assert_eq!(classify_soil_texture("Sandy Loam"), "Sandy");
        assert_eq!(classify_weather_code(95), "Thunderstorm");
    }

    #[test]
    fn test_validation() {
        assert!(is_valid_ph(7.0));
        assert!(!is_valid_ph(15.0));
        assert!(is_valid_farm_area(2.5));
        assert!(!is_valid_farm_area(0.0));
        assert!(!is_valid_farm_area(f64::NAN));
    }
}
