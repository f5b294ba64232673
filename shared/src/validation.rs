//! Validation utilities for the FertilizerPro platform
//!
//! Engine inputs are checked here before any scoring happens, so malformed
//! soil tests are rejected with a descriptive error instead of producing
//! meaningless scores.

use rust_decimal::Decimal;

use crate::error::RecommendationError;
use crate::models::{SoilSample, WeatherSnapshot};
use crate::types::GpsCoordinates;

// ============================================================================
// Measurement Validations
// ============================================================================

/// Validate a nutrient reading (kg/ha)
pub fn validate_nutrient_level(value: f64) -> Result<(), &'static str> {
    if !value.is_finite() {
        return Err("must be a finite number");
    }
    if value < 0.0 {
        return Err("cannot be negative");
    }
    Ok(())
}

/// Validate soil pH is on the 0-14 scale
pub fn validate_ph(ph: f64) -> Result<(), &'static str> {
    if !ph.is_finite() {
        return Err("must be a finite number");
    }
    if !(0.0..=14.0).contains(&ph) {
        return Err("must be between 0 and 14");
    }
    Ok(())
}

/// Validate a percentage reading
pub fn validate_percentage(value: f64) -> Result<(), &'static str> {
    if !value.is_finite() {
        return Err("must be a finite number");
    }
    if !(0.0..=100.0).contains(&value) {
        return Err("must be between 0 and 100");
    }
    Ok(())
}

/// Validate a temperature reading (°C)
pub fn validate_temperature(celsius: f64) -> Result<(), &'static str> {
    if !celsius.is_finite() {
        return Err("must be a finite number");
    }
    if !(-60.0..=70.0).contains(&celsius) {
        return Err("is outside the plausible range");
    }
    Ok(())
}

/// Validate a precipitation or wind reading, both of which are non-negative
pub fn validate_non_negative(value: f64) -> Result<(), &'static str> {
    validate_nutrient_level(value)
}

/// Validate every field of a soil sample
pub fn validate_soil_sample(sample: &SoilSample) -> Result<(), RecommendationError> {
    let checks: [(&'static str, Result<(), &'static str>); 8] = [
        ("nitrogen", validate_nutrient_level(sample.nitrogen)),
        ("phosphorus", validate_nutrient_level(sample.phosphorus)),
        ("potassium", validate_nutrient_level(sample.potassium)),
        ("ph", validate_ph(sample.ph)),
        ("organicMatter", validate_percentage(sample.organic_matter)),
        ("moisture", validate_percentage(sample.moisture)),
        ("temperature", validate_temperature(sample.temperature)),
        ("rainfall", validate_non_negative(sample.rainfall)),
    ];

    for (field, result) in checks {
        result.map_err(|reason| RecommendationError::InvalidSample { field, reason })?;
    }
    Ok(())
}

/// Validate every field of a weather snapshot
pub fn validate_weather(weather: &WeatherSnapshot) -> Result<(), RecommendationError> {
    let checks: [(&'static str, Result<(), &'static str>); 4] = [
        ("temperature", validate_temperature(weather.temperature)),
        ("humidity", validate_percentage(weather.humidity)),
        ("rainfall", validate_non_negative(weather.rainfall)),
        ("windSpeed", validate_non_negative(weather.wind_speed)),
    ];

    for (field, result) in checks {
        result.map_err(|reason| RecommendationError::InvalidWeather { field, reason })?;
    }
    Ok(())
}

/// Check if pH is in the band where most fertilizers perform well
pub fn is_neutral_ph(ph: f64) -> bool {
    (6.0..=7.5).contains(&ph)
}

// ============================================================================
// Farm Validations
// ============================================================================

/// Validate farm name (1-100 characters after trimming)
pub fn validate_farm_name(name: &str) -> Result<(), &'static str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Farm name is required");
    }
    if trimmed.chars().count() > 100 {
        return Err("Farm name must be at most 100 characters");
    }
    Ok(())
}

/// Validate farm area is positive
pub fn validate_farm_area(area_acres: Decimal) -> Result<(), &'static str> {
    if area_acres <= Decimal::ZERO {
        return Err("Farm area must be greater than zero");
    }
    Ok(())
}

/// Validate GPS coordinates are on the globe
pub fn validate_coordinates(coordinates: &GpsCoordinates) -> Result<(), &'static str> {
    if coordinates.latitude < Decimal::from(-90) || coordinates.latitude > Decimal::from(90) {
        return Err("Latitude must be between -90 and 90");
    }
    if coordinates.longitude < Decimal::from(-180) || coordinates.longitude > Decimal::from(180) {
        return Err("Longitude must be between -180 and 180");
    }
    Ok(())
}
