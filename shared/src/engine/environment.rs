//! Environmental adjustment factors from weather and soil pH

use serde::Serialize;

use crate::models::WeatherSnapshot;

/// pH at which the pH factor is 1.0
pub const OPTIMAL_PH: f64 = 6.5;

/// Floor for the pH factor so far-off readings shrink scores without flipping their sign
pub const MIN_PH_FACTOR: f64 = 0.1;

/// Multiplicative factors applied uniformly to every candidate
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct EnvironmentalFactors {
    pub temperature: f64,
    pub humidity: f64,
    pub rainfall: f64,
    pub ph: f64,
}

impl EnvironmentalFactors {
    /// Combined weather pressure on nutrient demand
    pub fn nutrient_demand(&self) -> f64 {
        self.temperature * self.humidity * self.rainfall
    }
}

/// Heat raises uptake demand, cold suppresses it
pub fn temperature_factor(celsius: f64) -> f64 {
    if celsius > 30.0 {
        1.3
    } else if celsius < 15.0 {
        0.7
    } else {
        1.0
    }
}

pub fn humidity_factor(percent: f64) -> f64 {
    if percent > 70.0 {
        1.2
    } else if percent < 40.0 {
        0.8
    } else {
        1.0
    }
}

/// Heavy rain leaches nutrients, dry spells concentrate demand
pub fn rainfall_factor(mm: f64) -> f64 {
    if mm > 100.0 {
        0.9
    } else if mm < 20.0 {
        1.2
    } else {
        1.0
    }
}

/// `1 - |pH - 6.5| * 0.1`, floored at [`MIN_PH_FACTOR`]
pub fn ph_factor(ph: f64) -> f64 {
    (1.0 - (ph - OPTIMAL_PH).abs() * 0.1).max(MIN_PH_FACTOR)
}

/// Weather factors are neutral (1.0) when no weather is available
pub fn environmental_factors(ph: f64, weather: Option<&WeatherSnapshot>) -> EnvironmentalFactors {
    match weather {
        Some(w) => EnvironmentalFactors {
            temperature: temperature_factor(w.temperature),
            humidity: humidity_factor(w.humidity),
            rainfall: rainfall_factor(w.rainfall),
            ph: ph_factor(ph),
        },
        None => EnvironmentalFactors {
            temperature: 1.0,
            humidity: 1.0,
            rainfall: 1.0,
            ph: ph_factor(ph),
        },
    }
}
