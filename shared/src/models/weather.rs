//! Weather data models

use serde::{Deserialize, Serialize};

/// Current conditions at a farm's location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSnapshot {
    /// Air temperature in °C
    pub temperature: f64,
    /// Relative humidity in percent
    pub humidity: f64,
    /// Precipitation in mm
    pub rainfall: f64,
    /// Wind speed in km/h
    #[serde(default)]
    pub wind_speed: f64,
    /// WMO weather interpretation code
    #[serde(default)]
    pub weather_code: u16,
}

impl WeatherSnapshot {
    pub fn new(temperature: f64, humidity: f64, rainfall: f64) -> Self {
        Self {
            temperature,
            humidity,
            rainfall,
            wind_speed: 0.0,
            weather_code: 0,
        }
    }

    pub fn condition(&self) -> WeatherCondition {
        WeatherCondition::from_code(self.weather_code)
    }
}

/// Coarse weather classification derived from the WMO code
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    Clear,
    Cloudy,
    Fog,
    Rain,
    Snow,
    Showers,
    Thunderstorm,
    Other,
}

impl WeatherCondition {
    pub fn from_code(code: u16) -> Self {
        match code {
            0 | 1 => WeatherCondition::Clear,
            2 | 3 => WeatherCondition::Cloudy,
            45..=48 => WeatherCondition::Fog,
            51..=67 => WeatherCondition::Rain,
            71..=77 => WeatherCondition::Snow,
            80..=82 => WeatherCondition::Showers,
            95..=99 => WeatherCondition::Thunderstorm,
            _ => WeatherCondition::Other,
        }
    }

    /// Whether fertilizer applied now is likely to be washed off
    pub fn is_wet(&self) -> bool {
        matches!(
            self,
            WeatherCondition::Rain | WeatherCondition::Showers | WeatherCondition::Thunderstorm
        )
    }
}

impl std::fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeatherCondition::Clear => write!(f, "Clear"),
            WeatherCondition::Cloudy => write!(f, "Cloudy"),
            WeatherCondition::Fog => write!(f, "Fog"),
            WeatherCondition::Rain => write!(f, "Rain"),
            WeatherCondition::Snow => write!(f, "Snow"),
            WeatherCondition::Showers => write!(f, "Rain Showers"),
            WeatherCondition::Thunderstorm => write!(f, "Thunderstorm"),
            WeatherCondition::Other => write!(f, "Other"),
        }
    }
}
