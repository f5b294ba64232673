//! Common types used across the platform

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// GPS coordinates
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GpsCoordinates {
    pub latitude: Decimal,
    pub longitude: Decimal,
}

impl GpsCoordinates {
    pub fn new(latitude: Decimal, longitude: Decimal) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Latitude and longitude as floats for external APIs
    pub fn as_f64(&self) -> Option<(f64, f64)> {
        Some((self.latitude.to_f64()?, self.longitude.to_f64()?))
    }
}

/// Supported interface languages
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Hindi,
    Marathi,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
            Language::Marathi => "mr",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "en" => Some(Language::English),
            "hi" => Some(Language::Hindi),
            "mr" => Some(Language::Marathi),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes() {
        for lang in [Language::English, Language::Hindi, Language::Marathi] {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
        assert_eq!(Language::from_code("th"), None);
    }

    #[test]
    fn test_coordinates_as_f64() {
        let coords = GpsCoordinates::new(Decimal::new(185204, 4), Decimal::new(738567, 4));
        let (lat, lon) = coords.as_f64().unwrap();
        assert!((lat - 18.5204).abs() < 1e-9);
        assert!((lon - 73.8567).abs() < 1e-9);
    }
}
