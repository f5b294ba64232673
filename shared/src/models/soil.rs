//! Soil sample models

use serde::{Deserialize, Serialize};

/// A single soil-test measurement as captured in the field
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SoilSample {
    /// Available nitrogen in kg/ha
    pub nitrogen: f64,
    /// Available phosphorus in kg/ha
    pub phosphorus: f64,
    /// Available potassium in kg/ha
    pub potassium: f64,
    pub ph: f64,
    /// Organic matter in percent
    #[serde(default)]
    pub organic_matter: f64,
    /// Soil moisture in percent
    #[serde(default)]
    pub moisture: f64,
    /// Soil temperature in °C
    #[serde(default)]
    pub temperature: f64,
    /// Recent rainfall in mm
    #[serde(default)]
    pub rainfall: f64,
    /// Free-text texture label, e.g. "Sandy" or "Clay Loam"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soil_texture: Option<String>,
}

impl SoilSample {
    /// Create a sample from the three macronutrient readings and pH
    pub fn new(nitrogen: f64, phosphorus: f64, potassium: f64, ph: f64) -> Self {
        Self {
            nitrogen,
            phosphorus,
            potassium,
            ph,
            organic_matter: 0.0,
            moisture: 0.0,
            temperature: 0.0,
            rainfall: 0.0,
            soil_texture: None,
        }
    }

    pub fn with_texture(mut self, label: impl Into<String>) -> Self {
        self.soil_texture = Some(label.into());
        self
    }

    /// Parsed texture, `None` when no label was recorded
    pub fn texture(&self) -> Option<SoilTexture> {
        self.soil_texture.as_deref().map(SoilTexture::from_label)
    }
}

/// Soil texture classes recognised by the compatibility rules
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SoilTexture {
    Sandy,
    Clay,
    Loamy,
    Silty,
    Peaty,
    Chalky,
    Acidic,
    Alkaline,
    Unrecognized,
}

impl SoilTexture {
    /// Classify a free-text label by case-insensitive substring.
    ///
    /// The first match wins, so "Sandy Loam" is sandy and "Clay Loam" is clay.
    pub fn from_label(label: &str) -> Self {
        let label = label.to_lowercase();
        const KEYWORDS: [(&str, SoilTexture); 8] = [
            ("sand", SoilTexture::Sandy),
            ("clay", SoilTexture::Clay),
            ("loam", SoilTexture::Loamy),
            ("silt", SoilTexture::Silty),
            ("peat", SoilTexture::Peaty),
            ("chalk", SoilTexture::Chalky),
            ("acid", SoilTexture::Acidic),
            ("alkal", SoilTexture::Alkaline),
        ];

        KEYWORDS
            .iter()
            .find(|(keyword, _)| label.contains(keyword))
            .map(|(_, texture)| *texture)
            .unwrap_or(SoilTexture::Unrecognized)
    }
}

impl std::fmt::Display for SoilTexture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SoilTexture::Sandy => write!(f, "Sandy"),
            SoilTexture::Clay => write!(f, "Clay"),
            SoilTexture::Loamy => write!(f, "Loamy"),
            SoilTexture::Silty => write!(f, "Silty"),
            SoilTexture::Peaty => write!(f, "Peaty"),
            SoilTexture::Chalky => write!(f, "Chalky"),
            SoilTexture::Acidic => write!(f, "Acidic"),
            SoilTexture::Alkaline => write!(f, "Alkaline"),
            SoilTexture::Unrecognized => write!(f, "Unrecognized"),
        }
    }
}
