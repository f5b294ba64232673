//! Weather API client for fetching current conditions
//!
//! Integrates with Open-Meteo for current weather and Nominatim
//! (OpenStreetMap) for reverse geocoding. Neither needs an API key.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use shared::{GpsCoordinates, WeatherSnapshot};

use crate::config::WeatherConfig;
use crate::error::{AppError, AppResult};

const USER_AGENT: &str = "FertilizerPro/1.0";

// Used when the provider omits a field
const DEFAULT_TEMPERATURE: f64 = 25.0;
const DEFAULT_HUMIDITY: f64 = 60.0;

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    forecast_url: String,
    geocoding_url: String,
}

/// Open-Meteo forecast response, `current` block only
#[derive(Debug, Deserialize)]
struct OpenMeteoResponse {
    current: Option<OpenMeteoCurrent>,
}

#[derive(Debug, Default, Deserialize)]
struct OpenMeteoCurrent {
    temperature_2m: Option<f64>,
    relative_humidity_2m: Option<f64>,
    weather_code: Option<u16>,
    wind_speed_10m: Option<f64>,
    precipitation: Option<f64>,
}

/// Nominatim reverse-geocoding response
#[derive(Debug, Deserialize)]
struct NominatimResponse {
    display_name: Option<String>,
    address: Option<NominatimAddress>,
}

#[derive(Debug, Default, Deserialize)]
struct NominatimAddress {
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
    county: Option<String>,
    state: Option<String>,
}

impl WeatherClient {
    /// Create a new WeatherClient from configuration
    pub fn new(config: &WeatherConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AppError::Configuration(format!("Weather HTTP client: {}", e)))?;

        Ok(Self {
            client,
            forecast_url: config.api_endpoint.clone(),
            geocoding_url: config.geocoding_endpoint.clone(),
        })
    }

    /// Fetch current weather conditions by GPS coordinates
    pub async fn get_current_weather(&self, coordinates: &GpsCoordinates) -> AppResult<WeatherSnapshot> {
        let url = format!(
            "{}?latitude={}&longitude={}&current=temperature_2m,relative_humidity_2m,weather_code,wind_speed_10m,precipitation&timezone=auto",
            self.forecast_url, coordinates.latitude, coordinates.longitude
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::ExternalService(format!("Weather API request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalService(format!(
                "Weather API error: {} - {}",
                status, body
            )));
        }

        let data: OpenMeteoResponse = response.json().await.map_err(|e| {
            AppError::ExternalService(format!("Failed to parse weather response: {}", e))
        })?;

        Ok(convert_current(data.current.unwrap_or_default()))
    }

    /// Resolve a human-readable place name for GPS coordinates
    pub async fn reverse_geocode(&self, coordinates: &GpsCoordinates) -> AppResult<Option<String>> {
        let url = format!(
            "{}?format=json&lat={}&lon={}&zoom=10&addressdetails=1",
            self.geocoding_url, coordinates.latitude, coordinates.longitude
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::ExternalService(format!("Geocoding request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::ExternalService(format!(
                "Geocoding error: {}",
                response.status()
            )));
        }

        let data: NominatimResponse = response.json().await.map_err(|e| {
            AppError::ExternalService(format!("Failed to parse geocoding response: {}", e))
        })?;

        Ok(location_name(data))
    }
}

fn convert_current(current: OpenMeteoCurrent) -> WeatherSnapshot {
    WeatherSnapshot {
        temperature: current.temperature_2m.unwrap_or(DEFAULT_TEMPERATURE),
        humidity: current.relative_humidity_2m.unwrap_or(DEFAULT_HUMIDITY),
        rainfall: current.precipitation.unwrap_or(0.0),
        wind_speed: current.wind_speed_10m.unwrap_or(0.0),
        weather_code: current.weather_code.unwrap_or(0),
    }
}

/// Most specific place name: city, town, village, county, state, then the
/// first segment of the display name
fn location_name(data: NominatimResponse) -> Option<String> {
    let address = data.address.unwrap_or_default();
    address
        .city
        .or(address.town)
        .or(address.village)
        .or(address.county)
        .or(address.state)
        .or_else(|| {
            data.display_name
                .as_deref()
                .and_then(|name| name.split(',').next())
                .map(|s| s.trim().to_string())
        })
        .filter(|name| !name.is_empty())
}
