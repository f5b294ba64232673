//! Weather service for looking up current conditions at a farm

use serde::Serialize;
use shared::{GpsCoordinates, WeatherCondition, WeatherSnapshot};

use crate::config::WeatherConfig;
use crate::error::{AppError, AppResult};
use crate::external::weather::WeatherClient;

/// Weather lookup service. Without a client every lookup reports no weather.
#[derive(Clone)]
pub struct WeatherService {
    weather_client: Option<WeatherClient>,
}

/// Current weather at a location
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentWeatherReport {
    pub coordinates: GpsCoordinates,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_name: Option<String>,
    pub condition: WeatherCondition,
    /// Rain is falling, so top-dressing now risks run-off
    pub hold_application: bool,
    pub weather: WeatherSnapshot,
}

impl WeatherService {
    /// Create a WeatherService with no provider
    pub fn new() -> Self {
        Self {
            weather_client: None,
        }
    }

    /// Create a WeatherService with weather API client
    pub fn with_client(weather_client: WeatherClient) -> Self {
        Self {
            weather_client: Some(weather_client),
        }
    }

    /// Build from configuration, disabled when `weather.enabled` is false
    pub fn from_config(config: &WeatherConfig) -> AppResult<Self> {
        if !config.enabled {
            tracing::info!("Weather lookups disabled");
            return Ok(Self::new());
        }
        Ok(Self::with_client(WeatherClient::new(config)?))
    }

    pub fn is_enabled(&self) -> bool {
        self.weather_client.is_some()
    }

    /// Current weather for scoring. Provider failures degrade to `None`.
    pub async fn current_for(&self, coordinates: &GpsCoordinates) -> Option<WeatherSnapshot> {
        let client = self.weather_client.as_ref()?;
        match client.get_current_weather(coordinates).await {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                tracing::warn!(error = %e, "Weather lookup failed, scoring without weather");
                None
            }
        }
    }

    /// Place name for coordinates, `None` when unavailable
    pub async fn location_name(&self, coordinates: &GpsCoordinates) -> Option<String> {
        let client = self.weather_client.as_ref()?;
        match client.reverse_geocode(coordinates).await {
            Ok(name) => name,
            Err(e) => {
                tracing::warn!(error = %e, "Reverse geocoding failed");
                None
            }
        }
    }

    /// Current weather with its condition and place name
    pub async fn current_report(&self, coordinates: GpsCoordinates) -> AppResult<CurrentWeatherReport> {
        let client = self
            .weather_client
            .as_ref()
            .ok_or(AppError::WeatherServiceUnavailable)?;

        let weather = client.get_current_weather(&coordinates).await.map_err(|e| {
            tracing::warn!(error = %e, "Weather lookup failed");
            AppError::WeatherServiceUnavailable
        })?;
        let location_name = self.location_name(&coordinates).await;

        Ok(CurrentWeatherReport {
            coordinates,
            location_name,
            condition: weather.condition(),
            hold_application: weather.condition().is_wet(),
            weather,
        })
    }
}

impl Default for WeatherService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn pune() -> GpsCoordinates {
        GpsCoordinates::new(Decimal::new(185204, 4), Decimal::new(738567, 4))
    }

    #[tokio::test]
    async fn test_disabled_service_has_no_weather() {
        let service = WeatherService::new();
        assert!(!service.is_enabled());
        assert!(service.current_for(&pune()).await.is_none());
        assert!(service.location_name(&pune()).await.is_none());
    }

    #[tokio::test]
    async fn test_disabled_service_report_is_unavailable() {
        let service = WeatherService::new();
        let err = service.current_report(pune()).await.unwrap_err();
        assert!(matches!(err, AppError::WeatherServiceUnavailable));
    }

    #[test]
    fn test_from_config_respects_enabled_flag() {
        let config = WeatherConfig {
            enabled: false,
            ..WeatherConfig::default()
        };
        assert!(!WeatherService::from_config(&config).unwrap().is_enabled());
    }
}
