//! Farm and soil test management service
//!
//! Farms and their soil tests live in an in-memory store shared across
//! requests. Soil tests are kept newest first.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use shared::{
    validate_coordinates, validate_farm_area, validate_farm_name, validate_soil_sample, Farm,
    GpsCoordinates, SoilSample, SoilTestRecord,
};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{AppError, AppResult};

#[derive(Default)]
struct StoreInner {
    farms: HashMap<Uuid, Farm>,
    soil_tests: HashMap<Uuid, Vec<SoilTestRecord>>,
}

/// Shared in-memory store for farms and soil tests
#[derive(Clone, Default)]
pub struct FarmStore {
    inner: Arc<RwLock<StoreInner>>,
}

impl FarmStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Input for registering a farm
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFarmInput {
    pub name: String,
    #[serde(default)]
    pub location: Option<String>,
    pub area_acres: Decimal,
    pub soil_type: String,
    pub crop_type: String,
    #[serde(default)]
    pub coordinates: Option<GpsCoordinates>,
    #[serde(default)]
    pub soil_ph: Option<f64>,
    #[serde(default)]
    pub organic_matter: Option<f64>,
}

/// Input for recording a soil test
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSoilTestInput {
    #[serde(default)]
    pub test_date: Option<NaiveDate>,
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub ph: f64,
    #[serde(default)]
    pub organic_matter: f64,
    #[serde(default)]
    pub moisture: f64,
    #[serde(default)]
    pub temperature: f64,
    #[serde(default)]
    pub rainfall: f64,
}

impl CreateSoilTestInput {
    fn to_sample(&self) -> SoilSample {
        SoilSample {
            organic_matter: self.organic_matter,
            moisture: self.moisture,
            temperature: self.temperature,
            rainfall: self.rainfall,
            ..SoilSample::new(self.nitrogen, self.phosphorus, self.potassium, self.ph)
        }
    }
}

/// Farm management service
#[derive(Clone)]
pub struct FarmService {
    store: FarmStore,
}

impl FarmService {
    pub fn new(store: FarmStore) -> Self {
        Self { store }
    }

    /// Register a new farm
    pub async fn create_farm(&self, input: CreateFarmInput) -> AppResult<Farm> {
        validate_farm_name(&input.name)
            .map_err(|msg| AppError::validation("name", msg, "खेत का नाम अमान्य है"))?;
        validate_farm_area(input.area_acres)
            .map_err(|msg| AppError::validation("areaAcres", msg, "खेत का क्षेत्रफल शून्य से अधिक होना चाहिए"))?;
        if let Some(coordinates) = &input.coordinates {
            validate_coordinates(coordinates)
                .map_err(|msg| AppError::validation("coordinates", msg, "GPS निर्देशांक अमान्य हैं"))?;
        }
        if input.crop_type.trim().is_empty() {
            return Err(AppError::validation(
                "cropType",
                "Crop type is required",
                "फसल का प्रकार आवश्यक है",
            ));
        }

        let farm = Farm {
            id: Uuid::new_v4(),
            name: input.name.trim().to_string(),
            location: input.location.unwrap_or_default().trim().to_string(),
            area_acres: input.area_acres,
            soil_type: input.soil_type.trim().to_string(),
            crop_type: input.crop_type.trim().to_string(),
            coordinates: input.coordinates,
            soil_ph: input.soil_ph,
            organic_matter: input.organic_matter,
            created_at: Utc::now(),
        };

        let mut inner = self.store.inner.write().await;
        inner.farms.insert(farm.id, farm.clone());
        tracing::info!(farm_id = %farm.id, crop = %farm.crop_type, "Farm created");

        Ok(farm)
    }

    /// Fill in a location name resolved after creation
    pub async fn set_location(&self, farm_id: Uuid, location: String) -> AppResult<Farm> {
        let mut inner = self.store.inner.write().await;
        let farm = inner
            .farms
            .get_mut(&farm_id)
            .ok_or_else(|| AppError::NotFound("Farm".to_string()))?;
        farm.location = location;
        Ok(farm.clone())
    }

    /// List all farms, newest first
    pub async fn list_farms(&self) -> Vec<Farm> {
        let inner = self.store.inner.read().await;
        let mut farms: Vec<Farm> = inner.farms.values().cloned().collect();
        farms.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.name.cmp(&b.name)));
        farms
    }

    pub async fn get_farm(&self, farm_id: Uuid) -> AppResult<Farm> {
        let inner = self.store.inner.read().await;
        inner
            .farms
            .get(&farm_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Farm".to_string()))
    }

    /// Delete a farm together with its soil tests
    pub async fn delete_farm(&self, farm_id: Uuid) -> AppResult<()> {
        let mut inner = self.store.inner.write().await;
        inner
            .farms
            .remove(&farm_id)
            .ok_or_else(|| AppError::NotFound("Farm".to_string()))?;
        let removed = inner.soil_tests.remove(&farm_id).map_or(0, |tests| tests.len());
        tracing::info!(farm_id = %farm_id, soil_tests = removed, "Farm deleted");
        Ok(())
    }

    /// Record a soil test against a farm
    pub async fn add_soil_test(
        &self,
        farm_id: Uuid,
        input: CreateSoilTestInput,
    ) -> AppResult<SoilTestRecord> {
        validate_soil_sample(&input.to_sample())?;

        let mut inner = self.store.inner.write().await;
        if !inner.farms.contains_key(&farm_id) {
            return Err(AppError::NotFound("Farm".to_string()));
        }

        let now = Utc::now();
        let record = SoilTestRecord {
            id: Uuid::new_v4(),
            farm_id,
            test_date: input.test_date.unwrap_or_else(|| now.date_naive()),
            nitrogen: input.nitrogen,
            phosphorus: input.phosphorus,
            potassium: input.potassium,
            ph: input.ph,
            organic_matter: input.organic_matter,
            moisture: input.moisture,
            temperature: input.temperature,
            rainfall: input.rainfall,
            created_at: now,
        };

        inner
            .soil_tests
            .entry(farm_id)
            .or_default()
            .insert(0, record.clone());

        Ok(record)
    }

    /// Soil tests for a farm, newest first
    pub async fn list_soil_tests(&self, farm_id: Uuid) -> AppResult<Vec<SoilTestRecord>> {
        let inner = self.store.inner.read().await;
        if !inner.farms.contains_key(&farm_id) {
            return Err(AppError::NotFound("Farm".to_string()));
        }
        Ok(inner.soil_tests.get(&farm_id).cloned().unwrap_or_default())
    }

    pub async fn get_soil_test(&self, farm_id: Uuid, test_id: Uuid) -> AppResult<SoilTestRecord> {
        let inner = self.store.inner.read().await;
        inner
            .soil_tests
            .get(&farm_id)
            .and_then(|tests| tests.iter().find(|t| t.id == test_id))
            .cloned()
            .ok_or_else(|| AppError::NotFound("Soil test".to_string()))
    }
}
