//! Tests for farm records and soil test input
//! Verifies validation rules and the soil-test to engine-input mapping

use chrono::{NaiveDate, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;
use shared::{
    validate_coordinates, validate_farm_area, validate_farm_name, validate_soil_sample,
    GpsCoordinates, SoilSample, SoilTestRecord, SoilTexture,
};
use uuid::Uuid;

/// Helper to create Decimal from string
fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn record(ph: f64) -> SoilTestRecord {
    SoilTestRecord {
        id: Uuid::new_v4(),
        farm_id: Uuid::new_v4(),
        test_date: NaiveDate::from_ymd_opt(2024, 11, 15).unwrap(),
        nitrogen: 140.0,
        phosphorus: 35.0,
        potassium: 210.0,
        ph,
        organic_matter: 0.8,
        moisture: 32.0,
        temperature: 24.0,
        rainfall: 12.0,
        created_at: Utc::now(),
    }
}

// =============================================================================
// Farm Validation
// =============================================================================

mod farm_validation {
    use super::*;

    #[test]
    fn farm_name_is_trimmed_before_length_check() {
        assert!(validate_farm_name("  Sahyadri Plot 4  ").is_ok());
        assert!(validate_farm_name("").is_err());
    }

    #[test]
    fn farm_area_must_be_positive() {
        assert!(validate_farm_area(dec("0.25")).is_ok());
        assert!(validate_farm_area(dec("0")).is_err());
    }

    #[test]
    fn coordinates_in_maharashtra_are_valid() {
        let nashik = GpsCoordinates::new(dec("19.9975"), dec("73.7898"));
        assert!(validate_coordinates(&nashik).is_ok());
        let (lat, lon) = nashik.as_f64().unwrap();
        assert!((lat - 19.9975).abs() < 1e-9);
        assert!((lon - 73.7898).abs() < 1e-9);
    }

    #[test]
    fn coordinates_off_the_globe_are_rejected() {
        assert!(validate_coordinates(&GpsCoordinates::new(dec("-90.5"), dec("10"))).is_err());
        assert!(validate_coordinates(&GpsCoordinates::new(dec("10"), dec("180.1"))).is_err());
    }
}

// =============================================================================
// Soil Test Mapping
// =============================================================================

mod soil_test_mapping {
    use super::*;

    #[test]
    fn farm_soil_type_becomes_texture() {
        let sample = record(7.9).to_sample(Some("Black Clay"));
        assert_eq!(sample.texture(), Some(SoilTexture::Clay));
        assert_eq!(sample.rainfall, 12.0);
    }

    #[test]
    fn texture_keywords_in_priority_order() {
        assert_eq!(SoilTexture::from_label("Sandy Loam"), SoilTexture::Sandy);
        assert_eq!(SoilTexture::from_label("SILT LOAM"), SoilTexture::Loamy);
        assert_eq!(SoilTexture::from_label("peat"), SoilTexture::Peaty);
        assert_eq!(SoilTexture::from_label("Laterite"), SoilTexture::Unrecognized);
    }

    #[test]
    fn stored_record_passes_validation() {
        let sample = record(6.8).to_sample(None);
        assert!(validate_soil_sample(&sample).is_ok());
    }

    #[test]
    fn sample_json_uses_camel_case() {
        let sample: SoilSample = serde_json::from_str(
            r#"{"nitrogen":80,"phosphorus":10,"potassium":100,"ph":6.2,"organicMatter":1.1,"soilTexture":"Loamy"}"#,
        )
        .unwrap();
        assert_eq!(sample.organic_matter, 1.1);
        assert_eq!(sample.moisture, 0.0);
        assert_eq!(sample.texture(), Some(SoilTexture::Loamy));
    }
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    /// Any pH on the 0-14 scale is accepted
    #[test]
    fn prop_ph_scale_accepted(ph in 0.0..=14.0f64) {
        prop_assert!(validate_soil_sample(&record(ph).to_sample(None)).is_ok());
    }

    /// pH off the scale is always rejected on the ph field
    #[test]
    fn prop_ph_off_scale_rejected(ph in prop_oneof![-20.0..-0.001f64, 14.001..40.0f64]) {
        let err = validate_soil_sample(&record(ph).to_sample(None)).unwrap_err();
        prop_assert_eq!(err.field(), "ph");
    }

    /// Negative nutrient readings are always rejected
    #[test]
    fn prop_negative_nutrients_rejected(value in -500.0..-0.001f64) {
        let sample = SoilSample::new(value, 10.0, 10.0, 6.5);
        prop_assert!(validate_soil_sample(&sample).is_err());
    }
}
