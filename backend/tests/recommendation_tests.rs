//! Tests for the fertilizer recommendation engine
//! Verifies ranking, bounds, crop fallback and weather handling

use proptest::prelude::*;
use shared::reference::{fertilizers_for, supported_crops, CROP_PROFILES, DEFAULT_CROP};
use shared::{
    compute_recommendations, score_candidates, ScoredRecommendation, SoilSample, WeatherSnapshot,
};

/// Scores and ids only, breakdowns differ between weather and no-weather runs
fn ranking(results: &[ScoredRecommendation]) -> Vec<(String, u8)> {
    results.iter().map(|r| (r.id.clone(), r.score)).collect()
}

fn rice_sample() -> SoilSample {
    SoilSample {
        moisture: 50.0,
        temperature: 25.0,
        rainfall: 50.0,
        ..SoilSample::new(80.0, 10.0, 100.0, 6.2)
    }
}

// =============================================================================
// Strategies
// =============================================================================

fn texture_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("Sandy".to_string())),
        Just(Some("Clay Loam".to_string())),
        Just(Some("Loamy".to_string())),
        Just(Some("Silty".to_string())),
        Just(Some("Peaty".to_string())),
        Just(Some("Chalky".to_string())),
        Just(Some("Black cotton".to_string())),
    ]
}

fn sample_strategy() -> impl Strategy<Value = SoilSample> {
    (
        0.0..300.0f64,
        0.0..150.0f64,
        0.0..300.0f64,
        3.0..10.0f64,
        texture_strategy(),
    )
        .prop_map(|(n, p, k, ph, texture)| SoilSample {
            soil_texture: texture,
            ..SoilSample::new(n, p, k, ph)
        })
}

fn sample_strategy_over(
    ph: std::ops::RangeInclusive<f64>,
) -> impl Strategy<Value = SoilSample> {
    (0.0..300.0f64, 0.0..150.0f64, 0.0..300.0f64, ph, texture_strategy()).prop_map(
        |(n, p, k, ph, texture)| SoilSample {
            soil_texture: texture,
            ..SoilSample::new(n, p, k, ph)
        },
    )
}

fn crop_strategy() -> impl Strategy<Value = String> {
    let crops: Vec<String> = supported_crops().map(str::to_string).collect();
    prop::sample::select(crops)
}

fn weather_strategy() -> impl Strategy<Value = WeatherSnapshot> {
    (-10.0..50.0f64, 0.0..=100.0f64, 0.0..300.0f64)
        .prop_map(|(t, h, r)| WeatherSnapshot::new(t, h, r))
}

fn neutral_weather_strategy() -> impl Strategy<Value = WeatherSnapshot> {
    (20.0..=30.0f64, 40.0..=70.0f64, 20.0..=100.0f64)
        .prop_map(|(t, h, r)| WeatherSnapshot::new(t, h, r))
}

/// Hot enough for urea to volatilise, any humidity and rainfall
fn heat_strategy() -> impl Strategy<Value = WeatherSnapshot> {
    (35.5..50.0f64, 0.0..=100.0f64, 0.0..500.0f64)
        .prop_map(|(t, h, r)| WeatherSnapshot::new(t, h, r))
}

fn unknown_crop_strategy() -> impl Strategy<Value = String> {
    "[a-z]{3,12}".prop_filter("must not be a supported crop", |name| {
        !CROP_PROFILES.iter().any(|p| p.crop == name)
    })
}

// =============================================================================
// Ranking Properties
// =============================================================================

mod ranking_properties {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Same inputs always produce the same ranked output
        #[test]
        fn prop_deterministic(
            sample in sample_strategy(),
            crop in crop_strategy(),
            weather in proptest::option::of(weather_strategy()),
        ) {
            let first = compute_recommendations(&sample, &crop, weather.as_ref()).unwrap();
            let second = compute_recommendations(&sample, &crop, weather.as_ref()).unwrap();
            prop_assert_eq!(first, second);
        }

        /// Every score lies in 0..=100
        #[test]
        fn prop_scores_bounded(
            sample in sample_strategy(),
            crop in crop_strategy(),
            weather in proptest::option::of(weather_strategy()),
        ) {
            for rec in score_candidates(&sample, &crop, weather.as_ref()).unwrap() {
                prop_assert!(rec.score <= 100);
                prop_assert!(rec.breakdown.ph_factor >= 0.1);
            }
        }

        /// Result length is min(5, pool size)
        #[test]
        fn prop_cardinality(sample in sample_strategy(), crop in crop_strategy()) {
            let results = compute_recommendations(&sample, &crop, None).unwrap();
            prop_assert_eq!(results.len(), fertilizers_for(&crop).len().min(5));
        }

        /// Scores never increase down the list, ties keep catalog order
        #[test]
        fn prop_descending(
            sample in sample_strategy(),
            crop in crop_strategy(),
            weather in proptest::option::of(weather_strategy()),
        ) {
            let results = compute_recommendations(&sample, &crop, weather.as_ref()).unwrap();
            for pair in results.windows(2) {
                prop_assert!(pair[0].score >= pair[1].score);
                if pair[0].score == pair[1].score {
                    let a: usize = pair[0].id.trim_start_matches("rec-").parse().unwrap();
                    let b: usize = pair[1].id.trim_start_matches("rec-").parse().unwrap();
                    prop_assert!(a < b);
                }
            }
        }

        /// Unknown crops are scored exactly like the default crop
        #[test]
        fn prop_unknown_crop_falls_back(sample in sample_strategy(), crop in unknown_crop_strategy()) {
            let unknown = compute_recommendations(&sample, &crop, None).unwrap();
            let default = compute_recommendations(&sample, DEFAULT_CROP, None).unwrap();
            prop_assert_eq!(unknown, default);
        }

        /// Mild weather leaves every score unchanged
        #[test]
        fn prop_neutral_weather_matches_no_weather(
            sample in sample_strategy(),
            crop in crop_strategy(),
            weather in neutral_weather_strategy(),
        ) {
            let without = compute_recommendations(&sample, &crop, None).unwrap();
            let with = compute_recommendations(&sample, &crop, Some(&weather)).unwrap();
            prop_assert_eq!(ranking(&without), ranking(&with));
        }

        /// Urea products always lose score in extreme heat, whatever the
        /// humidity, rainfall or soil pH
        #[test]
        fn prop_heat_penalises_urea(
            sample in sample_strategy_over(0.0..=14.0f64),
            crop in crop_strategy(),
            weather in heat_strategy(),
        ) {
            let cool = score_candidates(&sample, &crop, None).unwrap();
            let heat = score_candidates(&sample, &crop, Some(&weather)).unwrap();

            for (before, after) in cool.iter().zip(heat.iter()) {
                if before.name.contains("Urea") {
                    prop_assert!(
                        after.score < before.score,
                        "{} scored {} hot vs {} without weather",
                        before.name, after.score, before.score
                    );
                }
            }
        }
    }
}

// =============================================================================
// Scenario Tests
// =============================================================================

mod scenarios {
    use super::*;

    #[test]
    fn rice_top_pick_is_rich_in_nitrogen_and_phosphorus() {
        let results = compute_recommendations(&rice_sample(), "rice", None).unwrap();

        let mut pool: Vec<f64> = fertilizers_for("rice")
            .iter()
            .map(|f| f.nitrogen + f.phosphorus)
            .collect();
        pool.sort_by(|a, b| a.total_cmp(b));
        let median = pool[pool.len() / 2];

        let top = &results[0];
        assert!(top.nitrogen + top.phosphorus > median);
        assert_eq!(top.name, "Diammonium Phosphate (DAP)");
    }

    #[test]
    fn urea_scores_lower_in_heat() {
        let hot = WeatherSnapshot::new(40.0, 55.0, 50.0);
        let cool = score_candidates(&rice_sample(), "rice", None).unwrap();
        let heat = score_candidates(&rice_sample(), "rice", Some(&hot)).unwrap();

        let urea_cool = cool.iter().find(|r| r.name == "Urea").unwrap();
        let urea_hot = heat.iter().find(|r| r.name == "Urea").unwrap();
        assert_eq!(urea_cool.score, 75);
        assert_eq!(urea_hot.score, 71);
    }

    #[test]
    fn urea_scores_lower_in_humid_dry_heat() {
        // Humid and dry weather raises demand, heat must still cost urea
        let muggy = WeatherSnapshot::new(40.0, 75.0, 0.0);
        for nitrogen in [0.0, 39.0, 55.0, 60.0, 75.0, 120.0, 200.0] {
            for ph in [3.0, 6.5, 9.0] {
                let sample = SoilSample::new(nitrogen, 60.0, 120.0, ph);
                let cool = score_candidates(&sample, "sugarcane", None).unwrap();
                let hot = score_candidates(&sample, "sugarcane", Some(&muggy)).unwrap();

                for (before, after) in cool.iter().zip(hot.iter()) {
                    if before.name.contains("Urea") {
                        assert!(
                            after.score < before.score,
                            "{} at N={} pH={}: {} hot vs {}",
                            before.name, nitrogen, ph, after.score, before.score
                        );
                    }
                }
            }
        }

        let sample = SoilSample::new(60.0, 60.0, 120.0, 6.5);
        let hot = score_candidates(&sample, "sugarcane", Some(&muggy)).unwrap();
        assert_eq!(hot[0].name, "Urea");
        assert_eq!(hot[0].score, 76);
    }

    #[test]
    fn case_and_whitespace_do_not_matter() {
        let lower = compute_recommendations(&rice_sample(), "rice", None).unwrap();
        let upper = compute_recommendations(&rice_sample(), "  RICE ", None).unwrap();
        assert_eq!(lower, upper);
    }

    #[test]
    fn watermelon_uses_default_list_with_own_targets() {
        let sample = SoilSample::new(50.0, 20.0, 60.0, 6.5);
        let watermelon = score_candidates(&sample, "watermelon", None).unwrap();
        let sugarcane = score_candidates(&sample, "sugarcane", None).unwrap();

        let names = |r: &[ScoredRecommendation]| r.iter().map(|x| x.name.clone()).collect::<Vec<_>>();
        assert_eq!(names(&watermelon), names(&sugarcane));
        // Lower nitrogen target, smaller urea gap
        assert!(watermelon[0].breakdown.nutrient_match < sugarcane[0].breakdown.nutrient_match);
    }

    #[test]
    fn fully_supplied_soil_scores_on_compatibility_alone() {
        let sample = SoilSample::new(400.0, 400.0, 400.0, 6.5).with_texture("Loamy");
        for rec in score_candidates(&sample, "wheat", None).unwrap() {
            assert_eq!(rec.breakdown.nutrient_match, 0.0);
            // 50 + 80 * 0.2 + 85 * 0.1
            assert_eq!(rec.score, 75);
        }
    }

    #[test]
    fn sandy_soil_prefers_potash() {
        let sample = SoilSample::new(150.0, 60.0, 20.0, 6.8).with_texture("Sandy");
        let results = compute_recommendations(&sample, "sugarcane", None).unwrap();
        assert_eq!(results[0].name, "Muriate of Potash (MOP)");
    }

    #[test]
    fn invalid_sample_is_rejected() {
        let sample = SoilSample::new(80.0, 10.0, f64::INFINITY, 6.2);
        let err = compute_recommendations(&sample, "rice", None).unwrap_err();
        assert_eq!(err.field(), "potassium");
    }

    #[test]
    fn ids_follow_catalog_position() {
        let results = score_candidates(&rice_sample(), "rice", None).unwrap();
        for (index, rec) in results.iter().enumerate() {
            assert_eq!(rec.id, format!("rec-{}", index));
        }
    }
}
