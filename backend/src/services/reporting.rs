//! Reporting service for recommendation export
//! Renders a farm's recommendations as a CSV report in the farmer's language

use serde::Serialize;
use shared::{is_neutral_ph, Farm, Language, ScoredRecommendation, SoilTestRecord};

use crate::error::{AppError, AppResult};

/// Benefits listed per product in the report
const MAX_BENEFITS: usize = 3;

/// Localized report text
struct ReportLabels {
    title: &'static str,
    farm: &'static str,
    location: &'static str,
    crop: &'static str,
    soil_type: &'static str,
    area: &'static str,
    test_date: &'static str,
    ph_in_range: &'static str,
    ph_out_of_range: &'static str,
    columns: [&'static str; 7],
}

static ENGLISH: ReportLabels = ReportLabels {
    title: "Fertilizer Recommendation Report",
    farm: "Farm",
    location: "Location",
    crop: "Crop",
    soil_type: "Soil type",
    area: "Area (acres)",
    test_date: "Test date",
    ph_in_range: "within optimal range",
    ph_out_of_range: "outside optimal range",
    columns: [
        "Rank",
        "Fertilizer",
        "NPK Ratio",
        "Score",
        "Dosage",
        "Application Method",
        "Benefits",
    ],
};

static HINDI: ReportLabels = ReportLabels {
    title: "उर्वरक सिफारिश रिपोर्ट",
    farm: "खेत",
    location: "स्थान",
    crop: "फसल",
    soil_type: "मिट्टी का प्रकार",
    area: "क्षेत्रफल (एकड़)",
    test_date: "परीक्षण तिथि",
    ph_in_range: "उचित सीमा में",
    ph_out_of_range: "उचित सीमा से बाहर",
    columns: [
        "क्रम",
        "उर्वरक",
        "NPK अनुपात",
        "स्कोर",
        "मात्रा",
        "प्रयोग विधि",
        "लाभ",
    ],
};

static MARATHI: ReportLabels = ReportLabels {
    title: "खत शिफारस अहवाल",
    farm: "शेत",
    location: "ठिकाण",
    crop: "पीक",
    soil_type: "मातीचा प्रकार",
    area: "क्षेत्र (एकर)",
    test_date: "चाचणी दिनांक",
    ph_in_range: "योग्य मर्यादेत",
    ph_out_of_range: "योग्य मर्यादेबाहेर",
    columns: [
        "क्रमांक",
        "खत",
        "NPK गुणोत्तर",
        "गुण",
        "मात्रा",
        "वापरण्याची पद्धत",
        "फायदे",
    ],
};

fn labels(language: Language) -> &'static ReportLabels {
    match language {
        Language::English => &ENGLISH,
        Language::Hindi => &HINDI,
        Language::Marathi => &MARATHI,
    }
}

/// One recommendation row in the report
#[derive(Debug, Serialize)]
pub struct ReportRow {
    pub rank: usize,
    pub name: String,
    pub npk_ratio: String,
    pub score: u8,
    pub dosage: String,
    pub application_method: String,
    pub benefits: String,
}

impl ReportRow {
    fn from_recommendation(rank: usize, rec: &ScoredRecommendation) -> Self {
        Self {
            rank,
            name: rec.name.clone(),
            npk_ratio: rec.npk_ratio.clone(),
            score: rec.score,
            dosage: rec.dosage.clone(),
            application_method: rec.application_method.clone(),
            benefits: rec
                .benefits
                .iter()
                .take(MAX_BENEFITS)
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join("; "),
        }
    }
}

/// Reporting service
pub struct ReportingService;

impl ReportingService {
    /// Farm summary lines followed by one row per recommendation
    pub fn recommendation_report(
        farm: &Farm,
        test: &SoilTestRecord,
        recommendations: &[ScoredRecommendation],
        language: Language,
    ) -> AppResult<String> {
        let text = labels(language);
        let mut wtr = csv::WriterBuilder::new()
            .flexible(true)
            .has_headers(false)
            .from_writer(vec![]);

        let ph_status = if is_neutral_ph(test.ph) {
            text.ph_in_range
        } else {
            text.ph_out_of_range
        };

        let summary: [[String; 2]; 7] = [
            [text.title.to_string(), String::new()],
            [text.farm.to_string(), farm.name.clone()],
            [text.location.to_string(), farm.location.clone()],
            [text.crop.to_string(), farm.crop_type.clone()],
            [text.soil_type.to_string(), farm.soil_type.clone()],
            [text.area.to_string(), farm.area_acres.to_string()],
            [text.test_date.to_string(), test.test_date.to_string()],
        ];
        for record in &summary {
            wtr.write_record(record).map_err(csv_error)?;
        }
        wtr.write_record([
            "pH".to_string(),
            format!("{:.1} ({})", test.ph, ph_status),
        ])
        .map_err(csv_error)?;
        wtr.write_record([""]).map_err(csv_error)?;

        wtr.write_record(text.columns).map_err(csv_error)?;
        for (index, rec) in recommendations.iter().enumerate() {
            wtr.serialize(ReportRow::from_recommendation(index + 1, rec))
                .map_err(csv_error)?;
        }

        into_string(wtr)
    }
}

fn csv_error(e: csv::Error) -> AppError {
    AppError::Internal(format!("CSV serialization error: {}", e))
}

fn into_string(wtr: csv::Writer<Vec<u8>>) -> AppResult<String> {
    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Internal(format!("CSV writer error: {}", e)))?;
    String::from_utf8(bytes)
        .map_err(|e| AppError::Internal(format!("UTF-8 conversion error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use rust_decimal::Decimal;
    use shared::{compute_recommendations, SoilSample};
    use uuid::Uuid;

    fn farm() -> Farm {
        Farm {
            id: Uuid::new_v4(),
            name: "North Field".to_string(),
            location: "Baramati".to_string(),
            area_acres: Decimal::new(25, 1),
            soil_type: "Clay".to_string(),
            crop_type: "rice".to_string(),
            coordinates: None,
            soil_ph: None,
            organic_matter: None,
            created_at: Utc::now(),
        }
    }

    fn test_record(farm_id: Uuid) -> SoilTestRecord {
        SoilTestRecord {
            id: Uuid::new_v4(),
            farm_id,
            test_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            nitrogen: 80.0,
            phosphorus: 10.0,
            potassium: 100.0,
            ph: 6.2,
            organic_matter: 1.0,
            moisture: 50.0,
            temperature: 25.0,
            rainfall: 50.0,
            created_at: Utc::now(),
        }
    }

    fn recommendations() -> Vec<ScoredRecommendation> {
        compute_recommendations(&SoilSample::new(80.0, 10.0, 100.0, 6.2), "rice", None).unwrap()
    }

    #[test]
    fn test_english_report_layout() {
        let farm = farm();
        let recs = recommendations();
        let csv = ReportingService::recommendation_report(
            &farm,
            &test_record(farm.id),
            &recs,
            Language::English,
        )
        .unwrap();

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Fertilizer Recommendation Report,");
        assert_eq!(lines[1], "Farm,North Field");
        assert!(lines.contains(&"Area (acres),2.5"));
        assert!(lines.contains(&"pH,6.2 (within optimal range)"));
        assert!(lines.contains(&"Rank,Fertilizer,NPK Ratio,Score,Dosage,Application Method,Benefits"));
        assert!(lines.iter().any(|l| l.starts_with("1,")));
        assert!(lines.iter().any(|l| l.starts_with(&format!("{},", recs.len()))));
    }

    #[test]
    fn test_hindi_headers() {
        let farm = farm();
        let csv = ReportingService::recommendation_report(
            &farm,
            &test_record(farm.id),
            &recommendations(),
            Language::Hindi,
        )
        .unwrap();
        assert!(csv.starts_with("उर्वरक सिफारिश रिपोर्ट"));
        assert!(csv.contains("क्रम,उर्वरक"));
    }

    #[test]
    fn test_benefits_are_truncated() {
        let recs = recommendations();
        let row = ReportRow::from_recommendation(1, &recs[0]);
        assert!(row.benefits.split("; ").count() <= MAX_BENEFITS);
        assert_eq!(row.rank, 1);
    }

    #[test]
    fn test_column_header_written_once() {
        let farm = farm();
        let csv = ReportingService::recommendation_report(
            &farm,
            &test_record(farm.id),
            &recommendations(),
            Language::English,
        )
        .unwrap();
        assert_eq!(csv.matches("Rank,Fertilizer").count(), 1);
        assert!(!csv.contains("npk_ratio"));
    }
}
