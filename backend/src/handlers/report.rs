//! Report download handlers

use axum::{
    extract::{Path, Query, State},
    http::header,
    response::IntoResponse,
};
use serde::Deserialize;
use shared::Language;
use uuid::Uuid;

use crate::error::AppResult;
use crate::services::farm::FarmService;
use crate::services::recommendation::RecommendationService;
use crate::services::reporting::ReportingService;
use crate::AppState;

#[derive(Deserialize)]
pub struct ReportQuery {
    pub lang: Option<String>, // "en", "hi" or "mr"
}

/// Download the recommendation report for a soil test as CSV
pub async fn get_soil_test_report(
    State(state): State<AppState>,
    Path((farm_id, test_id)): Path<(Uuid, Uuid)>,
    Query(query): Query<ReportQuery>,
) -> AppResult<impl IntoResponse> {
    let service = FarmService::new(state.farms);
    let farm = service.get_farm(farm_id).await?;
    let test = service.get_soil_test(farm_id, test_id).await?;

    let response = RecommendationService::new(state.weather)
        .recommend_for_soil_test(&farm, &test)
        .await?;

    let language = query
        .lang
        .as_deref()
        .and_then(Language::from_code)
        .unwrap_or_default();
    let csv = ReportingService::recommendation_report(
        &farm,
        &test,
        &response.recommendations,
        language,
    )?;

    let disposition = format!(
        "attachment; filename=\"fertilizer-report-{}.csv\"",
        test.test_date
    );
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        csv,
    ))
}
