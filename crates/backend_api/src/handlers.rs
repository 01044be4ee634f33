use axum::{extract::{Query, State}, response::IntoResponse, Json};
use serde::Deserialize;
use std::sync::Arc;

use models::{Language, Period};

use crate::{repository::MetricsRepository, Result};

pub type RepositoryState = Arc<dyn MetricsRepository>;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewParams {
    #[serde(default)]
    pub lang: Language,
    pub hospital_id: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkloadParams {
    pub period: Period,
    #[serde(default)]
    pub lang: Language,
    pub hospital_id: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct LangParams {
    #[serde(default)]
    pub lang: Language,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub lang: Language,
}

/// GET /api/dashboard/overview
/// Returns the full metrics snapshot, optionally narrowed to one hospital.
pub async fn get_overview(
    State(repo): State<RepositoryState>,
    Query(params): Query<OverviewParams>,
) -> Result<impl IntoResponse> {
    let metrics = repo.fetch_overview(params.lang, params.hospital_id).await?;
    Ok(Json(metrics))
}

/// GET /api/workload/stats
/// Returns the period-scaled utilization rate and role-hours breakdown.
pub async fn get_workload_stats(
    State(repo): State<RepositoryState>,
    Query(params): Query<WorkloadParams>,
) -> Result<impl IntoResponse> {
    let stats = repo
        .fetch_workload_stats(params.period, params.lang, params.hospital_id)
        .await?;
    Ok(Json(stats))
}

/// GET /api/workload/details
/// Returns the per-employee time tracking ledger.
pub async fn get_workload_details(
    State(repo): State<RepositoryState>,
    Query(params): Query<LangParams>,
) -> Result<impl IntoResponse> {
    let details = repo.fetch_workload_details(params.lang).await?;
    Ok(Json(details))
}

/// GET /api/hospitals
/// Returns the partner facility catalog.
pub async fn get_hospitals(
    State(repo): State<RepositoryState>,
    Query(params): Query<LangParams>,
) -> Result<impl IntoResponse> {
    let hospitals = repo.fetch_hospitals(params.lang).await?;
    Ok(Json(hospitals))
}

/// GET /api/search
/// Global search across products, hospitals, patients and locations.
pub async fn search(
    State(repo): State<RepositoryState>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse> {
    let results = repo.search(&params.query, params.lang).await?;
    Ok(Json(results))
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "ops-dashboard-api"
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overview_params_default_language() {
        let params: OverviewParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.lang, Language::Zh);
        assert!(params.hospital_id.is_none());
    }

    #[test]
    fn test_workload_params_reject_unknown_period() {
        let result = serde_json::from_str::<WorkloadParams>(r#"{"period":"decade"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_workload_params_parse_camel_case() {
        let params: WorkloadParams =
            serde_json::from_str(r#"{"period":"month","lang":"en","hospitalId":4}"#).unwrap();
        assert_eq!(params.period, Period::Month);
        assert_eq!(params.lang, Language::En);
        assert_eq!(params.hospital_id, Some(4));
    }
}
