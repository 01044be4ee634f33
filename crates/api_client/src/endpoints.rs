use std::time::Duration;

use models::{
    DashboardMetrics, Hospital, Language, Period, SearchResults, WorkloadData,
    WorkloadDetailRecord,
};

use crate::gateway::ApiGateway;

/// Fixed delay for the search stub, mirroring the fallback latency shape.
const SEARCH_DELAY: Duration = Duration::from_millis(300);

fn scope_params(language: Language, hospital_id: Option<u32>) -> Vec<(&'static str, String)> {
    let mut params = vec![("lang", language.as_str().to_string())];
    if let Some(id) = hospital_id {
        params.push(("hospitalId", id.to_string()));
    }
    params
}

/// Full dashboard snapshot. Falls back to a locally synthesized snapshot
/// for the same scope when the backend is unreachable.
pub async fn fetch_dashboard_data(
    gateway: &ApiGateway,
    language: Language,
    hospital_id: Option<u32>,
) -> DashboardMetrics {
    let fallback = dashboard_engine::synthesize_overview(language, hospital_id);
    gateway
        .fetch_with_fallback(
            "/dashboard/overview",
            fallback,
            &scope_params(language, hospital_id),
        )
        .await
}

/// Period-scaled workload statistics with the same local fallback scheme.
pub async fn fetch_workload_data(
    gateway: &ApiGateway,
    period: Period,
    language: Language,
    hospital_id: Option<u32>,
) -> WorkloadData {
    let fallback = dashboard_engine::workload_stats(period, language, hospital_id);
    let mut params = scope_params(language, hospital_id);
    params.push(("period", period.as_str().to_string()));
    gateway
        .fetch_with_fallback("/workload/stats", fallback, &params)
        .await
}

/// Per-employee time tracking ledger.
pub async fn fetch_workload_details(
    gateway: &ApiGateway,
    language: Language,
) -> Vec<WorkloadDetailRecord> {
    let fallback = dashboard_engine::catalog::workload_details(language);
    gateway
        .fetch_with_fallback(
            "/workload/details",
            fallback,
            &[("lang", language.as_str().to_string())],
        )
        .await
}

/// Partner facility catalog. Client-only: no endpoint is wired for this
/// list, the catalog is always served locally.
pub async fn fetch_hospitals(language: Language) -> Vec<Hospital> {
    dashboard_engine::catalog::hospitals(language)
}

/// Global search. Stubbed: resolves to empty buckets after a fixed
/// simulated delay; no endpoint is wired.
pub async fn search_all(query: &str, language: Language) -> SearchResults {
    tokio::time::sleep(SEARCH_DELAY).await;
    dashboard_engine::search(query, language)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::GatewayConfig;

    fn dead_gateway() -> ApiGateway {
        ApiGateway::new(GatewayConfig {
            base_url: "http://127.0.0.1:1/api".to_string(),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_overview_falls_back_to_synthesized_snapshot() {
        let metrics = fetch_dashboard_data(&dead_gateway(), Language::En, Some(3)).await;
        assert_eq!(metrics.total_orders, 32_890);
        assert_eq!(metrics.patients.len(), 30);
        assert_eq!(metrics.workload_rate, 76);
    }

    #[tokio::test]
    async fn test_workload_falls_back_to_scaled_baseline() {
        let stats =
            fetch_workload_data(&dead_gateway(), Period::Cycle, Language::En, None).await;
        assert_eq!(stats.rate, 62);
        assert_eq!(stats.breakdown[0].time, 30.0);
    }

    #[tokio::test]
    async fn test_hospitals_are_served_locally() {
        let hospitals = fetch_hospitals(Language::Zh).await;
        assert_eq!(hospitals.len(), 9);
    }

    #[tokio::test]
    async fn test_search_stub_resolves_empty() {
        let results = search_all("anything", Language::En).await;
        assert!(results.products.is_empty());
        assert!(results.patients.is_empty());
    }
}
