use async_trait::async_trait;
use models::{
    DashboardMetrics, Hospital, Language, Period, SearchResults, WorkloadData,
    WorkloadDetailRecord,
};

use crate::error::Result;

/// Repository trait for serving dashboard metrics.
/// This abstraction allows swapping the demo synthesizer for a live data
/// source without touching the handlers.
#[async_trait]
pub trait MetricsRepository: Send + Sync {
    async fn fetch_overview(
        &self,
        language: Language,
        hospital_id: Option<u32>,
    ) -> Result<DashboardMetrics>;

    async fn fetch_workload_stats(
        &self,
        period: Period,
        language: Language,
        hospital_id: Option<u32>,
    ) -> Result<WorkloadData>;

    async fn fetch_workload_details(&self, language: Language)
        -> Result<Vec<WorkloadDetailRecord>>;

    async fn fetch_hospitals(&self, language: Language) -> Result<Vec<Hospital>>;

    async fn search(&self, query: &str, language: Language) -> Result<SearchResults>;
}

/// Engine-backed implementation. Every call synthesizes a fresh value
/// from the static catalogs; there is nothing to cache or invalidate.
pub struct DemoMetricsRepository;

#[async_trait]
impl MetricsRepository for DemoMetricsRepository {
    async fn fetch_overview(
        &self,
        language: Language,
        hospital_id: Option<u32>,
    ) -> Result<DashboardMetrics> {
        Ok(dashboard_engine::synthesize_overview(language, hospital_id))
    }

    async fn fetch_workload_stats(
        &self,
        period: Period,
        language: Language,
        hospital_id: Option<u32>,
    ) -> Result<WorkloadData> {
        Ok(dashboard_engine::workload_stats(period, language, hospital_id))
    }

    async fn fetch_workload_details(
        &self,
        language: Language,
    ) -> Result<Vec<WorkloadDetailRecord>> {
        Ok(dashboard_engine::catalog::workload_details(language))
    }

    async fn fetch_hospitals(&self, language: Language) -> Result<Vec<Hospital>> {
        Ok(dashboard_engine::catalog::hospitals(language))
    }

    async fn search(&self, query: &str, language: Language) -> Result<SearchResults> {
        Ok(dashboard_engine::search(query, language))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_overview_scope_changes_patients_not_totals() {
        let repo = DemoMetricsRepository;
        let global = repo.fetch_overview(Language::Zh, None).await.unwrap();
        let scoped = repo.fetch_overview(Language::Zh, Some(3)).await.unwrap();
        assert_eq!(global.patients.len(), 8);
        assert_eq!(scoped.patients.len(), 30);
        assert_eq!(global.total_orders, scoped.total_orders);
    }

    #[tokio::test]
    async fn test_workload_stats_cycle_scenario() {
        let repo = DemoMetricsRepository;
        let stats = repo
            .fetch_workload_stats(Period::Cycle, Language::En, None)
            .await
            .unwrap();
        assert_eq!(stats.rate, 62);
        assert_eq!(stats.breakdown[0].time, 30.0);
    }

    #[tokio::test]
    async fn test_details_are_unfiltered() {
        let repo = DemoMetricsRepository;
        let details = repo.fetch_workload_details(Language::En).await.unwrap();
        assert_eq!(details.len(), 8);
    }

    #[tokio::test]
    async fn test_search_is_an_empty_stub() {
        let repo = DemoMetricsRepository;
        let results = repo.search("orthosis", Language::En).await.unwrap();
        assert!(results.products.is_empty());
        assert!(results.hospitals.is_empty());
    }
}
