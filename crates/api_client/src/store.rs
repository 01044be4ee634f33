use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use models::{DashboardMetrics, Language};
use tokio::sync::{mpsc, RwLock};
use tokio::task::JoinHandle;
use tracing::warn;

use crate::endpoints;
use crate::gateway::ApiGateway;

/// Error message surfaced to the view when a refresh cycle itself fails.
pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch dashboard data";

/// Where the store gets its snapshots from. The production source is the
/// gateway (which already falls back to local demo data); tests inject
/// slow or failing sources.
#[async_trait]
pub trait MetricsSource: Send + Sync {
    async fn load_overview(
        &self,
        language: Language,
        hospital_id: Option<u32>,
    ) -> anyhow::Result<DashboardMetrics>;
}

/// Gateway-backed source used by the application.
pub struct GatewaySource {
    gateway: ApiGateway,
}

impl GatewaySource {
    pub fn new(gateway: ApiGateway) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl MetricsSource for GatewaySource {
    async fn load_overview(
        &self,
        language: Language,
        hospital_id: Option<u32>,
    ) -> anyhow::Result<DashboardMetrics> {
        Ok(endpoints::fetch_dashboard_data(&self.gateway, language, hospital_id).await)
    }
}

/// Snapshot of what the view renders from.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub data: Option<DashboardMetrics>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Discrete update messages emitted towards the view layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreUpdate {
    LoadingStarted,
    DataLoaded,
    LoadFailed(String),
    StaleResponseDiscarded,
}

#[derive(Debug, Clone, Copy)]
struct Scope {
    language: Language,
    hospital_id: Option<u32>,
}

/// Explicit application state container: state flows store -> view, scope
/// changes go through explicit setters, and every load cycle announces
/// itself with discrete `StoreUpdate` messages.
///
/// Each refresh carries a monotonic request id; a response that resolves
/// after a newer request has been issued is discarded instead of
/// overwriting fresher data.
pub struct DashboardStore {
    source: Arc<dyn MetricsSource>,
    state: RwLock<DashboardState>,
    scope: RwLock<Scope>,
    updates: mpsc::UnboundedSender<StoreUpdate>,
    issued: AtomicU64,
}

impl DashboardStore {
    pub fn new(
        source: Arc<dyn MetricsSource>,
        default_language: Language,
    ) -> (Arc<Self>, mpsc::UnboundedReceiver<StoreUpdate>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let store = Arc::new(Self {
            source,
            state: RwLock::new(DashboardState::default()),
            scope: RwLock::new(Scope {
                language: default_language,
                hospital_id: None,
            }),
            updates: tx,
            issued: AtomicU64::new(0),
        });
        (store, rx)
    }

    /// Current state, cloned for the view.
    pub async fn state(&self) -> DashboardState {
        self.state.read().await.clone()
    }

    pub async fn language(&self) -> Language {
        self.scope.read().await.language
    }

    /// Switches the display language. Takes effect on the next refresh.
    pub async fn set_language(&self, language: Language) {
        self.scope.write().await.language = language;
    }

    /// Narrows or widens the hospital scope. Takes effect on the next refresh.
    pub async fn set_hospital_scope(&self, hospital_id: Option<u32>) {
        self.scope.write().await.hospital_id = hospital_id;
    }

    /// Runs one load cycle: mark loading, fetch for the current scope,
    /// apply the result unless a newer request has been issued meanwhile.
    pub async fn refresh(&self) {
        let request_id = self.issued.fetch_add(1, Ordering::SeqCst) + 1;

        self.state.write().await.loading = true;
        let _ = self.updates.send(StoreUpdate::LoadingStarted);

        let scope = *self.scope.read().await;
        let result = self
            .source
            .load_overview(scope.language, scope.hospital_id)
            .await;

        if self.issued.load(Ordering::SeqCst) != request_id {
            // A newer request is in flight or already applied; this
            // response is stale.
            let _ = self.updates.send(StoreUpdate::StaleResponseDiscarded);
            return;
        }

        let mut state = self.state.write().await;
        match result {
            Ok(metrics) => {
                state.data = Some(metrics);
                state.error = None;
                state.loading = false;
                drop(state);
                let _ = self.updates.send(StoreUpdate::DataLoaded);
            }
            Err(err) => {
                warn!("Dashboard refresh failed: {err:#}");
                state.error = Some(FETCH_ERROR_MESSAGE.to_string());
                state.loading = false;
                drop(state);
                let _ = self
                    .updates
                    .send(StoreUpdate::LoadFailed(FETCH_ERROR_MESSAGE.to_string()));
            }
        }
    }

    /// Spawns the periodic refresh task. Aborting the returned handle
    /// tears the polling down with its owning context.
    pub fn spawn_polling(self: Arc<Self>, interval: Duration) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                ticker.tick().await;
                self.refresh().await;
            }
        })
    }
}
