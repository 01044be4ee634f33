pub mod endpoints;
pub mod gateway;
pub mod locale;
pub mod store;

// Re-export commonly used items
pub use endpoints::{
    fetch_dashboard_data, fetch_hospitals, fetch_workload_data, fetch_workload_details,
    search_all,
};
pub use gateway::{ApiGateway, GatewayConfig, FALLBACK_DELAY};
pub use locale::translate;
pub use store::{
    DashboardState, DashboardStore, GatewaySource, MetricsSource, StoreUpdate,
    FETCH_ERROR_MESSAGE,
};
