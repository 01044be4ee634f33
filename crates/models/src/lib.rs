use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// Enumerations shared across the API and the client

/// Display language of the dashboard. The wire format and all query
/// parameters use the lowercase two-letter codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Zh,
    En,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Zh => "zh",
            Language::En => "en",
        }
    }

    /// The other supported language, used by the UI language switch.
    pub fn toggled(&self) -> Language {
        match self {
            Language::Zh => Language::En,
            Language::En => Language::Zh,
        }
    }
}

/// Time window selector for workload statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Week,
    Month,
    Cycle,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Week => "week",
            Period::Month => "month",
            Period::Cycle => "cycle",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PatientStatus {
    Completed,
    Sampling,
    Processing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationKind {
    Transport,
    Clinic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationStatus {
    Normal,
    Busy,
    Offline,
}

// Dashboard records

/// Generic display record reused by three chart widgets; each widget
/// populates a different subset of the optional fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub name: String,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// 0-100
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_lagging: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_list: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: String,
    pub name: String,
    pub project: String,
    pub status: PatientStatus,
    /// Owning hospital display name, denormalized on purpose: the UI
    /// renders it directly and never joins back to the catalog.
    pub hospital: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hospital {
    pub id: u32,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapLocation {
    pub id: u32,
    /// Visual position on the decorative fallback map (0-100%).
    pub x: f64,
    pub y: f64,
    /// Real coordinates for the live map, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: LocationKind,
    pub status: LocationStatus,
}

// Workload

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkloadEntry {
    pub role: String,
    pub time: f64,
    pub unit: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkloadData {
    /// Aggregate staff utilization for the period, 0-100.
    pub rate: u32,
    pub breakdown: Vec<WorkloadEntry>,
}

/// One ledger line of the per-employee time tracking table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkloadDetailRecord {
    pub id: String,
    pub employee_name: String,
    pub role: String,
    pub project_name: String,
    pub task_type: String,
    pub hours_spent: f64,
    pub date: NaiveDate,
    pub status: String,
}

// Aggregate snapshot

/// The full dashboard snapshot. Constructed fresh per fetch and owned by
/// the requesting call; nothing here is persisted or shared.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub total_orders: u64,
    pub avg_workload: f64,
    pub workload_rate: u32,
    pub workload_breakdown: Vec<WorkloadEntry>,
    pub product_distribution: Vec<ChartData>,
    pub status_distribution: Vec<ChartData>,
    pub map_locations: Vec<MapLocation>,
    pub hospitals: Vec<Hospital>,
    pub patients: Vec<Patient>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    pub products: Vec<ChartData>,
    pub hospitals: Vec<Hospital>,
    pub patients: Vec<Patient>,
    pub locations: Vec<MapLocation>,
}

// Settings

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_server_host")]
    pub server_host: String,
    #[serde(default = "default_server_port")]
    pub server_port: u16,
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
    #[serde(default)]
    pub default_language: Language,
    /// Key for the live map SDK; the UI falls back to the mock map without it.
    #[serde(default)]
    pub map_key: Option<String>,
}

fn default_api_base_url() -> String {
    "http://localhost:8080/api".to_string()
}

fn default_server_host() -> String {
    "127.0.0.1".to_string()
}

fn default_server_port() -> u16 {
    8080
}

fn default_poll_interval_secs() -> u64 {
    120
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            api_base_url: default_api_base_url(),
            server_host: default_server_host(),
            server_port: default_server_port(),
            poll_interval_secs: default_poll_interval_secs(),
            default_language: Language::default(),
            map_key: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_wire_codes() {
        assert_eq!(serde_json::to_string(&Language::Zh).unwrap(), "\"zh\"");
        assert_eq!(serde_json::to_string(&Language::En).unwrap(), "\"en\"");
        let lang: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(lang, Language::En);
        assert!(serde_json::from_str::<Language>("\"fr\"").is_err());
    }

    #[test]
    fn test_language_toggle_is_involution() {
        assert_eq!(Language::Zh.toggled(), Language::En);
        assert_eq!(Language::Zh.toggled().toggled(), Language::Zh);
    }

    #[test]
    fn test_period_wire_codes() {
        let period: Period = serde_json::from_str("\"cycle\"").unwrap();
        assert_eq!(period, Period::Cycle);
        assert_eq!(Period::Month.as_str(), "month");
        assert!(serde_json::from_str::<Period>("\"year\"").is_err());
    }

    #[test]
    fn test_metrics_wire_format_is_camel_case() {
        let metrics = DashboardMetrics {
            total_orders: 32890,
            avg_workload: 8.5,
            workload_rate: 92,
            workload_breakdown: vec![],
            product_distribution: vec![],
            status_distribution: vec![],
            map_locations: vec![],
            hospitals: vec![],
            patients: vec![],
        };
        let json = serde_json::to_value(&metrics).unwrap();
        assert_eq!(json["totalOrders"], 32890);
        assert_eq!(json["avgWorkload"], 8.5);
        assert!(json.get("total_orders").is_none());
    }

    #[test]
    fn test_chart_data_skips_absent_fields() {
        let entry = ChartData {
            name: "Hip Implant".to_string(),
            value: 60.0,
            color: None,
            progress: Some(60.0),
            status_label: None,
            is_lagging: Some(false),
            count: None,
            avg_time: None,
            project_list: None,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert!(json.get("color").is_none());
        assert!(json.get("projectList").is_none());
        assert_eq!(json["isLagging"], false);
    }

    #[test]
    fn test_map_location_type_field_name() {
        let loc = MapLocation {
            id: 1,
            x: 30.0,
            y: 40.0,
            lng: Some(121.336),
            lat: Some(31.197),
            label: "Shanghai Hongqiao Airport".to_string(),
            kind: LocationKind::Transport,
            status: LocationStatus::Normal,
        };
        let json = serde_json::to_value(&loc).unwrap();
        assert_eq!(json["type"], "transport");
        assert_eq!(json["status"], "normal");
    }

    #[test]
    fn test_settings_defaults_apply_to_empty_document() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.server_port, 8080);
        assert_eq!(settings.poll_interval_secs, 120);
        assert_eq!(settings.default_language, Language::Zh);
        assert!(settings.map_key.is_none());
    }
}
