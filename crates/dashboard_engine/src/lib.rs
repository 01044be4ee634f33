pub mod catalog;
pub mod overview;
pub mod search;
pub mod workload;

pub use overview::synthesize_overview;
pub use search::search;
pub use workload::{base_rate, scaled_rate, workload_stats};

use anyhow::Result;
use models::DashboardMetrics;
use std::fs;
use std::path::Path;

/// Writes a snapshot as pretty-printed JSON, creating parent directories
/// as needed.
pub fn write_snapshot_json(metrics: &DashboardMetrics, out_path: &Path) -> Result<()> {
    if let Some(parent) = out_path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(metrics)?;
    fs::write(out_path, json)?;
    Ok(())
}
