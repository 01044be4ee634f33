//! # Settings Loader
//!
//! Centralized settings loading for the dashboard workspace. Handles the
//! main `settings.json` file that carries the API base URL, server bind
//! address, polling interval and default display language.
//!
//! ## Features
//!
//! - Load settings from specified file paths
//! - Load settings from the default location (`settings.json`)
//! - Handle optional settings gracefully
//! - Fall back through default locations when a file is missing
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//!
//! # fn main() -> anyhow::Result<()> {
//! // Load settings from a specific path
//! let settings = settings_loader::load_settings("config/my_settings.json")?;
//!
//! // Load from the default location
//! let settings = settings_loader::load_default_settings()?;
//!
//! // Load optional settings (returns None if no path is provided)
//! let path = Some(PathBuf::from("settings.json"));
//! let settings = settings_loader::load_optional_settings(path.as_ref())?;
//! # Ok(())
//! # }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use models::Settings;

/// Loads settings from a JSON file
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Reading settings file: {}", path.display()))?;
    let settings: Settings = serde_json::from_str(&raw)
        .with_context(|| format!("Parsing settings JSON in {}", path.display()))?;
    Ok(settings)
}

/// Loads settings from the default location (settings.json in the current directory)
pub fn load_default_settings() -> Result<Settings> {
    load_settings("settings.json")
}

/// Loads settings from an optional path, returning None if no path is provided
pub fn load_optional_settings(path: Option<&PathBuf>) -> Result<Option<Settings>> {
    match path {
        Some(settings_path) => Ok(Some(load_settings(settings_path)?)),
        None => Ok(None),
    }
}

/// Tries to load settings from the provided path, falling back to the default
/// location if the path is None or unreadable. Returns None only if no
/// settings file is found anywhere.
pub fn load_settings_with_fallback(path: Option<&PathBuf>) -> Result<Option<Settings>> {
    // First try the provided path
    if let Some(settings_path) = path {
        match load_settings(settings_path) {
            Ok(settings) => return Ok(Some(settings)),
            Err(_) => {
                // If the provided path fails, fall back to the default location
            }
        }
    }

    // Try default location
    match load_default_settings() {
        Ok(settings) => Ok(Some(settings)),
        Err(_) => Ok(None), // No settings file found, return None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::Language;
    use std::env;

    fn write_temp_settings(name: &str, contents: &str) -> PathBuf {
        let path = env::temp_dir().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_settings_parses_document() {
        let path = write_temp_settings(
            "dashboard_settings_full.json",
            r#"{
                "api_base_url": "http://demo.local/api",
                "server_port": 9000,
                "default_language": "en"
            }"#,
        );
        let settings = load_settings(&path).unwrap();
        assert_eq!(settings.api_base_url, "http://demo.local/api");
        assert_eq!(settings.server_port, 9000);
        assert_eq!(settings.default_language, Language::En);
        // Unspecified fields take their defaults.
        assert_eq!(settings.poll_interval_secs, 120);
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_settings_rejects_malformed_json() {
        let path = write_temp_settings("dashboard_settings_bad.json", "{ not json");
        assert!(load_settings(&path).is_err());
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_optional_settings_without_path() {
        let loaded = load_optional_settings(None).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_fallback_prefers_explicit_path() {
        let path = write_temp_settings(
            "dashboard_settings_fallback.json",
            r#"{ "server_host": "0.0.0.0" }"#,
        );
        let loaded = load_settings_with_fallback(Some(&path)).unwrap();
        assert_eq!(loaded.unwrap().server_host, "0.0.0.0");
        fs::remove_file(path).ok();
    }
}
