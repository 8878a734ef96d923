use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Live test settings read from `settings.json` in the working directory.
#[derive(Debug, Deserialize)]
pub struct Settings {
    pub aws_profile: Option<String>,
    #[serde(default = "default_region")]
    pub aws_region: String,
    pub endpoint: Option<String>,
    #[serde(default = "default_workers")]
    pub max_workers: usize,
}

fn default_region() -> String {
    "us-east-1".to_string()
}

fn default_workers() -> usize {
    4
}

/// `Ok(None)` when no settings file is present, so live tests can be skipped.
pub fn load_settings() -> Result<Option<Settings>, String> {
    let path = std::env::current_dir()
        .map_err(|e| e.to_string())?
        .join("settings.json");
    if !path.exists() {
        return Ok(None);
    }
    read_settings(&path).map(Some)
}

fn read_settings(path: &Path) -> Result<Settings, String> {
    let contents =
        fs::read_to_string(path).map_err(|e| format!("Failed to read settings.json: {e}"))?;
    serde_json::from_str(&contents).map_err(|e| format!("Invalid settings.json: {e}"))
}
