use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Default per-file upload cap: 500 MiB
const DEFAULT_MAX_FILE_SIZE: u64 = 500 * 1024 * 1024;

/// Default upload-status poll interval
const DEFAULT_POLL_INTERVAL_SECS: u64 = 30;

/// Default widget animation duration
const DEFAULT_ANIMATION_DURATION_MS: u64 = 300;

/// Application configuration
///
/// Loaded once at startup and read-only from then on. Every recurring timer
/// and validation limit in the UI derives from this value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Maximum accepted upload size in bytes
    pub max_file_size: u64,

    /// Allowed upload extensions, compared case-insensitively
    pub allowed_extensions: Vec<String>,

    /// Seconds between upload-status poll cycles
    pub poll_interval_secs: u64,

    /// Total duration of widget animations in milliseconds
    pub animation_duration_ms: u64,

    /// Base URL of the Alpha Nex server
    pub api_base_url: String,

    /// Wrap nav and form controls in tooltips when true
    pub enable_tooltips: bool,

    /// Path the settings were loaded from (not persisted)
    #[serde(skip, default = "default_settings_path")]
    pub settings_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            allowed_extensions: [
                "pdf", "mp4", "mp3", "wav", "txt", "py", "js", "html", "css", "jpg", "jpeg",
                "png", "gif",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            poll_interval_secs: DEFAULT_POLL_INTERVAL_SECS,
            animation_duration_ms: DEFAULT_ANIMATION_DURATION_MS,
            api_base_url: "http://127.0.0.1:5000".to_string(),
            enable_tooltips: true,
            settings_path: default_settings_path(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the default settings path, falling back to
    /// defaults when the file is missing or malformed. Never fatal.
    pub fn load_or_default() -> Self {
        let path = default_settings_path();
        match Self::load(&path) {
            Ok(config) => config,
            Err(AppError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No settings file at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("Failed to load settings from {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load configuration from a specific file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let mut config: AppConfig = serde_json::from_str(&contents)?;
        config.settings_path = path.to_path_buf();
        Ok(config)
    }

    /// Save configuration to its settings path
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.settings_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(&self.settings_path, contents)?;
        Ok(())
    }

    /// Interval between upload-status poll cycles
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    /// Total duration of widget animations
    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    /// Whether a file extension is on the allow-list (case-insensitive)
    pub fn is_extension_allowed(&self, extension: &str) -> bool {
        let extension = extension.to_lowercase();
        self.allowed_extensions
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(&extension))
    }

    /// Build the upload-status URL for one upload
    pub fn upload_status_url(&self, upload_id: &str) -> String {
        format!(
            "{}/api/upload_status/{}",
            self.api_base_url.trim_end_matches('/'),
            upload_id
        )
    }

    /// Build the upload submission URL
    pub fn upload_url(&self) -> String {
        format!("{}/upload", self.api_base_url.trim_end_matches('/'))
    }
}

/// Get the default settings path
fn default_settings_path() -> PathBuf {
    dirs_next::config_dir()
        .map(|config_dir| config_dir.join("alphanex").join("settings.json"))
        .unwrap_or_else(|| PathBuf::from("settings.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.max_file_size, 500 * 1024 * 1024);
        assert_eq!(config.poll_interval(), Duration::from_secs(30));
        assert_eq!(config.animation_duration(), Duration::from_millis(300));
        assert!(config.enable_tooltips);
        assert!(config.allowed_extensions.contains(&"pdf".to_string()));
    }

    #[test]
    fn test_extension_allow_list_is_case_insensitive() {
        let config = AppConfig::default();

        assert!(config.is_extension_allowed("pdf"));
        assert!(config.is_extension_allowed("PDF"));
        assert!(config.is_extension_allowed("Jpg"));
        assert!(!config.is_extension_allowed("exe"));
    }

    #[test]
    fn test_status_url() {
        let mut config = AppConfig::default();
        config.api_base_url = "http://alphanex.test/".to_string();

        assert_eq!(
            config.upload_status_url("42"),
            "http://alphanex.test/api/upload_status/42"
        );
        assert_eq!(config.upload_url(), "http://alphanex.test/upload");
    }
}
