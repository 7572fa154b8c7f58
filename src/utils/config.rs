//! Application configuration

use crate::utils::error::TeraPeekError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Public worker proxy that performs the lookup against the hosting service
pub const DEFAULT_WORKER_BASE_URL: &str = "https://teraboxdownloderapi.revangeapi.workers.dev";

/// Host used to rebuild a canonical share link from an identifier
pub const DEFAULT_SHARE_BASE_URL: &str = "https://terabox.com";

pub const WORKER_URL_ENV: &str = "TERAPEEK_WORKER_URL";
pub const SHARE_BASE_ENV: &str = "TERAPEEK_SHARE_BASE";

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Base URL of the worker proxy
    pub worker_base_url: String,

    /// Base URL of the canonical share link passed to the worker
    pub share_base_url: String,

    /// Download and display thumbnails in the GUI
    pub thumbnail_preview: bool,

    /// How long transient notices stay visible (milliseconds)
    pub notice_duration_ms: u64,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            worker_base_url: DEFAULT_WORKER_BASE_URL.to_string(),
            share_base_url: DEFAULT_SHARE_BASE_URL.to_string(),
            thumbnail_preview: true,
            notice_duration_ms: 1500,
        }
    }
}

impl AppSettings {
    /// `<config_dir>/terapeek/settings.json`
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("terapeek")
            .join("settings.json")
    }

    /// Load settings from `path`, using defaults when the file does not exist
    pub fn load_from(path: &Path) -> Result<Self, TeraPeekError> {
        if !path.exists() {
            debug!("No settings file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)?;
        let settings: AppSettings = serde_json::from_str(&raw)?;
        info!("Loaded settings from {:?}", path);
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), TeraPeekError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(self)?;
        std::fs::write(path, raw)?;
        Ok(())
    }

    /// Apply `TERAPEEK_*` environment overrides
    pub fn apply_env(mut self) -> Self {
        if let Ok(url) = std::env::var(WORKER_URL_ENV) {
            if !url.trim().is_empty() {
                self.worker_base_url = url.trim().to_string();
            }
        }
        if let Ok(url) = std::env::var(SHARE_BASE_ENV) {
            if !url.trim().is_empty() {
                self.share_base_url = url.trim().to_string();
            }
        }
        self
    }

    /// Reject base URLs that are not http(s)
    pub fn validate(&self) -> Result<(), TeraPeekError> {
        for (name, value) in [
            ("worker_base_url", &self.worker_base_url),
            ("share_base_url", &self.share_base_url),
        ] {
            if !(value.starts_with("http://") || value.starts_with("https://")) {
                return Err(TeraPeekError::Config(format!(
                    "{} must be an http(s) URL, got {:?}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}
