//! Config - Application Configuration
//!
//! Persisted as `artigos-grid.toml` in the platform config directory.

use std::path::{Path, PathBuf};
use std::time::Duration;

use locale_config::Locale as SystemLocale;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS, QUERY_CACHE_CAPACITY,
    REQUEST_TIMEOUT_SECS, RETRY_MAX_ATTEMPTS,
};
use crate::error::Result;
use crate::helpers::get_or_create_config_dir;

const CONFIG_FILE_NAME: &str = "artigos-grid.toml";

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Backend base URL; `/api/artigos` is appended
    pub base_url: String,
    /// Initial rows per page
    pub page_size: usize,
    /// UI language tag ("en", "pt"); detected from the system when absent
    pub locale: Option<String>,
    /// Distinct query keys kept in memory
    pub cache_capacity: usize,
    /// Retries after the first failed attempt
    pub max_retries: u32,
    /// Per-attempt HTTP timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            locale: None,
            cache_capacity: QUERY_CACHE_CAPACITY,
            max_retries: RETRY_MAX_ATTEMPTS,
            request_timeout_secs: REQUEST_TIMEOUT_SECS,
        }
    }
}

impl AppConfig {
    /// Parse a TOML document, filling missing keys with defaults
    pub fn from_toml(value: &str) -> Result<Self> {
        if value.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = toml::from_str(value)?;
        Ok(config.sanitized())
    }

    /// Load from a file, writing the defaults there when missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            std::fs::write(path, toml::to_string_pretty(&Self::default())?)?;
            info!(path = ?path, "Wrote default config file");
        }
        info!(path = ?path, "Loading config file");
        let value = std::fs::read_to_string(path)?;
        Self::from_toml(&value)
    }

    /// Load from the platform config directory.
    ///
    /// Never fails: unreadable or invalid files are logged and defaults are used.
    pub fn load_or_default() -> Self {
        let mut config = match config_path().and_then(|path| Self::load_from(&path)) {
            Ok(config) => config,
            Err(e) => {
                error!(error = %e, "Failed to load config file, using defaults");
                Self::default()
            }
        };

        // Detect system locale if not set
        if config.locale.as_ref().is_none_or(|l| l.is_empty()) {
            let current = SystemLocale::current().to_string();
            let lang = current.split_once('-').map_or(current.as_str(), |(lang, _)| lang);
            if !lang.is_empty() {
                config.locale = Some(lang.to_string());
            }
        }

        config
    }

    /// Per-attempt HTTP timeout
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Language tag, defaulting to English
    pub fn locale(&self) -> &str {
        self.locale.as_deref().unwrap_or("en")
    }

    fn sanitized(mut self) -> Self {
        if self.page_size == 0 {
            warn!("page_size must be positive, using {}", DEFAULT_PAGE_SIZE);
            self.page_size = DEFAULT_PAGE_SIZE;
        }
        let offered = nearest_page_size(self.page_size);
        if offered != self.page_size {
            warn!(
                page_size = self.page_size,
                "page_size is not offered by the grid, using {}", offered
            );
            self.page_size = offered;
        }
        if self.request_timeout_secs == 0 {
            warn!("request_timeout_secs must be positive, using {}", REQUEST_TIMEOUT_SECS);
            self.request_timeout_secs = REQUEST_TIMEOUT_SECS;
        }
        if self.cache_capacity == 0 {
            warn!("cache_capacity must be positive, using {}", QUERY_CACHE_CAPACITY);
            self.cache_capacity = QUERY_CACHE_CAPACITY;
        }
        let trimmed = self.base_url.trim_end_matches('/');
        if trimmed.len() != self.base_url.len() {
            self.base_url = trimmed.to_string();
        }
        self
    }
}

/// Closest offered page size; ties go to the smaller one
fn nearest_page_size(page_size: usize) -> usize {
    PAGE_SIZE_OPTIONS
        .iter()
        .copied()
        .min_by_key(|size| size.abs_diff(page_size))
        .unwrap_or(DEFAULT_PAGE_SIZE)
}

fn config_path() -> Result<PathBuf> {
    Ok(get_or_create_config_dir()?.join(CONFIG_FILE_NAME))
}
