//! Application settings structs, defaults and TOML persistence.
//!
//! All structs implement `Serialize`, `Deserialize`, `Default` and `Clone`
//! so they can be round-tripped through TOML files and shared across threads.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::AppPaths;

/// Environment variable consulted when `ocr.access_token` is unset.
pub const ACCESS_TOKEN_ENV: &str = "DOCUMENTAI_ACCESS_TOKEN";

// ---------------------------------------------------------------------------
// OcrConfig
// ---------------------------------------------------------------------------

/// Settings for the Document AI OCR processor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrConfig {
    /// Whether OCR calls are made at all.  When `false` every scan fails
    /// with a configuration error.
    pub enabled: bool,
    /// Google Cloud project id.
    pub project_id: String,
    /// Processor region (`"us"`, `"eu"`).
    pub location: String,
    /// Document AI processor id.
    pub processor_id: String,
    /// Base URL override.  `None` means the regional endpoint
    /// `https://{location}-documentai.googleapis.com`.
    pub base_url: Option<String>,
    /// OAuth2 bearer token.  Falls back to `$DOCUMENTAI_ACCESS_TOKEN`.
    pub access_token: Option<String>,
    /// Maximum seconds to wait for the OCR response.
    pub timeout_secs: u64,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            project_id: "prescription-451914".into(),
            location: "us".into(),
            processor_id: "4bd246b055005fa5".into(),
            base_url: None,
            access_token: None,
            timeout_secs: 30,
        }
    }
}

impl OcrConfig {
    /// Full URL of the processor's `:process` method.
    pub fn process_url(&self) -> String {
        let base = match &self.base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("https://{}-documentai.googleapis.com", self.location),
        };
        format!(
            "{base}/v1/projects/{}/locations/{}/processors/{}:process",
            self.project_id, self.location, self.processor_id
        )
    }

    /// Configured token, else the environment variable; empty counts as unset.
    pub fn resolved_access_token(&self) -> Option<String> {
        self.access_token
            .clone()
            .filter(|t| !t.is_empty())
            .or_else(|| std::env::var(ACCESS_TOKEN_ENV).ok())
            .filter(|t| !t.is_empty())
    }
}

// ---------------------------------------------------------------------------
// AppConfig  (top-level)
// ---------------------------------------------------------------------------

/// Top-level application configuration, serialised as `settings.toml`.
///
/// # Persistence
///
/// ```rust,no_run
/// use prescription_ocr::config::AppConfig;
///
/// // Load (returns Default when file is missing)
/// let config = AppConfig::load().unwrap();
///
/// // Modify and save
/// // config.save().unwrap();
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// OCR service settings.
    pub ocr: OcrConfig,
}

impl AppConfig {
    /// Load configuration from the platform-appropriate `settings.toml`.
    ///
    /// Returns `Ok(AppConfig::default())` when the file does not exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&AppPaths::new().settings_file)
    }

    /// Load from an explicit path.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to the platform-appropriate `settings.toml`,
    /// creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&AppPaths::new().settings_file)
    }

    /// Save to an explicit path.
    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
