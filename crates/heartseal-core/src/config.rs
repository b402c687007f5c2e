//! Experience configuration.
//!
//! Resolution order: built-in defaults, then `<config_dir>/config.json` if
//! it exists, then environment variables. Binaries apply their own flags
//! on top of the result.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ProposalError, ProposalResult};
use crate::flow::{FlowConfig, IntroMode};

/// File name looked up inside the config directory
pub const CONFIG_FILE: &str = "config.json";

/// Base URL overriding `base_url`
pub const ENV_BASE_URL: &str = "HEARTSEAL_BASE_URL";
/// `skip` or `memory-lane`
pub const ENV_INTRO: &str = "HEARTSEAL_INTRO";
/// API key for the blessing service
pub const ENV_API_KEY: &str = "GEMINI_API_KEY";
/// Fallback API key variable
pub const ENV_API_KEY_FALLBACK: &str = "API_KEY";

/// Settings for the optional blessing collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlessingConfig {
    pub endpoint: String,
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

impl Default for BlessingConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            model: "gemini-3-flash-preview".to_string(),
            api_key: None,
            timeout_secs: 8,
        }
    }
}

impl BlessingConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Everything the setup screen and the flow need to know.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceConfig {
    /// Origin + path that shareable links are built on
    pub base_url: String,
    pub intro: IntroMode,
    pub default_question: String,
    pub default_recipient: String,
    pub default_sender: String,
    pub blessing: BlessingConfig,
}

impl Default for ExperienceConfig {
    fn default() -> Self {
        Self {
            base_url: "https://heartseal.local/".to_string(),
            intro: IntroMode::default(),
            default_question: "Will you be mine forever?".to_string(),
            default_recipient: String::new(),
            default_sender: String::new(),
            blessing: BlessingConfig::default(),
        }
    }
}

impl ExperienceConfig {
    /// Default config directory (`~/.config/heartseal` on Linux).
    pub fn default_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("heartseal")
    }

    /// Load from `dir` and apply environment overrides.
    pub fn load(dir: impl AsRef<Path>) -> ProposalResult<Self> {
        let mut config = Self::from_dir(dir)?;
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Read `<dir>/config.json`; a missing file yields the defaults.
    pub fn from_dir(dir: impl AsRef<Path>) -> ProposalResult<Self> {
        let path = dir.as_ref().join(CONFIG_FILE);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(&path)?;
        serde_json::from_str(&raw)
            .map_err(|e| ProposalError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Apply environment overrides through `lookup`.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(base_url) = lookup(ENV_BASE_URL).filter(|v| !v.is_empty()) {
            self.base_url = base_url;
        }
        match lookup(ENV_INTRO).as_deref() {
            Some("skip") => self.intro = IntroMode::Skip,
            Some("memory-lane") => self.intro = IntroMode::MemoryLane,
            Some(other) => tracing::warn!("Ignoring unknown {} value: {}", ENV_INTRO, other),
            None => {}
        }
        if let Some(key) = lookup(ENV_API_KEY)
            .or_else(|| lookup(ENV_API_KEY_FALLBACK))
            .filter(|v| !v.is_empty())
        {
            self.blessing.api_key = Some(key);
        }
    }

    /// Write the config as pretty JSON into `dir`, creating it if needed.
    pub fn save(&self, dir: impl AsRef<Path>) -> ProposalResult<PathBuf> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;
        let path = dir.join(CONFIG_FILE);
        std::fs::write(&path, serde_json::to_string_pretty(self)?)?;
        Ok(path)
    }

    pub fn flow_config(&self) -> FlowConfig {
        FlowConfig { intro: self.intro }
    }
}
