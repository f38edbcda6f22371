use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Deserialize;

/// Root configuration structure, deserialized from `.label-checkr/config.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// OCR collaborator settings.
    #[serde(default)]
    pub ocr: OcrConfig,
    /// Severity table adjustments.
    #[serde(default)]
    pub severity: SeverityConfig,
}

/// Where and how to invoke the external OCR engine.
#[derive(Debug, Deserialize)]
pub struct OcrConfig {
    /// Tesseract binary. Defaults to `tesseract` on `PATH`.
    #[serde(default = "default_tesseract")]
    pub tesseract: PathBuf,
    /// Language model passed via `-l`.
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_tesseract() -> PathBuf {
    PathBuf::from("tesseract")
}

fn default_language() -> String {
    "eng".to_string()
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            tesseract: default_tesseract(),
            language: default_language(),
        }
    }
}

/// Per-label severity overrides keyed by canonical label
/// (e.g. `"Parabens"`, `"Mineral oil"`). Scores must be 0..=10; validated
/// when the severity table is built.
#[derive(Debug, Default, Deserialize)]
pub struct SeverityConfig {
    #[serde(default)]
    pub overrides: HashMap<String, u8>,
}

/// Load the configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `./.label-checkr/config.toml`
/// 3. `~/.config/label-checkr/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        let content = std::fs::read_to_string(path)?;
        return Ok(toml::from_str(&content)?);
    }

    let local_config = Path::new(".label-checkr").join("config.toml");
    if local_config.exists() {
        let content = std::fs::read_to_string(&local_config)?;
        return Ok(toml::from_str(&content)?);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home.join(".config").join("label-checkr").join("config.toml");
        if home_config.exists() {
            let content = std::fs::read_to_string(&home_config)?;
            return Ok(toml::from_str(&content)?);
        }
    }

    Ok(Config::default())
}
