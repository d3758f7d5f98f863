use fs_err as fs;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::GenError;

/// Picked up from the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "content_gen.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// OpenAI-compatible chat completions URL.
    pub provider_url: String,
    pub model: String,
    /// Name of the environment variable holding the API key.
    pub api_key_env: String,
    pub max_retries: usize,
    pub retry_base_ms: u64,
    pub timeout_secs: u64,
    pub detect_language: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider_url: "https://api.groq.com/openai/v1/chat/completions".into(),
            model: "llama3-70b-8192".into(),
            api_key_env: "GROQ_API_KEY".into(),
            max_retries: 2,
            retry_base_ms: 250,
            timeout_secs: 120,
            detect_language: true,
        }
    }
}

impl Config {
    pub fn from_toml(s: &str) -> Result<Self, GenError> {
        toml::from_str(s).map_err(|e| GenError::Config(e.to_string()))
    }

    /// Defaults overlaid by `path`, or by `content_gen.toml` if it exists.
    /// An explicit path must exist; the implicit one is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, GenError> {
        let (path, required) = match path {
            Some(p) => (p, true),
            None => (Path::new(DEFAULT_CONFIG_FILE), false),
        };
        if !required && !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path).map_err(|e| GenError::Config(e.to_string()))?;
        Self::from_toml(&text)
    }
}
