// Configuration type definitions

use serde::Deserialize;

/// Default Ollama endpoint; IPv4 loopback so `localhost` never resolves to ::1
pub const DEFAULT_OLLAMA_HOST: &str = "http://127.0.0.1:11434";

/// Default local model
pub const DEFAULT_MODEL: &str = "llama3.2";

/// Clipboard backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardBackend {
    #[default]
    Auto,
    System,
    Osc52,
}

/// Clipboard configuration section
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ClipboardConfig {
    #[serde(default)]
    pub backend: ClipboardBackend,
}

/// Language model provider selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AiProviderType {
    #[default]
    Ollama,
}

/// AI configuration section
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    pub provider: AiProviderType,
    pub model: String,
    pub host: String,
    /// Ask the model to append a JSON block of field edits
    pub request_suggestions: bool,
    /// Request timeout; `None` waits indefinitely
    pub timeout_secs: Option<u64>,
}

impl Default for AiConfig {
    fn default() -> Self {
        AiConfig {
            provider: AiProviderType::Ollama,
            model: DEFAULT_MODEL.to_string(),
            host: DEFAULT_OLLAMA_HOST.to_string(),
            request_suggestions: true,
            timeout_secs: None,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ai: AiConfig,
    #[serde(default)]
    pub clipboard: ClipboardConfig,
}
