//! AI provider abstraction
//!
//! Defines the `ModelClient` trait, the `AiError` type, and the factory that
//! builds the configured provider.

use thiserror::Error;

use crate::config::{AiConfig, AiProviderType};

mod ollama;

pub use ollama::{OllamaClient, normalize_ollama_host};

/// Errors that can occur during AI operations
#[derive(Debug, Error)]
pub enum AiError {
    /// AI is not configured (missing model or host)
    #[error("[{provider}] AI not configured: {message}")]
    NotConfigured { provider: String, message: String },

    /// Network error during the request
    #[error("[{provider}] Network error: {message}")]
    Network { provider: String, message: String },

    /// API returned an error response
    #[error("[{provider}] API error ({code}): {message}")]
    Api {
        provider: String,
        code: u16,
        message: String,
    },

    /// Failed to parse the API response
    #[error("[{provider}] Parse error: {message}")]
    Parse { provider: String, message: String },
}

/// A language model that turns one prompt into one reply
///
/// The call blocks until the whole reply is available.
pub trait ModelClient: Send {
    /// Provider name for status display
    fn name(&self) -> &str;

    /// Model identifier for status display
    fn model(&self) -> &str;

    /// Send `prompt` and return the model's full text reply
    fn invoke(&self, prompt: &str) -> Result<String, AiError>;
}

/// AI provider implementations
#[derive(Debug)]
pub enum AiProvider {
    /// Local Ollama server
    Ollama(OllamaClient),
}

impl AiProvider {
    /// Create an AI provider from configuration
    ///
    /// Returns an error if the configuration is unusable (e.g., empty model)
    pub fn from_config(config: &AiConfig) -> Result<Self, AiError> {
        match config.provider {
            AiProviderType::Ollama => {
                let model = Some(config.model.as_str())
                    .filter(|m| !m.trim().is_empty())
                    .ok_or_else(|| AiError::NotConfigured {
                        provider: "Ollama".to_string(),
                        message: "Missing or empty model in [ai] config".to_string(),
                    })?;

                let host = Some(config.host.as_str())
                    .filter(|h| !h.trim().is_empty())
                    .ok_or_else(|| AiError::NotConfigured {
                        provider: "Ollama".to_string(),
                        message: "Missing or empty host in [ai] config".to_string(),
                    })?;

                let client = OllamaClient::new(host, model, config.timeout_secs)?;
                Ok(AiProvider::Ollama(client))
            }
        }
    }
}

impl ModelClient for AiProvider {
    fn name(&self) -> &str {
        match self {
            AiProvider::Ollama(client) => client.name(),
        }
    }

    fn model(&self) -> &str {
        match self {
            AiProvider::Ollama(client) => client.model(),
        }
    }

    fn invoke(&self, prompt: &str) -> Result<String, AiError> {
        match self {
            AiProvider::Ollama(client) => client.invoke(prompt),
        }
    }
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod provider_tests;
