//! Ollama API client
//!
//! Calls the native `/api/generate` endpoint with streaming disabled, so one
//! request yields the whole reply. The HTTP client is async; `invoke` drives it
//! to completion on a private current-thread runtime.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::runtime::{Builder, Runtime};

use super::{AiError, ModelClient};

const PROVIDER: &str = "Ollama";

/// Completion endpoint, relative to the host
const GENERATE_PATH: &str = "/api/generate";

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Ollama API client
#[derive(Debug)]
pub struct OllamaClient {
    host: String,
    model: String,
    http: reqwest::Client,
    runtime: Runtime,
}

impl OllamaClient {
    /// Create a new Ollama client
    ///
    /// `timeout_secs` of `None` waits for the model indefinitely.
    pub fn new(host: &str, model: &str, timeout_secs: Option<u64>) -> Result<Self, AiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let http = builder.build().map_err(|e| AiError::NotConfigured {
            provider: PROVIDER.to_string(),
            message: format!("failed to build HTTP client: {}", e),
        })?;

        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| AiError::NotConfigured {
                provider: PROVIDER.to_string(),
                message: format!("failed to start runtime: {}", e),
            })?;

        Ok(Self {
            host: normalize_ollama_host(host),
            model: model.to_string(),
            http,
            runtime,
        })
    }

    fn url(&self) -> String {
        format!("{}{}", self.host, GENERATE_PATH)
    }

    async fn generate(&self, prompt: &str) -> Result<String, AiError> {
        let url = self.url();
        let request = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
        };

        log::debug!(
            "POST {} model={} prompt_chars={}",
            url,
            self.model,
            prompt.len()
        );

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| AiError::Network {
                provider: PROVIDER.to_string(),
                message: format!(
                    "failed to reach Ollama at {} (is `ollama serve` running?): {}",
                    url, e
                ),
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| AiError::Network {
            provider: PROVIDER.to_string(),
            message: format!("failed to read response: {}", e),
        })?;

        if !status.is_success() {
            return Err(AiError::Api {
                provider: PROVIDER.to_string(),
                code: status.as_u16(),
                message: error_message(&body),
            });
        }

        parse_generate_response(&body)
    }
}

impl ModelClient for OllamaClient {
    fn name(&self) -> &str {
        PROVIDER
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn invoke(&self, prompt: &str) -> Result<String, AiError> {
        self.runtime.block_on(self.generate(prompt))
    }
}

/// Normalize a host string to `scheme://host:port` without a trailing slash
///
/// `OLLAMA_HOST` is commonly set without a scheme (e.g. `0.0.0.0:11434`).
pub fn normalize_ollama_host(host: &str) -> String {
    let host = host.trim().trim_end_matches('/');
    if host.starts_with("http://") || host.starts_with("https://") {
        host.to_string()
    } else {
        format!("http://{}", host)
    }
}

/// Extract the reply text from a non-streaming generate response
fn parse_generate_response(body: &str) -> Result<String, AiError> {
    let parsed: GenerateResponse = serde_json::from_str(body).map_err(|e| AiError::Parse {
        provider: PROVIDER.to_string(),
        message: e.to_string(),
    })?;

    if let Some(error) = parsed.error {
        return Err(AiError::Api {
            provider: PROVIDER.to_string(),
            code: 200,
            message: error,
        });
    }

    parsed.response.ok_or_else(|| AiError::Parse {
        provider: PROVIDER.to_string(),
        message: "response field missing".to_string(),
    })
}

/// Best-effort error text from a failed response body
fn error_message(body: &str) -> String {
    if let Ok(GenerateResponse {
        error: Some(error), ..
    }) = serde_json::from_str::<GenerateResponse>(body)
    {
        return error;
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Unknown error".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
#[path = "ollama_tests.rs"]
mod ollama_tests;
