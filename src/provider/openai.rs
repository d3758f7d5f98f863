use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio_retry2::strategy::{jitter, FixedInterval};
use tokio_retry2::{Retry, RetryError};
use tracing::{debug, instrument, warn};

use crate::config::Config;
use crate::errors::GenError;
use crate::wire::ChatMessage;

const TEMPERATURE: f64 = 0.7;

/// Client for any endpoint speaking the OpenAI chat-completions format
/// (Groq, OpenAI, Ollama's /v1 shim).
pub struct OpenAICompatProvider {
    client: Client,
    url: String,
    model: String,
    api_key: String,
    max_retries: usize,
    retry_base_ms: u64,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f64,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl OpenAICompatProvider {
    /// Reads the API key from the environment variable named in `cfg`.
    pub fn from_config(cfg: &Config) -> Result<Self, GenError> {
        let api_key = std::env::var(&cfg.api_key_env)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| GenError::MissingApiKey(cfg.api_key_env.clone()))?;
        Self::new(cfg, api_key)
    }

    pub fn new(cfg: &Config, api_key: String) -> Result<Self, GenError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()
            .map_err(|e| GenError::Config(format!("http client: {e}")))?;
        Ok(Self {
            client,
            url: cfg.provider_url.clone(),
            model: cfg.model.clone(),
            api_key,
            max_retries: cfg.max_retries,
            retry_base_ms: cfg.retry_base_ms,
        })
    }

    async fn send_once(&self, body: &ChatRequest<'_>) -> Result<String, GenError> {
        let resp = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| GenError::Http(e.to_string()))?;

        let status = resp.status();
        let text = resp.text().await.map_err(|e| GenError::Http(e.to_string()))?;
        debug!(status = %status, bytes = text.len(), "completion response received");

        if !status.is_success() {
            return Err(GenError::Api { status: status.as_u16(), body: text });
        }

        let parsed: ChatResponse = serde_json::from_str(&text)
            .map_err(|e| GenError::Response(format!("{e}; body was: {text}")))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| GenError::Response("response contained no completion".into()))
    }
}

#[async_trait]
impl super::Provider for OpenAICompatProvider {
    #[instrument(skip_all, fields(model = %self.model, url = %self.url))]
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, GenError> {
        let body = ChatRequest { model: &self.model, messages, temperature: TEMPERATURE };
        let body = &body;

        let strategy = FixedInterval::from_millis(self.retry_base_ms)
            .map(jitter)
            .take(self.max_retries);

        Retry::spawn(strategy, || async move {
            self.send_once(body).await.map_err(|e| {
                if e.is_transient() {
                    warn!(error = %e, "transient generation failure; retrying");
                    RetryError::transient(e)
                } else {
                    RetryError::permanent(e)
                }
            })
        })
        .await
    }
}
