//! Lightweight Ollama chat service for non-streaming conversation turns.
//!
//! This module implements a thin client for the local Ollama API:
//! - `POST {endpoint}/api/chat` — synchronous chat completion (`stream=false`)
//!
//! It uses the universal configuration [`LlmModelConfig`] and ensures
//! that the selected provider is [`LlmProvider::Ollama`].
//!
//! Failures are classified structurally (never by message substrings):
//! [`reqwest::Error::is_connect`] marks the endpoint as unreachable,
//! [`reqwest::Error::is_timeout`] marks a missed deadline, and everything
//! else stays a generic transport/protocol error. The response generator
//! relies on this split to pick the right fallback message.

use std::time::Duration;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::config::llm_model_config::LlmModelConfig;
use crate::config::llm_provider::LlmProvider;
use crate::error_handler::make_snippet;

/// Errors produced by [`OllamaChatService`].
#[derive(Debug, Error)]
pub enum OllamaChatError {
    /// The provider in the config is not Ollama.
    #[error("[Assistant LLM] invalid provider: expected Ollama, got different provider")]
    InvalidProvider,

    /// Invalid endpoint (empty or missing http/https).
    #[error("[Assistant LLM] invalid Ollama endpoint: {0}")]
    InvalidEndpoint(String),

    /// The endpoint refused the connection or could not be reached.
    #[error("[Assistant LLM] endpoint unreachable: {url}: {source}")]
    Unreachable {
        /// Request URL.
        url: String,
        /// Underlying connect error.
        source: reqwest::Error,
    },

    /// The request exceeded the configured deadline.
    #[error("[Assistant LLM] request to {url} timed out: {source}")]
    Timeout {
        /// Request URL.
        url: String,
        /// Underlying timeout error.
        source: reqwest::Error,
    },

    /// Any other transport/HTTP client error.
    #[error("[Assistant LLM] transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-successful HTTP status from upstream.
    #[error("[Assistant LLM] unexpected HTTP status {status} from {url}: {snippet}")]
    HttpStatus {
        /// Numeric HTTP status code.
        status: StatusCode,
        /// Request URL.
        url: String,
        /// Short snippet of the response body.
        snippet: String,
    },

    /// Unexpected/invalid JSON response.
    #[error("[Assistant LLM] failed to decode response: {0}")]
    Decode(String),
}

/// Result alias for Ollama chat operations.
pub type Result<T> = std::result::Result<T, OllamaChatError>;

/// One entry of a chat conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// `"system"`, `"user"`, or `"assistant"`.
    pub role: String,
    /// Message text.
    pub content: String,
}

impl ChatMessage {
    /// Builds a system-role entry.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    /// Builds a user-role entry.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Response body for `/api/chat` (non-streaming).
///
/// Minimal shape: the generated turn is in `message`; `done` is `true` when
/// the reply arrived as one unit.
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    /// Generated assistant turn. Absent when the model produced nothing.
    pub message: Option<ChatMessage>,
    /// Completion flag reported by Ollama.
    #[serde(default)]
    pub done: bool,
}

/// Thin client for the Ollama chat API.
///
/// Initialized with a full [`LlmModelConfig`]. Reuses an HTTP client with a
/// configurable timeout. One outbound call per [`OllamaChatService::chat`]
/// invocation; no state is retained between calls.
#[derive(Debug)]
pub struct OllamaChatService {
    client: reqwest::Client,
    cfg: LlmModelConfig,
    url_chat: String,
}

impl OllamaChatService {
    /// Creates a new [`OllamaChatService`] from the given config.
    ///
    /// # Errors
    /// - [`OllamaChatError::InvalidProvider`] if `cfg.provider` is not `Ollama`
    /// - [`OllamaChatError::InvalidEndpoint`] if `cfg.endpoint` is invalid
    /// - [`OllamaChatError::Transport`] if the HTTP client cannot be built
    pub fn new(cfg: LlmModelConfig) -> Result<Self> {
        if cfg.provider != LlmProvider::Ollama {
            return Err(OllamaChatError::InvalidProvider);
        }

        let endpoint = cfg.endpoint.trim();
        if endpoint.is_empty()
            || !(endpoint.starts_with("http://") || endpoint.starts_with("https://"))
        {
            return Err(OllamaChatError::InvalidEndpoint(cfg.endpoint));
        }

        let timeout = cfg
            .timeout_secs
            .map(Duration::from_secs)
            .unwrap_or_else(|| Duration::from_secs(30));

        let client = reqwest::Client::builder().timeout(timeout).build()?;

        let base = endpoint.trim_end_matches('/').to_string();
        let url_chat = format!("{}/api/chat", base);

        Ok(Self {
            client,
            cfg,
            url_chat,
        })
    }

    /// Performs a **non-streaming** chat request via `/api/chat`.
    ///
    /// Mapped options:
    /// - `model`               ← `self.cfg.model`
    /// - `messages`            ← argument, sent unmodified
    /// - `temperature`/`top_p` ← `self.cfg`
    /// - `max_tokens`/`num_predict` ← `self.cfg.max_tokens` (Ollama reads
    ///   `num_predict`; `max_tokens` is kept on the wire for parity with the
    ///   observed request shape)
    ///
    /// # Errors
    /// - [`OllamaChatError::Unreachable`] when the connection is refused
    /// - [`OllamaChatError::Timeout`] when the deadline is exceeded
    /// - [`OllamaChatError::HttpStatus`] for non-2xx responses
    /// - [`OllamaChatError::Transport`] for other client errors
    /// - [`OllamaChatError::Decode`] if the response cannot be parsed
    #[instrument(skip_all, fields(model = %self.cfg.model))]
    pub async fn chat(&self, messages: &[ChatMessage]) -> Result<ChatCompletionResponse> {
        let body = ChatCompletionRequest::from_cfg(&self.cfg, messages);

        debug!("POST {}", self.url_chat);
        let resp = self
            .client
            .post(&self.url_chat)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.classify_transport(e))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let url = self.url_chat.clone();
            let text = resp.text().await.unwrap_or_default();
            return Err(OllamaChatError::HttpStatus {
                status,
                url,
                snippet: make_snippet(&text),
            });
        }

        resp.json::<ChatCompletionResponse>().await.map_err(|e| {
            OllamaChatError::Decode(format!("serde error: {e}; ensure `stream=false` is used"))
        })
    }

    /// Splits transport failures into unreachable / timeout / other using the
    /// structured error kind reported by the HTTP layer.
    fn classify_transport(&self, err: reqwest::Error) -> OllamaChatError {
        if err.is_connect() {
            OllamaChatError::Unreachable {
                url: self.url_chat.clone(),
                source: err,
            }
        } else if err.is_timeout() {
            OllamaChatError::Timeout {
                url: self.url_chat.clone(),
                source: err,
            }
        } else {
            OllamaChatError::Transport(err)
        }
    }
}

/// Request body for `/api/chat` (non-streaming).
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    stream: bool,
    options: ChatOptions,
}

impl<'a> ChatCompletionRequest<'a> {
    /// Builds a request from config and conversation entries.
    fn from_cfg(cfg: &'a LlmModelConfig, messages: &'a [ChatMessage]) -> Self {
        Self {
            model: &cfg.model,
            messages,
            stream: false,
            options: ChatOptions {
                temperature: cfg.temperature,
                top_p: cfg.top_p,
                max_tokens: cfg.max_tokens,
                num_predict: cfg.max_tokens,
            },
        }
    }
}

/// Subset of Ollama `options` used by the support chat.
#[derive(Debug, Default, Serialize)]
struct ChatOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    num_predict: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg(endpoint: &str) -> LlmModelConfig {
        LlmModelConfig {
            provider: LlmProvider::Ollama,
            model: "llama3.2".to_string(),
            endpoint: endpoint.to_string(),
            max_tokens: Some(500),
            temperature: Some(0.8),
            top_p: Some(0.9),
            timeout_secs: Some(5),
        }
    }

    #[test]
    fn rejects_endpoint_without_scheme() {
        let err = OllamaChatService::new(cfg("localhost:11434")).unwrap_err();
        assert!(matches!(err, OllamaChatError::InvalidEndpoint(_)));
    }

    #[test]
    fn rejects_empty_endpoint() {
        let err = OllamaChatService::new(cfg("   ")).unwrap_err();
        assert!(matches!(err, OllamaChatError::InvalidEndpoint(_)));
    }

    #[test]
    fn chat_url_tolerates_trailing_slash() {
        let svc = OllamaChatService::new(cfg("http://localhost:11434/")).unwrap();
        assert_eq!(svc.url_chat, "http://localhost:11434/api/chat");
    }

    #[test]
    fn request_body_pins_stream_off_and_mirrors_sampling() {
        let config = cfg("http://localhost:11434");
        let messages = [
            ChatMessage::system("be helpful"),
            ChatMessage::user("hello"),
        ];
        let body = ChatCompletionRequest::from_cfg(&config, &messages);
        let v = serde_json::to_value(&body).unwrap();

        assert_eq!(v["stream"], serde_json::Value::Bool(false));
        assert_eq!(v["messages"].as_array().unwrap().len(), 2);
        assert_eq!(v["messages"][0]["role"], "system");
        assert_eq!(v["messages"][1]["role"], "user");
        assert_eq!(v["options"]["num_predict"], 500);
        assert_eq!(v["options"]["max_tokens"], 500);
    }

    #[test]
    fn response_decodes_with_and_without_message() {
        let with: ChatCompletionResponse = serde_json::from_str(
            r#"{"message":{"role":"assistant","content":"hi"},"done":true}"#,
        )
        .unwrap();
        assert_eq!(with.message.unwrap().content, "hi");
        assert!(with.done);

        let without: ChatCompletionResponse = serde_json::from_str(r#"{"done":true}"#).unwrap();
        assert!(without.message.is_none());
    }
}
