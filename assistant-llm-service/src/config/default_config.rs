//! Default LLM config loaded from environment variables.
//!
//! This module provides the convenience constructor for the single chat
//! profile the support assistant uses. Defaults match the observed production
//! behavior (temperature 0.8, top_p 0.9, 500 output tokens, non-streaming);
//! every knob can be overridden through env.
//!
//! # Environment variables
//!
//! - `OLLAMA_URL` or `OLLAMA_PORT` = endpoint (defaults to
//!   `http://localhost:11434`)
//! - `OLLAMA_MODEL`      = chat model (defaults to `llama3.2`)
//! - `LLM_MAX_TOKENS`    = optional max output tokens (u32, default 500)
//! - `LLM_TEMPERATURE`   = optional sampling temperature (f32, default 0.8)
//! - `LLM_TOP_P`         = optional nucleus sampling cutoff (f32, default 0.9)
//! - `LLM_TIMEOUT_SECS`  = optional request timeout (u64, default 30)

use crate::{
    config::{llm_model_config::LlmModelConfig, llm_provider::LlmProvider},
    error_handler::{
        ConfigError, LlmError, env_opt_f32, env_opt_u32, env_opt_u64, validate_http_endpoint,
        validate_range_f32,
    },
};

const DEFAULT_ENDPOINT: &str = "http://localhost:11434";
const DEFAULT_MODEL: &str = "llama3.2";
const DEFAULT_MAX_TOKENS: u32 = 500;
const DEFAULT_TEMPERATURE: f32 = 0.8;
const DEFAULT_TOP_P: f32 = 0.9;
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Resolves the Ollama endpoint from environment.
///
/// Precedence:
/// 1. `OLLAMA_URL` if present and non-empty
/// 2. `OLLAMA_PORT` → `http://localhost:{port}`
/// 3. `http://localhost:11434`
///
/// # Errors
///
/// - [`ConfigError::InvalidNumber`] if `OLLAMA_PORT` is invalid
fn ollama_endpoint() -> Result<String, LlmError> {
    if let Ok(url) = std::env::var("OLLAMA_URL") {
        if !url.trim().is_empty() {
            return Ok(url);
        }
    }
    if let Ok(port) = std::env::var("OLLAMA_PORT") {
        if !port.trim().is_empty() {
            let _ = port
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidNumber {
                    var: "OLLAMA_PORT",
                    reason: "expected u16 (1..=65535)",
                })?;
            return Ok(format!("http://localhost:{port}"));
        }
    }
    Ok(DEFAULT_ENDPOINT.to_string())
}

/// Constructs the config for the support-chat Ollama model.
///
/// # Errors
///
/// Returns [`LlmError::Config`] when an env override is present but invalid
/// (bad number, out-of-range sampling parameter, malformed endpoint).
pub fn config_ollama_chat() -> Result<LlmModelConfig, LlmError> {
    let endpoint = ollama_endpoint()?;
    validate_http_endpoint("OLLAMA_URL", &endpoint)?;

    let model = std::env::var("OLLAMA_MODEL")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());

    let max_tokens = env_opt_u32("LLM_MAX_TOKENS")?.unwrap_or(DEFAULT_MAX_TOKENS);
    let temperature = env_opt_f32("LLM_TEMPERATURE")?.unwrap_or(DEFAULT_TEMPERATURE);
    let top_p = env_opt_f32("LLM_TOP_P")?.unwrap_or(DEFAULT_TOP_P);
    let timeout_secs = env_opt_u64("LLM_TIMEOUT_SECS")?.unwrap_or(DEFAULT_TIMEOUT_SECS);

    validate_range_f32("temperature", temperature, 0.0, 2.0)?;
    validate_range_f32("top_p", top_p, 0.0, 1.0)?;

    Ok(LlmModelConfig {
        provider: LlmProvider::Ollama,
        model,
        endpoint,
        max_tokens: Some(max_tokens),
        temperature: Some(temperature),
        top_p: Some(top_p),
        timeout_secs: Some(timeout_secs),
    })
}
