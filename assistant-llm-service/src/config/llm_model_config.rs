use crate::config::llm_provider::LlmProvider;

/// Configuration for an LLM model invocation.
///
/// # Examples
///
/// ```
/// use assistant_llm_service::config::llm_model_config::LlmModelConfig;
/// use assistant_llm_service::config::llm_provider::LlmProvider;
///
/// let cfg = LlmModelConfig {
///     provider: LlmProvider::Ollama,
///     model: "llama3.2".to_string(),
///     endpoint: "http://localhost:11434".to_string(),
///     max_tokens: Some(500),
///     temperature: Some(0.8),
///     top_p: Some(0.9),
///     timeout_secs: Some(30),
/// };
/// ```
#[derive(Debug, Clone)]
pub struct LlmModelConfig {
    /// The LLM provider/backend.
    pub provider: LlmProvider,

    /// Model identifier string (e.g., `"llama3.2"`).
    pub model: String,

    /// Inference endpoint (local server URL).
    pub endpoint: String,

    /// Maximum number of tokens to generate.
    pub max_tokens: Option<u32>,

    /// Sampling temperature (controls creativity).
    pub temperature: Option<f32>,

    /// Nucleus sampling parameter.
    pub top_p: Option<f32>,

    /// Request timeout (in seconds).
    pub timeout_secs: Option<u64>,
}
