use assistant_llm_service::config::default_config::config_ollama_chat;
use assistant_llm_service::config::llm_model_config::LlmModelConfig;
use assistant_llm_service::health_service::HealthService;
use assistant_llm_service::response_generator::ResponseGenerator;

use crate::error_handler::AppError;

/// Shared state for all HTTP handlers.
pub struct AppState {
    /// Produces grounded assistant replies (never fails at its boundary).
    pub generator: ResponseGenerator,
    /// Probes the Ollama endpoint for the readiness route.
    pub health: HealthService,
    /// Configuration of the chat model, kept for health probes.
    pub llm_config: LlmModelConfig,
}

impl AppState {
    /// Load shared state from environment variables.
    ///
    /// # Errors
    /// Returns [`AppError::Llm`] when the LLM config is invalid or the chat
    /// client cannot be constructed.
    pub fn from_env() -> Result<Self, AppError> {
        let llm_config = config_ollama_chat()?;
        let generator = ResponseGenerator::from_config(llm_config.clone())?;
        let health = HealthService::new(Some(10))?;

        Ok(Self {
            generator,
            health,
            llm_config,
        })
    }
}
