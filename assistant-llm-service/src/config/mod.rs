//! Configuration types for the assistant LLM service.

pub mod default_config;
pub mod llm_model_config;
pub mod llm_provider;
