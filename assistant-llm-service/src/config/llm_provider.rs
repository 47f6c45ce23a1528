/// Represents the backend used for large language model inference.
///
/// The support chat talks to a locally hosted Ollama runtime only. Adding a
/// remote provider in the future (e.g., an OpenAI-compatible API) is done by
/// extending this enum and adding a matching service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlmProvider {
    /// Local Ollama runtime for on-device inference.
    Ollama,
}
