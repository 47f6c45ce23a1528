//! Grounded response generation for the support chat.
//!
//! [`ResponseGenerator`] is the single conversational transform of the
//! backend: it embeds the customer's message into a two-entry conversation
//! (style guide + knowledge document as the system instruction, then the user
//! message unmodified), performs one non-streaming call to the Ollama chat
//! endpoint, and returns either the generated text or a fixed fallback
//! string. Every failure is absorbed here; the caller always receives a
//! plain string and never sees a technical error.

use tracing::{error, instrument, warn};

use crate::config::llm_model_config::LlmModelConfig;
use crate::error_handler::LlmError;
use crate::knowledge::{COMPANY_KNOWLEDGE, STYLE_GUIDE};
use crate::services::ollama_chat_service::{ChatMessage, OllamaChatError, OllamaChatService};

/// Returned when the endpoint answered but produced no usable text.
pub const EMPTY_REPLY_FALLBACK: &str =
    "I'm sorry, I couldn't generate a response. Please try again.";

/// Returned when the generation endpoint refused the connection.
pub const OFFLINE_FALLBACK: &str = "I'm currently offline. Please make sure Ollama is running and try again.\n\nIf the issue persists, please contact our office:\n• Phone: +1-800-TRAVEL-NOW\n• Email: bookings@globalwanderlust.com\n• Office Hours: Mon-Fri 9 AM - 7 PM, Sat 10 AM - 4 PM";

/// Returned on any other failure (timeout, bad status, malformed response).
pub const GENERIC_FALLBACK: &str = "I'm having trouble processing your request right now.\n\nPlease try again in a moment, or contact us directly:\n• Phone: +1-800-TRAVEL-NOW\n• Email: bookings@globalwanderlust.com\n\nOur travel experts are ready to help you plan your dream vacation!";

/// Produces assistant replies grounded in the company knowledge base.
///
/// The style guide and knowledge document are injected at construction and
/// concatenated once into the system instruction; no state is retained
/// between calls, so concurrent invocations are independent.
pub struct ResponseGenerator {
    service: OllamaChatService,
    system_instruction: String,
}

impl ResponseGenerator {
    /// Creates a generator around an existing chat service and the given
    /// grounding documents.
    pub fn new(service: OllamaChatService, style_guide: &str, knowledge: &str) -> Self {
        Self {
            service,
            system_instruction: format!("{style_guide} {knowledge}"),
        }
    }

    /// Creates a generator for the given model config using the built-in
    /// company documents.
    ///
    /// # Errors
    /// Returns [`LlmError::Chat`] if the chat service cannot be constructed
    /// (wrong provider, invalid endpoint).
    pub fn from_config(cfg: LlmModelConfig) -> Result<Self, LlmError> {
        let service = OllamaChatService::new(cfg)?;
        Ok(Self::new(service, STYLE_GUIDE, COMPANY_KNOWLEDGE))
    }

    /// Generates a reply for a non-empty customer message.
    ///
    /// Never fails: every error path resolves to one of the fixed fallback
    /// strings, so the conversational surface never shows a technical error.
    /// Exactly one outbound call is made per invocation.
    #[instrument(skip_all)]
    pub async fn generate_reply(&self, message: &str) -> String {
        let conversation = [
            ChatMessage::system(&self.system_instruction),
            ChatMessage::user(message),
        ];

        match self.service.chat(&conversation).await {
            Ok(completion) => match completion.message {
                Some(m) if !m.content.is_empty() => m.content,
                _ => {
                    warn!("chat completion arrived without content");
                    EMPTY_REPLY_FALLBACK.to_string()
                }
            },
            Err(err @ OllamaChatError::Unreachable { .. }) => {
                error!(%err, "generation endpoint unreachable");
                OFFLINE_FALLBACK.to_string()
            }
            Err(err) => {
                error!(%err, "chat completion failed");
                GENERIC_FALLBACK.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::llm_provider::LlmProvider;

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::mpsc;

    fn test_cfg(endpoint: String) -> LlmModelConfig {
        LlmModelConfig {
            provider: LlmProvider::Ollama,
            model: "llama3.2".to_string(),
            endpoint,
            max_tokens: Some(500),
            temperature: Some(0.8),
            top_p: Some(0.9),
            timeout_secs: Some(5),
        }
    }

    fn generator(endpoint: String) -> ResponseGenerator {
        let service = OllamaChatService::new(test_cfg(endpoint)).unwrap();
        ResponseGenerator::new(service, STYLE_GUIDE, COMPANY_KNOWLEDGE)
    }

    /// True once the buffered bytes hold the full request (headers plus
    /// `content-length` body).
    fn request_complete(raw: &[u8]) -> bool {
        let Some(pos) = raw.windows(4).position(|w| w == b"\r\n\r\n") else {
            return false;
        };
        let head = String::from_utf8_lossy(&raw[..pos]);
        let body_len = head
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                if name.eq_ignore_ascii_case("content-length") {
                    value.trim().parse::<usize>().ok()
                } else {
                    None
                }
            })
            .unwrap_or(0);
        raw.len() >= pos + 4 + body_len
    }

    /// Serves exactly one canned HTTP response on an ephemeral port and
    /// forwards the raw request it received.
    async fn spawn_endpoint(
        status_line: &'static str,
        body: &'static str,
    ) -> (String, mpsc::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = mpsc::channel(1);

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut raw = Vec::new();
            let mut buf = [0u8; 16 * 1024];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                raw.extend_from_slice(&buf[..n]);
                if request_complete(&raw) {
                    break;
                }
            }
            let _ = tx.send(String::from_utf8_lossy(&raw).to_string()).await;

            let response = format!(
                "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });

        (format!("http://{addr}"), rx)
    }

    /// An endpoint that is guaranteed to refuse connections: bind an
    /// ephemeral port, then free it again.
    async fn refused_endpoint() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn returns_model_content_verbatim() {
        let (endpoint, _rx) = spawn_endpoint(
            "200 OK",
            r#"{"message":{"role":"assistant","content":"Hello traveler!"},"done":true}"#,
        )
        .await;

        let reply = generator(endpoint).generate_reply("Hi there").await;
        assert_eq!(reply, "Hello traveler!");
    }

    #[tokio::test]
    async fn placeholder_when_message_is_missing() {
        let (endpoint, _rx) = spawn_endpoint("200 OK", r#"{"done":true}"#).await;

        let reply = generator(endpoint).generate_reply("Hi there").await;
        assert_eq!(reply, EMPTY_REPLY_FALLBACK);
    }

    #[tokio::test]
    async fn placeholder_when_content_is_empty() {
        let (endpoint, _rx) = spawn_endpoint(
            "200 OK",
            r#"{"message":{"role":"assistant","content":""},"done":true}"#,
        )
        .await;

        let reply = generator(endpoint).generate_reply("Hi there").await;
        assert_eq!(reply, EMPTY_REPLY_FALLBACK);
    }

    #[tokio::test]
    async fn offline_fallback_when_connection_refused() {
        let endpoint = refused_endpoint().await;

        let reply = generator(endpoint).generate_reply("Hi there").await;
        assert_eq!(reply, OFFLINE_FALLBACK);
        assert!(reply.contains("currently offline"));
        assert!(reply.contains("+1-800-TRAVEL-NOW"));
        assert!(reply.contains("bookings@globalwanderlust.com"));
    }

    #[tokio::test]
    async fn generic_fallback_on_server_error() {
        let (endpoint, _rx) =
            spawn_endpoint("500 Internal Server Error", r#"{"error":"boom"}"#).await;

        let reply = generator(endpoint).generate_reply("Hi there").await;
        assert_eq!(reply, GENERIC_FALLBACK);
        assert!(reply.contains("trouble processing"));
        assert!(reply.contains("+1-800-TRAVEL-NOW"));
        assert!(reply.contains("bookings@globalwanderlust.com"));
    }

    #[tokio::test]
    async fn generic_fallback_when_endpoint_hangs() {
        // Accept the connection but never answer, so the client deadline
        // expires instead of the connection being refused.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (_socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(std::time::Duration::from_secs(30)).await;
        });

        let mut cfg = test_cfg(format!("http://{addr}"));
        cfg.timeout_secs = Some(1);
        let service = OllamaChatService::new(cfg).unwrap();
        let generator = ResponseGenerator::new(service, STYLE_GUIDE, COMPANY_KNOWLEDGE);

        let reply = generator.generate_reply("Hi there").await;
        assert_eq!(reply, GENERIC_FALLBACK);
        assert_ne!(reply, OFFLINE_FALLBACK);
    }

    #[tokio::test]
    async fn generic_fallback_on_malformed_body() {
        let (endpoint, _rx) = spawn_endpoint("200 OK", "definitely not json").await;

        let reply = generator(endpoint).generate_reply("Hi there").await;
        assert_eq!(reply, GENERIC_FALLBACK);
    }

    #[tokio::test]
    async fn outbound_request_has_fixed_prompt_shape() {
        let (endpoint, mut rx) = spawn_endpoint(
            "200 OK",
            r#"{"message":{"role":"assistant","content":"ok"},"done":true}"#,
        )
        .await;

        let reply = generator(endpoint)
            .generate_reply("What cruise packages do you offer?")
            .await;
        assert_eq!(reply, "ok");

        let raw = rx.recv().await.unwrap();
        let (head, body) = raw.split_once("\r\n\r\n").unwrap();
        assert!(head.starts_with("POST /api/chat"));

        let v: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(v["model"], "llama3.2");
        assert_eq!(v["stream"], serde_json::Value::Bool(false));

        let messages = v["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0]["role"], "system");
        assert_eq!(messages[1]["role"], "user");
        assert_eq!(messages[1]["content"], "What cruise packages do you offer?");

        // System instruction carries both grounding documents verbatim.
        let system = messages[0]["content"].as_str().unwrap();
        assert!(system.contains("customer support assistant for Global Wander"));
        assert!(system.contains("Company Name: Global Wander"));
        assert!(system.contains("+1-800-TRAVEL-NOW"));

        let options = &v["options"];
        assert!((options["temperature"].as_f64().unwrap() - 0.8).abs() < 1e-6);
        assert!((options["top_p"].as_f64().unwrap() - 0.9).abs() < 1e-6);
        assert_eq!(options["max_tokens"], 500);
        assert_eq!(options["num_predict"], 500);
    }
}
