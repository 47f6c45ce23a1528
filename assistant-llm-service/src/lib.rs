//! LLM service for the Global Wander support chat.
//!
//! The crate turns a free-text customer message into a grounded assistant
//! reply. It bundles:
//! - a thin non-streaming client for the local Ollama chat API
//!   ([`services::ollama_chat_service`]),
//! - the company knowledge document and style guide ([`knowledge`]),
//! - the [`response_generator::ResponseGenerator`] that builds the prompt,
//!   performs the single outbound call, and absorbs every failure into a
//!   fixed fallback string,
//! - health checks for the Ollama endpoint ([`health_service`]),
//! - unified error types ([`error_handler`]) and a library-scoped tracing
//!   layer ([`telemetry`]).

pub mod config;
pub mod error_handler;
pub mod health_service;
pub mod knowledge;
pub mod response_generator;
pub mod services;
pub mod telemetry;
