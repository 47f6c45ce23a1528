//! Provider clients.

pub mod ollama_chat_service;
