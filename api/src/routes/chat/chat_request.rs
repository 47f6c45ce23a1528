use serde::{Deserialize, Serialize};

/// Request payload for /api/chat.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// Free-text customer message. Must be non-empty.
    pub message: String,
}

/// Response payload for /api/chat.
#[derive(Debug, Serialize)]
pub struct ChatReply {
    /// Assistant text: either model-generated or a fixed fallback string.
    pub response: String,
}
