use serde::{Deserialize, Serialize};

/// Request payload for /api/chat.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// Raw user message; must be non-empty after trimming.
    pub message: String,
}

/// Response payload for /api/chat.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    /// Model reply with surrounding whitespace removed.
    pub response: String,
    /// Server local time at response construction, `YYYY-MM-DD HH:MM:SS`.
    pub timestamp: String,
}
