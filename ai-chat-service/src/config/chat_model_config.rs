/// Configuration for the external chat-completion endpoint.
///
/// Resolved once at process start (see [`crate::config::default_config`])
/// and passed by value into [`crate::ChatService`]; never mutated afterwards.
///
/// `endpoint` and `api_key` are optional on purpose: the original service
/// contract is that a missing URL or key is not a startup error — it surfaces
/// as a failed call the first time a completion is attempted.
#[derive(Debug, Clone)]
pub struct ChatModelConfig {
    /// Full URL of the chat-completion endpoint.
    pub endpoint: Option<String>,

    /// Bearer token for the `Authorization` header.
    pub api_key: Option<String>,

    /// Model identifier string (e.g., `"qwen-plus"`).
    pub model: String,

    /// Sampling temperature.
    pub temperature: f32,

    /// Maximum number of tokens to generate.
    pub max_tokens: u32,

    /// Nucleus sampling parameter.
    pub top_p: f32,

    /// End-to-end request timeout in seconds, covering connect, send and
    /// body read of the single outbound call.
    pub timeout_secs: f64,
}

impl Default for ChatModelConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            api_key: None,
            model: "qwen-plus".to_string(),
            temperature: 0.7,
            max_tokens: 800,
            top_p: 0.9,
            timeout_secs: 30.0,
        }
    }
}
