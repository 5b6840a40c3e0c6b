use ai_chat_service::{ChatModelConfig, ChatService, config::default_config::config_from_env};

use crate::error_handler::AppResult;

/// Shared state for all HTTP handlers.
///
/// Holds only immutable pieces: the completion client with its startup-time
/// config. Handlers are re-entrant and keep no per-request state here.
pub struct AppState {
    /// Client for the external completion service.
    pub chat: ChatService,
}

impl AppState {
    /// Load shared state from environment variables.
    ///
    /// A missing endpoint URL or API key is *not* an error here; it surfaces
    /// when the first chat request reaches the completion client.
    pub fn from_env() -> AppResult<Self> {
        Self::with_config(config_from_env())
    }

    /// Build state around an explicit config (dependency injection; also the
    /// entry point for integration tests).
    pub fn with_config(cfg: ChatModelConfig) -> AppResult<Self> {
        Ok(Self {
            chat: ChatService::new(cfg)?,
        })
    }
}
