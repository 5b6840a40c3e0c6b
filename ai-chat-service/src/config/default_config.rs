//! Default chat config loaded from environment variables.
//!
//! # Environment variables
//!
//! - `AI_API_URL`      — chat-completion endpoint URL (checked at call time)
//! - `AI_API_KEY`      — bearer token (checked at call time)
//! - `AI_MODEL`        — model identifier (default `qwen-plus`)
//! - `AI_TEMPERATURE`  — sampling temperature (default `0.7`)
//! - `AI_MAX_TOKENS`   — generation cap (default `800`)
//! - `AI_TOP_P`        — nucleus sampling cutoff (default `0.9`)
//! - `AI_TIMEOUT_SECS` — request timeout in seconds (default `30.0`)
//!
//! Loading never fails: unset or unparsable numeric values fall back to the
//! defaults above, and a missing URL/key is carried as `None` until the first
//! completion call reports it.

use std::str::FromStr;

use crate::config::chat_model_config::ChatModelConfig;

/// Builds a [`ChatModelConfig`] strictly from the environment.
pub fn config_from_env() -> ChatModelConfig {
    let defaults = ChatModelConfig::default();

    ChatModelConfig {
        endpoint: env_opt("AI_API_URL"),
        api_key: env_opt("AI_API_KEY"),
        model: env_opt("AI_MODEL").unwrap_or(defaults.model),
        temperature: env_parse("AI_TEMPERATURE", defaults.temperature),
        max_tokens: env_parse("AI_MAX_TOKENS", defaults.max_tokens),
        top_p: env_parse("AI_TOP_P", defaults.top_p),
        timeout_secs: env_parse("AI_TIMEOUT_SECS", defaults.timeout_secs),
    }
}

/// Reads an optional, non-empty environment variable.
fn env_opt(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Parses a numeric variable, falling back to `default` when unset or
/// unparsable.
fn env_parse<T: FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}
