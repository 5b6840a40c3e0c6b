//! Chat-completion client for the themed Q&A assistant.
//!
//! Minimal, non-streaming client around an OpenAI-compatible
//! `/chat/completions` endpoint. Every [`ChatService::ask`] call sends
//! exactly one POST with a two-turn conversation: the fixed advisory system
//! prompt followed by the user's message.
//!
//! The endpoint URL and API key are deliberately *not* validated at
//! construction time: a missing value is reported as
//! [`CompletionError::Unavailable`] when the first call is attempted, which
//! mirrors the original service contract.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::{
    config::chat_model_config::ChatModelConfig,
    error_handler::{CompletionError, Result, make_snippet},
};

/// Fixed system instruction establishing the assistant's persona and the
/// topical scope it is allowed to answer within.
const SYSTEM_PROMPT: &str = "你是一个专门解答习近平新时代中国特色社会主义思想相关问题的AI助手。
请基于习近平新时代中国特色社会主义思想的核心理念，围绕以下主题回答问题：
- 中国式现代化
- 数字经济发展
- 科技创新驱动
- 高质量发展
- 构建新发展格局
- 人民为中心的发展思想
- 绿色发展理念
- 文化自信
- 全面从严治党
- 人类命运共同体

请用简洁明了、通俗易懂的语言回答，体现理论联系实际的特点。";

/// Thin client for the chat-completion API.
///
/// Constructed once from a complete [`ChatModelConfig`]; internally keeps a
/// preconfigured `reqwest::Client` whose total timeout bounds each call end
/// to end. The service is cheap to share behind an `Arc` and fully
/// re-entrant: every invocation is an independent request with no shared
/// mutable state.
#[derive(Debug)]
pub struct ChatService {
    client: reqwest::Client,
    cfg: ChatModelConfig,
}

impl ChatService {
    /// Creates a new [`ChatService`] from the given config.
    ///
    /// # Errors
    /// [`CompletionError::Unavailable`] if the HTTP client cannot be built.
    pub fn new(cfg: ChatModelConfig) -> Result<Self> {
        // Non-finite or non-positive values would panic in from_secs_f64.
        let secs = if cfg.timeout_secs.is_finite() && cfg.timeout_secs > 0.0 {
            cfg.timeout_secs
        } else {
            ChatModelConfig::default().timeout_secs
        };

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs_f64(secs))
            .build()?;

        info!(
            model = %cfg.model,
            timeout_secs = secs,
            endpoint_configured = cfg.endpoint.is_some(),
            "ChatService initialized"
        );

        Ok(Self { client, cfg })
    }

    /// Performs a single non-streaming chat completion for `message`.
    ///
    /// Returns the content of the first choice with surrounding whitespace
    /// removed.
    ///
    /// # Errors
    /// - [`CompletionError::Unavailable`] if the endpoint or API key is not
    ///   configured, on transport failures, or when the response body does
    ///   not carry `choices[0].message.content`
    /// - [`CompletionError::Upstream`] for non-2xx responses, carrying the
    ///   raw body text
    /// - [`CompletionError::Timeout`] when the configured deadline elapses
    pub async fn ask(&self, message: &str) -> Result<String> {
        let endpoint = self.cfg.endpoint.as_deref().ok_or_else(|| {
            CompletionError::Unavailable("AI_API_URL is not configured".to_string())
        })?;
        let api_key = self.cfg.api_key.as_deref().ok_or_else(|| {
            CompletionError::Unavailable("AI_API_KEY is not configured".to_string())
        })?;

        let started = Instant::now();
        let body = ChatCompletionRequest::from_cfg(&self.cfg, message);

        debug!(
            model = %self.cfg.model,
            message_len = message.len(),
            "POST {endpoint}"
        );

        let resp = self
            .client
            .post(endpoint)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();

            error!(
                %status,
                snippet = %make_snippet(&body),
                model = %self.cfg.model,
                latency_ms = started.elapsed().as_millis(),
                "completion endpoint returned non-success status"
            );

            return Err(CompletionError::Upstream { status, body });
        }

        let out: ChatCompletionResponse = resp.json().await.map_err(|e| {
            error!(
                error = %e,
                model = %self.cfg.model,
                latency_ms = started.elapsed().as_millis(),
                "failed to decode completion response"
            );
            CompletionError::Unavailable(format!(
                "undecodable completion response: {e}; expected `choices[0].message.content`"
            ))
        })?;

        let content = out
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| {
                CompletionError::Unavailable("completion response contained no choices".to_string())
            })?;

        info!(
            model = %self.cfg.model,
            latency_ms = started.elapsed().as_millis(),
            "chat completion completed"
        );

        Ok(content.trim().to_string())
    }
}

/* ===========================================================================
HTTP payloads
======================================================================== */

/// Request body for the chat-completion endpoint (non-streaming).
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
    top_p: f32,
}

impl<'a> ChatCompletionRequest<'a> {
    /// Builds the two-turn conversation (system prompt + user message) with
    /// the generation parameters from config.
    fn from_cfg(cfg: &'a ChatModelConfig, message: &'a str) -> Self {
        Self {
            model: &cfg.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: message,
                },
            ],
            temperature: cfg.temperature,
            max_tokens: cfg.max_tokens,
            top_p: cfg.top_p,
        }
    }
}

/// One conversation turn.
#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

/// Minimal response shape; anything beyond `choices[0].message.content` is
/// ignored, and a body missing these fields is a decode failure.
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageOut,
}

#[derive(Debug, Deserialize)]
struct ChatMessageOut {
    content: String,
}
