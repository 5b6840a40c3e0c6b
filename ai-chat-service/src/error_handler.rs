//! Unified error handling for `ai-chat-service`.
//!
//! A single completion call fails in exactly one of three ways, modeled by
//! [`CompletionError`]. The boundary layer pattern-matches on the variant to
//! pick an HTTP status (408 for `Timeout`, 500 otherwise) instead of
//! inspecting error strings.

use reqwest::StatusCode;
use thiserror::Error;

/// Unified result alias for the crate.
pub type Result<T> = std::result::Result<T, CompletionError>;

/// Failure classes for a single chat-completion invocation.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum CompletionError {
    /// The call did not complete within the configured timeout.
    #[error("completion call timed out")]
    Timeout,

    /// The completion service answered with a non-success HTTP status.
    /// Carries the raw response body so the caller can surface it.
    #[error("completion service returned {status}: {body}")]
    Upstream {
        /// Numeric HTTP status code from the upstream service.
        status: StatusCode,
        /// Raw response body text, untrimmed.
        body: String,
    },

    /// Everything else: missing endpoint/key configuration, transport
    /// failure, or an undecodable response body.
    #[error("completion service unavailable: {0}")]
    Unavailable(String),
}

impl From<reqwest::Error> for CompletionError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            CompletionError::Timeout
        } else {
            CompletionError::Unavailable(err.to_string())
        }
    }
}

/// Trims a response body to a short single-line snippet for log fields.
pub fn make_snippet(body: &str) -> String {
    const MAX_CHARS: usize = 200;

    let flat = body.trim().replace(['\n', '\r'], " ");
    if flat.chars().count() <= MAX_CHARS {
        flat
    } else {
        let mut s: String = flat.chars().take(MAX_CHARS).collect();
        s.push('…');
        s
    }
}
