use ai_chat_service::CompletionError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Public application error type.
///
/// User-facing messages are kept in the product language (Chinese), matching
/// what the frontend displays verbatim.
#[derive(Debug, Error)]
pub enum AppError {
    // --- IO / network / server ---
    #[error("failed to bind listener")]
    Bind(#[source] std::io::Error),

    #[error("server error")]
    Server(#[source] std::io::Error),

    // --- Request validation ---
    #[error("消息不能为空")]
    EmptyMessage,

    // --- Upstream completion call ---
    #[error("AI服务调用超时，请稍后重试")]
    CompletionTimeout,

    #[error("AI服务调用失败: {0}")]
    CompletionFailed(String),

    /// Catch-all for missing configuration, transport failures, and
    /// undecodable upstream bodies; every failure path here is typed, so
    /// there is no separate "unforeseen exception" class.
    #[error("AI服务暂时不可用: {0}")]
    CompletionUnavailable(String),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            // 4xx
            AppError::EmptyMessage => StatusCode::BAD_REQUEST,
            AppError::CompletionTimeout => StatusCode::REQUEST_TIMEOUT,

            // 5xx
            AppError::CompletionFailed(_)
            | AppError::CompletionUnavailable(_)
            | AppError::Bind(_)
            | AppError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AppError::Bind(_) => "BIND_ERROR",
            AppError::Server(_) => "SERVER_ERROR",
            AppError::EmptyMessage => "BAD_REQUEST",
            AppError::CompletionTimeout => "UPSTREAM_TIMEOUT",
            AppError::CompletionFailed(_) => "UPSTREAM_FAILED",
            AppError::CompletionUnavailable(_) => "SERVICE_UNAVAILABLE",
        }
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.error_code(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Handy result alias used across handlers.
pub type AppResult<T> = Result<T, AppError>;

/// Map completion-client failures onto boundary status codes.
impl From<CompletionError> for AppError {
    fn from(err: CompletionError) -> Self {
        match err {
            CompletionError::Timeout => AppError::CompletionTimeout,
            CompletionError::Upstream { body, .. } => AppError::CompletionFailed(body),
            CompletionError::Unavailable(msg) => AppError::CompletionUnavailable(msg),
            // `CompletionError` is #[non_exhaustive]; no other variants exist today.
            other => AppError::CompletionUnavailable(other.to_string()),
        }
    }
}
