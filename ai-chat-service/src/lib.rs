//! Chat-completion client for the themed Q&A assistant.
//!
//! One service, one operation: [`ChatService::ask`] turns a single user
//! message into a model-generated reply via a single POST to an
//! OpenAI-compatible `/chat/completions` endpoint. Configuration is read
//! from the environment once at startup ([`config::default_config`]) and
//! stays immutable for the process lifetime.
//!
//! Failures are classified by [`error_handler::CompletionError`] so the HTTP
//! boundary can map them to status codes without string-matching.

pub mod chat_service;
pub mod config;
pub mod error_handler;

pub use chat_service::ChatService;
pub use config::chat_model_config::ChatModelConfig;
pub use error_handler::CompletionError;
