pub mod chat_model_config;
pub mod default_config;
