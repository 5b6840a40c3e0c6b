pub mod chat;
pub mod health_route;
pub mod index_route;
pub mod news_route;
