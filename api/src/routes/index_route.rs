//! GET / — landing page, embedded at compile time.

use axum::response::Html;

/// Handler: GET /
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}
