//! Route integration tests driven through `tower::ServiceExt::oneshot`,
//! with an in-process axum server standing in for the completion endpoint.

use std::{
    net::SocketAddr,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use ai_chat_service::ChatModelConfig;
use api::AppState;
use axum::{
    Router,
    body::Body,
    extract::State,
    http::{Request, StatusCode, header::CONTENT_TYPE},
    response::IntoResponse,
    routing::post,
};
use chrono::NaiveDateTime;
use serde_json::{Value, json};
use tower::ServiceExt;

/// What the mock completion endpoint should do with each request.
#[derive(Clone)]
enum UpstreamBehavior {
    /// Reply 200 with the given `choices[0].message.content`.
    Reply(&'static str),
    /// Sleep for the given duration before answering.
    Delay(Duration),
    /// Reply with a fixed error status and body.
    Fail(StatusCode, &'static str),
}

/// Shared view of everything the mock upstream observed.
#[derive(Clone, Default)]
struct UpstreamLog {
    hits: Arc<AtomicUsize>,
    last_auth: Arc<Mutex<Option<String>>>,
    last_body: Arc<Mutex<Option<Value>>>,
}

#[derive(Clone)]
struct UpstreamState {
    behavior: UpstreamBehavior,
    log: UpstreamLog,
}

async fn completions(
    State(state): State<UpstreamState>,
    headers: axum::http::HeaderMap,
    body: String,
) -> axum::response::Response {
    state.log.hits.fetch_add(1, Ordering::SeqCst);
    *state.log.last_auth.lock().unwrap() = headers
        .get("authorization")
        .and_then(|h| h.to_str().ok())
        .map(str::to_string);
    *state.log.last_body.lock().unwrap() = serde_json::from_str(&body).ok();

    match state.behavior {
        UpstreamBehavior::Reply(content) => {
            axum::Json(json!({"choices":[{"message":{"content": content}}]})).into_response()
        }
        UpstreamBehavior::Delay(d) => {
            tokio::time::sleep(d).await;
            axum::Json(json!({"choices":[{"message":{"content":"late"}}]})).into_response()
        }
        UpstreamBehavior::Fail(status, body) => (status, body).into_response(),
    }
}

/// Spawns a mock completion server on an ephemeral port.
async fn spawn_upstream(behavior: UpstreamBehavior) -> (SocketAddr, UpstreamLog) {
    let log = UpstreamLog::default();
    let router = Router::new()
        .route("/v1/chat/completions", post(completions))
        .with_state(UpstreamState {
            behavior,
            log: log.clone(),
        });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    (addr, log)
}

fn test_app(endpoint: Option<String>, timeout_secs: f64) -> Router {
    let cfg = ChatModelConfig {
        endpoint,
        api_key: Some("test-key".into()),
        timeout_secs,
        ..ChatModelConfig::default()
    };
    api::router(Arc::new(AppState::with_config(cfg).unwrap()))
}

fn chat_request(message: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/chat")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({ "message": message })).unwrap(),
        ))
        .unwrap()
}

async fn body_json(resp: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn whitespace_message_is_rejected_without_upstream_call() {
    let (addr, log) = spawn_upstream(UpstreamBehavior::Reply("unused")).await;
    let app = test_app(Some(format!("http://{addr}/v1/chat/completions")), 5.0);

    let resp = app.oneshot(chat_request("  ")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body = body_json(resp).await;
    assert_eq!(body["error"], "BAD_REQUEST");
    assert_eq!(log.hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn chat_returns_trimmed_reply_with_timestamp() {
    let (addr, log) = spawn_upstream(UpstreamBehavior::Reply(" Digital economy is... ")).await;
    let app = test_app(Some(format!("http://{addr}/v1/chat/completions")), 5.0);

    let resp = app
        .oneshot(chat_request("what is digital economy?"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["response"], "Digital economy is...");

    let ts = body["timestamp"].as_str().unwrap();
    assert!(
        NaiveDateTime::parse_from_str(ts, "%Y-%m-%d %H:%M:%S").is_ok(),
        "unexpected timestamp format: {ts}"
    );

    // Exactly one outbound call, bearer-authenticated, two conversation turns.
    assert_eq!(log.hits.load(Ordering::SeqCst), 1);
    assert_eq!(
        log.last_auth.lock().unwrap().as_deref(),
        Some("Bearer test-key")
    );

    let sent = log.last_body.lock().unwrap().clone().unwrap();
    assert_eq!(sent["model"], "qwen-plus");
    let messages = sent["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["role"], "system");
    assert_eq!(messages[1]["role"], "user");
    assert_eq!(messages[1]["content"], "what is digital economy?");
}

#[tokio::test]
async fn slow_upstream_maps_to_request_timeout() {
    let (addr, _log) = spawn_upstream(UpstreamBehavior::Delay(Duration::from_secs(2))).await;
    let app = test_app(Some(format!("http://{addr}/v1/chat/completions")), 0.2);

    let resp = app.oneshot(chat_request("hello")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::REQUEST_TIMEOUT);

    let body = body_json(resp).await;
    assert_eq!(body["error"], "UPSTREAM_TIMEOUT");
}

#[tokio::test]
async fn upstream_error_body_is_surfaced() {
    let (addr, _log) = spawn_upstream(UpstreamBehavior::Fail(
        StatusCode::BAD_GATEWAY,
        "model overloaded",
    ))
    .await;
    let app = test_app(Some(format!("http://{addr}/v1/chat/completions")), 5.0);

    let resp = app.oneshot(chat_request("hello")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(resp).await;
    assert_eq!(body["error"], "UPSTREAM_FAILED");
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .contains("model overloaded")
    );
}

#[tokio::test]
async fn missing_endpoint_surfaces_at_call_time() {
    // No URL configured: startup succeeds, the chat call reports it.
    let app = test_app(None, 5.0);

    let resp = app.oneshot(chat_request("hello")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(resp).await;
    assert_eq!(body["error"], "SERVICE_UNAVAILABLE");
}

#[tokio::test]
async fn news_list_is_stable_and_well_formed() {
    let app = test_app(None, 5.0);

    let first = body_json(
        app.clone()
            .oneshot(Request::get("/api/news").body(Body::empty()).unwrap())
            .await
            .unwrap(),
    )
    .await;
    let second = body_json(
        app.oneshot(Request::get("/api/news").body(Body::empty()).unwrap())
            .await
            .unwrap(),
    )
    .await;

    assert_eq!(first, second);

    let items = first.as_array().unwrap();
    assert_eq!(items.len(), 6);
    for item in items {
        assert!(!item["title"].as_str().unwrap().is_empty());
        assert!(!item["url"].as_str().unwrap().is_empty());
    }
}

#[tokio::test]
async fn health_reports_healthy_with_monotonic_timestamps() {
    let app = test_app(None, 5.0);

    let first = body_json(
        app.clone()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap(),
    )
    .await;
    let second = body_json(
        app.oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap(),
    )
    .await;

    assert_eq!(first["status"], "healthy");
    assert_eq!(second["status"], "healthy");

    let parse = |v: &Value| {
        NaiveDateTime::parse_from_str(v["timestamp"].as_str().unwrap(), "%Y-%m-%dT%H:%M:%S%.f")
            .unwrap()
    };
    assert!(parse(&first) <= parse(&second));
}

#[tokio::test]
async fn index_serves_landing_page() {
    let app = test_app(None, 5.0);

    let resp = app
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("<html"));
    assert!(html.contains("chatMessages"));
    // Pagination buttons must stay wired to the frontend's changePage().
    assert!(html.contains(r#"onclick="changePage(-1)""#));
    assert!(html.contains(r#"onclick="changePage(1)""#));
}
