use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use test_utils::{
    builder::TestBuilder,
    context::TestContext,
    fake::{FakeBot, FakeOperation},
    fixture::{self, permission},
};
use tower::ServiceExt;

use crate::server::{router::router, state::AppState};

mod guild;
mod session;

const TOKEN: &str = "TOKEN";
const GUILD_ID: u64 = 100000000000000001;
const SECOND_GUILD_ID: u64 = 100000000000000002;
const GENERAL_ID: u64 = 200000000000000001;
const ANNOUNCEMENTS_ID: u64 = 200000000000000002;
const VOICE_ID: u64 = 200000000000000003;

/// Bot in two guilds; only the first lets it create invites.
fn default_bot() -> FakeBot {
    FakeBot::builder(900000000000000001, "Moonbot")
        .guild(
            fixture::guild(GUILD_ID, "Moon Base"),
            vec![
                fixture::text_channel(GENERAL_ID, "general", permission::SEND_AND_INVITE),
                fixture::text_channel(ANNOUNCEMENTS_ID, "announcements", permission::READ),
                fixture::voice_channel(VOICE_ID, "lounge", permission::SEND),
            ],
        )
        .guild(fixture::guild(SECOND_GUILD_ID, "Sun Base"), vec![])
        .build()
}

/// Test context with `default_bot` registered under `TOKEN`, and the API router over it.
fn setup() -> (TestContext, Router) {
    let test = TestBuilder::new().with_bot(TOKEN, default_bot()).build();
    let app = router().with_state(AppState::new(test.connector()));

    (test, app)
}

/// Sends a request through the router and returns the status and JSON body.
async fn request(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}

/// Sends a raw JSON-typed body, for payloads `serde_json::Value` cannot represent.
async fn post_raw(app: &Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    request(app, Method::GET, uri, None).await
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    request(app, Method::POST, uri, Some(body)).await
}

/// Logs `TOKEN` in and returns the session id.
async fn login(app: &Router) -> String {
    let (status, body) = post(app, "/api/login", json!({ "token": TOKEN })).await;
    assert_eq!(status, StatusCode::OK);

    body["sessionId"].as_str().unwrap().to_string()
}
