use super::*;

/// Tests logging in with a valid token.
///
/// Verifies the login response shape: a session id, the bot profile with a string id, and both
/// guilds with exactly one invite link.
///
/// Expected: 200 with two guilds and one non-null inviteURL
#[tokio::test]
async fn login_returns_profile_and_guilds() {
    let (_test, app) = setup();

    let (status, body) = post(&app, "/api/login", json!({ "token": TOKEN })).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["sessionId"].as_str().is_some());
    assert_eq!(body["user"]["id"], "900000000000000001");
    assert_eq!(body["user"]["username"], "Moonbot");
    assert!(body["user"]["avatarURL"].as_str().is_some());

    let guilds = body["guilds"].as_array().unwrap();
    assert_eq!(guilds.len(), 2);
    let invites: Vec<_> = guilds
        .iter()
        .filter(|guild| !guild["inviteURL"].is_null())
        .collect();
    assert_eq!(invites.len(), 1);
    assert_eq!(invites[0]["id"], GUILD_ID.to_string());
    assert_eq!(invites[0]["inviteURL"], "https://discord.gg/invite1");
    assert_eq!(invites[0]["memberCount"], 10);
}

/// Tests logging in with a rejected token.
///
/// Expected: 401 with "Invalid token or login failed"
#[tokio::test]
async fn login_with_bad_token_is_unauthorized() {
    let (_test, app) = setup();

    let (status, body) = post(&app, "/api/login", json!({ "token": "BAD" })).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "error": "Invalid token or login failed" }));
}

/// Tests logging in without a token.
///
/// Verifies that a missing field, a blank token and a missing body are all rejected before
/// any login attempt.
///
/// Expected: 400 with "Token required" and no logins
#[tokio::test]
async fn login_without_token_is_bad_request() {
    let (test, app) = setup();

    for body in [Some(json!({})), Some(json!({ "token": "   " })), None] {
        let (status, response) = request(&app, Method::POST, "/api/login", body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response["error"], "Token required");
    }
    assert_eq!(test.fake_connector().login_count(), 0);
}

/// Tests logging the same token in twice.
///
/// Expected: two different session ids that both resolve
#[tokio::test]
async fn duplicate_logins_get_distinct_sessions() {
    let (_test, app) = setup();

    let first = login(&app).await;
    let second = login(&app).await;

    assert_ne!(first, second);
    assert_eq!(get(&app, &format!("/api/guilds/{}", first)).await.0, StatusCode::OK);
    assert_eq!(get(&app, &format!("/api/guilds/{}", second)).await.0, StatusCode::OK);
}

/// Tests that a logged out session is gone.
///
/// Expected: logout 200, then 401 "Session expired" and the connection shut down
#[tokio::test]
async fn logout_expires_session() {
    let (test, app) = setup();
    let session_id = login(&app).await;

    let (status, body) = post(&app, &format!("/api/logout/{}", session_id), json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true }));

    let (status, body) = get(&app, &format!("/api/guilds/{}", session_id)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "error": "Session expired" }));
    assert_eq!(test.bot(TOKEN).state().shutdowns, 1);
}

/// Tests logging out a session that never existed.
///
/// Expected: 200 success
#[tokio::test]
async fn logout_of_unknown_session_succeeds() {
    let (_test, app) = setup();

    let (status, body) = request(&app, Method::POST, "/api/logout/nope", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true }));
}

/// Tests that the OpenAPI document lists the API.
///
/// Expected: 200 with the login and messages paths documented
#[tokio::test]
async fn serves_openapi_document() {
    let (_test, app) = setup();

    let (status, body) = get(&app, "/api/docs/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/login"].is_object());
    assert!(body["paths"]["/api/messages/{session_id}/{channel_id}"]["get"].is_object());
    assert!(body["paths"]["/api/messages/{session_id}/{channel_id}"]["post"].is_object());
}

/// Tests that a logged out session is rejected by every session-scoped endpoint.
///
/// Expected: 401 "Session expired" everywhere and no remote call after logout
#[tokio::test]
async fn logged_out_session_expires_on_every_endpoint() {
    let (test, app) = setup();
    let session_id = login(&app).await;
    post(&app, &format!("/api/logout/{}", session_id), json!({})).await;
    let calls_before = test.bot(TOKEN).state().calls.len();

    let endpoints = [
        (Method::GET, format!("/api/guilds/{}", session_id), None),
        (
            Method::POST,
            format!("/api/status/{}", session_id),
            Some(json!({ "status": "idle" })),
        ),
        (
            Method::POST,
            format!("/api/nickname/{}/{}", session_id, GUILD_ID),
            Some(json!({ "nickname": "Lunar" })),
        ),
        (
            Method::POST,
            format!("/api/avatar/{}", session_id),
            Some(json!({ "avatarBase64": "iVBORw0KGgo=" })),
        ),
        (
            Method::POST,
            format!("/api/username/{}", session_id),
            Some(json!({ "username": "Lunabot" })),
        ),
        (
            Method::POST,
            format!("/api/leave/{}/{}", session_id, GUILD_ID),
            None,
        ),
        (
            Method::GET,
            format!("/api/channels/{}/{}", session_id, GUILD_ID),
            None,
        ),
        (
            Method::GET,
            format!("/api/messages/{}/{}", session_id, GENERAL_ID),
            None,
        ),
        (
            Method::POST,
            format!("/api/messages/{}/{}", session_id, GENERAL_ID),
            Some(json!({ "content": "hello" })),
        ),
    ];

    for (method, uri, body) in endpoints {
        let (status, response) = request(&app, method.clone(), &uri, body).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED, "{} {}", method, uri);
        assert_eq!(response, json!({ "error": "Session expired" }), "{} {}", method, uri);
    }
    assert_eq!(test.bot(TOKEN).state().calls.len(), calls_before);
}

/// Tests that a malformed body is reported after the session check.
///
/// Expected: 401 for an unknown session even though the body is not valid JSON
#[tokio::test]
async fn session_is_checked_before_body() {
    let (_test, app) = setup();

    let (status, body) = post_raw(&app, "/api/messages/unknown/1", "{\"content\":").await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Session expired");
}

/// Tests a login body that is not valid JSON.
///
/// Expected: 400 without a login attempt
#[tokio::test]
async fn malformed_login_body_is_bad_request() {
    let (test, app) = setup();

    let (status, body) = post_raw(&app, "/api/login", "{\"token\":").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Invalid request body"));
    assert_eq!(test.fake_connector().login_count(), 0);
}
