use super::*;

/// Tests listing guilds from the cache.
///
/// Expected: both guilds without invite links or invite requests
#[tokio::test]
async fn lists_cached_guilds() {
    let (test, app) = setup();
    let session_id = login(&app).await;
    let invites_at_login = test.bot(TOKEN).call_count(FakeOperation::CreateInvite);

    let (status, body) = get(&app, &format!("/api/guilds/{}", session_id)).await;

    assert_eq!(status, StatusCode::OK);
    let guilds = body["guilds"].as_array().unwrap();
    assert_eq!(guilds.len(), 2);
    assert!(guilds.iter().all(|guild| guild.get("inviteURL").is_none()));
    assert_eq!(guilds[0]["name"], "Moon Base");
    assert_eq!(
        test.bot(TOKEN).call_count(FakeOperation::CreateInvite),
        invites_at_login
    );
}

/// Tests listing guilds with an unknown session.
///
/// Expected: 401 "Session expired"
#[tokio::test]
async fn unknown_session_is_unauthorized() {
    let (_test, app) = setup();

    let (status, body) = get(&app, "/api/guilds/unknown").await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Session expired");
}

/// Tests that channel listings only contain sendable text channels.
///
/// Expected: only the general channel, with its id as a string
#[tokio::test]
async fn lists_sendable_channels() {
    let (test, app) = setup();
    let session_id = login(&app).await;
    let fetches_at_login = test.bot(TOKEN).call_count(FakeOperation::GuildChannels);

    let (status, body) = get(&app, &format!("/api/channels/{}/{}", session_id, GUILD_ID)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "channels": [{ "id": GENERAL_ID.to_string(), "name": "general" }] })
    );
    assert_eq!(
        test.bot(TOKEN).call_count(FakeOperation::GuildChannels),
        fetches_at_login + 1
    );
}

/// Tests a malformed guild id.
///
/// Expected: 400 "Invalid guild id"
#[tokio::test]
async fn malformed_guild_id_is_bad_request() {
    let (_test, app) = setup();
    let session_id = login(&app).await;

    let (status, body) = get(&app, &format!("/api/channels/{}/moon", session_id)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid guild id");
}

/// Tests that the session is checked before the guild id.
///
/// Expected: 401 even though the guild id is malformed
#[tokio::test]
async fn session_is_checked_before_guild_id() {
    let (_test, app) = setup();

    let (status, _) = get(&app, "/api/channels/unknown/moon").await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

/// Tests leaving a guild.
///
/// Expected: 200 success and the guild gone from later listings
#[tokio::test]
async fn leaves_guild() {
    let (_test, app) = setup();
    let session_id = login(&app).await;

    let (status, body) = request(
        &app,
        Method::POST,
        &format!("/api/leave/{}/{}", session_id, SECOND_GUILD_ID),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true }));

    let (_, body) = get(&app, &format!("/api/guilds/{}", session_id)).await;
    let guilds = body["guilds"].as_array().unwrap();
    assert_eq!(guilds.len(), 1);
    assert_eq!(guilds[0]["id"], GUILD_ID.to_string());
}

/// Tests a remote failure while listing channels.
///
/// Expected: 500 with the remote message verbatim
#[tokio::test]
async fn remote_failure_is_passed_through() {
    let (test, app) = setup();
    let session_id = login(&app).await;
    test.bot(TOKEN)
        .fail(FakeOperation::GuildChannels, "Missing Access");

    let (status, body) = get(&app, &format!("/api/channels/{}/{}", session_id, GUILD_ID)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Missing Access" }));
}
