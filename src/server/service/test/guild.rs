use super::*;
use crate::server::service::guild::GuildService;

/// Tests minting invites during login.
///
/// Verifies that a guild with an invitable text channel gets a discord.gg link with a one-day
/// unique invite, while a guild without one is still listed without an invite.
///
/// Expected: first guild has an invite, second guild has none
#[tokio::test]
async fn mints_invites_where_permitted() {
    let bot = FakeBot::builder(1, "Moonbot")
        .guild(
            fixture::guild(GUILD_ID, "Moon Base"),
            vec![fixture::text_channel(GENERAL_ID, "general", permission::INVITE)],
        )
        .guild(
            fixture::guild(SECOND_GUILD_ID, "Sun Base"),
            vec![fixture::text_channel(ANNOUNCEMENTS_ID, "announcements", permission::SEND)],
        )
        .build();
    let connection = connect(&bot);

    let guilds = GuildService::new(&connection).cached_with_invites().await;

    assert_eq!(guilds.len(), 2);
    let moon = guilds.iter().find(|g| g.id == GUILD_ID).unwrap();
    let sun = guilds.iter().find(|g| g.id == SECOND_GUILD_ID).unwrap();
    assert_eq!(moon.invite_url.as_deref(), Some("https://discord.gg/invite1"));
    assert_eq!(sun.invite_url, None);

    let state = bot.state();
    assert_eq!(state.invites.len(), 1);
    let (channel_id, options) = &state.invites[0];
    assert_eq!(*channel_id, GENERAL_ID);
    assert_eq!(options.max_age, 86_400);
    assert_eq!(options.max_uses, 0);
    assert!(options.unique);
}

/// Tests that the invite channel is the lowest-positioned invitable text channel.
///
/// Expected: invite created in the channel at position 1
#[tokio::test]
async fn invites_into_first_channel_by_position() {
    let bot = FakeBot::builder(1, "Moonbot")
        .guild(
            fixture::guild(GUILD_ID, "Moon Base"),
            vec![
                GuildChannelInfo {
                    position: 5,
                    ..fixture::text_channel(GENERAL_ID, "general", permission::INVITE)
                },
                GuildChannelInfo {
                    position: 1,
                    ..fixture::text_channel(ANNOUNCEMENTS_ID, "announcements", permission::INVITE)
                },
                fixture::channel(VOICE_ID, "lounge", ChannelType::Voice, permission::INVITE),
            ],
        )
        .build();
    let connection = connect(&bot);

    GuildService::new(&connection).cached_with_invites().await;

    assert_eq!(bot.state().invites[0].0, ANNOUNCEMENTS_ID);
}

/// Tests that a failing invite request does not fail the listing.
///
/// Expected: guild listed without an invite
#[tokio::test]
async fn swallows_invite_failures() {
    let bot = default_bot();
    bot.fail(FakeOperation::CreateInvite, "Missing Access");
    let connection = connect(&bot);

    let guilds = GuildService::new(&connection).cached_with_invites().await;

    assert_eq!(guilds.len(), 1);
    assert_eq!(guilds[0].invite_url, None);
}

/// Tests plain guild listing.
///
/// Expected: guilds listed without invites and no invite requests made
#[tokio::test]
async fn cached_lists_guilds_without_invites() {
    let bot = default_bot();
    let connection = connect(&bot);

    let guilds = GuildService::new(&connection).cached();

    assert_eq!(guilds.len(), 1);
    assert_eq!(guilds[0].name, "Moon Base");
    assert_eq!(guilds[0].member_count, 10);
    assert_eq!(guilds[0].invite_url, None);
    assert_eq!(bot.call_count(FakeOperation::CreateInvite), 0);
}

/// Tests channel filtering to sendable text channels.
///
/// Verifies that read-only text channels and voice channels are excluded even when the bot
/// could send in the voice channel.
///
/// Expected: only the general channel
#[tokio::test]
async fn lists_only_sendable_text_channels() {
    let bot = default_bot();
    let connection = connect(&bot);

    let channels = GuildService::new(&connection)
        .sendable_channels(GUILD_ID)
        .await
        .unwrap();

    assert_eq!(channels.len(), 1);
    assert_eq!(channels[0].id, GENERAL_ID);
    assert_eq!(channels[0].name, "general");
}

/// Tests a guild where the bot may send nowhere.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn lists_no_channels_without_send_permission() {
    let bot = FakeBot::builder(1, "Moonbot")
        .guild(
            fixture::guild(GUILD_ID, "Moon Base"),
            vec![fixture::text_channel(LOCKED_ID, "locked", permission::READ)],
        )
        .build();
    let connection = connect(&bot);

    let channels = GuildService::new(&connection)
        .sendable_channels(GUILD_ID)
        .await
        .unwrap();

    assert!(channels.is_empty());
}

/// Tests leaving a guild.
///
/// Expected: Ok and the guild gone from the cache
#[tokio::test]
async fn leaves_guild() {
    let bot = default_bot();
    let connection = connect(&bot);
    let service = GuildService::new(&connection);

    service.leave(GUILD_ID).await.unwrap();

    assert_eq!(bot.state().left_guilds, vec![GUILD_ID]);
    assert!(service.cached().is_empty());
}

/// Tests leaving a guild the bot is not in.
///
/// Expected: Err(ConnectionErr) carrying the remote message
#[tokio::test]
async fn leaving_unknown_guild_fails() {
    let bot = default_bot();
    let connection = connect(&bot);

    let result = GuildService::new(&connection).leave(SECOND_GUILD_ID).await;

    assert!(matches!(result, Err(AppError::ConnectionErr(ref e)) if e.to_string() == "Unknown Guild"));
}
