use axum::Router;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    config::Config,
    controller::{guild, message, profile, session},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Bot Panel API", description = "Remote control of Discord bot accounts"),
    tags(
        (name = "session", description = "Bot login and logout"),
        (name = "guild", description = "Guilds and channels of a bot"),
        (name = "message", description = "Reading and sending channel messages"),
        (name = "profile", description = "Presence, nickname, avatar and username of a bot")
    )
)]
struct ApiDoc;

/// API routes with the Swagger UI mounted at `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(session::login))
        .routes(routes!(session::logout))
        .routes(routes!(guild::get_guilds))
        .routes(routes!(guild::get_channels))
        .routes(routes!(guild::leave_guild))
        .routes(routes!(message::get_messages, message::send_message))
        .routes(routes!(profile::set_status))
        .routes(routes!(profile::set_nickname))
        .routes(routes!(profile::set_avatar))
        .routes(routes!(profile::set_username))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}

/// Full application: API routes, static files for every other path, CORS and request tracing.
pub fn app(state: AppState, config: &Config) -> Router {
    router()
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
