use std::sync::Arc;

use axum::{
    debug_handler,
    extract::{Path, State},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::{
    application::{self, teams::TeamsUseCase, Application},
    domain::teams::TeamsResource,
    server::extractor::BearerToken,
};

mod response;

pub(crate) fn router(application: Arc<Application>) -> axum::Router {
    Router::new()
        .route("/user-joined", get(handle_get_user_joined_teams))
        .route("/details/:team_id", get(handle_get_team))
        .route("/channels/:team_id", get(handle_get_channels))
        .route("/channel/:team_id/:channel_id", get(handle_get_channel))
        .route("/user/chats", get(handle_get_chats))
        .route("/user/chat/:chat_id", get(handle_get_chat))
        .route("/user/chat/:chat_id/messages", get(handle_get_chat_messages))
        .route("/user/chat/:chat_id/members", get(handle_get_chat_members))
        .route("/user/team/:team_id/channel/:channel_id/messages", get(handle_get_channel_messages))
        .route("/user/team/:team_id/members", get(handle_get_team_members))
        .route("/user/:user_id", get(handle_get_user))
        .route("/user/:user_id/presence", get(handle_get_user_presence))
        .route("/me", get(handle_get_me))
        .with_state(application)
}

async fn relay(
    application: &Application,
    resource: TeamsResource,
    token: BearerToken,
) -> Result<impl IntoResponse, application::teams::Error> {
    let value = application.teams().get(&resource, token.as_deref()).await?;

    Ok(Json(value))
}

#[debug_handler]
async fn handle_get_user_joined_teams(
    State(application): State<Arc<Application>>,
    token: BearerToken,
) -> Result<impl IntoResponse, application::teams::Error> {
    relay(&application, TeamsResource::JoinedTeams, token).await
}

#[debug_handler]
async fn handle_get_team(
    Path(team_id): Path<String>,
    State(application): State<Arc<Application>>,
    token: BearerToken,
) -> Result<impl IntoResponse, application::teams::Error> {
    relay(&application, TeamsResource::Team { team_id }, token).await
}

#[debug_handler]
async fn handle_get_channels(
    Path(team_id): Path<String>,
    State(application): State<Arc<Application>>,
    token: BearerToken,
) -> Result<impl IntoResponse, application::teams::Error> {
    relay(&application, TeamsResource::Channels { team_id }, token).await
}

#[debug_handler]
async fn handle_get_channel(
    Path((team_id, channel_id)): Path<(String, String)>,
    State(application): State<Arc<Application>>,
    token: BearerToken,
) -> Result<impl IntoResponse, application::teams::Error> {
    relay(&application, TeamsResource::Channel { team_id, channel_id }, token).await
}

#[debug_handler]
async fn handle_get_chats(
    State(application): State<Arc<Application>>,
    token: BearerToken,
) -> Result<impl IntoResponse, application::teams::Error> {
    relay(&application, TeamsResource::Chats, token).await
}

#[debug_handler]
async fn handle_get_chat(
    Path(chat_id): Path<String>,
    State(application): State<Arc<Application>>,
    token: BearerToken,
) -> Result<impl IntoResponse, application::teams::Error> {
    relay(&application, TeamsResource::Chat { chat_id }, token).await
}

#[debug_handler]
async fn handle_get_chat_messages(
    Path(chat_id): Path<String>,
    State(application): State<Arc<Application>>,
    token: BearerToken,
) -> Result<impl IntoResponse, application::teams::Error> {
    relay(&application, TeamsResource::ChatMessages { chat_id }, token).await
}

#[debug_handler]
async fn handle_get_chat_members(
    Path(chat_id): Path<String>,
    State(application): State<Arc<Application>>,
    token: BearerToken,
) -> Result<impl IntoResponse, application::teams::Error> {
    relay(&application, TeamsResource::ChatMembers { chat_id }, token).await
}

#[debug_handler]
async fn handle_get_channel_messages(
    Path((team_id, channel_id)): Path<(String, String)>,
    State(application): State<Arc<Application>>,
    token: BearerToken,
) -> Result<impl IntoResponse, application::teams::Error> {
    relay(&application, TeamsResource::ChannelMessages { team_id, channel_id }, token).await
}

#[debug_handler]
async fn handle_get_team_members(
    Path(team_id): Path<String>,
    State(application): State<Arc<Application>>,
    token: BearerToken,
) -> Result<impl IntoResponse, application::teams::Error> {
    relay(&application, TeamsResource::TeamMembers { team_id }, token).await
}

#[debug_handler]
async fn handle_get_user(
    Path(user_id): Path<String>,
    State(application): State<Arc<Application>>,
    token: BearerToken,
) -> Result<impl IntoResponse, application::teams::Error> {
    relay(&application, TeamsResource::User { user_id }, token).await
}

#[debug_handler]
async fn handle_get_user_presence(
    Path(user_id): Path<String>,
    State(application): State<Arc<Application>>,
    token: BearerToken,
) -> Result<impl IntoResponse, application::teams::Error> {
    relay(&application, TeamsResource::UserPresence { user_id }, token).await
}

#[debug_handler]
async fn handle_get_me(
    State(application): State<Arc<Application>>,
    token: BearerToken,
) -> Result<impl IntoResponse, application::teams::Error> {
    relay(&application, TeamsResource::Me, token).await
}
