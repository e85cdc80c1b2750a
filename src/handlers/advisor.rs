use axum::{extract::State, Json};
use serde::Deserialize;

use crate::{
    advisor::{AdvisorClient, ChatReply},
    error::AppError,
    handlers::AppState,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub user_id: String,
    #[serde(default)]
    pub session_id: Option<String>,
    pub message: String,
}

/// Handle POST /v1/advisor/chat
///
/// Upstream failures still answer 200 with the fallback text; only a busy
/// session, a blank message or a disabled advisor produce an error status.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatReply>, AppError> {
    let client =
        AdvisorClient::from_config(state.http_client.clone(), &state.config.load().advisor)?;

    tracing::info!(
        user_id = %request.user_id,
        session_id = request.session_id.as_deref().unwrap_or("new"),
        "Handling advisor chat request"
    );

    let reply = state
        .sessions
        .ask(&client, &request.user_id, request.session_id, &request.message)
        .await?;

    Ok(Json(reply))
}
