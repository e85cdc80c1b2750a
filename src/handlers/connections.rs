use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    connections::{Credentials, ServiceConnection, ServiceKind},
    error::AppError,
    handlers::AppState,
};

fn parse_service(service: &str) -> Result<ServiceKind, AppError> {
    ServiceKind::parse(service).ok_or_else(|| AppError::NotFound(format!("service {}", service)))
}

/// Handle GET /v1/users/:user_id/connections
pub async fn list_connections(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Json<Vec<ServiceConnection>> {
    Json(state.connections.list(&user_id))
}

/// Handle POST /v1/users/:user_id/connections/:service
pub async fn connect_service(
    State(state): State<AppState>,
    Path((user_id, service)): Path<(String, String)>,
    Json(credentials): Json<Credentials>,
) -> Result<(StatusCode, Json<ServiceConnection>), AppError> {
    let kind = parse_service(&service)?;
    let connection = state.connections.connect(&user_id, kind, &credentials)?;
    Ok((StatusCode::CREATED, Json(connection)))
}

/// Handle DELETE /v1/users/:user_id/connections/:service
pub async fn disconnect_service(
    State(state): State<AppState>,
    Path((user_id, service)): Path<(String, String)>,
) -> Result<StatusCode, AppError> {
    let kind = parse_service(&service)?;

    if state.connections.disconnect(&user_id, kind) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!(
            "{} is not connected",
            kind.display_name()
        )))
    }
}
