use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    dashboard::{self, AccountDashboard, DemoDashboard},
    error::AppError,
    handlers::AppState,
};

/// Handle GET /v1/users/:user_id/dashboard
pub async fn account_dashboard(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<AccountDashboard>, AppError> {
    let profile = state
        .profiles
        .get(&user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("profile {}", user_id)))?;

    let connections = state.connections.list(&user_id);
    Ok(Json(AccountDashboard::build(&profile, connections)))
}

/// Handle GET /v1/demo/dashboard
pub async fn demo_dashboard() -> Json<DemoDashboard> {
    Json(dashboard::demo_dashboard())
}
