use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::{
    error::{AppError, Result},
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
}

/// Static credential check. Not a session: the returned token is the same
/// shared secret the moderation gate expects on `X-Admin-Token`.
#[instrument(skip(state, body))]
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let admin = &state.config.admin;
    if body.username == admin.username && body.password == admin.password {
        info!(username = %body.username, "admin logged in");
        Ok(Json(LoginResponse {
            success: true,
            token: admin.token.clone(),
        }))
    } else {
        warn!(username = %body.username, "admin login rejected");
        Err(AppError::Unauthorized)
    }
}
