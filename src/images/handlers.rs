use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::json;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    admin::AdminToken,
    error::{AppError, Result},
    state::AppState,
};

use super::dto::UpsertImageRequest;
use super::repo::{self, Image};

pub fn read_routes() -> Router<AppState> {
    Router::new().route("/images", get(list_images))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/images", post(create_image))
        .route("/images/:id", put(update_image))
        .route("/images/:id", delete(delete_image))
}

// --- handlers ---

#[instrument(skip(state))]
async fn list_images(State(state): State<AppState>) -> Result<Json<Vec<Image>>> {
    let rows = repo::list(&state.db).await?;
    Ok(Json(rows))
}

#[instrument(skip(_admin, state, body))]
async fn create_image(
    _admin: AdminToken,
    State(state): State<AppState>,
    Json(body): Json<UpsertImageRequest>,
) -> Result<(StatusCode, Json<Image>)> {
    let fields = body.into_fields().map_err(AppError::Validation)?;
    let row = repo::create(&state.db, fields).await?;
    info!(id = %row.id, filename = %row.filename, "image created");
    Ok((StatusCode::CREATED, Json(row)))
}

#[instrument(skip(_admin, state, body))]
async fn update_image(
    _admin: AdminToken,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpsertImageRequest>,
) -> Result<Json<Image>> {
    let fields = body.into_fields().map_err(AppError::Validation)?;
    let row = repo::update(&state.db, id, fields)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("image {id}")))?;
    info!(id = %row.id, "image updated");
    Ok(Json(row))
}

#[instrument(skip(_admin, state))]
async fn delete_image(
    _admin: AdminToken,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>> {
    let deleted = repo::delete(&state.db, id).await?;
    if !deleted {
        return Err(AppError::NotFound(format!("image {id}")));
    }
    info!(%id, "image deleted");
    Ok(Json(json!({ "deleted": true })))
}
