use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    admin::AdminToken,
    error::{AppError, Result},
    state::AppState,
    weather::{condition::Condition, matcher},
};

use super::dto::{CreateSuggestionRequest, MatchQuery, UpdateStatusRequest};
use super::repo::{self, Suggestion};

pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/suggestions", post(submit_suggestion))
        .route("/suggestions/public", get(list_public))
        .route("/suggestions/match", get(match_active))
}

pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/suggestions", get(list_all))
        .route("/suggestions/:id/status", put(update_status))
}

// --- handlers ---

#[instrument(skip(state, body))]
async fn submit_suggestion(
    State(state): State<AppState>,
    Json(body): Json<CreateSuggestionRequest>,
) -> Result<(StatusCode, Json<Suggestion>)> {
    let new = body.into_new().map_err(AppError::Validation)?;
    let row = repo::create(&state.db, new).await?;
    info!(id = %row.id, activity = %row.activity, "suggestion submitted");
    Ok((StatusCode::CREATED, Json(row)))
}

#[instrument(skip(state))]
async fn list_public(State(state): State<AppState>) -> Result<Json<Vec<Suggestion>>> {
    let rows = repo::list_active(&state.db).await?;
    Ok(Json(rows))
}

/// Runs the canonical matcher over the active catalog server-side, so
/// clients do not carry their own copy of this logic.
#[instrument(skip(state, query))]
async fn match_active(
    State(state): State<AppState>,
    query: std::result::Result<Query<MatchQuery>, QueryRejection>,
) -> Result<Json<matcher::MatchedSuggestions>> {
    // surface bad query strings in the same JSON envelope as other 4xxs
    let Query(q) = query.map_err(|e| AppError::Validation(e.body_text()))?;
    let catalog = repo::list_active(&state.db).await?;
    let condition = Condition::normalize(&q.condition);
    let matched = matcher::match_suggestions(q.temp, condition, q.wind, &catalog);
    Ok(Json(matched))
}

#[instrument(skip(_admin, state))]
async fn list_all(
    _admin: AdminToken,
    State(state): State<AppState>,
) -> Result<Json<Vec<Suggestion>>> {
    let rows = repo::list_all(&state.db).await?;
    Ok(Json(rows))
}

#[instrument(skip(_admin, state, body))]
async fn update_status(
    _admin: AdminToken,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateStatusRequest>,
) -> Result<Json<Suggestion>> {
    let row = repo::set_status(&state.db, id, &body.status)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("suggestion {id}")))?;
    info!(id = %row.id, status = %row.status, "suggestion status updated");
    Ok(Json(row))
}
