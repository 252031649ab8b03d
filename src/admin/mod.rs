mod gate;
pub mod handlers;

pub use gate::{AdminSecret, AdminToken, ADMIN_TOKEN_HEADER};

use crate::state::AppState;
use axum::{routing::post, Router};

pub fn router() -> Router<AppState> {
    Router::new().route("/admin/login", post(handlers::login))
}
