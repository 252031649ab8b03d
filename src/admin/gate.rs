//! Shared-secret moderation gate. Every admin-only route takes an
//! `AdminToken` extractor argument, which rejects the request before the
//! handler body runs.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use tracing::warn;

use crate::{error::AppError, state::AppState};

pub const ADMIN_TOKEN_HEADER: &str = "x-admin-token";

/// The expected shared secret, injected from configuration rather than read
/// from a process-wide global.
#[derive(Clone)]
pub struct AdminSecret(pub String);

impl FromRef<AppState> for AdminSecret {
    fn from_ref(state: &AppState) -> Self {
        AdminSecret(state.config.admin.token.clone())
    }
}

/// Proof that the request carried the admin shared secret.
#[derive(Debug)]
pub struct AdminToken;

#[async_trait]
impl<S> FromRequestParts<S> for AdminToken
where
    S: Send + Sync,
    AdminSecret: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let AdminSecret(expected) = AdminSecret::from_ref(state);
        let supplied = parts
            .headers
            .get(ADMIN_TOKEN_HEADER)
            .and_then(|v| v.to_str().ok());

        match supplied {
            Some(token) if token == expected => Ok(AdminToken),
            Some(_) => {
                warn!("admin token mismatch");
                Err(AppError::Unauthorized)
            }
            None => Err(AppError::Unauthorized),
        }
    }
}
