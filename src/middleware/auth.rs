//! Authentication middleware

use axum::{
    body::Body,
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    error::{AppError, AppResult},
    services::AuthService,
    state::AppState,
};

/// Authenticated user extracted from JWT
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub username: String,
    pub is_admin: bool,
}

impl AuthenticatedUser {
    /// Fail with `Forbidden` unless the caller is an admin
    pub fn require_admin(&self) -> AppResult<()> {
        if self.is_admin {
            Ok(())
        } else {
            Err(AppError::Forbidden("Admin privileges required".to_string()))
        }
    }

    /// Fail with `Forbidden` unless the caller is `username` or an admin
    pub fn require_self_or_admin(&self, username: &str) -> AppResult<()> {
        if self.is_admin || self.username == username {
            Ok(())
        } else {
            Err(AppError::Forbidden(
                "Cannot modify other users' data".to_string(),
            ))
        }
    }
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or(AppError::Unauthorized)
    }
}

/// Authentication middleware
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let uri = request.uri().clone();

    let Some(auth_header) = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
    else {
        debug!(path = %uri.path(), "Auth failed: No Authorization header");
        return Err(AppError::Unauthorized);
    };

    let Some(token) = auth_header.strip_prefix("Bearer ") else {
        debug!(path = %uri.path(), "Auth failed: Invalid Authorization format (expected 'Bearer <token>')");
        return Err(AppError::Unauthorized);
    };

    let claims = match AuthService::verify_token(token, &state.config().jwt.secret) {
        Ok(claims) => claims,
        Err(e) => {
            debug!(path = %uri.path(), error = ?e, "Auth failed: Token verification failed");
            return Err(e);
        }
    };

    let user = AuthenticatedUser {
        username: claims.sub,
        is_admin: claims.is_admin,
    };

    debug!(path = %uri.path(), username = %user.username, is_admin = user.is_admin, "User authenticated successfully");

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}
