//! Authentication Middleware
//!
//! JWT validation middleware for protected routes. The token's `sub` claim is
//! the caller's login; resolving it to a user is left to the service.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
    RequestExt,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;
use crate::startup::AppState;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (user login)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at time (Unix timestamp)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
}

/// Authenticated caller, inserted into request extensions
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub login: String,
}

/// Decode a bearer token and return the caller's login.
pub fn login_from_token(token: &str, secret: &str) -> Result<String, AppError> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
            AppError::Unauthorized("Token expired".into())
        }
        _ => AppError::Unauthorized("Invalid token".into()),
    })?;

    let login = token_data.claims.sub;
    if login.is_empty() {
        return Err(AppError::Unauthorized("Invalid token claims".into()));
    }

    Ok(login)
}

/// Authentication middleware that validates JWT tokens
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let TypedHeader(Authorization(bearer)) = request
        .extract_parts::<TypedHeader<Authorization<Bearer>>>()
        .await
        .map_err(|_| AppError::Unauthorized("Missing authorization header".into()))?;

    let login = login_from_token(bearer.token(), &state.settings.jwt.secret)?;
    tracing::debug!(login = %login, "Authenticated request");

    request.extensions_mut().insert(AuthUser { login });

    Ok(next.run(request).await)
}
