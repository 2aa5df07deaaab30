/// Access gate - bearer token authentication for owner-scoped routes
use crate::{
    error::ServerError,
    services::{Claims, TokenService},
};
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use quill_core::UserId;
use std::sync::Arc;

/// Verified identity of the caller, stored in request extensions.
/// Can be used as an extractor in handlers.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub Claims);

impl AuthenticatedUser {
    pub fn user_id(&self) -> UserId {
        self.0.user_id()
    }

    pub fn claims(&self) -> &Claims {
        &self.0
    }
}

/// Middleware that extracts and validates the JWT from the Authorization header
///
/// No credential is `Unauthenticated` (401); a credential that fails
/// verification is `Forbidden` (403). The identity comes entirely from the
/// token; no account lookup happens here.
pub async fn access_gate(
    State(tokens): State<Arc<TokenService>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ServerError> {
    let token = bearer_token(request.headers().get(AUTHORIZATION))
        .ok_or_else(|| ServerError::Unauthenticated("Access token is required".to_string()))?;

    let claims = tokens.verify(token).map_err(|e| {
        tracing::warn!("Token verification failed: {}", e);
        ServerError::Forbidden("Invalid or expired token".to_string())
    })?;

    request.extensions_mut().insert(AuthenticatedUser(claims));

    Ok(next.run(request).await)
}

fn bearer_token(header: Option<&axum::http::HeaderValue>) -> Option<&str> {
    header
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Implement FromRequestParts so AuthenticatedUser can be used as an extractor
#[axum::async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| ServerError::Unauthenticated("Access token is required".to_string()))
    }
}
