//! Bearer-token authentication extractor.
//!
//! The token is the single static string from [`AuthConfig`] — a placeholder
//! credential scheme for the demo deployment, not a security design.
//!
//! [`AuthConfig`]: crate::config::AuthConfig

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use meshdeck_core::error::CoreError;

use crate::error::AppError;
use crate::state::AppState;

/// Proof that the request carried the valid bearer token.
///
/// Use as an extractor parameter in any handler that requires auth:
///
/// ```ignore
/// async fn my_handler(_auth: AuthToken) -> AppResult<Json<()>> { ... }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AuthToken;

impl FromRequestParts<AppState> for AuthToken {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        if token != state.config.auth.api_token {
            return Err(AppError::Core(CoreError::Unauthorized(
                "Invalid token".into(),
            )));
        }

        Ok(AuthToken)
    }
}
