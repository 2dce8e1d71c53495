//! Session extractor for the identity forwarded by the auth gateway.
//!
//! Authentication happens upstream; the gateway forwards the signed-in
//! user as `x-user-id` and `x-username` headers. This layer only reads them.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use venuebook_core::error::CoreError;
use venuebook_core::greeting::SessionUser;

use crate::error::AppError;

pub const USER_ID_HEADER: &str = "x-user-id";
pub const USERNAME_HEADER: &str = "x-username";

/// The signed-in user for the current request.
///
/// ```ignore
/// async fn my_handler(Session(user): Session) -> AppResult<Json<()>> {
///     tracing::info!(username = %user.username, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Session(pub SessionUser);

impl Session {
    fn from_headers(headers: &HeaderMap) -> Result<Self, AppError> {
        let username = headers
            .get(USERNAME_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(format!(
                    "Missing {USERNAME_HEADER} header"
                )))
            })?;

        let user_id = match headers.get(USER_ID_HEADER) {
            None => None,
            Some(raw) => Some(
                raw.to_str()
                    .ok()
                    .and_then(|v| v.trim().parse().ok())
                    .ok_or_else(|| {
                        AppError::BadRequest(format!("{USER_ID_HEADER} must be an integer"))
                    })?,
            ),
        };

        Ok(Session(SessionUser {
            user_id,
            username: username.to_string(),
        }))
    }
}

impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Self::from_headers(&parts.headers)
    }
}
