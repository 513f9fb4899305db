use axum::extract::FromRequestParts;
use axum::http::{HeaderMap, HeaderName, HeaderValue, StatusCode, request::Parts};

use crate::application::ports::user_repository::UserRow;
use crate::application::use_cases::auth::authenticate::Authenticate;
use crate::bootstrap::app_context::AppContext;

/// Request and response header carrying the opaque auth token.
pub const AUTH_HEADER: &str = "x-auth";

/// The caller resolved from the `x-auth` header, plus the token they presented.
pub struct AuthUser {
    pub user: UserRow,
    pub token: String,
}

#[axum::async_trait]
impl FromRequestParts<AppContext> for AuthUser {
    type Rejection = StatusCode;

    async fn from_request_parts(
        parts: &mut Parts,
        ctx: &AppContext,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTH_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(StatusCode::UNAUTHORIZED)?;

        let repo = ctx.user_repo();
        let tokens = ctx.token_service();
        let uc = Authenticate {
            repo: repo.as_ref(),
            tokens: tokens.as_ref(),
        };
        match uc.execute(token).await {
            Ok(Some(user)) => Ok(AuthUser {
                user,
                token: token.to_string(),
            }),
            Ok(None) => {
                tracing::debug!("rejected x-auth token");
                Err(StatusCode::UNAUTHORIZED)
            }
            Err(e) => {
                tracing::error!(error = ?e, "token lookup failed");
                Err(StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }
}

pub(crate) fn token_headers(token: &str) -> Result<HeaderMap, StatusCode> {
    let value = HeaderValue::from_str(token).map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    let mut headers = HeaderMap::new();
    headers.insert(HeaderName::from_static(AUTH_HEADER), value);
    Ok(headers)
}
