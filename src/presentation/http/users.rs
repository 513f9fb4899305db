use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::{delete, get, post},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::ports::user_repository::UserRow;
use crate::application::use_cases::auth::login::{Login as LoginUc, LoginRequest as LoginDto};
use crate::application::use_cases::auth::logout::Logout;
use crate::application::use_cases::auth::register::{
    Register as RegisterUc, RegisterError, RegisterRequest as RegisterDto,
};
use crate::bootstrap::app_context::AppContext;
use crate::presentation::http::auth::{AuthUser, token_headers};
use crate::presentation::http::extract::JsonBody;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub email: String,
}

impl From<UserRow> for UserResponse {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            email: row.email,
        }
    }
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/users", post(register))
        .route("/users/login", post(login))
        .route("/users/me", get(me))
        .route("/users/me/token", delete(logout))
        .with_state(ctx)
}

#[utoipa::path(post, path = "/users", tag = "Users", request_body = CredentialsRequest, responses(
    (status = 200, body = UserResponse, headers(("x-auth" = String, description = "Auth token"))),
    (status = 400, description = "Invalid email, short password or duplicate email")
))]
pub async fn register(
    State(ctx): State<AppContext>,
    JsonBody(req): JsonBody<CredentialsRequest>,
) -> Result<(HeaderMap, Json<UserResponse>), StatusCode> {
    let repo = ctx.user_repo();
    let tokens = ctx.token_service();
    let uc = RegisterUc {
        repo: repo.as_ref(),
        tokens: tokens.as_ref(),
    };
    let dto = RegisterDto {
        email: req.email,
        password: req.password,
    };
    let out = uc.execute(&dto).await.map_err(|e| match &e {
        RegisterError::InvalidEmail
        | RegisterError::WeakPassword
        | RegisterError::DuplicateEmail => {
            tracing::debug!(reason = %e, "registration rejected");
            StatusCode::BAD_REQUEST
        }
        RegisterError::Internal(err) => {
            tracing::error!(error = ?err, "registration failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    })?;
    let headers = token_headers(&out.token)?;
    Ok((headers, Json(out.user.into())))
}

#[utoipa::path(post, path = "/users/login", tag = "Users", request_body = CredentialsRequest, responses(
    (status = 200, body = UserResponse, headers(("x-auth" = String, description = "Auth token"))),
    (status = 400, description = "Bad credentials")
))]
pub async fn login(
    State(ctx): State<AppContext>,
    JsonBody(req): JsonBody<CredentialsRequest>,
) -> Result<(HeaderMap, Json<UserResponse>), StatusCode> {
    let repo = ctx.user_repo();
    let tokens = ctx.token_service();
    let uc = LoginUc {
        repo: repo.as_ref(),
        tokens: tokens.as_ref(),
    };
    let dto = LoginDto {
        email: req.email,
        password: req.password,
    };
    let out = uc
        .execute(&dto)
        .await
        .map_err(|e| {
            tracing::error!(error = ?e, "login failed");
            StatusCode::INTERNAL_SERVER_ERROR
        })?
        .ok_or(StatusCode::BAD_REQUEST)?;
    let headers = token_headers(&out.token)?;
    Ok((headers, Json(out.user.into())))
}

#[utoipa::path(get, path = "/users/me", tag = "Users",
    params(("x-auth" = String, Header, description = "Auth token")),
    responses((status = 200, body = UserResponse), (status = 401)))]
pub async fn me(auth: AuthUser) -> Json<UserResponse> {
    Json(auth.user.into())
}

#[utoipa::path(delete, path = "/users/me/token", tag = "Users",
    params(("x-auth" = String, Header, description = "Auth token")),
    responses((status = 200), (status = 401)))]
pub async fn logout(
    State(ctx): State<AppContext>,
    auth: AuthUser,
) -> Result<StatusCode, StatusCode> {
    let repo = ctx.user_repo();
    let uc = Logout {
        repo: repo.as_ref(),
    };
    uc.execute(auth.user.id, &auth.token).await.map_err(|e| {
        tracing::error!(error = ?e, user_id = %auth.user.id, "logout failed");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    Ok(StatusCode::OK)
}
