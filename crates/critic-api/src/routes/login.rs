//! 로그인 endpoint.
//!
//! 이메일이 없거나 비밀번호가 틀린 경우 모두 같은 400 응답을 반환합니다.
//! 이메일이 없을 때도 같은 비용의 Argon2 연산을 수행해 응답 시간을 맞춥니다.

use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use validator::Validate;

use super::extract::ValidatedJson;
use super::users::{normalize_email, token_headers};
use crate::auth::password::{hash_password_blocking, verify_password_blocking};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// 로그인 요청.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 1, max = 128, message = "password is required"))]
    pub password: String,
}

/// 로그인 응답.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// POST /login
pub async fn login(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<impl IntoResponse> {
    let email = normalize_email(&request.email);

    let Some(user) = state.users.find_by_email(&email).await? else {
        hash_password_blocking(request.password, state.hash_cost).await?;
        debug!("Login failed: unknown email");
        return Err(ApiError::InvalidCredentials);
    };

    if !verify_password_blocking(request.password, user.password_digest).await? {
        debug!(user_id = %user.id, "Login failed: password mismatch");
        return Err(ApiError::InvalidCredentials);
    }

    let token = state.tokens.issue(user.id, user.role)?;
    info!(user_id = %user.id, "User logged in");

    Ok((token_headers(&token)?, Json(LoginResponse { token })))
}

pub fn login_router() -> Router<Arc<AppState>> {
    Router::new().route("/login", post(login))
}
