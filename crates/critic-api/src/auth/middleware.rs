//! Access Guard / Role Guard 미들웨어.
//!
//! 두 가드는 요청 컨텍스트를 변환하는 함수이며, 조합 순서는 [`authenticated`]와
//! [`with_role`]에서 명시적으로 고정됩니다.
//!
//! ```text
//! 요청 → access_guard (토큰 검증, SessionContext 부착)
//!      → role_guard   (SessionContext.role 확인)
//!      → 핸들러
//! ```

use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::MethodRouter,
    Json,
};
use tower::ServiceBuilder;
use tracing::{debug, error};
use uuid::Uuid;

use super::{Role, TokenIssuer};
use crate::error::ApiErrorResponse;

/// 토큰 전달 헤더.
pub const TOKEN_HEADER: &str = "x-auth-token";

/// 검증된 토큰에서 얻은 요청 단위 인증 정보.
///
/// 핸들러에서 추출기로 사용할 수 있습니다. Access Guard를 거치지 않은 요청에서
/// 추출하면 내부 에러(500)가 됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionContext {
    /// 사용자 ID
    pub subject: Uuid,
    /// 토큰 발급 시점의 역할
    pub role: Role,
}

/// 인증/권한 에러.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("인증 토큰이 필요합니다")]
    MissingToken,
    #[error("유효하지 않은 토큰")]
    InvalidToken,
    #[error("권한이 부족합니다")]
    Forbidden,
    /// Access Guard 없이 Role Guard나 SessionContext 추출기가 사용된 경우 (구성 오류)
    #[error("요청에 인증 컨텍스트가 없습니다")]
    MissingSession,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AuthError::MissingToken => (StatusCode::UNAUTHORIZED, "MISSING_TOKEN"),
            AuthError::InvalidToken => (StatusCode::UNAUTHORIZED, "INVALID_TOKEN"),
            AuthError::Forbidden => (StatusCode::FORBIDDEN, "FORBIDDEN"),
            AuthError::MissingSession => {
                error!("SessionContext missing: role guard or extractor used without access guard");
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ApiErrorResponse::new("INTERNAL_ERROR", "서버 내부 오류")),
                )
                    .into_response();
            }
        };

        (status, Json(ApiErrorResponse::new(code, self.to_string()))).into_response()
    }
}

impl<S> FromRequestParts<S> for SessionContext
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SessionContext>()
            .copied()
            .ok_or(AuthError::MissingSession)
    }
}

/// 요청 헤더에서 토큰 추출.
///
/// `x-auth-token`을 우선하고, 없으면 `Authorization: Bearer <token>`을 사용합니다.
pub fn extract_token(headers: &HeaderMap) -> Option<&str> {
    if let Some(token) = headers.get(TOKEN_HEADER).and_then(|h| h.to_str().ok()) {
        let token = token.trim();
        if !token.is_empty() {
            return Some(token);
        }
    }

    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Access Guard.
///
/// 토큰이 없거나 검증에 실패하면 401로 종료합니다. 저장소는 조회하지 않습니다.
pub async fn access_guard(
    State(tokens): State<Arc<TokenIssuer>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let session = {
        let token = extract_token(request.headers()).ok_or(AuthError::MissingToken)?;
        tokens.verify(token).map_err(|e| {
            debug!(reason = ?e, "Token rejected");
            AuthError::InvalidToken
        })?
    };

    request.extensions_mut().insert(session);
    Ok(next.run(request).await)
}

/// Role Guard. 반드시 [`access_guard`] 뒤에 위치해야 합니다.
pub async fn role_guard(
    State(required): State<Role>,
    request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let session = request
        .extensions()
        .get::<SessionContext>()
        .ok_or(AuthError::MissingSession)?;

    require_role(required, session)?;
    Ok(next.run(request).await)
}

/// 세션의 역할이 `required` 이상인지 확인.
pub fn require_role(required: Role, session: &SessionContext) -> Result<(), AuthError> {
    if session.role.satisfies(required) {
        Ok(())
    } else {
        debug!(
            user_id = %session.subject,
            role = %session.role,
            required = %required,
            "Role check failed"
        );
        Err(AuthError::Forbidden)
    }
}

/// 인증된 요청만 허용하는 라우트.
pub fn authenticated<S>(route: MethodRouter<S>, tokens: &Arc<TokenIssuer>) -> MethodRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    route.route_layer(middleware::from_fn_with_state(tokens.clone(), access_guard))
}

/// 인증 + 역할 확인을 거치는 라우트.
///
/// `ServiceBuilder`는 먼저 추가한 레이어가 바깥쪽이므로 access_guard가 항상 먼저 실행됩니다.
pub fn with_role<S>(
    route: MethodRouter<S>,
    tokens: &Arc<TokenIssuer>,
    required: Role,
) -> MethodRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    route.route_layer(
        ServiceBuilder::new()
            .layer(middleware::from_fn_with_state(tokens.clone(), access_guard))
            .layer(middleware::from_fn_with_state(required, role_guard)),
    )
}
