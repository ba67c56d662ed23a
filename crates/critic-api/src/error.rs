//! 통합 API 에러 응답 타입.
//!
//! | 에러 | 상태 코드 |
//! |------|-----------|
//! | `Validation`, `Conflict`, `InvalidCredentials` | 400 |
//! | `Auth(MissingToken / InvalidToken)` | 401 |
//! | `Auth(Forbidden)` | 403 |
//! | `NotFound` | 404 |
//! | `Internal`, `Auth(MissingSession)` | 500 (상세 내용은 로그에만 기록) |

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::error;

use crate::auth::{AuthError, PasswordError, TokenError};
use crate::repository::RepositoryError;

/// 로그인 실패 메시지. 어떤 항목이 틀렸는지 노출하지 않습니다.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Incorrect email or password.";

/// API 에러 응답 본문.
///
/// # 예시
///
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "User ID not found"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// 에러 코드 (예: "INVALID_INPUT", "CONFLICT", "NOT_FOUND")
    pub code: String,
    /// 사람이 읽을 수 있는 에러 메시지
    pub message: String,
    /// 추가 에러 상세 정보 (선택적)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ApiErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: Value,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details),
        }
    }
}

impl std::fmt::Display for ApiErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

/// 핸들러 에러.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// 잘못된 입력 (필드별 상세 정보 포함 가능)
    #[error("{message}")]
    Validation {
        message: String,
        details: Option<Value>,
    },
    /// 사용자명/이메일 중복
    #[error("{0}")]
    Conflict(String),
    /// 로그인 실패 (이메일 없음 또는 비밀번호 불일치)
    #[error("{}", INVALID_CREDENTIALS_MESSAGE)]
    InvalidCredentials,
    #[error("{0}")]
    NotFound(String),
    #[error(transparent)]
    Auth(#[from] AuthError),
    /// 내부 오류 (클라이언트에는 상세 내용을 노출하지 않음)
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation {
            message: message.into(),
            details: None,
        }
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Conflict(field) => {
                ApiError::Conflict(format!("{} is already registered", field))
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<PasswordError> for ApiError {
    fn from(err: PasswordError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl From<TokenError> for ApiError {
    fn from(err: TokenError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Validation { message, details } => {
                let body = match details {
                    Some(details) => {
                        ApiErrorResponse::with_details("INVALID_INPUT", message, details)
                    }
                    None => ApiErrorResponse::new("INVALID_INPUT", message),
                };
                (StatusCode::BAD_REQUEST, body)
            }
            ApiError::Conflict(message) => (
                StatusCode::BAD_REQUEST,
                ApiErrorResponse::new("CONFLICT", message),
            ),
            ApiError::InvalidCredentials => (
                StatusCode::BAD_REQUEST,
                ApiErrorResponse::new("INVALID_CREDENTIALS", INVALID_CREDENTIALS_MESSAGE),
            ),
            ApiError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                ApiErrorResponse::new("NOT_FOUND", message),
            ),
            ApiError::Auth(err) => return err.into_response(),
            ApiError::Internal(detail) => {
                error!(error = %detail, "Request failed with internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiErrorResponse::new("INTERNAL_ERROR", "서버 내부 오류"),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// API 핸들러 Result 타입 별칭.
pub type ApiResult<T> = Result<T, ApiError>;
