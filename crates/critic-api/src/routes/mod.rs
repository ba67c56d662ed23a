//! API 라우트.
//!
//! # 라우트 구조
//!
//! - `/health` - 헬스 체크 (liveness)
//! - `/health/ready` - 상세 헬스 체크 (readiness)
//! - `/login` - 로그인
//! - `/users` - 가입, 사용자 관리

pub mod extract;
pub mod health;
pub mod login;
pub mod users;

pub use extract::ValidatedJson;
pub use health::{health_router, ComponentHealth, ComponentStatus, HealthResponse};
pub use login::{login_router, LoginRequest, LoginResponse};
pub use users::{
    users_router, AdminUserUpdate, ProfileUpdate, RegisterRequest, RegisteredUser,
    UserDetailResponse,
};

use axum::Router;
use std::sync::Arc;

use crate::auth::TokenIssuer;
use crate::state::AppState;

/// 전체 API 라우터 생성.
///
/// 보호된 라우트의 가드는 여기서 한 번에 조합됩니다.
pub fn create_api_router(tokens: &Arc<TokenIssuer>) -> Router<Arc<AppState>> {
    Router::new()
        .merge(health_router())
        .merge(login_router())
        .merge(users_router(tokens))
}
