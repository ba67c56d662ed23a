//! 사용자 계정 REST API 서버.
//!
//! 이 크레이트는 다음을 제공합니다:
//! - Axum 기반 REST API (가입, 로그인, 프로필, 관리자 사용자 관리)
//! - Argon2id 비밀번호 해싱과 JWT 인증
//! - Access Guard / Role Guard 미들웨어
//! - 헬스 체크 엔드포인트
//!
//! # 모듈 구성
//!
//! - [`state`]: 애플리케이션 공유 상태 (AppState)
//! - [`routes`]: REST API 엔드포인트
//! - [`auth`]: 비밀번호 해싱, JWT, 가드
//! - [`repository`]: 사용자 저장소 (PostgreSQL, 인메모리)
//! - [`services`]: 시작 시 실행되는 서비스

pub mod auth;
pub mod error;
pub mod repository;
pub mod routes;
pub mod services;
pub mod state;

pub use auth::{hash_password, verify_password, Claims, Role, SessionContext, TokenIssuer};
pub use error::{ApiError, ApiErrorResponse, ApiResult};
pub use repository::{MemoryUserDirectory, PgUserDirectory, UserDirectory};
pub use routes::*;
pub use services::ensure_bootstrap_admin;
pub use state::AppState;

#[cfg(any(test, feature = "test-utils"))]
pub use state::create_test_state;
