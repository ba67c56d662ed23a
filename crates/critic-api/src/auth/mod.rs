//! 인증 및 권한 부여.
//!
//! # 구성 요소
//!
//! - [`password`]: Argon2id 비밀번호 해싱/검증
//! - [`TokenIssuer`]: JWT 발급/검증 (서명 키는 시작 시 한 번 주입)
//! - [`access_guard`] / [`role_guard`]: 요청 컨텍스트에 [`SessionContext`]를 부착하고 역할을 확인
//! - [`Role`]: 사용자 역할 (standard, administrator)
//!
//! # 사용 예시
//!
//! ```rust,ignore
//! Router::new()
//!     .route("/users/me", authenticated(get(get_me), &tokens))
//!     .route("/users", with_role(get(list_users), &tokens, Role::Administrator))
//! ```

mod jwt;
mod middleware;
pub mod password;
mod roles;

pub use jwt::{Claims, TokenError, TokenIssuer};
pub use middleware::{
    access_guard, authenticated, extract_token, require_role, role_guard, with_role, AuthError,
    SessionContext, TOKEN_HEADER,
};
pub use password::{hash_password, verify_password, PasswordError};
pub use roles::Role;
