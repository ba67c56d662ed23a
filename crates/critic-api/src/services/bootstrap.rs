//! 초기 관리자 계정 생성.
//!
//! 관리자 없이 관리자를 만들 수 있는 유일한 경로입니다.

use critic_core::AuthConfig;
use secrecy::ExposeSecret;
use tracing::{debug, info};

use crate::auth::password::hash_password_blocking;
use crate::auth::{PasswordError, Role};
use crate::repository::{NewUser, RepositoryError, UserDirectory, UserRecord};

#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("관리자 비밀번호 해싱 실패: {0}")]
    Password(#[from] PasswordError),
    #[error("관리자 계정 생성 실패: {0}")]
    Repository(#[from] RepositoryError),
}

/// 설정된 관리자 계정이 없으면 생성합니다.
///
/// 이메일/비밀번호가 설정되지 않았거나 같은 이메일의 사용자가 이미 있으면 `None`.
pub async fn ensure_bootstrap_admin(
    users: &dyn UserDirectory,
    auth: &AuthConfig,
) -> Result<Option<UserRecord>, BootstrapError> {
    let (Some(email), Some(password)) = (
        auth.bootstrap_admin_email.as_deref(),
        auth.bootstrap_admin_password.as_ref(),
    ) else {
        debug!("Bootstrap administrator not configured");
        return Ok(None);
    };

    let email = email.trim().to_lowercase();
    if users.find_by_email(&email).await?.is_some() {
        debug!(email = %email, "Bootstrap administrator already exists");
        return Ok(None);
    }

    let password_digest =
        hash_password_blocking(password.expose_secret().to_string(), auth.hash).await?;
    let admin = users
        .create(NewUser {
            username: auth.bootstrap_admin_username.clone(),
            email,
            password_digest,
            role: Role::Administrator,
        })
        .await?;

    info!(user_id = %admin.id, username = %admin.username, "Bootstrap administrator created");
    Ok(Some(admin))
}
