//! 비밀번호 해싱 유틸리티.
//!
//! Argon2id 기반 비밀번호 해싱 및 검증. 작업 비용은 설정에서 주어집니다.
//! 평문 비밀번호는 어떤 경로로도 로그에 남기지 않습니다.

use argon2::{
    password_hash::{
        self, rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};
use critic_core::HashConfig;

/// 비밀번호 처리 에러.
#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    #[error("허용 범위를 벗어난 해싱 비용: {0}")]
    InvalidCost(String),
    #[error("비밀번호 해싱 실패")]
    HashingFailed,
    #[error("잘못된 해시 형식")]
    InvalidHashFormat,
    #[error("해싱 작업 실행 실패")]
    TaskFailed,
}

/// 비밀번호 해싱.
///
/// 호출마다 새 솔트를 생성하므로 같은 비밀번호라도 결과가 매번 다릅니다.
///
/// # Returns
///
/// PHC 형식의 해시 문자열 (알고리즘, 비용, 솔트 포함)
///
/// # Example
///
/// ```rust,ignore
/// let hash = hash_password("my_secure_password", &HashConfig::default()).unwrap();
/// // "$argon2id$v=19$m=19456,t=2,p=1$..."
/// ```
pub fn hash_password(password: &str, cost: &HashConfig) -> Result<String, PasswordError> {
    let params = Params::new(cost.memory_kib, cost.iterations, cost.parallelism, None)
        .map_err(|e| PasswordError::InvalidCost(e.to_string()))?;
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
    let salt = SaltString::generate(&mut OsRng);

    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|_| PasswordError::HashingFailed)?;

    Ok(hash.to_string())
}

/// 비밀번호 검증.
///
/// 해시에 포함된 솔트와 비용으로 다시 계산하여 상수 시간 비교합니다.
///
/// # Returns
///
/// 일치하면 `Ok(true)`, 불일치하면 `Ok(false)`.
/// 해시 문자열 자체가 잘못된 경우에만 에러를 반환합니다.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| PasswordError::InvalidHashFormat)?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(_) => Err(PasswordError::InvalidHashFormat),
    }
}

/// 블로킹 스레드 풀에서 해싱합니다.
pub async fn hash_password_blocking(
    password: String,
    cost: HashConfig,
) -> Result<String, PasswordError> {
    tokio::task::spawn_blocking(move || hash_password(&password, &cost))
        .await
        .map_err(|_| PasswordError::TaskFailed)?
}

/// 블로킹 스레드 풀에서 검증합니다.
pub async fn verify_password_blocking(
    password: String,
    hash: String,
) -> Result<bool, PasswordError> {
    tokio::task::spawn_blocking(move || verify_password(&password, &hash))
        .await
        .map_err(|_| PasswordError::TaskFailed)?
}
