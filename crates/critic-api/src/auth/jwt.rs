//! JWT 토큰 발급 및 검증.
//!
//! 토큰은 서버에 저장되지 않습니다. 유효성은 서명과 만료 시간만으로 결정되며,
//! 사용자를 삭제해도 이미 발급된 토큰은 만료 전까지 서명 검증을 통과합니다.
//!
//! 역할은 발급 시점에 토큰에 복사되고 요청마다 저장소에서 다시 읽지 않습니다.
//! 역할 변경은 재로그인(재발급) 이후에 반영됩니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{
    crypto, decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header,
    Validation,
};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Role, SessionContext};

/// 서명 알고리즘. 검증 시 헤더의 `alg`는 신뢰하지 않습니다.
const ALGORITHM: Algorithm = Algorithm::HS256;

/// JWT 페이로드.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject - 사용자 ID
    pub sub: Uuid,
    /// 발급 시점의 사용자 역할
    pub role: Role,
    /// Issued At (Unix timestamp)
    pub iat: i64,
    /// Expiration (Unix timestamp)
    pub exp: i64,
    /// JWT ID - 토큰 고유 식별자
    pub jti: String,
}

impl Claims {
    /// 만료 시각이 표현 범위를 넘으면 `TtlOutOfRange`를 반환합니다.
    pub fn new(user_id: Uuid, role: Role, ttl: Duration) -> Result<Self, TokenError> {
        let now = Utc::now();
        let expires_at = now
            .checked_add_signed(ttl)
            .ok_or(TokenError::TtlOutOfRange)?;

        Ok(Self {
            sub: user_id,
            role,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
            jti: Uuid::new_v4().to_string(),
        })
    }
}

/// 토큰 처리 에러.
///
/// HTTP 계층에서는 모두 401로 동일하게 처리되며, 종류는 로그에만 남깁니다.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("토큰 인코딩 실패: {0}")]
    Encoding(#[from] jsonwebtoken::errors::Error),
    #[error("서명이 유효하지 않습니다")]
    InvalidSignature,
    #[error("잘못된 토큰 형식")]
    Malformed,
    #[error("토큰이 만료되었습니다")]
    Expired,
    #[error("토큰 유효 시간이 허용 범위를 벗어났습니다")]
    TtlOutOfRange,
}

/// 토큰 발급/검증기.
///
/// 시작 시 설정에서 한 번 만들어져 애플리케이션 상태로 전달됩니다.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl_minutes: i64,
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("algorithm", &ALGORITHM)
            .field("ttl_minutes", &self.ttl_minutes)
            .finish_non_exhaustive()
    }
}

impl TokenIssuer {
    /// # Arguments
    ///
    /// * `secret` - 서명 비밀 키
    /// * `ttl_minutes` - 토큰 유효 시간 (분)
    pub fn new(secret: &SecretString, ttl_minutes: i64) -> Self {
        let key = secret.expose_secret().as_bytes();

        let mut validation = Validation::new(ALGORITHM);
        validation.validate_exp = true;

        Self {
            encoding: EncodingKey::from_secret(key),
            decoding: DecodingKey::from_secret(key),
            validation,
            ttl_minutes,
        }
    }

    /// 사용자 ID와 역할을 담은 토큰을 발급합니다.
    pub fn issue(&self, user_id: Uuid, role: Role) -> Result<String, TokenError> {
        let ttl = Duration::try_minutes(self.ttl_minutes).ok_or(TokenError::TtlOutOfRange)?;
        let claims = Claims::new(user_id, role, ttl)?;
        encode(&Header::new(ALGORITHM), &claims, &self.encoding).map_err(TokenError::from)
    }

    /// 토큰을 검증하고 세션 컨텍스트를 반환합니다.
    ///
    /// 서명을 먼저 확인한 뒤에야 페이로드를 해석합니다.
    pub fn verify(&self, token: &str) -> Result<SessionContext, TokenError> {
        let (message, signature) = token.rsplit_once('.').ok_or(TokenError::Malformed)?;
        if message.split('.').count() != 2 {
            return Err(TokenError::Malformed);
        }

        match crypto::verify(signature, message.as_bytes(), &self.decoding, ALGORITHM) {
            Ok(true) => {}
            Ok(false) | Err(_) => return Err(TokenError::InvalidSignature),
        }

        let data = decode::<Claims>(token, &self.decoding, &self.validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                _ => TokenError::Malformed,
            }
        })?;

        Ok(SessionContext {
            subject: data.claims.sub,
            role: data.claims.role,
        })
    }
}
