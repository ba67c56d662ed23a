//! User Directory 인터페이스와 레코드 타입.
//!
//! [`UserRecord`]는 비밀번호 해시를 포함하는 내부용 전체 레코드이며 직렬화할 수 없습니다.
//! 응답에는 항상 [`UserProfile`]을 사용합니다.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::Role;

/// 저장소 에러.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// 유일성 제약 위반 (필드 이름)
    #[error("{0} already exists")]
    Conflict(String),
    #[error("데이터베이스 에러: {0}")]
    Database(#[from] sqlx::Error),
    /// 저장된 값을 도메인 타입으로 변환할 수 없음
    #[error("손상된 레코드: {0}")]
    CorruptRecord(String),
}

/// 사용자 전체 레코드 (내부 전용).
#[derive(Clone)]
pub struct UserRecord {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_digest: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl std::fmt::Debug for UserRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserRecord")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("role", &self.role)
            .finish_non_exhaustive()
    }
}

/// 응답용 공개 프로필. 해시와 시스템 타임스탬프는 포함하지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub role: Role,
}

impl From<&UserRecord> for UserProfile {
    fn from(record: &UserRecord) -> Self {
        Self {
            id: record.id,
            username: record.username.clone(),
            email: record.email.clone(),
            role: record.role,
        }
    }
}

impl From<UserRecord> for UserProfile {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id,
            username: record.username,
            email: record.email,
            role: record.role,
        }
    }
}

/// 사용자 생성 입력. 비밀번호는 이미 해싱된 상태여야 합니다.
#[derive(Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_digest: String,
    pub role: Role,
}

/// 사용자 변경 집합. `None`인 필드는 기존 값을 유지합니다.
///
/// 변경 가능한 필드는 이 구조체에 나열된 것뿐입니다.
#[derive(Clone, Default)]
pub struct UserChanges {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password_digest: Option<String>,
    pub role: Option<Role>,
}

impl UserChanges {
    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.email.is_none()
            && self.password_digest.is_none()
            && self.role.is_none()
    }
}

/// 사용자 리뷰 (읽기 전용).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ReviewRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub rating: i16,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

/// 사용자 저장소.
///
/// 구현체는 내부적으로 동기화되어 여러 요청에서 동시에 사용할 수 있어야 합니다.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, RepositoryError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserRecord>, RepositoryError>;

    /// 새 사용자를 만듭니다. 사용자명/이메일 중복 시 `Conflict`.
    async fn create(&self, user: NewUser) -> Result<UserRecord, RepositoryError>;

    /// 지정된 필드만 교체합니다. 사용자가 없으면 `None`.
    async fn update(
        &self,
        id: Uuid,
        changes: UserChanges,
    ) -> Result<Option<UserRecord>, RepositoryError>;

    /// 사용자를 삭제하고 삭제된 레코드를 반환합니다. 리뷰도 함께 삭제됩니다.
    async fn delete(&self, id: Uuid) -> Result<Option<UserRecord>, RepositoryError>;

    /// 가입 순서대로 모든 사용자를 반환합니다.
    async fn list_all(&self) -> Result<Vec<UserRecord>, RepositoryError>;

    /// 사용자의 리뷰 목록 (최신순).
    async fn reviews_for(&self, user_id: Uuid) -> Result<Vec<ReviewRecord>, RepositoryError>;

    /// 저장소 연결 상태 확인.
    async fn ping(&self) -> bool;
}
