//! 인메모리 User Directory.
//!
//! 데이터베이스 없이 실행하거나 테스트할 때 사용합니다. 프로세스 종료 시 데이터는 사라집니다.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::users::{
    NewUser, RepositoryError, ReviewRecord, UserChanges, UserDirectory, UserRecord,
};

#[derive(Default)]
struct Tables {
    /// 가입 순서 유지
    users: Vec<UserRecord>,
    reviews: Vec<ReviewRecord>,
}

impl Tables {
    /// `except`를 제외하고 같은 사용자명/이메일이 있으면 충돌 필드 반환.
    fn conflict(
        &self,
        username: Option<&str>,
        email: Option<&str>,
        except: Option<Uuid>,
    ) -> Option<&'static str> {
        let others = || self.users.iter().filter(move |u| Some(u.id) != except);

        if let Some(email) = email {
            if others().any(|u| u.email == email) {
                return Some("email");
            }
        }
        if let Some(username) = username {
            if others().any(|u| u.username == username) {
                return Some("username");
            }
        }
        None
    }
}

#[derive(Default)]
pub struct MemoryUserDirectory {
    tables: RwLock<Tables>,
}

impl MemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// 리뷰 추가. 사용자가 없으면 `None`.
    pub async fn insert_review(
        &self,
        user_id: Uuid,
        rating: i16,
        body: &str,
    ) -> Option<ReviewRecord> {
        let mut tables = self.tables.write().await;
        if !tables.users.iter().any(|u| u.id == user_id) {
            return None;
        }

        let review = ReviewRecord {
            id: Uuid::new_v4(),
            user_id,
            rating,
            body: body.to_string(),
            created_at: Utc::now(),
        };
        tables.reviews.push(review.clone());
        Some(review)
    }
}

#[async_trait]
impl UserDirectory for MemoryUserDirectory {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, RepositoryError> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserRecord>, RepositoryError> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.id == id).cloned())
    }

    async fn create(&self, user: NewUser) -> Result<UserRecord, RepositoryError> {
        let mut tables = self.tables.write().await;
        if let Some(field) = tables.conflict(Some(&user.username), Some(&user.email), None) {
            return Err(RepositoryError::Conflict(field.to_string()));
        }

        let now = Utc::now();
        let record = UserRecord {
            id: Uuid::new_v4(),
            username: user.username,
            email: user.email,
            password_digest: user.password_digest,
            role: user.role,
            created_at: now,
            updated_at: now,
        };
        tables.users.push(record.clone());
        Ok(record)
    }

    async fn update(
        &self,
        id: Uuid,
        changes: UserChanges,
    ) -> Result<Option<UserRecord>, RepositoryError> {
        let mut tables = self.tables.write().await;
        if !tables.users.iter().any(|u| u.id == id) {
            return Ok(None);
        }
        if let Some(field) =
            tables.conflict(changes.username.as_deref(), changes.email.as_deref(), Some(id))
        {
            return Err(RepositoryError::Conflict(field.to_string()));
        }

        let Some(record) = tables.users.iter_mut().find(|u| u.id == id) else {
            return Ok(None);
        };
        if let Some(username) = changes.username {
            record.username = username;
        }
        if let Some(email) = changes.email {
            record.email = email;
        }
        if let Some(digest) = changes.password_digest {
            record.password_digest = digest;
        }
        if let Some(role) = changes.role {
            record.role = role;
        }
        record.updated_at = Utc::now();

        Ok(Some(record.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<Option<UserRecord>, RepositoryError> {
        let mut tables = self.tables.write().await;
        let Some(index) = tables.users.iter().position(|u| u.id == id) else {
            return Ok(None);
        };

        let removed = tables.users.remove(index);
        tables.reviews.retain(|r| r.user_id != id);
        Ok(Some(removed))
    }

    async fn list_all(&self) -> Result<Vec<UserRecord>, RepositoryError> {
        Ok(self.tables.read().await.users.clone())
    }

    async fn reviews_for(&self, user_id: Uuid) -> Result<Vec<ReviewRecord>, RepositoryError> {
        let tables = self.tables.read().await;
        let mut reviews: Vec<ReviewRecord> = tables
            .reviews
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(reviews)
    }

    async fn ping(&self) -> bool {
        true
    }
}
