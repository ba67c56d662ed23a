//! PostgreSQL User Directory.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use super::users::{
    NewUser, RepositoryError, ReviewRecord, UserChanges, UserDirectory, UserRecord,
};
use crate::auth::Role;

const USER_COLUMNS: &str = "id, username, email, password_digest, role, created_at, updated_at";

/// Database representation of a user.
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    username: String,
    email: String,
    password_digest: String,
    role: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for UserRecord {
    type Error = RepositoryError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let role = Role::parse(&row.role).ok_or_else(|| {
            RepositoryError::CorruptRecord(format!(
                "unknown role '{}' for user {}",
                row.role, row.id
            ))
        })?;

        Ok(UserRecord {
            id: row.id,
            username: row.username,
            email: row.email,
            password_digest: row.password_digest,
            role,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Map unique violations onto the offending field.
fn map_write_error(err: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(db) = &err {
        if db.is_unique_violation() {
            let field = match db.constraint() {
                Some("users_email_unique") => "email",
                Some("users_username_unique") => "username",
                _ => "record",
            };
            return RepositoryError::Conflict(field.to_string());
        }
    }
    RepositoryError::Database(err)
}

/// User repository backed by PostgreSQL.
#[derive(Debug, Clone)]
pub struct PgUserDirectory {
    pool: PgPool,
}

impl PgUserDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Apply pending schema migrations.
    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("./migrations").run(&self.pool).await
    }

    async fn fetch_one_user(
        &self,
        sql: &str,
        id: Uuid,
    ) -> Result<Option<UserRecord>, RepositoryError> {
        sqlx::query_as::<_, UserRow>(sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .map(UserRecord::try_from)
            .transpose()
    }
}

#[async_trait]
impl UserDirectory for PgUserDirectory {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, RepositoryError> {
        sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {} FROM users WHERE email = $1",
            USER_COLUMNS
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?
        .map(UserRecord::try_from)
        .transpose()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserRecord>, RepositoryError> {
        self.fetch_one_user(&format!("SELECT {} FROM users WHERE id = $1", USER_COLUMNS), id)
            .await
    }

    async fn create(&self, user: NewUser) -> Result<UserRecord, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            r#"
            INSERT INTO users (id, username, email, password_digest, role)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {}
            "#,
            USER_COLUMNS
        ))
        .bind(Uuid::new_v4())
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_digest)
        .bind(user.role.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_error)?;

        row.try_into()
    }

    async fn update(
        &self,
        id: Uuid,
        changes: UserChanges,
    ) -> Result<Option<UserRecord>, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            r#"
            UPDATE users
            SET username = COALESCE($2, username),
                email = COALESCE($3, email),
                password_digest = COALESCE($4, password_digest),
                role = COALESCE($5, role),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            USER_COLUMNS
        ))
        .bind(id)
        .bind(changes.username)
        .bind(changes.email)
        .bind(changes.password_digest)
        .bind(changes.role.map(|r| r.as_str()))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_write_error)?;

        row.map(UserRecord::try_from).transpose()
    }

    async fn delete(&self, id: Uuid) -> Result<Option<UserRecord>, RepositoryError> {
        self.fetch_one_user(
            &format!("DELETE FROM users WHERE id = $1 RETURNING {}", USER_COLUMNS),
            id,
        )
        .await
    }

    async fn list_all(&self) -> Result<Vec<UserRecord>, RepositoryError> {
        sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {} FROM users ORDER BY created_at ASC, id ASC",
            USER_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(UserRecord::try_from)
        .collect()
    }

    async fn reviews_for(&self, user_id: Uuid) -> Result<Vec<ReviewRecord>, RepositoryError> {
        let reviews = sqlx::query_as::<_, ReviewRecord>(
            r#"
            SELECT id, user_id, rating, body, created_at
            FROM reviews
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(reviews)
    }

    async fn ping(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(role: &str) -> UserRow {
        UserRow {
            id: Uuid::new_v4(),
            username: "alice".to_string(),
            email: "a@x.com".to_string(),
            password_digest: "$argon2id$...".to_string(),
            role: role.to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_row_conversion() {
        let record = UserRecord::try_from(row("administrator")).unwrap();
        assert_eq!(record.role, Role::Administrator);
        assert_eq!(record.email, "a@x.com");
    }

    #[test]
    fn test_unknown_role_is_corrupt() {
        assert!(matches!(
            UserRecord::try_from(row("superuser")),
            Err(RepositoryError::CorruptRecord(_))
        ));
    }

    #[test]
    fn test_non_database_error_passes_through() {
        assert!(matches!(
            map_write_error(sqlx::Error::RowNotFound),
            RepositoryError::Database(_)
        ));
    }

    /// `DATABASE_URL`이 가리키는 데이터베이스에 마이그레이션을 적용하고 연결합니다.
    async fn connect() -> Option<PgUserDirectory> {
        let url = std::env::var("DATABASE_URL").ok()?;
        let pool = sqlx::postgres::PgPoolOptions::new()
            .max_connections(2)
            .connect(&url)
            .await
            .unwrap();
        let directory = PgUserDirectory::new(pool);
        directory.migrate().await.unwrap();
        Some(directory)
    }

    fn new_user(tag: &str) -> NewUser {
        NewUser {
            username: format!("u-{}", tag),
            email: format!("{}@x.com", tag),
            password_digest: "$argon2id$...".to_string(),
            role: Role::Standard,
        }
    }

    #[tokio::test]
    #[ignore] // 실제 PostgreSQL 필요 (DATABASE_URL)
    async fn test_postgres_directory_crud() {
        let Some(dir) = connect().await else {
            eprintln!("DATABASE_URL not set, skipping");
            return;
        };

        let tag = Uuid::new_v4().simple().to_string();
        let alice = dir.create(new_user(&tag)).await.unwrap();
        assert_eq!(alice.role, Role::Standard);

        let found = dir.find_by_email(&alice.email).await.unwrap().unwrap();
        assert_eq!(found.id, alice.id);
        assert_eq!(dir.find_by_id(alice.id).await.unwrap().unwrap().username, alice.username);

        // 이메일 중복은 제약 조건 이름으로 필드를 구분
        let other_tag = Uuid::new_v4().simple().to_string();
        let duplicate_email = NewUser {
            email: alice.email.clone(),
            ..new_user(&other_tag)
        };
        assert!(matches!(
            dir.create(duplicate_email).await,
            Err(RepositoryError::Conflict(ref field)) if field == "email"
        ));
        let duplicate_username = NewUser {
            username: alice.username.clone(),
            ..new_user(&other_tag)
        };
        assert!(matches!(
            dir.create(duplicate_username).await,
            Err(RepositoryError::Conflict(ref field)) if field == "username"
        ));

        // 지정하지 않은 필드는 유지
        let renamed = format!("r-{}", tag);
        let changes = UserChanges {
            username: Some(renamed.clone()),
            ..Default::default()
        };
        let updated = dir.update(alice.id, changes).await.unwrap().unwrap();
        assert_eq!(updated.username, renamed);
        assert_eq!(updated.email, alice.email);
        assert_eq!(updated.password_digest, alice.password_digest);
        assert_eq!(updated.role, Role::Standard);

        let promoted = UserChanges {
            role: Some(Role::Administrator),
            ..Default::default()
        };
        let updated = dir.update(alice.id, promoted).await.unwrap().unwrap();
        assert_eq!(updated.role, Role::Administrator);

        sqlx::query("INSERT INTO reviews (id, user_id, rating, body) VALUES ($1, $2, 4, 'ok')")
            .bind(Uuid::new_v4())
            .bind(alice.id)
            .execute(&dir.pool)
            .await
            .unwrap();
        assert_eq!(dir.reviews_for(alice.id).await.unwrap().len(), 1);
        assert!(dir.list_all().await.unwrap().iter().any(|u| u.id == alice.id));
        assert!(dir.ping().await);

        let removed = dir.delete(alice.id).await.unwrap().unwrap();
        assert_eq!(removed.id, alice.id);
        assert!(dir.reviews_for(alice.id).await.unwrap().is_empty());
        assert!(dir.delete(alice.id).await.unwrap().is_none());
        assert!(dir.update(alice.id, UserChanges::default()).await.unwrap().is_none());
    }
}
