//! 모든 핸들러에서 공유되는 애플리케이션 상태.
//!
//! AppState는 Arc로 래핑되어 여러 요청 간에 공유됩니다.
//! 서명 키는 시작 시 [`TokenIssuer`]에 한 번 주입되며 핸들러는 이를 통해서만 토큰을 다룹니다.

use std::sync::Arc;

use critic_core::HashConfig;

use crate::auth::TokenIssuer;
use crate::repository::UserDirectory;

/// 애플리케이션 공유 상태.
#[derive(Clone)]
pub struct AppState {
    /// 사용자 저장소 (PostgreSQL 또는 인메모리)
    pub users: Arc<dyn UserDirectory>,

    /// 토큰 발급/검증기
    pub tokens: Arc<TokenIssuer>,

    /// 비밀번호 해싱 비용
    pub hash_cost: HashConfig,

    /// 서버 시작 시간
    pub started_at: chrono::DateTime<chrono::Utc>,

    /// API 버전
    pub version: String,
}

impl AppState {
    pub fn new(
        users: Arc<dyn UserDirectory>,
        tokens: Arc<TokenIssuer>,
        hash_cost: HashConfig,
    ) -> Self {
        Self {
            users,
            tokens,
            hash_cost,
            started_at: chrono::Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// 서버 업타임(초).
    pub fn uptime_secs(&self) -> i64 {
        chrono::Utc::now()
            .signed_duration_since(self.started_at)
            .num_seconds()
    }

    /// 저장소 연결 상태 확인.
    pub async fn is_directory_healthy(&self) -> bool {
        self.users.ping().await
    }
}

/// 테스트용 AppState 생성.
///
/// 인메모리 저장소와 낮은 해싱 비용을 사용합니다.
#[cfg(any(test, feature = "test-utils"))]
pub fn create_test_state() -> AppState {
    use secrecy::SecretString;

    use crate::repository::MemoryUserDirectory;

    let secret = SecretString::new("test-secret-key-for-api-testing-32-chars".into());
    AppState::new(
        Arc::new(MemoryUserDirectory::new()),
        Arc::new(TokenIssuer::new(&secret, 60)),
        HashConfig {
            memory_kib: 64,
            iterations: 1,
            parallelism: 1,
        },
    )
}
