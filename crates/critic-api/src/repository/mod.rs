//! 사용자 저장소.
//!
//! [`UserDirectory`] 트레이트 뒤에 PostgreSQL 구현과 인메모리 구현을 둡니다.

mod memory;
mod postgres;
mod users;

pub use memory::MemoryUserDirectory;
pub use postgres::PgUserDirectory;
pub use users::{
    NewUser, RepositoryError, ReviewRecord, UserChanges, UserDirectory, UserProfile, UserRecord,
};
