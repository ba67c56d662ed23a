//! critic 서비스의 공통 기반.
//!
//! - [`config`]: 설정 로드 및 검증
//! - [`logging`]: tracing 기반 로깅 초기화
//! - [`error`]: 공통 에러 타입

pub mod config;
pub mod error;
pub mod logging;

pub use config::{AppConfig, AuthConfig, DatabaseConfig, HashConfig, LoggingConfig, ServerConfig};
pub use error::{CoreError, CoreResult};
pub use logging::{init_logging, LogConfig, LogFormat};
