//! 시작 시 실행되는 서비스.

pub mod bootstrap;

pub use bootstrap::{ensure_bootstrap_admin, BootstrapError};
