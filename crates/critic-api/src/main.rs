//! Critic API 서버 진입점.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::http::{header, HeaderName, Method, StatusCode};
use axum::Router;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use critic_api::auth::TOKEN_HEADER;
use critic_api::{
    create_api_router, ensure_bootstrap_admin, hash_password, AppState, MemoryUserDirectory,
    PgUserDirectory, TokenIssuer, UserDirectory,
};
use critic_core::{init_logging, AppConfig, DatabaseConfig, LogConfig};

/// 사용자 저장소 생성.
///
/// 데이터베이스 URL이 없으면 인메모리 저장소를 사용합니다.
async fn create_directory(config: &DatabaseConfig) -> anyhow::Result<Arc<dyn UserDirectory>> {
    let url = config
        .url
        .clone()
        .or_else(|| std::env::var("DATABASE_URL").ok());

    let Some(url) = url else {
        warn!("No database configured, using in-memory user directory (data is not persisted)");
        return Ok(Arc::new(MemoryUserDirectory::new()));
    };

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect(&url)
        .await
        .context("Failed to connect to database")?;

    let directory = PgUserDirectory::new(pool);
    directory
        .migrate()
        .await
        .context("Failed to run database migrations")?;
    info!("Connected to PostgreSQL and applied migrations");

    Ok(Arc::new(directory))
}

/// CORS 레이어 생성.
///
/// - `CORS_ORIGINS`: 쉼표로 구분된 허용 origin 목록
fn cors_layer() -> CorsLayer {
    let allow_origin = match std::env::var("CORS_ORIGINS") {
        Ok(origins) if !origins.is_empty() => {
            let origins: Vec<_> = origins
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();

            if origins.is_empty() {
                warn!("CORS_ORIGINS is set but contains no valid origins, allowing any");
                AllowOrigin::any()
            } else {
                info!("CORS configured with {} allowed origins", origins.len());
                AllowOrigin::list(origins)
            }
        }
        _ => {
            warn!("CORS_ORIGINS not set, allowing any origin (development mode)");
            AllowOrigin::any()
        }
    };

    let token_header = HeaderName::from_static(TOKEN_HEADER);

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
            token_header.clone(),
        ])
        .expose_headers([token_header])
        .max_age(Duration::from_secs(3600))
}

fn create_router(state: Arc<AppState>, request_timeout: Duration) -> Router {
    create_api_router(&state.tokens)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(cors_layer())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env 파일 로드 (있는 경우)
    let _ = dotenvy::dotenv();

    let config = AppConfig::load_default().context("Failed to load configuration")?;
    init_logging(LogConfig::from(&config.logging)).context("Failed to initialize logging")?;

    info!("Starting Critic API server...");

    // 잘못된 해싱 비용은 첫 요청이 아니라 시작 시점에 실패하도록 한 번 해싱합니다
    hash_password("startup-probe", &config.auth.hash).context("Invalid auth.hash settings")?;

    let users = create_directory(&config.database).await?;
    let tokens = Arc::new(TokenIssuer::new(
        &config.auth.jwt_secret,
        config.auth.token_ttl_minutes,
    ));
    let state = Arc::new(AppState::new(users, tokens, config.auth.hash));

    ensure_bootstrap_admin(state.users.as_ref(), &config.auth)
        .await
        .context("Failed to create bootstrap administrator")?;

    let addr = config.bind_address();
    let app = create_router(
        state,
        Duration::from_secs(config.server.request_timeout_secs),
    );

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!(%addr, "API server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped gracefully");
    Ok(())
}

/// Graceful shutdown 시그널 대기.
///
/// Ctrl+C 또는 SIGTERM 시그널을 수신하면 반환합니다.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            warn!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            warn!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
