//! 사용자 관리 endpoint.
//!
//! | 경로 | 메서드 | 접근 |
//! |------|--------|------|
//! | `/users` | POST | 공개 (가입) |
//! | `/users` | GET | administrator |
//! | `/users/me` | GET, PUT | 인증된 사용자 |
//! | `/users/{id}` | GET, PUT, DELETE | administrator |
//!
//! 갱신 요청은 허용 목록 구조체([`ProfileUpdate`], [`AdminUserUpdate`])로만 받습니다.
//! 본문의 `id`, `password_digest` 등 목록에 없는 필드는 무시됩니다.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header::ACCESS_CONTROL_EXPOSE_HEADERS, HeaderMap, HeaderValue, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use super::extract::ValidatedJson;
use crate::auth::password::hash_password_blocking;
use crate::auth::{authenticated, with_role, Role, SessionContext, TokenIssuer, TOKEN_HEADER};
use crate::error::{ApiError, ApiResult};
use crate::repository::{NewUser, RepositoryError, ReviewRecord, UserChanges, UserProfile};
use crate::state::AppState;

const USER_NOT_FOUND: &str = "User ID not found";

/// 사용자 이름 최대 길이 (문자 수, 앞뒤 공백 제외).
const MAX_USERNAME_CHARS: usize = 50;

// ==================== 요청/응답 타입 ====================

/// 가입 요청.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(custom(function = "validate_username"))]
    pub username: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 6, max = 128, message = "password must be 6-128 characters"))]
    pub password: String,
}

/// 가입 응답.
#[derive(Debug, Serialize, Deserialize)]
pub struct RegisteredUser {
    pub id: Uuid,
    pub username: String,
    pub email: String,
}

/// 본인 프로필 갱신 (허용: username, email, password).
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ProfileUpdate {
    #[validate(custom(function = "validate_username"))]
    pub username: Option<String>,
    #[validate(email(message = "email must be a valid address"))]
    pub email: Option<String>,
    #[validate(length(min = 6, max = 128, message = "password must be 6-128 characters"))]
    pub password: Option<String>,
}

/// 관리자용 사용자 갱신 (허용: username, email, password, role).
#[derive(Debug, Default, Deserialize, Validate)]
pub struct AdminUserUpdate {
    #[validate(custom(function = "validate_username"))]
    pub username: Option<String>,
    #[validate(email(message = "email must be a valid address"))]
    pub email: Option<String>,
    #[validate(length(min = 6, max = 128, message = "password must be 6-128 characters"))]
    pub password: Option<String>,
    pub role: Option<Role>,
}

/// 리뷰를 포함한 사용자 상세.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserDetailResponse {
    #[serde(flatten)]
    pub profile: UserProfile,
    pub reviews: Vec<ReviewRecord>,
}

// ==================== 헬퍼 ====================

/// 저장될 값(앞뒤 공백 제거 후) 기준으로 사용자 이름을 검증합니다.
fn validate_username(username: &str) -> Result<(), ValidationError> {
    let trimmed = username.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new("username_blank")
            .with_message("username must not be blank".into()));
    }
    if trimmed.chars().count() > MAX_USERNAME_CHARS {
        return Err(ValidationError::new("username_length")
            .with_message("username must be 1-50 characters".into()));
    }
    Ok(())
}

pub(crate) fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// 토큰을 실어 보내는 응답 헤더.
pub(crate) fn token_headers(token: &str) -> ApiResult<HeaderMap> {
    let value = HeaderValue::from_str(token)
        .map_err(|e| ApiError::Internal(format!("token is not a valid header value: {}", e)))?;

    let mut headers = HeaderMap::new();
    headers.insert(TOKEN_HEADER, value);
    headers.insert(
        ACCESS_CONTROL_EXPOSE_HEADERS,
        HeaderValue::from_static(TOKEN_HEADER),
    );
    Ok(headers)
}

/// 경로의 사용자 ID. 형식이 잘못된 ID는 존재하지 않는 ID와 같게 취급합니다.
fn parse_user_id(raw: &str) -> ApiResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| ApiError::NotFound(USER_NOT_FOUND.to_string()))
}

/// 허용 목록 필드로 변경 집합을 만듭니다. 비밀번호는 해싱 후에만 담깁니다.
async fn build_changes(
    state: &AppState,
    username: Option<String>,
    email: Option<String>,
    password: Option<String>,
    role: Option<Role>,
) -> ApiResult<UserChanges> {
    let password_digest = match password {
        Some(password) => Some(hash_password_blocking(password, state.hash_cost).await?),
        None => None,
    };

    Ok(UserChanges {
        username: username.map(|u| u.trim().to_string()),
        email: email.as_deref().map(normalize_email),
        password_digest,
        role,
    })
}

async fn apply_changes(
    state: &AppState,
    id: Uuid,
    changes: UserChanges,
) -> ApiResult<UserProfile> {
    let updated = if changes.is_empty() {
        state.users.find_by_id(id).await?
    } else {
        state.users.update(id, changes).await?
    };

    updated
        .map(UserProfile::from)
        .ok_or_else(|| ApiError::NotFound(USER_NOT_FOUND.to_string()))
}

async fn user_detail(state: &AppState, id: Uuid) -> ApiResult<UserDetailResponse> {
    let user = state
        .users
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(USER_NOT_FOUND.to_string()))?;
    let reviews = state.users.reviews_for(id).await?;

    Ok(UserDetailResponse {
        profile: user.into(),
        reviews,
    })
}

// ==================== 핸들러 ====================

/// POST /users
pub async fn register(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<impl IntoResponse> {
    let email = normalize_email(&request.email);
    if state.users.find_by_email(&email).await?.is_some() {
        return Err(RepositoryError::Conflict("email".to_string()).into());
    }

    let password_digest = hash_password_blocking(request.password, state.hash_cost).await?;
    let user = state
        .users
        .create(NewUser {
            username: request.username.trim().to_string(),
            email,
            password_digest,
            role: Role::Standard,
        })
        .await?;

    let token = state.tokens.issue(user.id, user.role)?;
    info!(user_id = %user.id, "User registered");

    Ok((
        StatusCode::CREATED,
        token_headers(&token)?,
        Json(RegisteredUser {
            id: user.id,
            username: user.username,
            email: user.email,
        }),
    ))
}

/// GET /users
pub async fn list_users(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<UserProfile>>> {
    let users = state.users.list_all().await?;
    Ok(Json(users.into_iter().map(UserProfile::from).collect()))
}

/// GET /users/me
pub async fn get_me(
    State(state): State<Arc<AppState>>,
    session: SessionContext,
) -> ApiResult<Json<UserDetailResponse>> {
    Ok(Json(user_detail(&state, session.subject).await?))
}

/// PUT /users/me
///
/// 갱신 후 현재 역할로 토큰을 재발급합니다.
pub async fn update_me(
    State(state): State<Arc<AppState>>,
    session: SessionContext,
    ValidatedJson(update): ValidatedJson<ProfileUpdate>,
) -> ApiResult<impl IntoResponse> {
    let changes = build_changes(
        &state,
        update.username,
        update.email,
        update.password,
        None,
    )
    .await?;
    let password_changed = changes.password_digest.is_some();

    let profile = apply_changes(&state, session.subject, changes).await?;
    let token = state.tokens.issue(profile.id, profile.role)?;
    info!(user_id = %profile.id, password_changed, "Profile updated");

    Ok((token_headers(&token)?, Json(profile)))
}

/// GET /users/{id}
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<UserDetailResponse>> {
    let id = parse_user_id(&id)?;
    Ok(Json(user_detail(&state, id).await?))
}

/// PUT /users/{id}
pub async fn update_user(
    State(state): State<Arc<AppState>>,
    session: SessionContext,
    Path(id): Path<String>,
    ValidatedJson(update): ValidatedJson<AdminUserUpdate>,
) -> ApiResult<Json<UserProfile>> {
    let id = parse_user_id(&id)?;
    let changes = build_changes(
        &state,
        update.username,
        update.email,
        update.password,
        update.role,
    )
    .await?;

    let profile = apply_changes(&state, id, changes).await?;
    info!(
        admin_id = %session.subject,
        user_id = %profile.id,
        role = %profile.role,
        "User updated by administrator"
    );

    Ok(Json(profile))
}

/// DELETE /users/{id}
pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    session: SessionContext,
    Path(id): Path<String>,
) -> ApiResult<Json<UserProfile>> {
    let id = parse_user_id(&id)?;
    let removed = state
        .users
        .delete(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(USER_NOT_FOUND.to_string()))?;

    info!(admin_id = %session.subject, user_id = %removed.id, "User deleted");
    Ok(Json(removed.into()))
}

/// 사용자 라우터 생성.
pub fn users_router(tokens: &Arc<TokenIssuer>) -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/users",
            post(register).merge(with_role(get(list_users), tokens, Role::Administrator)),
        )
        .route("/users/me", authenticated(get(get_me).put(update_me), tokens))
        .route(
            "/users/{id}",
            with_role(
                get(get_user).put(update_user).delete(delete_user),
                tokens,
                Role::Administrator,
            ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::verify_password;
    use crate::repository::{MemoryUserDirectory, UserDirectory};
    use crate::state::create_test_state;
    use axum::{body::Body, http::Request};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app(state: &Arc<AppState>) -> Router {
        users_router(&state.tokens).with_state(state.clone())
    }

    async fn send(
        state: &Arc<AppState>,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, HeaderMap, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(TOKEN_HEADER, token);
        }
        let body = match body {
            Some(value) => {
                builder = builder.header("content-type", "application/json");
                Body::from(value.to_string())
            }
            None => Body::empty(),
        };

        let response = app(state).oneshot(builder.body(body).unwrap()).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, headers, json)
    }

    async fn seed(state: &AppState, username: &str, email: &str, role: Role) -> Uuid {
        let digest = crate::auth::hash_password("secret1", &state.hash_cost).unwrap();
        state
            .users
            .create(NewUser {
                username: username.to_string(),
                email: email.to_string(),
                password_digest: digest,
                role,
            })
            .await
            .unwrap()
            .id
    }

    fn token_for(state: &AppState, id: Uuid, role: Role) -> String {
        state.tokens.issue(id, role).unwrap()
    }

    #[tokio::test]
    async fn test_register_returns_profile_and_token() {
        let state = Arc::new(create_test_state());
        let (status, headers, body) = send(
            &state,
            "POST",
            "/users",
            None,
            Some(json!({"username": "alice", "email": "A@X.com", "password": "secret1"})),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["email"], "a@x.com");
        assert!(body.get("password_digest").is_none());
        assert_eq!(headers[ACCESS_CONTROL_EXPOSE_HEADERS], TOKEN_HEADER);

        let token = headers[TOKEN_HEADER].to_str().unwrap();
        let session = state.tokens.verify(token).unwrap();
        assert_eq!(session.subject.to_string(), body["id"].as_str().unwrap());
        assert_eq!(session.role, Role::Standard);
    }

    #[tokio::test]
    async fn test_register_ignores_role_in_body() {
        let state = Arc::new(create_test_state());
        let (status, _, body) = send(
            &state,
            "POST",
            "/users",
            None,
            Some(json!({
                "username": "mallory",
                "email": "m@x.com",
                "password": "secret1",
                "role": "administrator"
            })),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        let id: Uuid = body["id"].as_str().unwrap().parse().unwrap();
        let stored = state.users.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(stored.role, Role::Standard);
    }

    #[tokio::test]
    async fn test_register_duplicate_email_is_bad_request() {
        let state = Arc::new(create_test_state());
        seed(&state, "alice", "a@x.com", Role::Standard).await;

        let (status, _, body) = send(
            &state,
            "POST",
            "/users",
            None,
            Some(json!({"username": "alice2", "email": "a@x.com", "password": "secret1"})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "CONFLICT");
    }

    #[tokio::test]
    async fn test_register_validation() {
        let state = Arc::new(create_test_state());
        let (status, _, body) = send(
            &state,
            "POST",
            "/users",
            None,
            Some(json!({"username": "bob", "email": "nope", "password": "123"})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INVALID_INPUT");
        assert!(state.users.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_register_blank_username_rejected() {
        let state = Arc::new(create_test_state());

        for username in ["   ", "\t\n", ""] {
            let (status, _, body) = send(
                &state,
                "POST",
                "/users",
                None,
                Some(json!({"username": username, "email": "a@x.com", "password": "secret1"})),
            )
            .await;

            assert_eq!(status, StatusCode::BAD_REQUEST, "{:?}", username);
            assert_eq!(body["code"], "INVALID_INPUT");
        }
        assert!(state.users.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_register_username_length_counts_trimmed_value() {
        let state = Arc::new(create_test_state());
        let padded = format!("  {}  ", "a".repeat(50));

        let (status, _, body) = send(
            &state,
            "POST",
            "/users",
            None,
            Some(json!({"username": padded, "email": "a@x.com", "password": "secret1"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["username"], "a".repeat(50));

        let (status, _, _) = send(
            &state,
            "POST",
            "/users",
            None,
            Some(json!({"username": "b".repeat(51), "email": "b@x.com", "password": "secret1"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_me_blank_username_rejected() {
        let state = Arc::new(create_test_state());
        let id = seed(&state, "alice", "a@x.com", Role::Standard).await;
        let token = token_for(&state, id, Role::Standard);

        let (status, _, body) = send(
            &state,
            "PUT",
            "/users/me",
            Some(&token),
            Some(json!({"username": "   "})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INVALID_INPUT");
        let stored = state.users.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(stored.username, "alice");
    }

    #[tokio::test]
    async fn test_admin_update_blank_username_rejected() {
        let state = Arc::new(create_test_state());
        let admin = seed(&state, "root", "root@x.com", Role::Administrator).await;
        let alice = seed(&state, "alice", "a@x.com", Role::Standard).await;
        let token = token_for(&state, admin, Role::Administrator);

        let (status, _, body) = send(
            &state,
            "PUT",
            &format!("/users/{}", alice),
            Some(&token),
            Some(json!({"username": " \t "})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INVALID_INPUT");
    }

    #[tokio::test]
    async fn test_get_me_embeds_reviews() {
        let directory = Arc::new(MemoryUserDirectory::new());
        let mut state = create_test_state();
        state.users = directory.clone() as Arc<dyn UserDirectory>;
        let state = Arc::new(state);

        let id = seed(&state, "alice", "a@x.com", Role::Standard).await;
        directory.insert_review(id, 5, "great").await.unwrap();
        let token = token_for(&state, id, Role::Standard);

        let (status, _, body) = send(&state, "GET", "/users/me", Some(&token), None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["username"], "alice");
        assert_eq!(body["reviews"].as_array().unwrap().len(), 1);
        assert_eq!(body["reviews"][0]["rating"], 5);
        assert!(body.get("password_digest").is_none());
    }

    #[tokio::test]
    async fn test_get_me_requires_token() {
        let state = Arc::new(create_test_state());
        let (status, _, _) = send(&state, "GET", "/users/me", None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_update_me_hashes_password_and_ignores_protected_fields() {
        let state = Arc::new(create_test_state());
        let id = seed(&state, "alice", "a@x.com", Role::Standard).await;
        let other = Uuid::new_v4();
        let token = token_for(&state, id, Role::Standard);

        let (status, headers, body) = send(
            &state,
            "PUT",
            "/users/me",
            Some(&token),
            Some(json!({
                "id": other.to_string(),
                "password": "newsecret",
                "role": "administrator",
                "password_digest": "plain"
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], id.to_string());
        assert_eq!(body["role"], "standard");
        assert!(body.get("password_digest").is_none());
        assert!(headers.contains_key(TOKEN_HEADER));

        let stored = state.users.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(stored.role, Role::Standard);
        assert!(verify_password("newsecret", &stored.password_digest).unwrap());
        assert!(!verify_password("secret1", &stored.password_digest).unwrap());
    }

    #[tokio::test]
    async fn test_update_me_keeps_unspecified_fields() {
        let state = Arc::new(create_test_state());
        let id = seed(&state, "alice", "a@x.com", Role::Standard).await;
        let token = token_for(&state, id, Role::Standard);

        let (status, _, body) = send(
            &state,
            "PUT",
            "/users/me",
            Some(&token),
            Some(json!({"username": "alicia"})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["username"], "alicia");
        assert_eq!(body["email"], "a@x.com");

        let stored = state.users.find_by_id(id).await.unwrap().unwrap();
        assert!(verify_password("secret1", &stored.password_digest).unwrap());
    }

    #[tokio::test]
    async fn test_admin_routes_forbidden_for_standard_user() {
        let state = Arc::new(create_test_state());
        let id = seed(&state, "alice", "a@x.com", Role::Standard).await;
        let token = token_for(&state, id, Role::Standard);

        for (method, uri) in [
            ("GET", "/users".to_string()),
            ("GET", format!("/users/{}", id)),
            ("DELETE", format!("/users/{}", id)),
        ] {
            let (status, _, _) = send(&state, method, &uri, Some(&token), None).await;
            assert_eq!(status, StatusCode::FORBIDDEN, "{} {}", method, uri);
        }
        assert!(state.users.find_by_id(id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_admin_list_and_lookup() {
        let state = Arc::new(create_test_state());
        let admin = seed(&state, "root", "root@x.com", Role::Administrator).await;
        let alice = seed(&state, "alice", "a@x.com", Role::Standard).await;
        let token = token_for(&state, admin, Role::Administrator);

        let (status, _, body) = send(&state, "GET", "/users", Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        let users = body.as_array().unwrap();
        assert_eq!(users.len(), 2);
        assert!(users.iter().all(|u| u.get("password_digest").is_none()));

        let (status, _, body) =
            send(&state, "GET", &format!("/users/{}", alice), Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["username"], "alice");
        assert!(body["reviews"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_admin_unknown_or_malformed_id_is_not_found() {
        let state = Arc::new(create_test_state());
        let admin = seed(&state, "root", "root@x.com", Role::Administrator).await;
        let token = token_for(&state, admin, Role::Administrator);

        for uri in [format!("/users/{}", Uuid::new_v4()), "/users/not-a-uuid".to_string()] {
            let (status, _, body) = send(&state, "GET", &uri, Some(&token), None).await;
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(body["message"], USER_NOT_FOUND);
        }

        let (status, _, _) = send(
            &state,
            "DELETE",
            &format!("/users/{}", Uuid::new_v4()),
            Some(&token),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_admin_update_can_change_role_without_reissuing() {
        let state = Arc::new(create_test_state());
        let admin = seed(&state, "root", "root@x.com", Role::Administrator).await;
        let alice = seed(&state, "alice", "a@x.com", Role::Standard).await;
        let token = token_for(&state, admin, Role::Administrator);

        let (status, headers, body) = send(
            &state,
            "PUT",
            &format!("/users/{}", alice),
            Some(&token),
            Some(json!({"role": "administrator"})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["role"], "administrator");
        assert!(!headers.contains_key(TOKEN_HEADER));
    }

    #[tokio::test]
    async fn test_admin_update_rejects_unknown_role() {
        let state = Arc::new(create_test_state());
        let admin = seed(&state, "root", "root@x.com", Role::Administrator).await;
        let token = token_for(&state, admin, Role::Administrator);

        let (status, _, body) = send(
            &state,
            "PUT",
            &format!("/users/{}", admin),
            Some(&token),
            Some(json!({"role": "superuser"})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INVALID_INPUT");
    }

    #[tokio::test]
    async fn test_admin_delete_returns_removed_profile() {
        let state = Arc::new(create_test_state());
        let admin = seed(&state, "root", "root@x.com", Role::Administrator).await;
        let alice = seed(&state, "alice", "a@x.com", Role::Standard).await;
        let token = token_for(&state, admin, Role::Administrator);

        let (status, _, body) =
            send(&state, "DELETE", &format!("/users/{}", alice), Some(&token), None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], alice.to_string());
        assert!(state.users.find_by_id(alice).await.unwrap().is_none());
    }

    #[test]
    fn test_validate_username() {
        assert!(validate_username("alice").is_ok());
        assert!(validate_username("  alice  ").is_ok());
        assert!(validate_username(&"한".repeat(50)).is_ok());

        let blank = validate_username("   ").unwrap_err();
        assert_eq!(blank.code, "username_blank");
        let long = validate_username(&"x".repeat(51)).unwrap_err();
        assert_eq!(long.code, "username_length");
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  Alice@Example.COM "), "alice@example.com");
    }
}
