//! 검증된 JSON 본문 추출기.

use std::collections::BTreeMap;

use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::error::ApiError;

/// 역직렬화 후 `validator` 규칙을 적용하는 JSON 추출기.
///
/// 본문 파싱 실패와 검증 실패는 모두 400 `INVALID_INPUT`이 됩니다.
/// 구조체에 없는 필드는 무시됩니다.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::validation(rejection.body_text()))?;

        value.validate().map_err(validation_error)?;
        Ok(Self(value))
    }
}

/// 필드별 메시지를 모아 `Validation` 에러로 변환.
pub fn validation_error(errors: ValidationErrors) -> ApiError {
    let fields: BTreeMap<String, Vec<String>> = errors
        .field_errors()
        .iter()
        .map(|(field, errors)| {
            let messages = errors
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{}: invalid value", field))
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect();

    let message = fields
        .values()
        .flatten()
        .cloned()
        .collect::<Vec<_>>()
        .join(", ");

    ApiError::Validation {
        message,
        details: serde_json::to_value(&fields).ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct Sample {
        #[validate(email(message = "email must be valid"))]
        email: String,
        #[validate(length(min = 6, message = "password must be at least 6 characters"))]
        password: String,
    }

    #[test]
    fn test_validation_error_collects_fields() {
        let sample = Sample {
            email: "not-an-email".to_string(),
            password: "123".to_string(),
        };
        let err = validation_error(sample.validate().unwrap_err());

        match err {
            ApiError::Validation { message, details } => {
                assert!(message.contains("email must be valid"));
                assert!(message.contains("at least 6"));
                let details = details.unwrap();
                assert!(details.get("email").is_some());
                assert!(details.get("password").is_some());
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
