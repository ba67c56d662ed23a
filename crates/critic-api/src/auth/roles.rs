//! 사용자 역할.

use serde::{Deserialize, Serialize};

/// 사용자 역할.
///
/// 역할은 토큰 발급 시점에 토큰에 복사됩니다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// 일반 사용자
    #[default]
    Standard,
    /// 관리자 - 사용자 관리 권한
    Administrator,
}

impl Role {
    /// 역할의 우선순위 레벨 (높을수록 더 많은 권한).
    pub fn level(&self) -> u8 {
        match self {
            Role::Administrator => 100,
            Role::Standard => 10,
        }
    }

    /// `self`가 `required` 이상의 권한을 가지는지 확인.
    pub fn satisfies(&self, required: Role) -> bool {
        self.level() >= required.level()
    }

    /// 저장소 표현 (`standard` | `administrator`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Standard => "standard",
            Role::Administrator => "administrator",
        }
    }

    /// 문자열에서 역할 파싱.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "standard" => Some(Role::Standard),
            "administrator" => Some(Role::Administrator),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_satisfies() {
        assert!(Role::Administrator.satisfies(Role::Administrator));
        assert!(Role::Administrator.satisfies(Role::Standard));
        assert!(Role::Standard.satisfies(Role::Standard));
        assert!(!Role::Standard.satisfies(Role::Administrator));
    }

    #[test]
    fn test_role_parse() {
        assert_eq!(Role::parse("standard"), Some(Role::Standard));
        assert_eq!(Role::parse("ADMINISTRATOR"), Some(Role::Administrator));
        assert_eq!(Role::parse("admin"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn test_role_serialization() {
        let json = serde_json::to_string(&Role::Administrator).unwrap();
        assert_eq!(json, "\"administrator\"");

        let parsed: Role = serde_json::from_str("\"standard\"").unwrap();
        assert_eq!(parsed, Role::Standard);
        assert_eq!(Role::Standard.to_string(), "standard");
    }
}
