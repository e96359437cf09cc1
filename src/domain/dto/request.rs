//! 릴레이 요청 DTO
//!
//! 각 구조체는 외부 인증 클라이언트의 메서드 인자와 1:1로 대응합니다.
//! 필드 값은 타입을 검사하지 않고 받은 JSON 그대로 전달합니다.
//!
//! | 요청 본문 | 전달 결과 |
//! |-----------|-----------|
//! | 키 없음 | 전달하지 않음 |
//! | `"key": null` | `null` 그대로 전달 |
//! | 문자열, 숫자, 객체 등 | 그대로 전달 |
//!
//! 명시되지 않은 키는 무시됩니다 (`RegisterRequest` 제외).

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// 키가 있으면 값이 `null`이어도 `Some`으로 보존합니다.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// 회원가입 요청
///
/// `email`, `username`, `password`, `name` 외의 최상위 키는 `extra`에 모아
/// 평탄화된 형태로 그대로 전달합니다.
///
/// # JSON 예제
///
/// ```json
/// {
///   "email": "user@example.com",
///   "username": "john_doe",
///   "password": "SecurePass123",
///   "name": "John Doe",
///   "phone": "010-1234-5678"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub email: Option<Value>,

    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub username: Option<Value>,

    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub password: Option<Value>,

    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// 이메일 또는 사용자명 + 비밀번호 로그인 요청
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub email: Option<Value>,

    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub username: Option<Value>,

    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub password: Option<Value>,
}

/// Google ID 토큰 교환 요청
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GoogleAuthRequest {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub id_token: Option<Value>,
}

/// 이메일 하나만 받는 요청
///
/// 비밀번호 재설정, 비밀번호 변경 링크, Google 사용자 비밀번호 설정 메일에 공통으로 사용됩니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmailRequest {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub email: Option<Value>,
}

/// 인증 메일 재발송 요청
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResendVerificationRequest {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub email: Option<Value>,

    /// 메일 목적 (예: `"New Account"`)
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub purpose: Option<Value>,
}

/// 계정 삭제 요청
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteAccountRequest {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub email: Option<Value>,

    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub password: Option<Value>,
}

impl LoginRequest {
    pub fn with_email(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: Some(Value::String(email.into())),
            password: Some(Value::String(password.into())),
            ..Self::default()
        }
    }
}

impl GoogleAuthRequest {
    pub fn new(id_token: impl Into<String>) -> Self {
        Self {
            id_token: Some(Value::String(id_token.into())),
        }
    }
}

impl EmailRequest {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: Some(Value::String(email.into())),
        }
    }
}

impl ResendVerificationRequest {
    pub fn new(email: impl Into<String>, purpose: impl Into<String>) -> Self {
        Self {
            email: Some(Value::String(email.into())),
            purpose: Some(Value::String(purpose.into())),
        }
    }
}

impl DeleteAccountRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: Some(Value::String(email.into())),
            password: Some(Value::String(password.into())),
        }
    }
}
