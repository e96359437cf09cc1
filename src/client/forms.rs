//! 전송 전 입력 검증 폼
//!
//! 각 폼은 `validator`로 검증한 뒤 릴레이 요청 본문으로 직렬화됩니다.

use serde::Serialize;
use serde_json::{Map, Value};
use validator::Validate;

/// 로그인 폼: 이메일 형식, 비밀번호 필수
#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct LoginForm {
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// 회원가입 폼
///
/// `username`, `name`은 선택이며, 그 밖의 필드는 `extra`로 함께 전달됩니다.
#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct RegisterForm {
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// 이메일 하나만 받는 폼 (비밀번호 재설정, 변경 링크, 인증 메일 등)
#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct EmailForm {
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
}

impl EmailForm {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}
