//! 응답 DTO
//!
//! 릴레이는 외부 서비스의 결과를 가공 없이 반환하므로, 여기 정의된 구조는
//! 릴레이가 직접 만드는 응답(`verify-token`, `health`)과
//! [`RelayClient`](crate::client::RelayClient)가 응답 중 필요한 부분만 꺼내 쓰는 구조입니다.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `POST /api/auth/verify-token` 성공 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyTokenResponse {
    pub success: bool,
    pub data: Value,
}

impl VerifyTokenResponse {
    pub fn ok(data: Value) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// 로그인 계열 응답의 `data` 부분
///
/// ```json
/// { "success": true, "data": { "user_token": "...", "user": { ... }, "is_new_user": false } }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthSessionData {
    #[serde(default)]
    pub user_token: Option<String>,

    #[serde(default)]
    pub user: Option<UserProfile>,

    #[serde(default)]
    pub is_new_user: Option<bool>,
}

/// 외부 인증 서비스가 돌려주는 사용자 프로필
///
/// 화면에 표시되는 필드만 명시하고 나머지는 `extra`로 보존합니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login_method: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_linked: Option<bool>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `{ "data": { "user": ... } }` 형태의 프로필 응답에서 사용자만 꺼낼 때 사용합니다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileData {
    #[serde(default)]
    pub user: Option<UserProfile>,
}
