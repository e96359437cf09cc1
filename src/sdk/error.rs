//! 외부 인증 서비스 호출 에러

use serde_json::Value;
use thiserror::Error;

/// 전송 계층 실패 시 클라이언트에 노출되는 메시지
pub const NETWORK_MESSAGE: &str = "Auth service unreachable";

/// 외부 인증 서비스 호출 중 발생하는 에러
///
/// 릴레이는 이 에러의 상태 코드, 메시지, 에러 코드를 그대로 클라이언트에 반영합니다.
#[derive(Error, Debug)]
pub enum AuthError {
    /// 외부 서비스가 실패 응답을 돌려줌
    #[error("{message}")]
    Api {
        status: u16,
        message: String,
        code: Option<String>,
    },

    /// 연결 실패, 타임아웃 등 전송 계층 에러
    ///
    /// 요청 URL에는 API 키가 들어갈 수 있으므로 URL을 제거한 상태로만 보관합니다.
    #[error("Auth service unreachable: {0}")]
    Network(reqwest::Error),

    /// 성공 응답이지만 JSON으로 해석할 수 없음
    #[error("Invalid response from auth service: {0}")]
    InvalidResponse(String),

    /// 요청 본문 직렬화 실패
    #[error("Failed to encode request: {0}")]
    Encode(#[from] serde_json::Error),
}

impl AuthError {
    /// 외부 서비스가 준 HTTP 상태 코드. 전송 계층 에러는 `None`
    pub fn status(&self) -> Option<u16> {
        match self {
            AuthError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn code(&self) -> Option<&str> {
        match self {
            AuthError::Api { code, .. } => code.as_deref(),
            AuthError::Network(_) => Some("NETWORK_ERROR"),
            AuthError::InvalidResponse(_) => Some("INVALID_RESPONSE"),
            AuthError::Encode(_) => Some("INVALID_REQUEST"),
        }
    }

    /// 클라이언트 응답에 실리는 메시지. 전송 계층 에러는 상세 내용 없이 고정 문구만 반환합니다.
    pub fn message(&self) -> String {
        match self {
            AuthError::Network(_) => NETWORK_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }

    /// 실패 응답 본문에서 에러를 구성합니다.
    ///
    /// 메시지는 `message`, `error` 순으로 찾고, 둘 다 없으면 상태 코드로 만듭니다.
    pub(crate) fn from_body(status: u16, body: &Value) -> Self {
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .or_else(|| body.get("error").and_then(Value::as_str))
            .map(str::to_string)
            .unwrap_or_else(|| format!("Request failed with status {}", status));

        let code = body.get("code").and_then(|c| match c {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        });

        AuthError::Api {
            status,
            message,
            code,
        }
    }
}

impl From<reqwest::Error> for AuthError {
    fn from(err: reqwest::Error) -> Self {
        AuthError::Network(err.without_url())
    }
}
