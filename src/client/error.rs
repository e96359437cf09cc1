//! 클라이언트 에러 타입

use serde_json::Value;
use thiserror::Error;

/// [`RelayClient`](crate::client::RelayClient) 호출 실패
#[derive(Debug, Error)]
pub enum ClientError {
    /// 릴레이가 2xx가 아닌 상태를 돌려주었거나 본문의 `success`가 `false`
    #[error("{message}")]
    Api {
        status: u16,
        message: String,
        code: Option<String>,
        data: Value,
    },

    /// 입력 폼 검증 실패. 요청은 전송되지 않습니다.
    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ClientError {
    /// 응답 본문으로부터 에러를 만듭니다. `message`가 없으면 `default_message`를 사용합니다.
    pub(crate) fn from_response(status: u16, body: Value, default_message: &str) -> Self {
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .unwrap_or(default_message)
            .to_string();

        let code = match body.get("code") {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        };

        ClientError::Api {
            status,
            message,
            code,
            data: body,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn code(&self) -> Option<&str> {
        match self {
            ClientError::Api { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    /// 이메일 인증이 끝나지 않은 계정으로 로그인했는지 판별합니다.
    ///
    /// `EMAIL_NOT_VERIFIED` 코드이거나 메시지에 "not verified" / "not been verified"가
    /// 포함된 경우입니다 (대소문자 무시).
    pub fn is_email_not_verified(&self) -> bool {
        if self.code() == Some("EMAIL_NOT_VERIFIED") {
            return true;
        }

        let message = self.to_string().to_lowercase();
        message.contains("not verified") || message.contains("not been verified")
    }

    pub fn is_invalid_credentials(&self) -> bool {
        self.status() == Some(401)
    }
}

/// 상태에 보관되는 마지막 에러 요약
#[derive(Debug, Clone, PartialEq)]
pub struct LastError {
    pub status: Option<u16>,
    pub message: String,
    pub code: Option<String>,
}

impl From<&ClientError> for LastError {
    fn from(err: &ClientError) -> Self {
        Self {
            status: err.status(),
            message: err.to_string(),
            code: err.code().map(str::to_string),
        }
    }
}
