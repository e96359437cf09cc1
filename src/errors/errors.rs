//! 릴레이 전역에서 사용하는 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 모든 실패를
//! `{ "success": false, "message": ..., "code": ... }` 형태의 JSON 응답으로 통일합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | code |
//! |----------|-------------|------|
//! | `MissingToken` | 401 | (없음) |
//! | `InvalidBody` | 400 | `INVALID_JSON` |
//! | `Upstream` | 외부 서비스가 준 상태 코드, 없으면 500 | 외부 서비스가 준 코드 |
//! | `ConfigError` | 500 | `CONFIG_ERROR` |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn login(payload: LoginRequest) -> Result<HttpResponse, AppError> {
//!     let result = RelayService::instance().login(payload).await?; // AuthError -> AppError
//!     Ok(HttpResponse::Ok().json(result))
//! }
//! ```

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

use crate::sdk::AuthError;

/// 릴레이 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// Authorization 헤더가 없거나 토큰이 비어 있음 (401 Unauthorized)
    #[error("No token provided")]
    MissingToken,

    /// 요청 본문을 JSON으로 해석할 수 없음 (400 Bad Request)
    #[error("Invalid JSON body: {0}")]
    InvalidBody(String),

    /// 외부 인증 서비스가 돌려준 에러
    ///
    /// 상태 코드, 메시지, 에러 코드를 그대로 클라이언트에 반영합니다.
    #[error(transparent)]
    Upstream(#[from] AuthError),

    /// 설정 누락 또는 잘못된 설정 (500 Internal Server Error)
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// 실패 응답 본문
///
/// `code`가 없으면 필드 자체를 생략합니다.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl AppError {
    /// 응답 본문에 실릴 에러 코드
    pub fn code(&self) -> Option<String> {
        match self {
            AppError::MissingToken => None,
            AppError::InvalidBody(_) => Some("INVALID_JSON".to_string()),
            AppError::Upstream(err) => err.code().map(str::to_string),
            AppError::ConfigError(_) => Some("CONFIG_ERROR".to_string()),
        }
    }

    /// 응답 본문에 실릴 메시지
    pub fn message(&self) -> String {
        match self {
            AppError::Upstream(err) => err.message(),
            other => other.to_string(),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingToken => StatusCode::UNAUTHORIZED,
            AppError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream(err) => err
                .status()
                .and_then(|s| StatusCode::from_u16(s).ok())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            AppError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            success: false,
            message: self.message(),
            code: self.code(),
        })
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use serde_json::Value;

    async fn body_json(err: AppError) -> (StatusCode, Value) {
        let response = err.error_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body()).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[actix_web::test]
    async fn test_missing_token_response() {
        let (status, body) = body_json(AppError::MissingToken).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "No token provided");
        assert!(body.get("code").is_none());
    }

    #[actix_web::test]
    async fn test_upstream_error_keeps_status_and_code() {
        let err = AuthError::Api {
            status: 409,
            message: "Email already registered".to_string(),
            code: Some("EMAIL_EXISTS".to_string()),
        };
        let (status, body) = body_json(AppError::from(err)).await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["message"], "Email already registered");
        assert_eq!(body["code"], "EMAIL_EXISTS");
    }

    #[actix_web::test]
    async fn test_upstream_error_without_status_defaults_to_500() {
        let err = AuthError::InvalidResponse("expected value at line 1".to_string());
        let (status, body) = body_json(AppError::from(err)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], false);
        assert_eq!(body["code"], "INVALID_RESPONSE");
    }

    #[actix_web::test]
    async fn test_invalid_body_response() {
        let (status, body) = body_json(AppError::InvalidBody("EOF".to_string())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INVALID_JSON");
    }

    #[test]
    fn test_out_of_range_upstream_status_falls_back() {
        let err = AppError::from(AuthError::Api {
            status: 42,
            message: "weird".to_string(),
            code: None,
        });

        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn test_config_error_response() {
        let (status, body) = body_json(AppError::ConfigError("API_KEY missing".to_string())).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["code"], "CONFIG_ERROR");
    }
}
