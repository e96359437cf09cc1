//! # HTTP Request Handlers Module
//!
//! 브라우저 요청을 받아 [`RelayService`](crate::services::RelayService)로 넘기는 핸들러 모음입니다.
//!
//! ```text
//! Client ──► Handlers (이 모듈) ──► RelayService ──► AuthClient ──► 외부 인증 서비스
//! ```
//!
//! ## 공통 규칙
//!
//! - 모든 핸들러는 `Result<HttpResponse, AppError>`를 반환하며, 실패는
//!   `{success:false, message, code}` 본문으로 변환됩니다.
//! - 요청 본문은 [`parse_body`]로 해석합니다. 빈 본문은 `{}`로 취급합니다.
//! - 사용자 토큰은 [`require_token`]으로 `Authorization` 헤더에서 꺼냅니다.
//!
//! ## Modules
//!
//! - [`auth`] - `/api/auth/*` 인증 흐름 중계
//! - [`user`] - `/api/user/profile` 프로필 조회/수정

pub mod auth;
pub mod user;

use actix_web::http::header::AUTHORIZATION;
use actix_web::HttpRequest;
use serde::de::DeserializeOwned;

use crate::errors::AppError;
use crate::utils::token_utils::extract_token;

/// 요청 본문을 `T`로 해석합니다.
///
/// 비어 있거나 공백뿐인 본문은 `{}`로 간주하므로 모든 필드가 빠진 요청이 됩니다.
/// 필드 값의 타입은 검사하지 않습니다.
///
/// # Errors
///
/// * `AppError::InvalidBody` - JSON 문법 오류 또는 객체가 아닌 본문
pub fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, AppError> {
    let trimmed = body.iter().all(u8::is_ascii_whitespace);
    let source: &[u8] = if trimmed { b"{}" } else { body };

    serde_json::from_slice(source).map_err(|e| {
        log::debug!("요청 본문 해석 실패: {}", e);
        AppError::InvalidBody(e.to_string())
    })
}

/// `Authorization` 헤더에서 사용자 토큰을 꺼냅니다.
///
/// # Errors
///
/// * `AppError::MissingToken` - 헤더가 없거나 토큰이 비어 있는 경우
pub fn require_token(req: &HttpRequest) -> Result<String, AppError> {
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    extract_token(header)
        .map(str::to_string)
        .ok_or(AppError::MissingToken)
}
