//! User Profile HTTP Handlers
//!
//! 토큰 소유자의 프로필을 조회하고 수정합니다. 두 엔드포인트 모두 `Authorization`
//! 헤더가 필요하며, 토큰은 요청마다 별도 세션으로 외부 서비스에 전달됩니다.

use actix_web::{get, patch, web, HttpRequest, HttpResponse};
use serde_json::Value;

use crate::errors::AppError;
use crate::handlers::{parse_body, require_token};
use crate::services::RelayService;

/// # Endpoint
/// `GET /api/user/profile`
#[get("/profile")]
pub async fn get_profile(req: HttpRequest) -> Result<HttpResponse, AppError> {
    let token = require_token(&req)?;
    let result = RelayService::instance().get_profile(&token).await?;

    Ok(HttpResponse::Ok().json(result))
}

/// 프로필 수정
///
/// 본문 전체를 변경 내용으로 전달합니다.
///
/// # Endpoint
/// `PATCH /api/user/profile`
#[patch("/profile")]
pub async fn update_profile(
    req: HttpRequest,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let token = require_token(&req)?;
    let updates: Value = parse_body(&body)?;
    let result = RelayService::instance()
        .update_profile(&token, &updates)
        .await?;

    Ok(HttpResponse::Ok().json(result))
}
