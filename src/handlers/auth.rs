//! Authentication HTTP Handlers
//!
//! `/api/auth/*` 요청의 본문에서 필요한 필드만 골라 외부 인증 서비스로 전달하고,
//! 결과를 그대로 돌려줍니다.
//!
//! # Endpoints
//!
//! - **계정 생성/로그인**: `register`, `login`, `google`
//! - **토큰 검증**: `verify-token` (`{success:true, data}`로 감싸서 응답)
//! - **메일 발송**: `request-password-reset`, `request-change-password-link`,
//!   `resend-verification`, `set-password-google-user`
//! - **계정 삭제**: `delete-account`

use actix_web::{post, web, HttpRequest, HttpResponse};

use crate::domain::dto::request::{
    DeleteAccountRequest, EmailRequest, GoogleAuthRequest, LoginRequest, RegisterRequest,
    ResendVerificationRequest,
};
use crate::domain::dto::response::VerifyTokenResponse;
use crate::errors::AppError;
use crate::handlers::{parse_body, require_token};
use crate::services::RelayService;

/// 회원가입
///
/// # Endpoint
/// `POST /api/auth/register`
#[post("/register")]
pub async fn register(body: web::Bytes) -> Result<HttpResponse, AppError> {
    let request: RegisterRequest = parse_body(&body)?;
    let result = RelayService::instance().register(&request).await?;

    Ok(HttpResponse::Ok().json(result))
}

/// 이메일 또는 사용자명 + 비밀번호 로그인
///
/// # Endpoint
/// `POST /api/auth/login`
#[post("/login")]
pub async fn login(body: web::Bytes) -> Result<HttpResponse, AppError> {
    let request: LoginRequest = parse_body(&body)?;
    let result = RelayService::instance().login(&request).await?;

    Ok(HttpResponse::Ok().json(result))
}

/// Google ID 토큰 로그인
///
/// # Endpoint
/// `POST /api/auth/google`
#[post("/google")]
pub async fn google(body: web::Bytes) -> Result<HttpResponse, AppError> {
    let request: GoogleAuthRequest = parse_body(&body)?;
    let result = RelayService::instance().google_auth(&request).await?;

    Ok(HttpResponse::Ok().json(result))
}

/// 사용자 토큰 검증
///
/// 본문은 사용하지 않고 `Authorization` 헤더의 토큰만 검증합니다.
///
/// # Endpoint
/// `POST /api/auth/verify-token`
#[post("/verify-token")]
pub async fn verify_token(req: HttpRequest) -> Result<HttpResponse, AppError> {
    let token = require_token(&req)?;
    let data = RelayService::instance().verify_token(&token).await?;

    Ok(HttpResponse::Ok().json(VerifyTokenResponse::ok(data)))
}

/// # Endpoint
/// `POST /api/auth/request-password-reset`
#[post("/request-password-reset")]
pub async fn request_password_reset(body: web::Bytes) -> Result<HttpResponse, AppError> {
    let request: EmailRequest = parse_body(&body)?;
    let result = RelayService::instance()
        .request_password_reset(&request)
        .await?;

    Ok(HttpResponse::Ok().json(result))
}

/// # Endpoint
/// `POST /api/auth/request-change-password-link`
#[post("/request-change-password-link")]
pub async fn request_change_password_link(body: web::Bytes) -> Result<HttpResponse, AppError> {
    let request: EmailRequest = parse_body(&body)?;
    let result = RelayService::instance()
        .request_change_password_link(&request)
        .await?;

    Ok(HttpResponse::Ok().json(result))
}

/// 인증 메일 재전송
///
/// `purpose`는 외부 서비스가 메일 종류를 고르는 데 사용합니다 (예: `"New Account"`).
///
/// # Endpoint
/// `POST /api/auth/resend-verification`
#[post("/resend-verification")]
pub async fn resend_verification(body: web::Bytes) -> Result<HttpResponse, AppError> {
    let request: ResendVerificationRequest = parse_body(&body)?;
    let result = RelayService::instance()
        .resend_verification_email(&request)
        .await?;

    Ok(HttpResponse::Ok().json(result))
}

/// 계정 삭제
///
/// # Endpoint
/// `POST /api/auth/delete-account`
#[post("/delete-account")]
pub async fn delete_account(body: web::Bytes) -> Result<HttpResponse, AppError> {
    let request: DeleteAccountRequest = parse_body(&body)?;
    let result = RelayService::instance().delete_account(&request).await?;

    Ok(HttpResponse::Ok().json(result))
}

/// Google 계정 사용자에게 비밀번호 설정 메일 발송
///
/// # Endpoint
/// `POST /api/auth/set-password-google-user`
#[post("/set-password-google-user")]
pub async fn set_password_google_user(body: web::Bytes) -> Result<HttpResponse, AppError> {
    let request: EmailRequest = parse_body(&body)?;
    let result = RelayService::instance()
        .send_google_user_set_password_email(&request)
        .await?;

    Ok(HttpResponse::Ok().json(result))
}
