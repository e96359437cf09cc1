//! # 인증 중계 서비스
//!
//! 브라우저 요청을 외부 인증 서비스 SDK 호출로 옮기는 얇은 계층입니다.
//! 응답 본문은 가공하지 않고 그대로 돌려주며, 실패는 [`AuthError`]를
//! [`AppError::Upstream`]으로 감싸 상태 코드와 에러 코드를 보존합니다.
//!
//! ```text
//! Handler ──► RelayService ──► AuthClient ──► 외부 인증 서비스
//!                 │
//!                 └─ 사용자 토큰이 필요한 호출은 AuthClient::with_token()으로 세션 생성
//! ```

use std::sync::Arc;
use std::time::Instant;

use serde_json::Value;
use singleton_macro::service;

use crate::domain::dto::request::{
    DeleteAccountRequest, EmailRequest, GoogleAuthRequest, LoginRequest, RegisterRequest,
    ResendVerificationRequest,
};
use crate::errors::AppResult;
use crate::sdk::AuthClient;
use crate::utils::token_utils::token_hint;

/// 외부 인증 서비스 중계 서비스
///
/// `AuthClient`는 `main.rs`에서 `ServiceLocator::set()`으로 등록되고 여기로 주입됩니다.
///
/// ```rust,ignore
/// let relay = RelayService::instance(); // 항상 동일한 인스턴스
/// ```
#[service(name = "relay")]
pub struct RelayService {
    auth_client: Arc<AuthClient>,
}

impl RelayService {
    pub async fn register(&self, request: &RegisterRequest) -> AppResult<Value> {
        log::info!("회원가입 요청 중계: email={:?}", request.email);
        let start = Instant::now();

        let result = self.auth_client.register(request).await?;

        log::debug!("회원가입 중계 완료: {:?}", start.elapsed());
        Ok(result)
    }

    pub async fn login(&self, request: &LoginRequest) -> AppResult<Value> {
        log::info!(
            "로그인 요청 중계: email={:?}, username={:?}",
            request.email,
            request.username
        );
        let start = Instant::now();

        let result = self.auth_client.login(request).await?;

        log::debug!("로그인 중계 완료: {:?}", start.elapsed());
        Ok(result)
    }

    pub async fn google_auth(&self, request: &GoogleAuthRequest) -> AppResult<Value> {
        log::info!("Google 로그인 요청 중계");

        Ok(self.auth_client.google_auth(request).await?)
    }

    /// 사용자 토큰을 검증하고 외부 서비스가 돌려준 사용자 데이터를 반환합니다.
    pub async fn verify_token(&self, token: &str) -> AppResult<Value> {
        log::debug!("토큰 검증 요청: {}", token_hint(Some(token)));

        Ok(self.auth_client.verify_token(token).await?)
    }

    pub async fn request_password_reset(&self, request: &EmailRequest) -> AppResult<Value> {
        log::info!("비밀번호 재설정 요청 중계: email={:?}", request.email);

        Ok(self.auth_client.request_password_reset(request).await?)
    }

    pub async fn request_change_password_link(&self, request: &EmailRequest) -> AppResult<Value> {
        log::info!("비밀번호 변경 링크 요청 중계: email={:?}", request.email);

        Ok(self.auth_client.request_change_password_link(request).await?)
    }

    pub async fn resend_verification_email(
        &self,
        request: &ResendVerificationRequest,
    ) -> AppResult<Value> {
        log::info!(
            "인증 메일 재전송 요청 중계: email={:?}, purpose={:?}",
            request.email,
            request.purpose
        );

        Ok(self.auth_client.resend_verification_email(request).await?)
    }

    pub async fn delete_account(&self, request: &DeleteAccountRequest) -> AppResult<Value> {
        log::warn!("계정 삭제 요청 중계: email={:?}", request.email);

        Ok(self.auth_client.delete_account(request).await?)
    }

    pub async fn send_google_user_set_password_email(
        &self,
        request: &EmailRequest,
    ) -> AppResult<Value> {
        log::info!("Google 사용자 비밀번호 설정 메일 요청 중계: email={:?}", request.email);

        Ok(self
            .auth_client
            .send_google_user_set_password_email(request)
            .await?)
    }

    pub async fn get_profile(&self, token: &str) -> AppResult<Value> {
        log::debug!("프로필 조회: {}", token_hint(Some(token)));

        Ok(self.auth_client.with_token(token).get_profile().await?)
    }

    /// 프로필 변경 내용을 그대로 외부 서비스에 전달합니다. 필드 검증은 외부 서비스가 수행합니다.
    pub async fn update_profile(&self, token: &str, updates: &Value) -> AppResult<Value> {
        log::debug!("프로필 수정: {}", token_hint(Some(token)));

        Ok(self
            .auth_client
            .with_token(token)
            .update_profile(updates)
            .await?)
    }
}
