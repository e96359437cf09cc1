//! # 외부 인증 서비스 클라이언트 (SDK)
//!
//! 실제 회원가입, 로그인, Google 자격 증명 교환, 비밀번호 재설정, 인증 메일,
//! 프로필 관리는 모두 외부 인증 서비스가 수행합니다. 이 모듈은 그 서비스의
//! REST API를 호출하는 얇은 HTTP 클라이언트입니다.
//!
//! # Usage
//!
//! ```rust,ignore
//! use auth_relay_backend::config::AuthClientConfig;
//! use auth_relay_backend::sdk::AuthClient;
//!
//! let client = AuthClient::new(AuthClientConfig::from_env()?)?;
//!
//! // 로그인
//! let result = client.login(&LoginRequest::with_email(email, pw)).await?;
//!
//! // 사용자 토큰이 필요한 호출
//! let profile = client.with_token(&token).get_profile().await?;
//! ```

pub mod client;
pub mod error;

pub use client::{AuthClient, UserSession};
pub use error::AuthError;
