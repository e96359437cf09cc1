//! 인증 중계 백엔드
//!
//! 브라우저 앱과 외부 인증 서비스 사이에서 API 자격 증명을 서버 쪽에 보관하고
//! 인증 요청을 그대로 전달하는 HTTP 서버입니다. 브라우저 쪽 상태 관리는
//! [`client`] 모듈이 담당합니다.
//!
//! # Features
//!
//! - **요청 중계**: 회원가입, 로그인, Google 로그인, 토큰 검증, 메일 발송, 계정 삭제, 프로필
//! - **자격 증명 보호**: API Key/Secret은 서버 환경변수에만 존재
//! - **요청별 토큰**: 사용자 토큰을 전역 상태 없이 호출마다 전달
//! - **싱글톤 DI**: 매크로 기반 자동 의존성 주입
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  RelayClient    │ ← 브라우저 쪽 세션 상태 (client)
//! └─────────────────┘
//!          │ HTTP (Bearer)
//!          ▼
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /api/auth/*, /api/user/profile
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 본문 해석, 토큰 추출
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  RelayService   │ ← 중계 및 로깅
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   AuthClient    │ ← 외부 인증 서비스 SDK (API Key/Secret, UserToken)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use auth_relay_backend::services::RelayService;
//!
//! let relay = RelayService::instance();
//! let body = relay.login(&request).await?;
//! ```

pub mod core;
pub mod config;
pub mod domain;
pub mod sdk;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod client;
