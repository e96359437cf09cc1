//! # Configuration Module
//!
//! 릴레이 서버의 설정 관리를 담당하는 모듈입니다.
//! 모든 설정값은 환경 변수에서 읽으며, `PROFILE`에 따라 선택된 `.env` 파일이
//! 먼저 로드됩니다 (`main.rs` 참고).
//!
//! ## 모듈 구성
//!
//! - [`server_config`] - 바인딩 주소, 워커 수, 본문 크기, Rate Limiting, CORS
//! - [`auth_client_config`] - 외부 인증 서비스 API 키/시크릿, Google Client ID
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use auth_relay_backend::config::{AuthClientConfig, ServerConfig};
//!
//! let bind = ServerConfig::bind_address();
//! let auth = AuthClientConfig::from_env()?;
//! ```

pub mod server_config;
pub mod auth_client_config;

pub use server_config::*;
pub use auth_client_config::*;
