//! # Relay Client
//!
//! 릴레이 서버(`/api`)를 호출하는 브라우저 쪽 세션 상태 관리자입니다.
//!
//! ```text
//! ┌──────────────────────────────┐
//! │ RelayClient                  │
//! │  • state: user, token,       │
//! │    loading, last_error       │
//! │  • api_call (Bearer 자동 첨부) │
//! └──────────────┬───────────────┘
//!                │            ┌──────────────────┐
//!                ├───────────►│ TokenStore       │  auth_user_token
//!                │            └──────────────────┘
//!                ▼
//!        http://localhost:3001/api
//! ```
//!
//! ## Modules
//!
//! - [`relay_client`] - 요청 전송과 상태 관리
//! - [`token_store`] - 토큰 영속화 (메모리, 파일)
//! - [`forms`] - 전송 전 입력 검증
//! - [`error`] - [`ClientError`]
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use auth_relay_backend::client::{LoginForm, MemoryTokenStore, RelayClient};
//!
//! let client = RelayClient::new(RelayClient::DEFAULT_BASE_URL, Arc::new(MemoryTokenStore::new()));
//!
//! match client.login(&LoginForm::new("user@example.com", "pw")).await {
//!     Ok(user) => println!("welcome {:?}", user),
//!     Err(e) if e.is_email_not_verified() => {
//!         client.resend_new_account_verification("user@example.com").await?;
//!     }
//!     Err(e) => return Err(e),
//! }
//! ```

pub mod error;
pub mod forms;
pub mod relay_client;
pub mod token_store;

pub use error::{ClientError, LastError};
pub use forms::{EmailForm, LoginForm, RegisterForm};
pub use relay_client::{ClientState, GoogleLoginOutcome, RelayClient};
pub use token_store::{FileTokenStore, MemoryTokenStore, TokenStore, TOKEN_STORAGE_KEY};
