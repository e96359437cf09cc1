//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! `#[service]` 매크로로 싱글톤 관리되는 서비스를 제공합니다.
//! 인증 로직은 외부 인증 서비스가 수행하고, 이 계층은 요청을 전달하며 흐름을 기록합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::RelayService;
//!
//! let relay = RelayService::instance();
//! let body = relay.login(&request).await?;
//! ```

pub mod relay_service;

pub use relay_service::RelayService;
