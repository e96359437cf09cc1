//! # Core Framework Module
//!
//! 서비스 싱글톤과 외부에서 만든 인프라 컴포넌트를 관리하는 의존성 주입 컨테이너입니다.
//!
//! ## 모듈 구성
//!
//! ### [`registry`] - 의존성 주입 컨테이너
//! - **ServiceLocator**: 타입별 싱글톤 저장소
//! - **자동 레지스트리**: `inventory` 기반 컴파일 타임 서비스 등록
//! - **의존성 해결**: `Arc<T>` 필드 자동 주입
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::core::registry::ServiceLocator;
//!
//! #[service(name = "relay")]
//! pub struct RelayService {
//!     auth_client: Arc<AuthClient>,  // 자동 주입
//! }
//!
//! // main.rs
//! ServiceLocator::set(Arc::new(AuthClient::new(config)?));
//! ServiceLocator::initialize_all().await?;
//!
//! let relay = RelayService::instance();
//! ```
//!
//! ## 트러블슈팅
//!
//! ### 미등록 타입 에러
//! ```text
//! panic: Service not found: AuthClient. Register it with #[service] or ServiceLocator::set()
//! ```
//! **해결**: 서비스를 처음 사용하기 전에 `ServiceLocator::set()`으로 등록

pub mod registry;

pub use registry::*;
