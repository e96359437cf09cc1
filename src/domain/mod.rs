//! # Domain Layer Module
//!
//! 릴레이가 주고받는 데이터 계약을 정의합니다.
//! 릴레이는 사용자 데이터를 저장하거나 가공하지 않으므로 엔티티 계층은 없고,
//! 요청/응답 페이로드(DTO)만 존재합니다.
//!
//! ```text
//! Browser / RelayClient
//!      │  JSON (dto::request)
//!      ▼
//! Handlers ─► RelayService ─► AuthClient (sdk) ─► 외부 인증 서비스
//!      ▲
//!      │  JSON (외부 서비스 결과 그대로 / dto::response)
//! ```

pub mod dto;

pub use dto::*;
