//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 오가는 페이로드를 정의합니다.
//!
//! - [`request`] - 브라우저 → 릴레이 → 외부 인증 서비스로 그대로 전달되는 요청 본문
//! - [`response`] - 릴레이 자체 응답과 클라이언트가 해석하는 응답 구조
//!
//! 요청 DTO의 모든 필드는 `Option`이며, 값이 없으면 직렬화 시 생략됩니다.
//! 릴레이는 필드 값을 검증하지 않고 외부 서비스의 판단에 맡깁니다.

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
