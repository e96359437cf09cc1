//! 에러 타입 모듈
//!
//! 릴레이의 [`AppError`]와 응답 본문 [`ErrorBody`]를 제공합니다.

pub mod errors;

pub use errors::{AppError, AppResult, ErrorBody};
