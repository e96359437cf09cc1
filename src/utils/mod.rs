//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`display_terminal`] - 레지스트리 초기화 과정 터미널 출력
//! - [`token_utils`] - Authorization 헤더 파싱, 로그용 토큰 축약

pub mod display_terminal;
pub mod token_utils;
